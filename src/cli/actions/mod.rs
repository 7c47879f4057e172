pub mod server;

use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        mongodb_uri: String,
        jwt_secret: SecretString,
    },
}
