use secrecy::SecretString;

/// Runtime configuration, built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub mongodb_uri: String,
    pub jwt_secret: SecretString,
}

impl Config {
    #[must_use]
    pub fn new(port: u16, mongodb_uri: String, jwt_secret: SecretString) -> Self {
        Self {
            port,
            mongodb_uri,
            jwt_secret,
        }
    }
}
