use crate::cli::actions::Action;
use anyhow::Result;
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(3000),
        mongodb_uri: matches
            .get_one("mongodb-uri")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --mongodb-uri"))?,
        jwt_secret: matches
            .get_one("jwt-secret")
            .map(|s: &String| SecretString::from(s.to_string()))
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --jwt-secret"))?,
    })
}
