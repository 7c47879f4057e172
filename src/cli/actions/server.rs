use crate::anagrafe::new;
use crate::cli::{actions::Action, globals::Config};
use anyhow::{anyhow, Result};
use url::Url;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            mongodb_uri,
            jwt_secret,
        } => {
            let uri = Url::parse(&mongodb_uri)?;

            if uri.scheme() != "mongodb" && uri.scheme() != "mongodb+srv" {
                return Err(anyhow!(
                    "unsupported connection string scheme: {}",
                    uri.scheme()
                ));
            }

            let config = Config::new(port, mongodb_uri, jwt_secret);

            new(&config).await?;
        }
    }

    Ok(())
}
