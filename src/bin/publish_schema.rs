use anagrafe::publisher;
use anyhow::Result;
use clap::{Arg, ColorChoice, Command};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

fn command() -> Command {
    Command::new("publish_schema")
        .about("Publish an updated GraphQL schema file to the account service")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .help("Schema description to publish")
                .default_value("updatedSchema.graphql"),
        )
        .arg(
            Arg::new("dest")
                .short('d')
                .long("dest")
                .help("Deployed schema file to overwrite")
                .default_value("schema.graphql"),
        )
}

fn main() -> Result<()> {
    let subscriber = Registry::default()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::from_default_env());
    tracing::subscriber::set_global_default(subscriber)?;

    let matches = command().get_matches();

    let source = matches
        .get_one::<String>("source")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("missing required argument: --source"))?;
    let dest = matches
        .get_one::<String>("dest")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("missing required argument: --dest"))?;

    publisher::publish(&source, &dest)?;

    Ok(())
}
