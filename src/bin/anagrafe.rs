use anagrafe::cli::{actions, actions::Action, start};
use anyhow::Result;

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let action = start()?;

    // Handle the action
    match action {
        Action::Server { .. } => actions::server::handle(action).await?,
    }

    Ok(())
}
