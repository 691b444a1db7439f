use clap::Parser;
use dotenv::dotenv;
use eduble_scripts::{cli::Cli, errors::ScriptError};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    // Load .env file
    dotenv().ok();

    let Cli { command } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    command.unwrap_or_default().run().await
}
