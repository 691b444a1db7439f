//! Definitions of CLI arguments and commands for the deploy scripts

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::{deploy_eduble, show_plan},
    errors::ScriptError,
    tx::client::create_rpc_provider,
};

/// Scripts for deploying the Eduble contract
#[derive(Parser)]
pub struct Cli {
    /// The command to run; a bare invocation deploys
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the Eduble contract and grant the teacher role to the deployer
    Deploy(DeployArgs),
    /// Print the declarative deployment module without executing anything
    Plan,
}

impl Default for Command {
    fn default() -> Self {
        Command::Deploy(DeployArgs::default())
    }
}

impl Command {
    /// Run the command
    pub async fn run(self) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => {
                info!("Deploying contracts...");
                // Build our RPC client with signer
                let client = create_rpc_provider().await?;

                deploy_eduble(args, client).await
            }
            Command::Plan => {
                show_plan();
                Ok(())
            }
        }
    }
}

/// Deploy the Eduble contract
#[derive(Args, Default)]
pub struct DeployArgs {
    /// Path to the compiled Eduble artifact JSON
    #[arg(short, long)]
    pub artifact: Option<std::path::PathBuf>,
}
