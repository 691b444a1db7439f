//! Implementations of the CLI commands

use std::{io, path::PathBuf};

use alloy::providers::WalletProvider;
use tracing::info;

use crate::{
    artifact::load_artifact,
    cli::DeployArgs,
    constants::DEFAULT_ARTIFACT,
    deploy::{deploy::deploy_and_bootstrap, eduble::EdubleFactory},
    errors::ScriptError,
    plan::eduble_module,
    tx::client::RpcProvider,
};

/// Deploy the Eduble contract and grant the teacher role to the deployer.
pub async fn deploy_eduble(args: DeployArgs, client: RpcProvider) -> Result<(), ScriptError> {
    // Resolve the compiled artifact
    let artifact_path = args
        .artifact
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT));
    let artifact = load_artifact(&artifact_path)?;
    info!("Resolved artifact for contract: {}", artifact.contract_name);

    // The deployer is the client's default signer
    let deployer = client.default_signer_address();

    // Run the deploy + role grant sequence
    let factory = EdubleFactory::new(client, artifact);
    deploy_and_bootstrap(&factory, deployer, &mut io::stdout()).await?;

    Ok(())
}

/// Print the declarative deployment module.
pub fn show_plan() {
    let module = eduble_module();

    println!("module {}", module.name());
    for step in module.steps() {
        println!(
            "  contract {} ({} constructor args)",
            step.contract,
            step.constructor_args.len()
        );
    }
    for (key, handle) in module.exports() {
        println!("  export {} -> {}", key, handle.contract_name());
    }
}
