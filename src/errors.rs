//! Definitions of errors that can occur during the execution of the deployment scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deployment scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error resolving the compiled contract artifact
    ArtifactResolution(String),
    /// Error when creating the RPC client
    ClientInitialization(String),
    /// Error with the local signer configuration
    SignerConfiguration(String),
    /// Error deploying the contract
    ContractDeployment(String),
    /// Error calling a contract method
    ContractInteraction(String),
    /// Error writing the script output
    OutputWrite(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ArtifactResolution(s) => {
                write!(f, "error resolving contract artifact: {}", s)
            }
            ScriptError::ClientInitialization(s) => write!(f, "error during client init: {}", s),
            ScriptError::SignerConfiguration(s) => {
                write!(f, "error with the signer configuration: {}", s)
            }
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::OutputWrite(s) => write!(f, "error writing script output: {}", s),
        }
    }
}

impl Error for ScriptError {}
