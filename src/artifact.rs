//! Resolution of compiled contract artifacts

use std::{fs::File, io::Read, path::Path};

use alloy::hex;
use json::JsonValue;

use crate::errors::ScriptError;

/// A compiled contract artifact, resolved from the build output on disk.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    /// Name of the contract, as recorded by the compiler
    pub contract_name: String,
    /// Deployable init code of the contract
    pub bytecode: Vec<u8>,
}

/// Resolve a compiled artifact from its JSON build output.
///
/// The artifact is expected to carry a `contractName` field and a `bytecode`
/// field holding the 0x-prefixed hex init code. A missing file, unparsable
/// JSON, or empty bytecode (an interface or abstract contract) all count as
/// artifact-resolution failures.
pub fn load_artifact(file_path: &Path) -> Result<ContractArtifact, ScriptError> {
    if !file_path.exists() {
        return Err(ScriptError::ArtifactResolution(format!(
            "artifact file not found: {}",
            file_path.display()
        )));
    }

    let parsed_json = get_json_from_file(file_path)?;

    let contract_name = parsed_json["contractName"]
        .as_str()
        .ok_or(ScriptError::ArtifactResolution(String::from(
            "artifact is missing the contractName field",
        )))?
        .to_string();

    let raw_bytecode = parsed_json["bytecode"]
        .as_str()
        .ok_or(ScriptError::ArtifactResolution(String::from(
            "artifact is missing the bytecode field",
        )))?;

    let bytecode = hex::decode(raw_bytecode.trim_start_matches("0x"))
        .map_err(|e| ScriptError::ArtifactResolution(e.to_string()))?;

    if bytecode.is_empty() {
        return Err(ScriptError::ArtifactResolution(format!(
            "contract {} has no deployable bytecode",
            contract_name
        )));
    }

    Ok(ContractArtifact {
        contract_name,
        bytecode,
    })
}

/// Parses the JSON file at the given path
fn get_json_from_file(file_path: &Path) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::ArtifactResolution(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::ArtifactResolution(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::ArtifactResolution(e.to_string()))
}
