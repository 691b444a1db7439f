//! Constants used in the deploy scripts

/// Name of the access-control role granted to the deployer
pub const TEACHER_ROLE_NAME: &str = "TEACHER_ROLE";

/// Default RPC endpoint (local development node)
pub const DEFAULT_RPC: &str = "http://127.0.0.1:8545";

/// Default path to the compiled Eduble artifact
pub const DEFAULT_ARTIFACT: &str = "artifacts/contracts/Eduble.sol/Eduble.json";
