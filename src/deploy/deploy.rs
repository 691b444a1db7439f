//! Deployment and role bootstrap sequence
//!
//! The sequence is written against the [`ContractFactory`] and
//! [`DeployedContract`] seams so it can run against the real chain client
//! or an in-memory stand-in. Progress lines meant for the operator go to
//! the injected output sink; operational detail goes through tracing.

use std::io::Write;

use alloy::primitives::{Address, TxHash, B256};

use crate::{errors::ScriptError, roles::teacher_role};

/// A contract instance confirmed on-chain, addressable and callable.
#[allow(async_fn_in_trait)]
pub trait DeployedContract {
    /// On-chain address of the instance
    fn address(&self) -> Address;

    /// Grant `role` to `account` through the contract's access control,
    /// waiting for the transaction to be included.
    async fn grant_role(&self, role: B256, account: Address) -> Result<TxHash, ScriptError>;
}

/// A capability to produce a new on-chain instance of a contract.
#[allow(async_fn_in_trait)]
pub trait ContractFactory {
    /// The handle type produced once deployment is confirmed
    type Contract: DeployedContract;

    /// Submit the deployment transaction and wait for confirmation.
    async fn deploy(&self) -> Result<Self::Contract, ScriptError>;
}

/// Deploy the contract and grant the teacher role to the deployer.
///
/// Strict linear sequence, no retries: deploy, wait for confirmation, read
/// back the address, then grant `TEACHER_ROLE` to `deployer`. Any failure
/// propagates immediately; a failure after deployment leaves the contract
/// deployed with the role ungranted.
pub async fn deploy_and_bootstrap<F, W>(
    factory: &F,
    deployer: Address,
    out: &mut W,
) -> Result<Address, ScriptError>
where
    F: ContractFactory,
    W: Write,
{
    writeln!(out, "Deploying Eduble contract...")
        .map_err(|e| ScriptError::OutputWrite(e.to_string()))?;

    let contract = factory.deploy().await?;
    let address = contract.address();
    writeln!(out, "Eduble deployed to: {address}")
        .map_err(|e| ScriptError::OutputWrite(e.to_string()))?;

    contract.grant_role(teacher_role(), deployer).await?;
    writeln!(out, "Granted TEACHER_ROLE to deployer: {deployer}")
        .map_err(|e| ScriptError::OutputWrite(e.to_string()))?;

    Ok(address)
}

#[cfg(test)]
#[allow(clippy::missing_docs_in_private_items)]
mod tests {
    use std::sync::{Arc, Mutex};

    use alloy::primitives::address;

    use super::*;

    /// Factory stand-in driving the sequence without a chain.
    struct MockFactory {
        address: Address,
        fail_deploy: bool,
        fail_grant: bool,
        grants: Arc<Mutex<Vec<(B256, Address)>>>,
    }

    impl MockFactory {
        fn deploying_at(address: Address) -> Self {
            Self {
                address,
                fail_deploy: false,
                fail_grant: false,
                grants: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn grant_calls(&self) -> Vec<(B256, Address)> {
            self.grants.lock().unwrap().clone()
        }
    }

    struct MockContract {
        address: Address,
        fail_grant: bool,
        grants: Arc<Mutex<Vec<(B256, Address)>>>,
    }

    impl ContractFactory for MockFactory {
        type Contract = MockContract;

        async fn deploy(&self) -> Result<MockContract, ScriptError> {
            if self.fail_deploy {
                return Err(ScriptError::ContractDeployment(String::from(
                    "deployment transaction reverted",
                )));
            }
            Ok(MockContract {
                address: self.address,
                fail_grant: self.fail_grant,
                grants: Arc::clone(&self.grants),
            })
        }
    }

    impl DeployedContract for MockContract {
        fn address(&self) -> Address {
            self.address
        }

        async fn grant_role(&self, role: B256, account: Address) -> Result<TxHash, ScriptError> {
            if self.fail_grant {
                return Err(ScriptError::ContractInteraction(String::from(
                    "grant role transaction reverted",
                )));
            }
            self.grants.lock().unwrap().push((role, account));
            Ok(TxHash::ZERO)
        }
    }

    const CONTRACT: Address = address!("00000000000000000000000000000000000000aa");
    const DEPLOYER: Address = address!("00000000000000000000000000000000000000bb");

    #[tokio::test]
    async fn successful_run_deploys_and_grants_once() {
        let factory = MockFactory::deploying_at(CONTRACT);
        let mut out = Vec::new();

        let deployed = deploy_and_bootstrap(&factory, DEPLOYER, &mut out)
            .await
            .unwrap();

        assert_eq!(deployed, CONTRACT);
        assert_eq!(factory.grant_calls(), vec![(teacher_role(), DEPLOYER)]);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Deploying Eduble contract..."));
        assert!(output.contains(&format!("Eduble deployed to: {CONTRACT}")));
        assert!(output.contains(&format!("Granted TEACHER_ROLE to deployer: {DEPLOYER}")));
    }

    #[tokio::test]
    async fn failed_deployment_never_attempts_the_grant() {
        let factory = MockFactory {
            fail_deploy: true,
            ..MockFactory::deploying_at(CONTRACT)
        };
        let mut out = Vec::new();

        let err = deploy_and_bootstrap(&factory, DEPLOYER, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, ScriptError::ContractDeployment(_)));
        assert!(factory.grant_calls().is_empty());

        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("deployed to"));
    }

    #[tokio::test]
    async fn failed_grant_still_reports_the_deployed_address() {
        let factory = MockFactory {
            fail_grant: true,
            ..MockFactory::deploying_at(CONTRACT)
        };
        let mut out = Vec::new();

        let err = deploy_and_bootstrap(&factory, DEPLOYER, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, ScriptError::ContractInteraction(_)));

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains(&format!("Eduble deployed to: {CONTRACT}")));
        assert!(!output.contains("Granted TEACHER_ROLE"));
    }

    #[tokio::test]
    async fn independent_runs_yield_independent_addresses() {
        let first = MockFactory::deploying_at(CONTRACT);
        let second =
            MockFactory::deploying_at(address!("00000000000000000000000000000000000000cc"));

        let first_address = deploy_and_bootstrap(&first, DEPLOYER, &mut Vec::new())
            .await
            .unwrap();
        let second_address = deploy_and_bootstrap(&second, DEPLOYER, &mut Vec::new())
            .await
            .unwrap();

        assert_ne!(first_address, second_address);
        assert_eq!(first.grant_calls().len(), 1);
        assert_eq!(second.grant_calls().len(), 1);
    }
}
