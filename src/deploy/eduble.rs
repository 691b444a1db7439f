//! Chain-backed factory and handle for the Eduble contract

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, B256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use tracing::info;

use crate::{
    artifact::ContractArtifact,
    deploy::deploy::{ContractFactory, DeployedContract},
    errors::ScriptError,
    tx::{client::RpcProvider, sender::send_grant_role},
};

/// Factory producing on-chain Eduble instances from the compiled artifact.
pub struct EdubleFactory {
    /// Client used to submit the deployment transaction
    client: RpcProvider,
    /// Deployable init code from the compiled artifact
    bytecode: Vec<u8>,
}

impl EdubleFactory {
    /// Build a factory from the RPC client and a resolved artifact.
    pub fn new(client: RpcProvider, artifact: ContractArtifact) -> Self {
        Self {
            client,
            bytecode: artifact.bytecode,
        }
    }
}

impl ContractFactory for EdubleFactory {
    type Contract = EdubleContract;

    async fn deploy(&self) -> Result<EdubleContract, ScriptError> {
        // Build the deployment tx from the init code
        let tx_request = TransactionRequest::default().with_deploy_code(self.bytecode.clone());

        // Send it
        let pending_tx = self
            .client
            .send_transaction(tx_request)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        info!("Pending deployment transaction... {}", pending_tx.tx_hash());

        // Wait for the transaction to be included.
        let receipt = pending_tx
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        if !receipt.status() {
            return Err(ScriptError::ContractDeployment(String::from(
                "deployment transaction reverted",
            )));
        }

        let address = receipt
            .contract_address
            .ok_or(ScriptError::ContractDeployment(String::from(
                "no contract address in deployment receipt",
            )))?;
        info!(
            "Deployment done on block: {}",
            receipt.block_number.unwrap_or_default()
        );

        Ok(EdubleContract {
            address,
            client: self.client.clone(),
        })
    }
}

/// A confirmed on-chain Eduble instance.
pub struct EdubleContract {
    /// On-chain address assigned at deployment
    address: Address,
    /// Client used for follow-up transactions
    client: RpcProvider,
}

impl DeployedContract for EdubleContract {
    fn address(&self) -> Address {
        self.address
    }

    async fn grant_role(&self, role: B256, account: Address) -> Result<TxHash, ScriptError> {
        send_grant_role(self.address, role, account, self.client.clone()).await
    }
}
