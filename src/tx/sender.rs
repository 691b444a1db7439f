//! Transaction senders for the Eduble contract

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, TxHash, B256, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use tracing::info;

use crate::{
    errors::ScriptError,
    tx::{abi::grantRoleCall, client::RpcProvider},
};

/// Grant the given role to an account on the deployed Eduble contract.
///
/// Submits the `grantRole` transaction and waits for it to be included,
/// failing if it reverts (the signer lacks the admin role) or the network
/// rejects it.
pub async fn send_grant_role(
    contract: Address,
    role: B256,
    account: Address,
    client: RpcProvider,
) -> Result<TxHash, ScriptError> {
    // Build the tx
    let tx_request = TransactionRequest::default()
        .to(contract)
        .with_call(&grantRoleCall { role, account })
        .with_value(U256::from(0));

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    info!("Pending grant role transaction... {}", pending_tx.tx_hash());

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))?;
    if !receipt.status() {
        return Err(ScriptError::ContractInteraction(String::from(
            "grant role transaction reverted",
        )));
    }
    info!(
        "Grant role tx done on block: {}",
        receipt.block_number.unwrap_or_default()
    );

    Ok(receipt.transaction_hash)
}
