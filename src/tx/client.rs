//! RPC client construction for the deploy scripts

use std::env;

use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::B256,
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, Provider, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::info;

use crate::{constants::DEFAULT_RPC, errors::ScriptError};

/// Re-export of the alloy recommended fillers
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// An alloy provider that signs with a local private key and talks to the
/// RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Build the RPC provider used by the deploy commands.
///
/// The signing key comes from the `PRIVATE_KEY` environment variable; the
/// endpoint comes from `RPC_URL` and falls back to the local development
/// node when unset.
pub async fn create_rpc_provider() -> Result<RpcProvider, ScriptError> {
    // Resolve the deployer key from the environment
    let raw_key = env::var("PRIVATE_KEY")
        .map_err(|_| ScriptError::SignerConfiguration(String::from("PRIVATE_KEY is not set")))?;
    let key_bytes = hex::decode(raw_key.trim_start_matches("0x"))
        .map_err(|e| ScriptError::SignerConfiguration(e.to_string()))?;
    if key_bytes.len() != 32 {
        return Err(ScriptError::SignerConfiguration(String::from(
            "PRIVATE_KEY must be a 32 byte hex string",
        )));
    }
    let private_key = B256::from_slice(&key_bytes);

    // Create our signer
    let signer = PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| ScriptError::SignerConfiguration(e.to_string()))?;
    let wallet = EthereumWallet::from(signer);

    // Resolve the endpoint, defaulting to the local node
    let rpc_url = env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC.to_string());
    let rpc_url = rpc_url
        .parse::<Url>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    // Create our provider with the rpc client + signer
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(rpc_url);

    // Fetch chain id, which also validates the endpoint is reachable
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    info!("Built client on chain ID: {}", chain_id);

    Ok(provider)
}
