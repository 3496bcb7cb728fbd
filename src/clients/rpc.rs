use async_trait::async_trait;
use log::warn;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use solana_sdk::commitment_config::CommitmentConfig;

use crate::clients::http;
use crate::error::ScanError;
use crate::solana_config::SolanaConfig;

/// The subset of the Solana JSON-RPC API the scanner needs.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChainRpc: Send + Sync {
    /// Native balance in lamports. A response without a value counts as `0`.
    async fn get_balance(&self, address: &str) -> Result<u64, ScanError>;

    /// Signatures for `address` as the node returns them (most recent first).
    async fn get_signatures_for_address(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, ScanError>;
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureInfo {
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub block_time: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct BalanceValue {
    #[serde(default)]
    value: u64,
}

pub struct JsonRpcClient {
    http_client: Client,
    rpc_url: String,
    commitment: CommitmentConfig,
}

impl JsonRpcClient {
    pub fn new(http_client: Client, config: &SolanaConfig) -> Self {
        Self {
            http_client,
            rpc_url: config.rpc_url.clone(),
            commitment: config.commitment,
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<RpcResponse<T>, ScanError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let endpoint = format!("rpc {}", method);
        let response: RpcResponse<T> =
            http::send_json(self.http_client.post(&self.rpc_url).json(&payload), &endpoint).await?;

        if let Some(error) = &response.error {
            warn!("RPC {} returned error {}: {}", method, error.code, error.message);
        }

        Ok(response)
    }
}

#[async_trait]
impl ChainRpc for JsonRpcClient {
    async fn get_balance(&self, address: &str) -> Result<u64, ScanError> {
        let response = self.call("getBalance", json!([address])).await?;
        Ok(lamports_from(response))
    }

    async fn get_signatures_for_address(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<SignatureInfo>, ScanError> {
        let params = json!([
            address,
            { "limit": limit, "commitment": self.commitment.commitment }
        ]);
        let response = self.call("getSignaturesForAddress", params).await?;
        Ok(signatures_from(response))
    }
}

fn lamports_from(response: RpcResponse<BalanceValue>) -> u64 {
    response.result.map(|balance| balance.value).unwrap_or(0)
}

fn signatures_from(response: RpcResponse<Vec<SignatureInfo>>) -> Vec<SignatureInfo> {
    response.result.unwrap_or_default()
}
