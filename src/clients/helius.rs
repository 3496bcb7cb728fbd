use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;

use crate::clients::http;
use crate::error::ScanError;

/// API-key gated indexer preferred over the chain RPC when configured.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PremiumProvider: Send + Sync {
    async fn native_balance(&self, address: &str) -> Result<u64, ScanError>;

    /// Unix timestamp of the wallet's earliest transaction, `None` if it has none.
    async fn first_activity(&self, address: &str) -> Result<Option<i64>, ScanError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BalancesResponse {
    native_balance: NativeBalance,
}

#[derive(Debug, Deserialize)]
struct NativeBalance {
    lamports: u64,
}

#[derive(Debug, Deserialize)]
struct EnhancedTransaction {
    #[serde(default)]
    timestamp: Option<i64>,
}

pub struct HeliusClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl HeliusClient {
    pub fn new(http_client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl PremiumProvider for HeliusClient {
    async fn native_balance(&self, address: &str) -> Result<u64, ScanError> {
        let url = format!("{}/addresses/{}/balances", self.base_url, address);
        let request = self
            .http_client
            .get(&url)
            .query(&[("api-key", self.api_key.as_str())]);

        let response: BalancesResponse = http::send_json(request, "helius balances").await?;
        Ok(response.native_balance.lamports)
    }

    async fn first_activity(&self, address: &str) -> Result<Option<i64>, ScanError> {
        let url = format!("{}/addresses/{}/transactions", self.base_url, address);
        let request = self.http_client.get(&url).query(&[
            ("api-key", self.api_key.as_str()),
            ("limit", "1"),
            ("sort", "asc"),
        ]);

        let transactions: Vec<EnhancedTransaction> =
            http::send_json(request, "helius transactions").await?;
        Ok(earliest_timestamp(&transactions))
    }
}

fn earliest_timestamp(transactions: &[EnhancedTransaction]) -> Option<i64> {
    transactions.iter().filter_map(|tx| tx.timestamp).min()
}
