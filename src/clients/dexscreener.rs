use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;

use crate::clients::http;
use crate::dex::{DiscoveryConfig, Trade, TradingPair};
use crate::error::ScanError;

/// Market-data aggregator used for wallet discovery.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Pairs matching `query`, in the order the aggregator ranks them.
    async fn search_pairs(&self, query: &str) -> Result<Vec<TradingPair>, ScanError>;

    async fn recent_trades(&self, pair_address: &str) -> Result<Vec<Trade>, ScanError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    pairs: Option<Vec<TradingPair>>,
}

#[derive(Debug, Deserialize)]
struct TradesResponse {
    #[serde(default)]
    trades: Option<Vec<Trade>>,
}

pub struct DexScreenerClient {
    http_client: Client,
    search_url: String,
    trades_url: String,
}

impl DexScreenerClient {
    pub fn new(http_client: Client, config: &DiscoveryConfig) -> Self {
        Self {
            http_client,
            search_url: config.search_url.clone(),
            trades_url: config.trades_url.clone(),
        }
    }
}

#[async_trait]
impl MarketData for DexScreenerClient {
    async fn search_pairs(&self, query: &str) -> Result<Vec<TradingPair>, ScanError> {
        let request = self.http_client.get(&self.search_url).query(&[("q", query)]);

        let response: SearchResponse = http::send_json(request, "dexscreener search").await?;
        Ok(response.pairs.unwrap_or_default())
    }

    async fn recent_trades(&self, pair_address: &str) -> Result<Vec<Trade>, ScanError> {
        let request = self
            .http_client
            .get(&self.trades_url)
            .query(&[("pairAddress", pair_address)]);

        let response: TradesResponse = http::send_json(request, "dexscreener trades").await?;
        Ok(response.trades.unwrap_or_default())
    }
}
