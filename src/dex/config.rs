use crate::config::{self, Lookup};
use crate::error::ScanError;

pub const DEFAULT_SEARCH_URL: &str = "https://api.dexscreener.com/latest/dex/search";
pub const DEFAULT_TRADES_URL: &str = "https://api.dexscreener.com/latest/dex/trades";

#[derive(Clone, Debug)]
pub struct DiscoveryConfig {
    pub search_url: String,
    pub trades_url: String,
    pub search_query: String,
    pub pairs_limit: usize, // top N pools, in aggregator order
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            trades_url: DEFAULT_TRADES_URL.to_string(),
            search_query: "SOL".to_string(),
            pairs_limit: 10,
        }
    }
}

impl DiscoveryConfig {
    pub fn from_lookup(lookup: Lookup) -> Result<Self, ScanError> {
        let defaults = Self::default();
        Ok(Self {
            search_url: config::string_or(lookup, "DEX_SEARCH_URL", &defaults.search_url),
            trades_url: config::string_or(lookup, "DEX_TRADES_URL", &defaults.trades_url),
            search_query: config::string_or(lookup, "DEX_SEARCH_QUERY", &defaults.search_query),
            pairs_limit: config::parse_or(lookup, "DEX_PAIRS_LIMIT", defaults.pairs_limit)?,
        })
    }
}
