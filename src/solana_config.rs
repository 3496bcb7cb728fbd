use std::fmt;
use std::str::FromStr;

use solana_sdk::commitment_config::CommitmentConfig;

use crate::config::{self, Lookup};
use crate::error::ScanError;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_HELIUS_API_URL: &str = "https://api.helius.xyz/v0";
pub const DEFAULT_PRICE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";

/// Largest page `getSignaturesForAddress` accepts.
pub const MAX_SIGNATURE_LIMIT: usize = 1000;

#[derive(Clone)]
pub struct SolanaConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    /// Absent key selects fallback-only mode.
    pub helius_api_key: Option<String>,
    pub helius_api_url: String,
    pub price_url: String,
    pub price_asset_id: String,
    pub quote_currency: String,
    pub age_signature_limit: usize,
}

impl SolanaConfig {
    // Default mainnet configuration
    pub fn mainnet_default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: CommitmentConfig::confirmed(),
            helius_api_key: None,
            helius_api_url: DEFAULT_HELIUS_API_URL.to_string(),
            price_url: DEFAULT_PRICE_URL.to_string(),
            price_asset_id: "solana".to_string(),
            quote_currency: "usd".to_string(),
            age_signature_limit: 1,
        }
    }

    pub fn from_lookup(lookup: Lookup) -> Result<Self, ScanError> {
        let defaults = Self::mainnet_default();

        let commitment = match config::optional(lookup, "SOLANA_COMMITMENT") {
            Some(raw) => CommitmentConfig::from_str(&raw).map_err(|e| {
                ScanError::ConfigError(format!("invalid SOLANA_COMMITMENT ({}): {}", raw, e))
            })?,
            None => defaults.commitment,
        };

        let age_signature_limit: usize =
            config::parse_or(lookup, "AGE_SIGNATURE_LIMIT", defaults.age_signature_limit)?;

        Ok(Self {
            rpc_url: config::string_or(lookup, "SOLANA_RPC_URL", &defaults.rpc_url),
            commitment,
            helius_api_key: config::optional(lookup, "HELIUS_API_KEY"),
            helius_api_url: config::string_or(lookup, "HELIUS_API_URL", &defaults.helius_api_url),
            price_url: config::string_or(lookup, "COINGECKO_PRICE_URL", &defaults.price_url),
            price_asset_id: config::string_or(lookup, "PRICE_ASSET_ID", &defaults.price_asset_id),
            quote_currency: config::string_or(lookup, "QUOTE_CURRENCY", &defaults.quote_currency),
            age_signature_limit: age_signature_limit.clamp(1, MAX_SIGNATURE_LIMIT),
        })
    }

    pub fn has_premium_provider(&self) -> bool {
        self.helius_api_key.is_some()
    }
}

impl fmt::Debug for SolanaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SolanaConfig")
            .field("rpc_url", &self.rpc_url)
            .field("commitment", &self.commitment.commitment)
            .field("helius_api_key", &self.helius_api_key.as_ref().map(|_| "<redacted>"))
            .field("helius_api_url", &self.helius_api_url)
            .field("price_url", &self.price_url)
            .field("price_asset_id", &self.price_asset_id)
            .field("quote_currency", &self.quote_currency)
            .field("age_signature_limit", &self.age_signature_limit)
            .finish()
    }
}
