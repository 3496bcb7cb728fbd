use rust_decimal::Decimal;

use crate::config::{self, Lookup};
use crate::error::ScanError;

#[derive(Clone, Debug)]
pub struct WhaleConfig {
    pub min_balance_usd: Decimal,    // Minimum quote-currency holdings to be considered a whale
    pub min_wallet_age_days: u64,    // Minimum days since first on-chain activity
    pub super_whale_usd: Decimal,    // Holdings that earn the emphasis marker in alerts
    pub wallet_concurrency: usize,   // Wallets resolved at once; 1 keeps resolution sequential
}

impl Default for WhaleConfig {
    fn default() -> Self {
        Self {
            min_balance_usd: Decimal::from(100_000),
            min_wallet_age_days: 5,
            super_whale_usd: Decimal::from(5_000_000),
            wallet_concurrency: 1,
        }
    }
}

impl WhaleConfig {
    pub fn from_lookup(lookup: Lookup) -> Result<Self, ScanError> {
        let defaults = Self::default();
        let wallet_concurrency: usize =
            config::parse_or(lookup, "WALLET_CONCURRENCY", defaults.wallet_concurrency)?;

        Ok(Self {
            min_balance_usd: config::parse_or(lookup, "MIN_BALANCE_USD", defaults.min_balance_usd)?,
            min_wallet_age_days: config::parse_or(
                lookup,
                "MIN_WALLET_AGE_DAYS",
                defaults.min_wallet_age_days,
            )?,
            super_whale_usd: config::parse_or(lookup, "SUPER_WHALE_USD", defaults.super_whale_usd)?,
            wallet_concurrency: wallet_concurrency.max(1),
        })
    }

    /// Both thresholds are inclusive.
    pub fn qualifies(&self, balance_usd: Decimal, age_days: u64) -> bool {
        balance_usd >= self.min_balance_usd && age_days >= self.min_wallet_age_days
    }
}
