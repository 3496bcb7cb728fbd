use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use rust_decimal::Decimal;
use solana_sdk::native_token::LAMPORTS_PER_SOL;

use crate::clients::{ChainRpc, PremiumProvider, PriceOracle};
use crate::error::ScanError;

/// Quote value of `lamports`, or `MalformedResponse` when the product does not
/// fit a `Decimal`.
pub fn lamports_to_quote(lamports: u64, price: Decimal) -> Result<Decimal, ScanError> {
    Decimal::from(lamports)
        .checked_div(Decimal::from(LAMPORTS_PER_SOL))
        .and_then(|sol| sol.checked_mul(price))
        .ok_or_else(|| ScanError::MalformedResponse {
            endpoint: "price conversion".to_string(),
            reason: format!("{} lamports at {} overflows", lamports, price),
        })
}

/// Whole days between `first_activity` (unix seconds) and `now`, floored and
/// never negative. Unrepresentable timestamps count as zero days.
pub fn age_in_days(first_activity: i64, now: DateTime<Utc>) -> u64 {
    match DateTime::<Utc>::from_timestamp(first_activity, 0) {
        Some(first) => (now - first).num_days().max(0) as u64,
        None => 0,
    }
}

/// Quote-currency value of a wallet's native holdings.
pub struct BalanceResolver {
    premium: Option<Arc<dyn PremiumProvider>>,
    rpc: Arc<dyn ChainRpc>,
    oracle: Arc<dyn PriceOracle>,
}

impl BalanceResolver {
    pub fn new(
        premium: Option<Arc<dyn PremiumProvider>>,
        rpc: Arc<dyn ChainRpc>,
        oracle: Arc<dyn PriceOracle>,
    ) -> Self {
        Self {
            premium,
            rpc,
            oracle,
        }
    }

    pub async fn get_wallet_balance(&self, address: &str) -> Result<Decimal, ScanError> {
        let lamports = self.native_lamports(address).await?;
        let price = self.oracle.get_quote_price().await?;
        lamports_to_quote(lamports, price)
    }

    async fn native_lamports(&self, address: &str) -> Result<u64, ScanError> {
        if let Some(premium) = &self.premium {
            match premium.native_balance(address).await {
                Ok(lamports) => return Ok(lamports),
                Err(e) => warn!(
                    "Premium balance lookup failed for {} ({:?}), falling back to RPC: {}",
                    address,
                    e.kind(),
                    e
                ),
            }
        }

        self.rpc.get_balance(address).await
    }
}

/// Days since a wallet's first on-chain activity.
pub struct AgeResolver {
    premium: Option<Arc<dyn PremiumProvider>>,
    rpc: Arc<dyn ChainRpc>,
    signature_limit: usize,
}

impl AgeResolver {
    pub fn new(
        premium: Option<Arc<dyn PremiumProvider>>,
        rpc: Arc<dyn ChainRpc>,
        signature_limit: usize,
    ) -> Self {
        Self {
            premium,
            rpc,
            signature_limit: signature_limit.max(1),
        }
    }

    pub async fn get_wallet_age(&self, address: &str) -> Result<u64, ScanError> {
        self.get_wallet_age_at(address, Utc::now()).await
    }

    pub async fn get_wallet_age_at(
        &self,
        address: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, ScanError> {
        Ok(match self.first_activity(address).await? {
            Some(timestamp) => age_in_days(timestamp, now),
            None => 0,
        })
    }

    async fn first_activity(&self, address: &str) -> Result<Option<i64>, ScanError> {
        if let Some(premium) = &self.premium {
            match premium.first_activity(address).await {
                Ok(Some(timestamp)) => return Ok(Some(timestamp)),
                Ok(None) => debug!(
                    "Premium provider has no transactions for {}, trying RPC",
                    address
                ),
                Err(e) => warn!(
                    "Premium history lookup failed for {} ({:?}), falling back to RPC: {}",
                    address,
                    e.kind(),
                    e
                ),
            }
        }

        let signatures = self
            .rpc
            .get_signatures_for_address(address, self.signature_limit)
            .await?;

        // The node returns newest first, so the last entry is the oldest of the page.
        Ok(signatures
            .last()
            .and_then(|signature| signature.block_time)
            .filter(|block_time| *block_time > 0))
    }
}
