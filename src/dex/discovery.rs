use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::clients::MarketData;
use crate::dex::DiscoveryConfig;

/// Collects wallets that recently traded on the aggregator's top pairs.
///
/// Discovery is fail-soft: a failed search yields an empty set and a failed
/// trades request only drops that pair.
pub struct WalletDiscovery {
    market_data: Arc<dyn MarketData>,
    config: DiscoveryConfig,
}

impl WalletDiscovery {
    pub fn new(market_data: Arc<dyn MarketData>, config: DiscoveryConfig) -> Self {
        Self {
            market_data,
            config,
        }
    }

    pub async fn discover_candidate_wallets(&self) -> HashSet<String> {
        let mut wallets = HashSet::new();

        let pairs = match self.market_data.search_pairs(&self.config.search_query).await {
            Ok(pairs) => pairs,
            Err(e) => {
                warn!(
                    "Pair search for '{}' failed ({:?}): {}",
                    self.config.search_query,
                    e.kind(),
                    e
                );
                return wallets;
            }
        };

        info!(
            "Aggregator returned {} pairs for '{}', scanning up to {}",
            pairs.len(),
            self.config.search_query,
            self.config.pairs_limit
        );

        for pair in pairs.iter().take(self.config.pairs_limit) {
            let Some(pair_address) = pair.address() else {
                debug!("Skipping pair without address: {:?}", pair.url);
                continue;
            };

            match self.market_data.recent_trades(pair_address).await {
                Ok(trades) => {
                    let before = wallets.len();
                    for trade in &trades {
                        wallets.extend(trade.participants().map(str::to_string));
                    }
                    debug!(
                        "Pair {} ({}): {} trades, {} new wallets",
                        pair_address,
                        pair.venue(),
                        trades.len(),
                        wallets.len() - before
                    );
                }
                Err(e) => {
                    warn!("Skipping pair {} ({:?}): {}", pair_address, e.kind(), e);
                }
            }
        }

        info!("Discovered {} candidate wallets", wallets.len());
        wallets
    }
}
