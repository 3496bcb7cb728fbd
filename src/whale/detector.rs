use std::sync::Arc;

use futures::stream::{self, StreamExt};
use log::{debug, info};
use reqwest::Client;

use super::{
    config::WhaleConfig,
    resolver::{AgeResolver, BalanceResolver},
    types::QualifiedWhale,
};

use crate::clients::{
    ChainRpc, CoinGeckoClient, DexScreenerClient, HeliusClient, JsonRpcClient, PremiumProvider,
};
use crate::config::AppConfig;
use crate::dex::WalletDiscovery;
use crate::error::ScanError;

/// Runs one discovery pass and filters the candidates down to whales.
///
/// Discovery always completes before any wallet is resolved. A resolver
/// failure aborts the whole scan rather than skipping the wallet.
pub struct WhaleDetector {
    config: WhaleConfig,
    discovery: WalletDiscovery,
    balances: BalanceResolver,
    ages: AgeResolver,
}

impl WhaleDetector {
    pub fn new(
        config: WhaleConfig,
        discovery: WalletDiscovery,
        balances: BalanceResolver,
        ages: AgeResolver,
    ) -> Self {
        Self {
            config,
            discovery,
            balances,
            ages,
        }
    }

    /// Wires the production collaborators, sharing one HTTP client.
    pub fn from_config(config: &AppConfig, http_client: Client) -> Self {
        let rpc: Arc<dyn ChainRpc> =
            Arc::new(JsonRpcClient::new(http_client.clone(), &config.solana));
        let premium: Option<Arc<dyn PremiumProvider>> =
            config.solana.helius_api_key.as_deref().map(|api_key| {
                Arc::new(HeliusClient::new(
                    http_client.clone(),
                    &config.solana.helius_api_url,
                    api_key,
                )) as Arc<dyn PremiumProvider>
            });

        if premium.is_none() {
            info!("No premium provider key configured, using RPC only");
        }

        let oracle = Arc::new(CoinGeckoClient::new(http_client.clone(), &config.solana));
        let market_data = Arc::new(DexScreenerClient::new(http_client, &config.discovery));

        Self::new(
            config.whale.clone(),
            WalletDiscovery::new(market_data, config.discovery.clone()),
            BalanceResolver::new(premium.clone(), rpc.clone(), oracle),
            AgeResolver::new(premium, rpc, config.solana.age_signature_limit),
        )
    }

    pub fn config(&self) -> &WhaleConfig {
        &self.config
    }

    pub async fn find_whales(&self) -> Result<Vec<QualifiedWhale>, ScanError> {
        let candidates = self.discovery.discover_candidate_wallets().await;
        if candidates.is_empty() {
            info!("No candidate wallets this cycle");
            return Ok(Vec::new());
        }

        info!(
            "Evaluating {} candidate wallets ({} at a time)",
            candidates.len(),
            self.config.wallet_concurrency
        );

        let pending: Vec<_> = candidates
            .into_iter()
            .map(|address| self.evaluate_wallet(address))
            .collect();
        let mut evaluations =
            stream::iter(pending).buffer_unordered(self.config.wallet_concurrency.max(1));

        let mut whales = Vec::new();
        while let Some(evaluation) = evaluations.next().await {
            if let Some(whale) = evaluation? {
                whales.push(whale);
            }
        }

        info!("Found {} whales", whales.len());
        Ok(whales)
    }

    async fn evaluate_wallet(&self, address: String) -> Result<Option<QualifiedWhale>, ScanError> {
        let balance_usd = self
            .balances
            .get_wallet_balance(&address)
            .await
            .map_err(|e| e.for_wallet(&address))?;
        let age_days = self
            .ages
            .get_wallet_age(&address)
            .await
            .map_err(|e| e.for_wallet(&address))?;

        debug!("Wallet {}: ${} held, {} days old", address, balance_usd, age_days);

        if !self.config.qualifies(balance_usd, age_days) {
            return Ok(None);
        }

        Ok(Some(QualifiedWhale {
            address,
            balance_usd,
            age_days,
        }))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clients::coingecko::MockPriceOracle;
    use crate::clients::dexscreener::MockMarketData;
    use crate::clients::rpc::MockChainRpc;
    use crate::clients::{PriceOracle, SignatureInfo};
    use crate::dex::{DiscoveryConfig, Trade, TradingPair};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    const DAY: i64 = 86_400;

    /// Wallet fixture: lamports held and age in days.
    pub(crate) struct Wallet {
        pub address: &'static str,
        pub lamports: u64,
        pub age_days: i64,
    }

    fn market_with(addresses: Vec<&'static str>) -> MockMarketData {
        let mut market = MockMarketData::new();
        market.expect_search_pairs().returning(|_| {
            Ok(vec![TradingPair {
                pair_address: Some("Pair1".to_string()),
                ..Default::default()
            }])
        });
        market.expect_recent_trades().returning(move |_| {
            Ok(addresses
                .iter()
                .map(|addr| Trade {
                    taker_address: Some(addr.to_string()),
                    maker_address: None,
                })
                .collect())
        });
        market
    }

    /// Detector over mocked collaborators; SOL priced at $1 so lamports / 1e9 is the USD value.
    pub(crate) fn detector_for(wallets: Vec<Wallet>, config: WhaleConfig) -> WhaleDetector {
        let market = market_with(wallets.iter().map(|w| w.address).collect());

        let lamports: HashMap<String, u64> = wallets
            .iter()
            .map(|w| (w.address.to_string(), w.lamports))
            .collect();
        // Half a day of slack keeps flooring stable while the test runs.
        let first_seen: HashMap<String, i64> = wallets
            .iter()
            .map(|w| (w.address.to_string(), Utc::now().timestamp() - w.age_days * DAY - DAY / 2))
            .collect();

        let mut rpc = MockChainRpc::new();
        rpc.expect_get_balance()
            .returning(move |address| Ok(lamports.get(address).copied().unwrap_or(0)));
        rpc.expect_get_signatures_for_address()
            .returning(move |address, _| {
                Ok(vec![SignatureInfo {
                    signature: format!("sig-{}", address),
                    block_time: first_seen.get(address).copied(),
                }])
            });
        let rpc: Arc<dyn ChainRpc> = Arc::new(rpc);

        let mut oracle = MockPriceOracle::new();
        oracle.expect_get_quote_price().returning(|| Ok(Decimal::ONE));
        let oracle: Arc<dyn PriceOracle> = Arc::new(oracle);

        WhaleDetector::new(
            config,
            WalletDiscovery::new(Arc::new(market), DiscoveryConfig::default()),
            BalanceResolver::new(None, rpc.clone(), oracle),
            AgeResolver::new(None, rpc, 1),
        )
    }

    pub(crate) fn wallet(address: &'static str, lamports: u64, age_days: i64) -> Wallet {
        Wallet {
            address,
            lamports,
            age_days,
        }
    }

    fn sol(amount: u64) -> u64 {
        amount * 1_000_000_000
    }

    #[tokio::test]
    async fn both_thresholds_must_hold_and_equality_qualifies() {
        let detector = detector_for(
            vec![
                wallet("Exact", sol(100_000), 5),
                wallet("Poor", sol(99_999), 400),
                wallet("Young", sol(9_000_000), 4),
                wallet("Whale", sol(2_000_000), 60),
            ],
            WhaleConfig::default(),
        );

        let mut whales = detector.find_whales().await.unwrap();
        whales.sort_by(|a, b| a.address.cmp(&b.address));

        let addresses: Vec<_> = whales.iter().map(|w| w.address.as_str()).collect();
        assert_eq!(addresses, vec!["Exact", "Whale"]);
        assert_eq!(whales[0].balance_usd, Decimal::from(100_000));
        assert_eq!(whales[0].age_days, 5);
    }

    #[tokio::test]
    async fn empty_pair_list_makes_no_resolver_calls() {
        let mut market = MockMarketData::new();
        market.expect_search_pairs().returning(|_| Ok(Vec::new()));
        market.expect_recent_trades().never();
        let mut rpc = MockChainRpc::new();
        rpc.expect_get_balance().never();
        rpc.expect_get_signatures_for_address().never();
        let rpc: Arc<dyn ChainRpc> = Arc::new(rpc);
        let mut oracle = MockPriceOracle::new();
        oracle.expect_get_quote_price().never();

        let detector = WhaleDetector::new(
            WhaleConfig::default(),
            WalletDiscovery::new(Arc::new(market), DiscoveryConfig::default()),
            BalanceResolver::new(None, rpc.clone(), Arc::new(oracle)),
            AgeResolver::new(None, rpc, 1),
        );

        assert!(detector.find_whales().await.unwrap().is_empty());
    }

    /// Detector whose RPC is unreachable, with `address` as the only candidate.
    pub(crate) fn failing_detector(address: &'static str) -> WhaleDetector {
        let mut rpc = MockChainRpc::new();
        rpc.expect_get_balance().returning(|_| {
            Err(ScanError::NetworkError("rpc unreachable".to_string()))
        });
        let rpc: Arc<dyn ChainRpc> = Arc::new(rpc);
        let mut oracle = MockPriceOracle::new();
        oracle.expect_get_quote_price().never();

        WhaleDetector::new(
            WhaleConfig::default(),
            WalletDiscovery::new(Arc::new(market_with(vec![address])), DiscoveryConfig::default()),
            BalanceResolver::new(None, rpc.clone(), Arc::new(oracle)),
            AgeResolver::new(None, rpc, 1),
        )
    }

    #[tokio::test]
    async fn resolver_failure_aborts_the_scan() {
        let err = failing_detector("Broken").find_whales().await.unwrap_err();

        assert!(matches!(
            err,
            ScanError::WalletResolution { ref address, .. } if address == "Broken"
        ));
    }

    #[tokio::test]
    async fn concurrent_resolution_keeps_membership() {
        let wallets = || {
            vec![
                wallet("A", sol(500_000), 10),
                wallet("B", sol(10), 10),
                wallet("C", sol(7_000_000), 365),
                wallet("D", sol(300_000), 1),
            ]
        };
        let concurrent = WhaleConfig {
            wallet_concurrency: 4,
            ..WhaleConfig::default()
        };

        let mut sequential: Vec<_> = detector_for(wallets(), WhaleConfig::default())
            .find_whales()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.address)
            .collect();
        let mut parallel: Vec<_> = detector_for(wallets(), concurrent)
            .find_whales()
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.address)
            .collect();
        sequential.sort();
        parallel.sort();

        assert_eq!(sequential, vec!["A".to_string(), "C".to_string()]);
        assert_eq!(sequential, parallel);
    }
}
