pub mod coingecko;
pub mod dexscreener;
pub mod helius;
pub mod http;
pub mod rpc;
#[cfg(test)]
pub(crate) mod stub_server;

pub use coingecko::{CoinGeckoClient, PriceOracle};
pub use dexscreener::{DexScreenerClient, MarketData};
pub use helius::{HeliusClient, PremiumProvider};
pub use http::build_http_client;
pub use rpc::{ChainRpc, JsonRpcClient, SignatureInfo};
