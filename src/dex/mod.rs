pub mod config;
pub mod discovery;
pub mod types;

pub use config::DiscoveryConfig;
pub use discovery::WalletDiscovery;
pub use types::{Trade, TradingPair};
