pub mod bot;
pub mod clients;
pub mod config;
pub mod dex;
pub mod error;
pub mod solana_config;
pub mod whale;

pub use config::AppConfig;
pub use error::{ErrorKind, ScanError};
pub use solana_config::SolanaConfig;

pub use bot::{BotConfig, Notifier, TelegramNotifier, WhaleBot};

pub use dex::{DiscoveryConfig, WalletDiscovery};

pub use whale::{QualifiedWhale, ScanStatus, WhaleConfig, WhaleDetector, WhaleMonitor};
