mod config;
mod detector;
mod monitor;
mod resolver;
mod types;

pub use config::WhaleConfig;
pub use detector::WhaleDetector;
pub use monitor::{monitor_stopped, WhaleMonitor};
pub use resolver::{age_in_days, lamports_to_quote, AgeResolver, BalanceResolver};
pub use types::{QualifiedWhale, ScanStatus};
