pub mod commands;
pub mod config;
pub mod notifier;
pub mod telegram;

pub use commands::Command;
pub use config::BotConfig;
pub use notifier::{format_usd, format_whale_alert, Notifier, TelegramNotifier};
pub use telegram::{format_status, WhaleBot};
