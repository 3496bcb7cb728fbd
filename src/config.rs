use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::bot::BotConfig;
use crate::dex::DiscoveryConfig;
use crate::error::ScanError;
use crate::solana_config::SolanaConfig;
use crate::whale::WhaleConfig;

/// Key/value source for configuration. `std::env` in production, a map in tests.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

// Configuration struct to hold different component configurations
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bot: BotConfig,
    pub solana: SolanaConfig,
    pub discovery: DiscoveryConfig,
    pub whale: WhaleConfig,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn load_from_env() -> Result<Self, ScanError> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub fn from_lookup(lookup: Lookup) -> Result<Self, ScanError> {
        let timeout_secs: u64 = parse_or(lookup, "HTTP_TIMEOUT_SECS", 10)?;

        Ok(Self {
            bot: BotConfig::from_lookup(lookup)?,
            solana: SolanaConfig::from_lookup(lookup)?,
            discovery: DiscoveryConfig::from_lookup(lookup)?,
            whale: WhaleConfig::from_lookup(lookup)?,
            http_timeout: Duration::from_secs(timeout_secs.max(1)),
        })
    }
}

/// Value for `key`, treating blank values as unset.
pub fn optional(lookup: Lookup, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn required(lookup: Lookup, key: &str) -> Result<String, ScanError> {
    optional(lookup, key).ok_or_else(|| ScanError::ConfigError(format!("{} must be set", key)))
}

pub fn string_or(lookup: Lookup, key: &str, default: &str) -> String {
    optional(lookup, key).unwrap_or_else(|| default.to_string())
}

pub fn parse_or<T>(lookup: Lookup, key: &str, default: T) -> Result<T, ScanError>
where
    T: FromStr,
    T::Err: Display,
{
    match optional(lookup, key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| ScanError::ConfigError(format!("invalid {} ({}): {}", key, raw, e))),
        None => Ok(default),
    }
}
