use serde::Deserialize;

/// Aggregator market. Only `pair_address` feeds discovery; the rest is logged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingPair {
    #[serde(default)]
    pub pair_address: Option<String>,
    #[serde(default)]
    pub chain_id: Option<String>,
    #[serde(default)]
    pub dex_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl TradingPair {
    pub fn address(&self) -> Option<&str> {
        self.pair_address.as_deref().filter(|addr| !addr.is_empty())
    }

    /// `chain/dex` for log lines.
    pub fn venue(&self) -> String {
        format!(
            "{}/{}",
            self.chain_id.as_deref().unwrap_or("unknown chain"),
            self.dex_id.as_deref().unwrap_or("unknown dex")
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    #[serde(default)]
    pub taker_address: Option<String>,
    #[serde(default)]
    pub maker_address: Option<String>,
}

impl Trade {
    /// Taker and maker, skipping absent or empty entries.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        [self.taker_address.as_deref(), self.maker_address.as_deref()]
            .into_iter()
            .flatten()
            .filter(|addr| !addr.is_empty())
    }
}
