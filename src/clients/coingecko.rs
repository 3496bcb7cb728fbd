use async_trait::async_trait;
use log::warn;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::clients::http;
use crate::error::ScanError;
use crate::solana_config::SolanaConfig;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Spot price of the native asset in the quote currency.
    async fn get_quote_price(&self) -> Result<Decimal, ScanError>;
}

pub struct CoinGeckoClient {
    http_client: Client,
    price_url: String,
    asset_id: String,
    quote_currency: String,
}

impl CoinGeckoClient {
    pub fn new(http_client: Client, config: &SolanaConfig) -> Self {
        Self {
            http_client,
            price_url: config.price_url.clone(),
            asset_id: config.price_asset_id.clone(),
            quote_currency: config.quote_currency.clone(),
        }
    }
}

#[async_trait]
impl PriceOracle for CoinGeckoClient {
    async fn get_quote_price(&self) -> Result<Decimal, ScanError> {
        let request = self.http_client.get(&self.price_url).query(&[
            ("ids", self.asset_id.as_str()),
            ("vs_currencies", self.quote_currency.as_str()),
        ]);

        let body: Value = http::send_json(request, "coingecko price").await?;
        quote_from_body(&body, &self.asset_id, &self.quote_currency)
    }
}

/// Reads `{ <asset>: { <currency>: number } }`; a missing field prices at zero.
fn quote_from_body(body: &Value, asset_id: &str, currency: &str) -> Result<Decimal, ScanError> {
    let Some(price) = body
        .get(asset_id)
        .and_then(|quotes| quotes.get(currency))
        .and_then(Value::as_f64)
    else {
        warn!("No {} quote for {} in price response", currency, asset_id);
        return Ok(Decimal::ZERO);
    };

    Decimal::from_f64(price).ok_or_else(|| ScanError::MalformedResponse {
        endpoint: "coingecko price".to_string(),
        reason: format!("price {} is not representable", price),
    })
}
