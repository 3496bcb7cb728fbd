use async_trait::async_trait;
use log::info;
#[cfg(test)]
use mockall::automock;
use rust_decimal::Decimal;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ParseMode, Recipient};

use crate::error::ScanError;
use crate::whale::QualifiedWhale;

pub const SUPER_WHALE_MARKER: &str = " 🔥💎";

/// Delivery of one formatted message to the chat destination.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), ScanError>;
}

pub struct TelegramNotifier {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, recipient: Recipient) -> Self {
        Self { bot, recipient }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), ScanError> {
        self.bot
            .send_message(self.recipient.clone(), text)
            .parse_mode(ParseMode::Markdown)
            .await
            .map_err(|e| ScanError::NotifyError(e.to_string()))?;

        info!("Alert delivered to {:?}", self.recipient);
        Ok(())
    }
}

/// Two decimals with thousands separators, e.g. `5,200,000.00`.
pub fn format_usd(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", whole),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}

pub fn format_whale_alert(whale: &QualifiedWhale, super_whale_usd: Decimal) -> String {
    let mut message = format!(
        "🐋 *New Whale Detected!*\n\
         *Address:* `{}`\n\
         *Balance:* ${}\n\
         *Wallet Age:* {} days",
        whale.address,
        format_usd(whale.balance_usd),
        whale.age_days
    );

    if whale.is_super_whale(super_whale_usd) {
        message.push_str(SUPER_WHALE_MARKER);
    }

    message
}
