use std::fmt;
use std::time::Duration;

use teloxide::types::{ChatId, Recipient};

use crate::config::{self, Lookup};
use crate::error::ScanError;

#[derive(Clone)]
pub struct BotConfig {
    pub token: String,
    pub chat_id: String,
    pub poll_interval: Duration,
}

impl BotConfig {
    pub fn from_lookup(lookup: Lookup) -> Result<Self, ScanError> {
        let poll_secs: u64 = config::parse_or(lookup, "POLL_INTERVAL", 300)?;

        Ok(Self {
            token: config::required(lookup, "TELEGRAM_BOT_TOKEN")?,
            chat_id: config::required(lookup, "TELEGRAM_CHAT_ID")?,
            poll_interval: Duration::from_secs(poll_secs.max(1)),
        })
    }

    /// Numeric ids address chats directly, anything else is a channel username.
    pub fn recipient(&self) -> Recipient {
        match self.chat_id.parse::<i64>() {
            Ok(id) => Recipient::Id(ChatId(id)),
            Err(_) => Recipient::ChannelUsername(self.chat_id.clone()),
        }
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
