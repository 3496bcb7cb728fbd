use log::{info, warn};
use teloxide::dispatching::{HandlerExt, UpdateFilterExt};
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tokio::sync::watch;

use crate::bot::commands::Command;
use crate::bot::notifier::format_usd;
use crate::whale::{ScanStatus, WhaleConfig};

/// Command surface of the chat bot. Reads scan results, never writes them.
pub struct WhaleBot {
    bot: Bot,
    status: watch::Receiver<ScanStatus>,
    thresholds: WhaleConfig,
}

impl WhaleBot {
    pub fn new(bot: Bot, status: watch::Receiver<ScanStatus>, thresholds: WhaleConfig) -> Self {
        info!("Initializing WhaleBot command handlers");
        Self {
            bot,
            status,
            thresholds,
        }
    }

    /// Long-polls for commands until the process receives ctrl-c.
    pub async fn start(&self) {
        let status = self.status.clone();
        let thresholds = self.thresholds.clone();

        let handler = Update::filter_message()
            .filter_command::<Command>()
            .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                let status = status.clone();
                let thresholds = thresholds.clone();
                async move {
                    info!("Received command: {:?} from chat_id: {}", cmd, msg.chat.id);
                    let reply = match cmd {
                        Command::Start => format!(
                            "🐋 Whale scanner online. Wallets holding at least ${} \
                             for {}+ days are reported here.\n\
                             Use /status for the latest scan.",
                            format_usd(thresholds.min_balance_usd),
                            thresholds.min_wallet_age_days
                        ),
                        Command::Help => Command::descriptions().to_string(),
                        Command::Status => {
                            let snapshot = status.borrow().clone();
                            format_status(&snapshot, &thresholds)
                        }
                    };

                    if let Err(e) = bot.send_message(msg.chat.id, reply).await {
                        warn!("Failed to answer {:?} in chat {}: {}", cmd, msg.chat.id, e);
                        return Err(e);
                    }
                    respond(())
                }
            });

        info!("Building dispatcher");
        Dispatcher::builder(self.bot.clone(), handler)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Dispatcher finished");
    }
}

pub fn format_status(status: &ScanStatus, thresholds: &WhaleConfig) -> String {
    let last_scan = match (status.last_scan, status.in_progress) {
        (None, _) => "never".to_string(),
        (Some(at), true) => format!("{} (in progress)", at.format("%Y-%m-%d %H:%M:%S UTC")),
        (Some(at), false) => at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    };

    format!(
        "📊 Scanner status\n\
         Last scan: {}\n\
         Whales found: {}\n\
         Last error: {}\n\
         Thresholds: ${}+ held, {}+ days old",
        last_scan,
        status.last_count,
        status.last_error.as_deref().unwrap_or("none"),
        format_usd(thresholds.min_balance_usd),
        thresholds.min_wallet_age_days
    )
}
