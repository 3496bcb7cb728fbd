use std::sync::Arc;

use dotenv::dotenv;
use log::{error, info};
use teloxide::Bot;
use tokio::sync::watch;

use solana_whale_scanner::{
    clients::build_http_client,
    whale::monitor_stopped,
    AppConfig,
    ScanStatus,
    TelegramNotifier,
    WhaleBot,
    WhaleDetector,
    WhaleMonitor,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load_from_env()?;
    info!(
        "Loaded configuration: rpc={}, premium provider={}, pairs limit={}, poll interval={:?}",
        config.solana.rpc_url,
        config.solana.has_premium_provider(),
        config.discovery.pairs_limit,
        config.bot.poll_interval
    );

    let http_client = build_http_client(config.http_timeout)?;
    let detector = WhaleDetector::from_config(&config, http_client);

    let bot = Bot::new(&config.bot.token);
    let notifier = Arc::new(TelegramNotifier::new(bot.clone(), config.bot.recipient()));

    let (status_tx, status_rx) = watch::channel(ScanStatus::default());
    let monitor = WhaleMonitor::new(detector, notifier, config.bot.poll_interval, status_tx);

    info!("🤖 Bot started. Monitoring for Solana whales...");
    let monitor_task = tokio::spawn(monitor.run());
    let whale_bot = WhaleBot::new(bot, status_rx, config.whale.clone());

    tokio::select! {
        reason = monitor_stopped(monitor_task) => {
            error!("Scanning stopped, shutting down: {}", reason);
            return Err(reason.into());
        }
        _ = whale_bot.start() => info!("Dispatcher stopped"),
    }

    Ok(())
}
