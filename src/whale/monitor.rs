use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use log::{error, info};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::{detector::WhaleDetector, types::ScanStatus};
use crate::bot::notifier::{format_whale_alert, Notifier};

/// Periodic scan loop. Owns the only writer of [`ScanStatus`]; scans run back
/// to back, so at most one is ever in flight.
pub struct WhaleMonitor {
    detector: WhaleDetector,
    notifier: Arc<dyn Notifier>,
    poll_interval: Duration,
    status: watch::Sender<ScanStatus>,
}

impl WhaleMonitor {
    pub fn new(
        detector: WhaleDetector,
        notifier: Arc<dyn Notifier>,
        poll_interval: Duration,
        status: watch::Sender<ScanStatus>,
    ) -> Self {
        Self {
            detector,
            notifier,
            poll_interval,
            status,
        }
    }

    pub async fn run(self) {
        info!(
            "Whale monitor started, scanning every {:?}",
            self.poll_interval
        );
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// One scan plus notifications. Failures are recorded, never raised.
    pub async fn run_cycle(&self) -> ScanStatus {
        let started = Utc::now();
        self.status.send_replace(ScanStatus::started(started));
        info!("Starting whale scan");

        let status = match self.detector.find_whales().await {
            Ok(whales) => {
                let super_threshold = self.detector.config().super_whale_usd;
                for whale in &whales {
                    let message = format_whale_alert(whale, super_threshold);
                    if let Err(e) = self.notifier.notify(&message).await {
                        error!("Failed to report whale {}: {}", whale.address, e);
                    }
                }
                ScanStatus::completed(started, whales.len())
            }
            Err(e) => {
                error!("Error while fetching whales: {}", e);
                ScanStatus::failed(started, e.to_string())
            }
        };

        self.status.send_replace(status.clone());
        status
    }
}

/// Resolves once the spawned scan loop stops, describing why. The loop never
/// returns by itself, so this only fires on a panic or an abort.
pub async fn monitor_stopped(task: JoinHandle<()>) -> String {
    match task.await {
        Ok(()) => "whale monitor returned".to_string(),
        Err(e) if e.is_panic() => format!("whale monitor panicked: {}", e),
        Err(e) => format!("whale monitor cancelled: {}", e),
    }
}
