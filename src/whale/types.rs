use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A wallet that passed both thresholds during one scan.
#[derive(Clone, Debug, PartialEq)]
pub struct QualifiedWhale {
    pub address: String,
    pub balance_usd: Decimal,
    pub age_days: u64,
}

impl QualifiedWhale {
    pub fn is_super_whale(&self, threshold: Decimal) -> bool {
        self.balance_usd >= threshold
    }
}

/// Outcome of the latest scan cycle, replaced wholesale on every write.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanStatus {
    pub last_scan: Option<DateTime<Utc>>,
    pub last_count: usize,
    pub last_error: Option<String>,
    pub in_progress: bool,
}

impl ScanStatus {
    pub fn started(at: DateTime<Utc>) -> Self {
        Self {
            last_scan: Some(at),
            last_count: 0,
            last_error: None,
            in_progress: true,
        }
    }

    pub fn completed(at: DateTime<Utc>, count: usize) -> Self {
        Self {
            last_scan: Some(at),
            last_count: count,
            last_error: None,
            in_progress: false,
        }
    }

    pub fn failed(at: DateTime<Utc>, error: String) -> Self {
        Self {
            last_scan: Some(at),
            last_count: 0,
            last_error: Some(error),
            in_progress: false,
        }
    }
}
