use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unexpected HTTP status {status} from {endpoint}")]
    HttpStatus {
        endpoint: String,
        status: u16,
    },

    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse {
        endpoint: String,
        reason: String,
    },

    #[error("No data: {0}")]
    NoData(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Notification failed: {0}")]
    NotifyError(String),

    #[error("Failed to resolve wallet {address}: {source}")]
    WalletResolution {
        address: String,
        #[source]
        source: Box<ScanError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Status,
    Malformed,
    Absent,
    Config,
    Notify,
}

impl ScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::NetworkError(_) => ErrorKind::Transport,
            ScanError::HttpStatus { .. } => ErrorKind::Status,
            ScanError::MalformedResponse { .. } => ErrorKind::Malformed,
            ScanError::NoData(_) => ErrorKind::Absent,
            ScanError::ConfigError(_) => ErrorKind::Config,
            ScanError::NotifyError(_) => ErrorKind::Notify,
            ScanError::WalletResolution { source, .. } => source.kind(),
        }
    }

    /// Wraps a reqwest failure, keeping decode errors apart from transport ones.
    /// The URL is stripped so query-string credentials never reach the logs.
    pub fn from_reqwest(endpoint: &str, error: reqwest::Error) -> Self {
        let error = error.without_url();
        if error.is_decode() {
            ScanError::MalformedResponse {
                endpoint: endpoint.to_string(),
                reason: error.to_string(),
            }
        } else {
            ScanError::NetworkError(format!("{}: {}", endpoint, error))
        }
    }

    pub fn for_wallet(self, address: &str) -> Self {
        ScanError::WalletResolution {
            address: address.to_string(),
            source: Box::new(self),
        }
    }
}
