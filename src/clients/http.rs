use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ScanError;

/// One client is shared by every collaborator so connection pools are reused.
pub fn build_http_client(timeout: Duration) -> Result<Client, ScanError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ScanError::ConfigError(format!("failed to build HTTP client: {}", e)))
}

/// Sends `request` and decodes a JSON body, mapping non-2xx statuses to
/// [`ScanError::HttpStatus`].
pub async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    endpoint: &str,
) -> Result<T, ScanError> {
    let response = request
        .send()
        .await
        .map_err(|e| ScanError::from_reqwest(endpoint, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScanError::HttpStatus {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ScanError::from_reqwest(endpoint, e))
}
