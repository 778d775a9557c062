//! reqwest-backed [`HttpPort`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::Client;

use crate::infrastructure::ports::{ApiError, HttpPort, HttpResponse};

/// Default request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT_SECS)
    }

    /// Fails when the client cannot be built with the requested timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ApiError::transport("<client>", e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpPort for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::transport(url, e))?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(url, e))?;

        Ok(HttpResponse {
            status,
            retry_after,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_configured_timeout() {
        assert!(ReqwestHttpClient::with_timeout(5).is_ok());
        assert!(ReqwestHttpClient::new().is_ok());
    }
}
