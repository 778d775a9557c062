//! JSON GET with bounded retry on HTTP 429.
//!
//! A rate-limited request waits for the server's `retry-after` (seconds,
//! 1 when absent or unreadable) and tries again, up to `max_retries` times.
//! Every other failure is returned straight away.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::infrastructure::ports::{ApiError, HttpPort};

pub const TOO_MANY_REQUESTS: u16 = 429;

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retries after the initial attempt
    pub max_retries: u32,
    /// Delay used when `retry-after` is missing or unparseable
    pub default_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            default_delay_secs: 1,
        }
    }
}

#[derive(Clone)]
pub struct ApiService {
    http: Arc<dyn HttpPort>,
    config: RetryConfig,
}

impl ApiService {
    pub fn new(http: Arc<dyn HttpPort>, config: RetryConfig) -> Self {
        Self { http, config }
    }

    fn retry_delay(&self, retry_after: Option<&str>) -> Duration {
        retry_after
            .and_then(|v| v.trim().parse::<f64>().ok())
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
            .unwrap_or_else(|| Duration::from_secs(self.config.default_delay_secs))
    }

    /// GET `url` and parse the body as `T`.
    pub async fn call_endpoint<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        for attempt in 0..=self.config.max_retries {
            let response = self.http.get(url).await?;

            if response.is_success() {
                if attempt > 0 {
                    tracing::info!(url, attempt = attempt + 1, "Request succeeded after retry");
                }
                return serde_json::from_str(&response.body)
                    .map_err(|e| ApiError::invalid_response(url, e));
            }

            if response.status != TOO_MANY_REQUESTS {
                return Err(ApiError::Status {
                    status: response.status,
                    url: url.to_string(),
                });
            }

            if attempt < self.config.max_retries {
                let delay = self.retry_delay(response.retry_after.as_deref());
                tracing::warn!(
                    url,
                    attempt = attempt + 1,
                    max_retries = self.config.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    "Rate limited, retrying..."
                );
                tokio::time::sleep(delay).await;
            }
        }

        let attempts = self.config.max_retries + 1;
        tracing::error!(url, attempts, "Request still rate limited after all retry attempts");
        Err(ApiError::TooManyRetries {
            attempts,
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{HttpResponse, MockHttpPort};
    use mockall::Sequence;

    const URL: &str = "https://www.dnd5eapi.co/api/races";

    fn rate_limited() -> HttpResponse {
        HttpResponse {
            status: 429,
            retry_after: Some("0".to_string()),
            body: String::new(),
        }
    }

    fn service(http: MockHttpPort) -> ApiService {
        ApiService::new(Arc::new(http), RetryConfig::default())
    }

    #[tokio::test]
    async fn success_returns_parsed_body() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .times(1)
            .returning(|_| Ok(HttpResponse::ok(r#"{"count": 1}"#)));

        let value: serde_json::Value = service(http).call_endpoint(URL).await.unwrap();
        assert_eq!(value["count"], 1);
    }

    #[tokio::test]
    async fn persistent_429_stops_after_six_attempts() {
        let mut http = MockHttpPort::new();
        http.expect_get().times(6).returning(|_| Ok(rate_limited()));

        let result: Result<serde_json::Value, _> = service(http).call_endpoint(URL).await;
        assert!(matches!(
            result,
            Err(ApiError::TooManyRetries { attempts: 6, .. })
        ));
    }

    #[tokio::test]
    async fn recovers_when_rate_limit_lifts() {
        let mut http = MockHttpPort::new();
        let mut seq = Sequence::new();
        http.expect_get()
            .times(3)
            .in_sequence(&mut seq)
            .returning(|_| Ok(rate_limited()));
        http.expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(HttpResponse::ok(r#"{"count": 4}"#)));

        let value: serde_json::Value = service(http).call_endpoint(URL).await.unwrap();
        assert_eq!(value["count"], 4);
    }

    #[tokio::test]
    async fn other_status_fails_without_retry() {
        let mut http = MockHttpPort::new();
        http.expect_get().times(1).returning(|_| {
            Ok(HttpResponse {
                status: 503,
                retry_after: None,
                body: String::new(),
            })
        });

        let result: Result<serde_json::Value, _> = service(http).call_endpoint(URL).await;
        assert!(matches!(result, Err(ApiError::Status { status: 503, .. })));
    }

    #[tokio::test]
    async fn transport_error_is_not_retried() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .times(1)
            .returning(|url| Err(ApiError::transport(url, "connection refused")));

        let result: Result<serde_json::Value, _> = service(http).call_endpoint(URL).await;
        assert!(matches!(result, Err(ApiError::Transport { .. })));
    }

    #[tokio::test]
    async fn unparseable_body_is_invalid_response() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .times(1)
            .returning(|_| Ok(HttpResponse::ok("<html>")));

        let result: Result<serde_json::Value, _> = service(http).call_endpoint(URL).await;
        assert!(matches!(result, Err(ApiError::InvalidResponse { .. })));
    }

    #[test]
    fn retry_delay_falls_back_to_default() {
        let api = service(MockHttpPort::new());
        assert_eq!(api.retry_delay(None), Duration::from_secs(1));
        assert_eq!(api.retry_delay(Some("soon")), Duration::from_secs(1));
        assert_eq!(api.retry_delay(Some("-3")), Duration::from_secs(1));
        assert_eq!(api.retry_delay(Some(" 2 ")), Duration::from_secs(2));
        assert_eq!(api.retry_delay(Some("NaN")), Duration::from_secs(1));
    }

    #[test]
    fn oversized_retry_after_uses_default_delay() {
        let api = service(MockHttpPort::new());
        assert_eq!(api.retry_delay(Some("1e30")), Duration::from_secs(1));
        assert_eq!(api.retry_delay(Some("inf")), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn oversized_retry_after_still_retries() {
        let mut http = MockHttpPort::new();
        let mut seq = Sequence::new();
        http.expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(HttpResponse {
                    status: TOO_MANY_REQUESTS,
                    retry_after: Some("1e30".into()),
                    body: String::new(),
                })
            });
        http.expect_get()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(HttpResponse::ok(r#"{"count": 0, "results": []}"#)));

        let api = ApiService::new(
            Arc::new(http),
            RetryConfig {
                default_delay_secs: 0,
                ..RetryConfig::default()
            },
        );
        let result: serde_json::Value = api.call_endpoint(URL).await.unwrap();
        assert_eq!(result["count"], 0);
    }
}
