//! External service ports.

use async_trait::async_trait;

use super::error::ApiError;

/// Raw HTTP response as seen by the retry layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// `retry-after` header, if the server sent one
    pub retry_after: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            retry_after: None,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpPort: Send + Sync {
    /// Issue a GET. Only transport failures are errors; every status is a response.
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;
}
