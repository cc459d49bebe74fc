//! Reqwest-based HTTP client adapter.

use async_trait::async_trait;

use crate::traits::{HttpClient, HttpError, Response};

/// Production [`HttpClient`] implementation backed by `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a pre-configured `reqwest::Client` (custom timeouts, TLS, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::new(status, body))
    }
}
