//! HTTP client trait abstraction.
//!
//! The application only ever performs plain GET requests for static
//! resources, so the seam is a single-operation trait. Implementations are
//! the production reqwest adapter and a mock client for tests.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// HTTP response wrapper.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// Whether the response indicates success (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the response body as UTF-8 text.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Parse the response body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// HTTP client errors.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("HTTP error: {0}")]
    Other(String),
}

/// Trait for HTTP operations, enabling dependency injection and mocking.
///
/// # Example
///
/// ```ignore
/// use folio::traits::{HttpClient, HttpError};
///
/// async fn fetch_page(client: &dyn HttpClient) -> Result<String, HttpError> {
///     let response = client.get("https://frocha.net/assets/projects/x.md").await?;
///     response.text().map_err(|e| HttpError::Other(e.to_string()))
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, url: &str) -> Result<Response, HttpError>;
}
