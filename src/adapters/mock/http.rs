//! Mock HTTP client for testing.
//!
//! Returns canned responses per URL and records every request so tests can
//! assert which fetches were (or were not) attempted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Response};

/// Canned behavior for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

/// Configurable mock [`HttpClient`].
///
/// # Example
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "https://frocha.net/assets/projects/x.md",
///     MockResponse::Success(Response::new(200, Bytes::from("# Hi"))),
/// );
/// let response = client.get("https://frocha.net/assets/projects/x.md").await?;
/// assert_eq!(client.request_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockHttpClient {
    /// Create a mock client with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response for an exact URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// Configure the response used when no exact URL matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(url.to_string());

        let canned = self
            .responses
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .or_else(|| self.default_response.lock().unwrap().clone());

        match canned {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock response for {}", url))),
        }
    }
}
