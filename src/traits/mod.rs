//! Trait abstractions for external effects.

mod http;

pub use http::{HttpClient, HttpError, Response};
