//! Concrete implementations of the external-effect traits.

pub mod mock;
mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
