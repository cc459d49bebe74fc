//! Runtime configuration.
//!
//! All content is fetched from a single base URL; everything else about the
//! application is static. Configuration comes from the environment with
//! builder-style overrides for tests.

/// Default origin the markdown project files are served from.
pub const DEFAULT_BASE_URL: &str = "https://frocha.net";

/// Environment variable overriding the content base URL.
pub const BASE_URL_ENV: &str = "FOLIO_BASE_URL";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Origin used to resolve `/assets/projects/<file>` fetches
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// Build the configuration from an optional base URL override.
    pub fn from_base_url_override(base_url: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url {
            let url = url.trim();
            if !url.is_empty() {
                config.base_url = url.trim_end_matches('/').to_string();
            }
        }
        config
    }

    /// Set the content base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
