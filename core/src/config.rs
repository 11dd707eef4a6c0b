//! Gateway configuration.

use std::time::Duration;

/// Fallback used when `PUBLIC_API_BASE_URL` is unset or empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "PUBLIC_API_BASE_URL";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Sent with every request.
    pub default_headers: Vec<(String, String)>,
    /// Emit request/response diagnostics. Defaults to on in debug builds.
    pub dev_mode: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_headers: vec![("content-type".to_string(), "application/json".to_string())],
            dev_mode: cfg!(debug_assertions),
        }
    }
}

impl GatewayConfig {
    /// Defaults with the base URL taken from `PUBLIC_API_BASE_URL`.
    pub fn from_env() -> Self {
        Self::default().with_base_url_override(std::env::var(BASE_URL_ENV).ok())
    }

    /// Replace the base URL when `url` is present and non-empty.
    pub fn with_base_url_override(self, url: Option<String>) -> Self {
        match url {
            Some(url) if !url.trim().is_empty() => self.with_base_url(url),
            _ => self,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }
}
