//! Remote endpoint configuration

use std::time::Duration;

/// Environment variable holding the content store's API base URL
pub const BASE_URL_ENV: &str = "STRAPI_BASE_URL";

/// Local development address used when [`BASE_URL_ENV`] is unset
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337/api";

/// Default transport timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach the remote content store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// API base URL, e.g. `http://localhost:1337/api`
    pub base_url: String,
    /// Per-request timeout applied by the HTTP transport
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read [`BASE_URL_ENV`] now, falling back to [`DEFAULT_BASE_URL`]
    pub fn from_env() -> Self {
        Self::from_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    /// Use `base_url` if it is set and non-empty, else the default
    pub fn from_base_url(base_url: Option<String>) -> Self {
        match base_url {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Collection endpoint entries are posted to
    pub fn journals_url(&self) -> String {
        format!("{}/journals", self.base_url.trim_end_matches('/'))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = GatewayConfig::from_base_url(None);
        assert_eq!(config.journals_url(), "http://localhost:1337/api/journals");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_configured_endpoint() {
        let config = GatewayConfig::from_base_url(Some("https://cms.example.com/api".into()));
        assert_eq!(config.journals_url(), "https://cms.example.com/api/journals");

        let trailing = GatewayConfig::new("https://cms.example.com/api/");
        assert_eq!(trailing.journals_url(), "https://cms.example.com/api/journals");
    }

    #[test]
    fn test_empty_value_falls_back() {
        let config = GatewayConfig::from_base_url(Some(String::new()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
