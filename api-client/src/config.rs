// Gateway configuration

use std::env;

/// Origin used when `API_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Prefix every backend route lives under
pub const API_PREFIX: &str = "/api";

/// Where the backend is reached
///
/// On wasm32 the transport needs an absolute URL, so pass the page origin
/// (`window.location.origin`) to [`GatewayConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: String,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the origin from `API_BASE_URL`, falling back to [`DEFAULT_BASE_URL`]
    pub fn from_env() -> Self {
        Self::new(env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a backend route, `path` starting with `/`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
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
    fn test_api_url() {
        let config = GatewayConfig::new("http://example.com");
        assert_eq!(config.api_url("/prompts"), "http://example.com/api/prompts");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = GatewayConfig::new("http://example.com//");
        assert_eq!(config.base_url(), "http://example.com");
        assert_eq!(config.api_url("/history"), "http://example.com/api/history");
    }

    #[test]
    fn test_default() {
        assert_eq!(GatewayConfig::default().base_url(), DEFAULT_BASE_URL);
    }
}
