//! Client configuration.
//!
//! The endpoint path is fixed; only the server it lives on can change.

/// Server used when nothing else is configured
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Environment variable the binaries read the server from
pub const SERVER_URL_ENV: &str = "VERDICT_SERVER_URL";

/// Classification endpoint on the server
pub const PREDICT_PATH: &str = "/predict";

/// Current application version (from Cargo.toml)
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and optional port (and path prefix) of the classifier
    pub server_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(DEFAULT_SERVER_URL)
    }
}

impl ClientConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        ClientConfig {
            server_url: server_url.into(),
            user_agent: format!("Verdict/{}", CURRENT_VERSION),
        }
    }

    /// Read [`SERVER_URL_ENV`], falling back to [`DEFAULT_SERVER_URL`]
    pub fn from_env() -> Self {
        ClientConfig::from_server_value(std::env::var(SERVER_URL_ENV).ok().as_deref())
    }

    /// Blank or missing values fall back to [`DEFAULT_SERVER_URL`]
    fn from_server_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => ClientConfig::new(url),
            _ => ClientConfig::default(),
        }
    }

    /// Full URL of the classification endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.server_url.trim_end_matches('/'), PREDICT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(ClientConfig::default().endpoint(), "http://127.0.0.1:8000/predict");
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(
            ClientConfig::new("https://scan.example.com/").endpoint(),
            "https://scan.example.com/predict"
        );
        assert_eq!(
            ClientConfig::new("https://example.com/api").endpoint(),
            "https://example.com/api/predict"
        );
    }

    #[test]
    fn test_blank_server_value_uses_default() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            assert_eq!(ClientConfig::from_server_value(value), ClientConfig::default());
        }
    }

    #[test]
    fn test_server_value_is_trimmed() {
        let config = ClientConfig::from_server_value(Some("  http://10.0.0.5:9000/ \n"));
        assert_eq!(config.server_url, "http://10.0.0.5:9000/");
        assert_eq!(config.endpoint(), "http://10.0.0.5:9000/predict");
    }

    #[test]
    fn test_user_agent_carries_version() {
        let config = ClientConfig::default();
        assert!(config.user_agent.starts_with("Verdict/"));
        assert!(config.user_agent.ends_with(CURRENT_VERSION));
    }
}
