//! Client configuration.
//!
//! This module defines the settings used to reach the generation service.

use std::time::Duration;

use crate::auth::ApiKey;

/// Default service location.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default bound on establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding [`ClientConfig::base_url`].
pub const ENV_API_URL: &str = "TIL_API_URL";

/// Environment variable supplying [`ClientConfig::api_key`].
pub const ENV_API_KEY: &str = "TIL_API_KEY";

/// Environment variable overriding [`ClientConfig::connect_timeout`], in seconds.
pub const ENV_CONNECT_TIMEOUT: &str = "TIL_CONNECT_TIMEOUT_SECS";

/// Configuration for talking to the generation service.
///
/// Use the builder pattern to customize it.
///
/// # Example
///
/// ```ignore
/// use til_draft::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_base_url("https://til.example.com/")
///     .with_connect_timeout(std::time::Duration::from_secs(5));
/// assert_eq!(config.base_url, "https://til.example.com");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Service base URL, without trailing slash
    pub base_url: String,
    /// Key from the environment; takes precedence over stored credentials
    pub api_key: Option<ApiKey>,
    /// Connection setup timeout (the stream itself is unbounded)
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL. Trailing slashes are removed.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Create config from `TIL_API_URL`, `TIL_API_KEY` and `TIL_CONNECT_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }

        if let Some(key) = lookup(ENV_API_KEY).and_then(ApiKey::new) {
            config = config.with_api_key(key);
        }

        if let Some(raw) = lookup(ENV_CONNECT_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config = config.with_connect_timeout(Duration::from_secs(secs));
                }
                _ => {
                    tracing::warn!(
                        "Ignoring invalid {}={:?}, using {}s",
                        ENV_CONNECT_TIMEOUT,
                        raw,
                        DEFAULT_CONNECT_TIMEOUT.as_secs()
                    );
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.api_key.is_none());
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_builder_trims_trailing_slashes() {
        let config = ClientConfig::new().with_base_url("https://til.example.com//");
        assert_eq!(config.base_url, "https://til.example.com");
    }

    #[test]
    fn test_from_vars() {
        let config = ClientConfig::from_vars(lookup(&[
            (ENV_API_URL, "https://api.example.com/"),
            (ENV_API_KEY, "  k-123  "),
            (ENV_CONNECT_TIMEOUT, "3"),
        ]));

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.api_key.unwrap().expose(), "k-123");
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ClientConfig::from_vars(lookup(&[
            (ENV_API_URL, "   "),
            (ENV_API_KEY, ""),
            (ENV_CONNECT_TIMEOUT, "soon"),
        ]));
        assert_eq!(config, ClientConfig::default());

        let config = ClientConfig::from_vars(lookup(&[(ENV_CONNECT_TIMEOUT, "0")]));
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var(ENV_API_URL, "http://127.0.0.1:9000/");
        std::env::set_var(ENV_API_KEY, "env-key");
        std::env::remove_var(ENV_CONNECT_TIMEOUT);

        let config = ClientConfig::from_env();

        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_API_KEY);

        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.api_key.unwrap().expose(), "env-key");
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    }

    #[test]
    #[serial]
    fn test_from_env_empty() {
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_API_KEY);
        std::env::remove_var(ENV_CONNECT_TIMEOUT);

        assert_eq!(ClientConfig::from_env(), ClientConfig::default());
    }
}
