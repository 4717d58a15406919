// Process configuration, sourced from the environment at startup.

use std::fmt;

use thiserror::Error;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_KAGGLE_BASE_URL: &str = "https://www.kaggle.com/api/v1";

/// Static credential pair used to authenticate every Kaggle call.
///
/// The key never appears in source or logs; it is read from the environment
/// and redacted from `Debug` output.
#[derive(Clone)]
pub struct KaggleCredentials {
    pub username: String,
    pub api_key: String,
}

impl fmt::Debug for KaggleCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KaggleCredentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub kaggle_base_url: String,
    pub credentials: KaggleCredentials,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// `KAGGLE_USERNAME` and `KAGGLE_KEY` are required; `FXMINER_ADDR` and
    /// `KAGGLE_BASE_URL` fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Lets tests supply variables without mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let username =
            lookup("KAGGLE_USERNAME").ok_or(ConfigError::MissingVar("KAGGLE_USERNAME"))?;
        let api_key = lookup("KAGGLE_KEY").ok_or(ConfigError::MissingVar("KAGGLE_KEY"))?;

        Ok(Self {
            listen_addr: lookup("FXMINER_ADDR")
                .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            kaggle_base_url: lookup("KAGGLE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_KAGGLE_BASE_URL.to_string()),
            credentials: KaggleCredentials { username, api_key },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn loads_with_defaults_when_only_credentials_are_set() {
        let config = Config::from_lookup(lookup_from(&[
            ("KAGGLE_USERNAME", "demo-user"),
            ("KAGGLE_KEY", "demo-key"),
        ]))
        .unwrap();

        assert_eq!(config.credentials.username, "demo-user");
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.kaggle_base_url, DEFAULT_KAGGLE_BASE_URL);
    }

    #[test]
    fn overrides_take_precedence() {
        let config = Config::from_lookup(lookup_from(&[
            ("KAGGLE_USERNAME", "demo-user"),
            ("KAGGLE_KEY", "demo-key"),
            ("FXMINER_ADDR", "127.0.0.1:8080"),
            ("KAGGLE_BASE_URL", "http://127.0.0.1:9/api/v1"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.kaggle_base_url, "http://127.0.0.1:9/api/v1");
    }

    #[test]
    fn missing_credentials_fail_fast() {
        let err = Config::from_lookup(lookup_from(&[("KAGGLE_USERNAME", "demo-user")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("KAGGLE_KEY")));
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let creds = KaggleCredentials {
            username: "demo-user".to_string(),
            api_key: "super-secret".to_string(),
        };
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("demo-user"));
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("super-secret"));
    }
}
