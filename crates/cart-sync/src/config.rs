//! Cart Configuration
//!
//! Where the remote collection lives and how the error slot behaves.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

/// Remote collection used when no base URL is configured at build time
pub const DEFAULT_API_BASE: &str = "https://caff9bf99d1aee1ab862.free.beeceptor.com/api/users/";

/// What a successful operation does to a previously recorded error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Any successful settlement clears `last_error`
    #[default]
    ClearOnSuccess,
    /// `last_error` is only replaced by another failure (or dismissed)
    Sticky,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "CartConfigFile")]
pub struct CartConfig {
    pub api_base: Url,
    pub error_policy: ErrorPolicy,
}

/// Unvalidated shape used for deserialization
#[derive(Deserialize)]
struct CartConfigFile {
    api_base: String,
    #[serde(default)]
    error_policy: ErrorPolicy,
}

impl TryFrom<CartConfigFile> for CartConfig {
    type Error = ConfigError;

    fn try_from(file: CartConfigFile) -> Result<Self, Self::Error> {
        Ok(Self::new(&file.api_base)?.with_error_policy(file.error_policy))
    }
}

impl CartConfig {
    /// Validate `api_base` and build a config with the default error policy
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(api_base).map_err(|source| ConfigError::InvalidBaseUrl {
            url: api_base.to_string(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(Self {
            api_base: url,
            error_policy: ErrorPolicy::default(),
        })
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Config baked in at compile time.
    ///
    /// The page has no process environment, so `MARKETPLACE_API_BASE` is read
    /// when the crate is built.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("MARKETPLACE_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_is_valid() {
        let config = CartConfig::new(DEFAULT_API_BASE).unwrap();
        assert_eq!(config.api_base.scheme(), "https");
        assert_eq!(config.error_policy, ErrorPolicy::ClearOnSuccess);
    }

    #[test]
    fn test_rejects_relative_url() {
        let err = CartConfig::new("/api/users/").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = CartConfig::new("ftp://example.com/cart").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(ref s) if s == "ftp"));
    }

    #[test]
    fn test_deserialize_validates() {
        let config: CartConfig = serde_json::from_str(
            r#"{"api_base":"http://localhost:3000/cart","error_policy":"sticky"}"#,
        )
        .unwrap();
        assert_eq!(config.api_base.as_str(), "http://localhost:3000/cart");
        assert_eq!(config.error_policy, ErrorPolicy::Sticky);

        let defaulted: CartConfig =
            serde_json::from_str(r#"{"api_base":"http://localhost:3000/cart"}"#).unwrap();
        assert_eq!(defaulted.error_policy, ErrorPolicy::ClearOnSuccess);

        assert!(serde_json::from_str::<CartConfig>(r#"{"api_base":"not a url"}"#).is_err());
    }
}
