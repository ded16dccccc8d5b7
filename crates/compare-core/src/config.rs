//! Configuration for comparison pages
//!
//! Configuration is built once and handed to the metric client explicitly.
//! Nothing below this layer reads the process environment.

use crate::error::{CompareError, Result};
use compare_templates::Locale;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the Financial Modeling Prep API key
pub const API_KEY_ENV: &str = "FINANCIAL_MODELING_PREP_API_KEY";

/// Default Financial Modeling Prep endpoint root
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/stable";

/// Configuration for comparison pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Financial Modeling Prep API key
    pub api_key: Option<String>,

    /// Endpoint root, without trailing slash
    pub base_url: String,

    /// Transport timeout for a single request
    pub request_timeout: Duration,

    /// Locale used when the caller does not pick one
    pub default_locale: Locale,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            default_locale: Locale::English,
        }
    }
}

impl CompareConfig {
    /// Create a new configuration builder
    pub fn builder() -> CompareConfigBuilder {
        CompareConfigBuilder::default()
    }

    /// Load the API key from [`API_KEY_ENV`] if it is set
    pub fn with_env_api_key(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(CompareError::ConfigError(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(CompareError::ConfigError(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        if self.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            return Err(CompareError::ConfigError("api_key is empty".to_string()));
        }

        Ok(())
    }

    /// API key, or a configuration error naming the variable to set
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            CompareError::ConfigError(format!(
                "Financial Modeling Prep API key missing; set {API_KEY_ENV}"
            ))
        })
    }
}

/// Builder for CompareConfig
#[derive(Debug, Default)]
pub struct CompareConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    request_timeout: Option<Duration>,
    default_locale: Option<Locale>,
}

impl CompareConfigBuilder {
    /// Set the API key
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the endpoint root
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the default locale
    pub fn default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = Some(locale);
        self
    }

    /// Load the API key from [`API_KEY_ENV`] unless one was set explicitly
    pub fn with_env_api_key(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = std::env::var(API_KEY_ENV).ok();
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<CompareConfig> {
        let defaults = CompareConfig::default();

        let config = CompareConfig {
            api_key: self.api_key,
            base_url: self
                .base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            default_locale: self.default_locale.unwrap_or(defaults.default_locale),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompareConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = CompareConfig::builder()
            .api_key("demo")
            .base_url("http://localhost:8080/stable/")
            .request_timeout(Duration::from_secs(5))
            .default_locale(Locale::Chinese)
            .build()
            .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/stable");
        assert_eq!(config.require_api_key().unwrap(), "demo");
        assert_eq!(config.default_locale, Locale::Chinese);
    }

    #[test]
    fn test_validation_bad_url() {
        let result = CompareConfig::builder().base_url("ftp://example.com").build();
        assert!(matches!(result, Err(CompareError::ConfigError(_))));
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = CompareConfig {
            request_timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_blank_key() {
        let config = CompareConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_api_key() {
        let err = CompareConfig::default().require_api_key().unwrap_err();
        assert!(err.to_string().contains(API_KEY_ENV));
    }
}
