//! Error types for comparison operations

use compare_templates::TemplateError;
use thiserror::Error;

/// Errors raised while fetching metrics or generating commentary
#[derive(Debug, Error)]
pub enum CompareError {
    /// Metric provider answered with an error payload
    #[error("API error: {0}")]
    ApiError(String),

    /// Ticker symbol failed validation
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// A metric value was NaN or infinite
    #[error("Invalid value for {metric}: {value}")]
    InvalidMetric { metric: String, value: f64 },

    /// Data missing, empty or malformed for the requested symbol
    #[error("Data not available for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Missing or broken template; always a programming error
    #[error("Template error: {0}")]
    TemplateError(#[from] TemplateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CompareError {
    /// Shorthand for [`CompareError::DataUnavailable`]
    pub fn unavailable(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for comparison operations
pub type Result<T> = std::result::Result<T, CompareError>;
