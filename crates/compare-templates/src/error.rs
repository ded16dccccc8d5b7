//! Error types for template operations

use thiserror::Error;

/// Result type for template operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while building or rendering templates
#[derive(Error, Debug)]
pub enum TemplateError {
    /// No template registered under this name
    #[error("Template '{0}' not registered")]
    NotRegistered(String),

    /// Template exists but has no variant for the locale
    #[error("Template '{name}' has no variant for locale '{locale}'")]
    MissingLocale { name: String, locale: String },

    /// Template source failed to parse
    #[error("Failed to parse template '{name}' for locale '{locale}': {detail}")]
    ParseFailed {
        name: String,
        locale: String,
        detail: String,
    },

    /// Rendering failed, usually an undefined variable
    #[error("Failed to render template '{name}': {detail}")]
    RenderFailed { name: String, detail: String },

    /// Builder finished without any locale variant
    #[error("No locale variants provided for '{0}'")]
    NoVariants(String),

    /// Locale code not published by the site
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}
