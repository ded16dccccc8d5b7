//! Site locales
//!
//! Every commentary template exists once per [`Locale`]. The set is closed so
//! the catalog can be checked for completeness at startup and in tests.

use crate::{Result, TemplateError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locales the site publishes in
///
/// # Examples
///
/// ```
/// use compare_templates::Locale;
///
/// let locale: Locale = "zh-CN".parse().unwrap();
/// assert_eq!(locale, Locale::Chinese);
/// assert_eq!(locale.code(), "zh");
/// assert!("ja".parse::<Locale>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (`/en` pages)
    #[default]
    English,
    /// Chinese, Simplified (`/zh` pages)
    Chinese,
}

impl Locale {
    /// All supported locales, in publishing order
    pub const ALL: [Locale; 2] = [Locale::English, Locale::Chinese];

    /// URL path segment / ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Chinese => "zh",
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Chinese => "Chinese",
        }
    }

    /// Parse a locale code or common name
    ///
    /// Region suffixes are ignored (`en-US`, `zh-Hans`).
    pub fn from_code(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        let primary = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or_default();

        match primary {
            "en" | "english" => Ok(Locale::English),
            "zh" | "chinese" | "中文" => Ok(Locale::Chinese),
            _ => Err(TemplateError::UnsupportedLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Locale {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_code(s)
    }
}
