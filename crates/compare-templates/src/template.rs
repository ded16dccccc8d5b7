//! MiniJinja-backed localized template
//!
//! A [`LocalizedTemplate`] holds one source string per [`Locale`]. Rendering
//! uses strict undefined handling, so a variable missing from the context is
//! an error instead of silently empty text.

use crate::{Locale, Result, TemplateError};
use minijinja::{Environment, UndefinedBehavior};
use std::collections::HashMap;

/// A named template with per-locale variants
///
/// # Examples
///
/// ```
/// use compare_templates::{Locale, LocalizedTemplate};
/// use serde_json::json;
///
/// let template = LocalizedTemplate::bilingual(
///     "beta.comparable",
///     "{{ a }} and {{ b }} move alike.",
///     "{{ a }} 与 {{ b }} 走势相近。",
/// ).unwrap();
///
/// let zh = template.render(Locale::Chinese, &json!({ "a": "AAPL", "b": "TSLA" })).unwrap();
/// assert_eq!(zh, "AAPL 与 TSLA 走势相近。");
/// ```
pub struct LocalizedTemplate {
    name: String,
    variants: HashMap<Locale, String>,
}

impl LocalizedTemplate {
    /// Start a builder for a template
    pub fn builder(name: impl Into<String>) -> LocalizedTemplateBuilder {
        LocalizedTemplateBuilder::new(name)
    }

    /// Create with English and Chinese variants
    pub fn bilingual(
        name: impl Into<String>,
        english: impl Into<String>,
        chinese: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(name).english(english).chinese(chinese).build()
    }

    /// Template name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Locales with a variant
    pub fn locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.variants.contains_key(locale))
            .collect()
    }

    /// Whether a variant exists for `locale`
    pub fn supports(&self, locale: Locale) -> bool {
        self.variants.contains_key(&locale)
    }

    /// Raw source for a locale
    pub fn source(&self, locale: Locale) -> Option<&str> {
        self.variants.get(&locale).map(String::as_str)
    }

    /// Render the variant for `locale` with `vars`
    ///
    /// There is no fallback: a missing variant is reported, never replaced by
    /// another language.
    pub fn render(&self, locale: Locale, vars: &serde_json::Value) -> Result<String> {
        let source = self
            .variants
            .get(&locale)
            .ok_or_else(|| TemplateError::MissingLocale {
                name: self.name.clone(),
                locale: locale.code().to_string(),
            })?;

        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let value = minijinja::Value::from_serialize(vars);

        env.render_str(source, value)
            .map_err(|e| TemplateError::RenderFailed {
                name: self.name.clone(),
                detail: e.to_string(),
            })
    }
}

impl std::fmt::Debug for LocalizedTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalizedTemplate")
            .field("name", &self.name)
            .field("locales", &self.locales())
            .finish()
    }
}

/// Builder for [`LocalizedTemplate`]
pub struct LocalizedTemplateBuilder {
    name: String,
    variants: HashMap<Locale, String>,
}

impl LocalizedTemplateBuilder {
    /// Create a builder with the given template name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: HashMap::new(),
        }
    }

    /// Add a variant for a locale
    pub fn variant(mut self, locale: Locale, source: impl Into<String>) -> Self {
        self.variants.insert(locale, source.into());
        self
    }

    /// Add English variant
    pub fn english(self, source: impl Into<String>) -> Self {
        self.variant(Locale::English, source)
    }

    /// Add Chinese variant
    pub fn chinese(self, source: impl Into<String>) -> Self {
        self.variant(Locale::Chinese, source)
    }

    /// Build the template, checking that every variant parses
    pub fn build(self) -> Result<LocalizedTemplate> {
        if self.variants.is_empty() {
            return Err(TemplateError::NoVariants(self.name));
        }

        let env = Environment::new();
        for (locale, source) in &self.variants {
            env.template_from_str(source)
                .map_err(|e| TemplateError::ParseFailed {
                    name: self.name.clone(),
                    locale: locale.code().to_string(),
                    detail: e.to_string(),
                })?;
        }

        Ok(LocalizedTemplate {
            name: self.name,
            variants: self.variants,
        })
    }
}
