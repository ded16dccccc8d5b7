//! Template catalog
//!
//! [`TemplateCatalog`] is built once, then read-only. Lookups are by template
//! name and locale; there is no default-language fallback.

use crate::{Locale, LocalizedTemplate, Result, TemplateError};
use std::collections::HashMap;

/// An immutable collection of localized templates keyed by name
///
/// # Examples
///
/// ```
/// use compare_templates::{Locale, LocalizedTemplate, TemplateCatalog};
/// use serde_json::json;
///
/// let catalog = TemplateCatalog::new()
///     .with(LocalizedTemplate::bilingual("unavailable", "No data for {{ a }}.", "{{ a }} 暂无数据。").unwrap());
///
/// let text = catalog.render("unavailable", Locale::English, &json!({ "a": "AAPL" })).unwrap();
/// assert_eq!(text, "No data for AAPL.");
/// assert!(catalog.missing(&["unavailable", "beta.comparable"]).len() == 2);
/// ```
#[derive(Default)]
pub struct TemplateCatalog {
    templates: HashMap<String, LocalizedTemplate>,
}

impl TemplateCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template, replacing any template with the same name
    pub fn with(mut self, template: LocalizedTemplate) -> Self {
        self.templates
            .insert(template.name().to_string(), template);
        self
    }

    /// Add many templates
    pub fn with_all(self, templates: impl IntoIterator<Item = LocalizedTemplate>) -> Self {
        templates.into_iter().fold(self, Self::with)
    }

    /// Look up a template by name
    pub fn get(&self, name: &str) -> Option<&LocalizedTemplate> {
        self.templates.get(name)
    }

    /// Whether a template is registered
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Render `name` in `locale`
    pub fn render(&self, name: &str, locale: Locale, vars: &serde_json::Value) -> Result<String> {
        self.get(name)
            .ok_or_else(|| TemplateError::NotRegistered(name.to_string()))?
            .render(locale, vars)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Every `(name, locale)` among `required` that cannot be rendered
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<(&'a str, Locale)> {
        let mut gaps = Vec::new();
        for &name in required {
            for locale in Locale::ALL {
                let present = self.get(name).is_some_and(|t| t.supports(locale));
                if !present {
                    gaps.push((name, locale));
                }
            }
        }
        gaps
    }

    /// Number of templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl std::fmt::Debug for TemplateCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateCatalog")
            .field("template_count", &self.len())
            .field("templates", &self.names())
            .finish()
    }
}
