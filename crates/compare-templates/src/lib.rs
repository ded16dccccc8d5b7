//! Locale-indexed commentary templates for stock-compare
//!
//! This crate holds the text side of the commentary generator: the closed set
//! of site [`Locale`]s, MiniJinja-backed [`LocalizedTemplate`]s with one
//! variant per locale, and an immutable [`TemplateCatalog`] that the core crate
//! fills with its built-in sentences.
//!
//! Classification never happens here. Callers decide *which* template to use;
//! this crate only interpolates already-formatted values.
//!
//! # Quick Start
//!
//! ```
//! use compare_templates::{Locale, LocalizedTemplate, TemplateCatalog};
//! use serde_json::json;
//!
//! let catalog = TemplateCatalog::new().with(
//!     LocalizedTemplate::bilingual(
//!         "market_cap.comparable",
//!         "{{ a }} and {{ b }} have comparable market capitalizations.",
//!         "{{ a }} 与 {{ b }} 的市值相当。",
//!     )
//!     .unwrap(),
//! );
//!
//! let vars = json!({ "a": "AAPL", "b": "MSFT" });
//! let zh = catalog.render("market_cap.comparable", Locale::Chinese, &vars).unwrap();
//! assert_eq!(zh, "AAPL 与 MSFT 的市值相当。");
//! ```

mod catalog;
mod error;
mod locale;
mod template;

pub use catalog::TemplateCatalog;
pub use error::{Result, TemplateError};
pub use locale::Locale;
pub use template::{LocalizedTemplate, LocalizedTemplateBuilder};
