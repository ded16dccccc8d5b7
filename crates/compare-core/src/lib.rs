//! Comparative stock commentary
//!
//! This crate turns pairs of financial metrics for two ticker symbols into
//! short, locale-aware paragraphs and side-by-side fact sheets. It includes:
//!
//! - Locale-free classification of metric pairs (ratio, presence and gap buckets)
//! - Commentary rendering from English and Chinese templates
//! - Locale-aware number and date formatting
//! - Page sections that fetch both subjects concurrently and degrade to a
//!   fixed "data unavailable" message when either fetch fails
//! - A Financial Modeling Prep client behind the [`MetricSource`] trait
//! - The FVIFA calculator
//!
//! # Architecture
//!
//! ```text
//! MetricSource ──▶ sections ──▶ classify ──▶ CommentaryEngine ──▶ Section
//!   (fetch)       (join both)   (category)     (template+locale)   (prose + table)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use compare_core::{Comparator, CompareConfig, FmpClient, Locale, Symbol};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = CompareConfig::builder().with_env_api_key().build()?;
//!     let comparator = Comparator::new(Arc::new(FmpClient::new(&config)?))?;
//!
//!     let page = comparator
//!         .page(&Symbol::new("AAPL")?, &Symbol::new("MSFT")?, Locale::English)
//!         .await?;
//!     println!("{}", page.title);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod calculators;
pub mod classify;
pub mod commentary;
pub mod config;
pub mod error;
pub mod fact_sheet;
pub mod format;
pub mod labels;
pub mod metrics;
pub mod sections;

// Re-export main types for convenience
pub use api::{CompanyProfile, DividendProfile, FmpClient, MetricSource};
pub use calculators::FvifaOutcome;
pub use classify::{GapCategory, PresenceCategory, RatioCategory};
pub use commentary::{Commentary, CommentaryEngine, ComparisonCategory};
pub use config::CompareConfig;
pub use error::{CompareError, Result};
pub use fact_sheet::{FactRow, FactSheet};
pub use labels::Label;
pub use metrics::{MetricKind, MetricPair, Side, Symbol};
pub use sections::{
    CompanyOverviewSection, Comparator, ComparisonPage, DividendComparisonSection, Section,
    SectionId,
};

// Re-export Locale from compare-templates
pub use compare_templates::Locale;
