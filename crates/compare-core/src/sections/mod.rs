//! Page sections
//!
//! Each section fetches both subjects concurrently and renders only when both
//! fetches succeed. Otherwise it degrades to a fixed, localized message with no
//! paragraphs and no table. Template failures are not degraded: they propagate.

pub mod dividend;
pub mod overview;
pub mod page;

pub use dividend::DividendComparisonSection;
pub use overview::CompanyOverviewSection;
pub use page::{Comparator, ComparisonPage};

use crate::error::{CompareError, Result};
use crate::fact_sheet::FactSheet;
use crate::labels::Label;
use crate::metrics::Symbol;
use compare_templates::Locale;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Which section of a comparison page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    CompanyOverview,
    DividendComparison,
}

impl SectionId {
    /// Anchor used by presentation layers
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::CompanyOverview => "company-overview",
            SectionId::DividendComparison => "dividend-comparison",
        }
    }

    pub fn heading(self) -> Label {
        match self {
            SectionId::CompanyOverview => Label::CompanyOverviewHeading,
            SectionId::DividendComparison => Label::DividendHeading,
        }
    }

    pub fn unavailable_message(self) -> Label {
        match self {
            SectionId::CompanyOverview => Label::CompanyOverviewUnavailable,
            SectionId::DividendComparison => Label::DividendUnavailable,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

/// A rendered section, either complete or degraded
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Section {
    Available {
        id: SectionId,
        heading: String,
        paragraphs: Vec<String>,
        fact_sheet: FactSheet,
    },
    Unavailable {
        id: SectionId,
        heading: String,
        message: String,
    },
}

impl Section {
    pub fn available(
        id: SectionId,
        locale: Locale,
        paragraphs: Vec<String>,
        fact_sheet: FactSheet,
    ) -> Self {
        Section::Available {
            id,
            heading: id.heading().text(locale).to_string(),
            paragraphs,
            fact_sheet,
        }
    }

    pub fn unavailable(id: SectionId, locale: Locale) -> Self {
        Section::Unavailable {
            id,
            heading: id.heading().text(locale).to_string(),
            message: id.unavailable_message().text(locale).to_string(),
        }
    }

    pub fn id(&self) -> SectionId {
        match self {
            Section::Available { id, .. } | Section::Unavailable { id, .. } => *id,
        }
    }

    pub fn heading(&self) -> &str {
        match self {
            Section::Available { heading, .. } | Section::Unavailable { heading, .. } => heading,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Section::Available { .. })
    }

    /// Commentary paragraphs; empty when unavailable
    pub fn paragraphs(&self) -> &[String] {
        match self {
            Section::Available { paragraphs, .. } => paragraphs,
            Section::Unavailable { .. } => &[],
        }
    }

    pub fn fact_sheet(&self) -> Option<&FactSheet> {
        match self {
            Section::Available { fact_sheet, .. } => Some(fact_sheet),
            Section::Unavailable { .. } => None,
        }
    }
}

/// Keep a fetched record, or log why the section will degrade
fn fetched<T>(section: SectionId, symbol: &Symbol, result: Result<T>) -> Option<T> {
    match result {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(%section, %symbol, error = %e, "metric fetch failed");
            None
        }
    }
}

/// Render result with invalid metric data degraded to the unavailable section
///
/// Anything else, template errors in particular, still propagates.
fn degrade_invalid(
    section: SectionId,
    locale: Locale,
    rendered: Result<Section>,
) -> Result<Section> {
    match rendered {
        Err(CompareError::InvalidMetric { metric, value }) => {
            warn!(%section, %metric, value, "invalid metric value");
            Ok(Section::unavailable(section, locale))
        }
        other => other,
    }
}

/// Both records, or `None` if either fetch failed
fn both_fetched<T>(
    section: SectionId,
    (symbol_a, result_a): (&Symbol, Result<T>),
    (symbol_b, result_b): (&Symbol, Result<T>),
) -> Option<(T, T)> {
    let a = fetched(section, symbol_a, result_a);
    let b = fetched(section, symbol_b, result_b);
    a.zip(b)
}
