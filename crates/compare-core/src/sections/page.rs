//! Full comparison page for a pair of symbols

use super::{CompanyOverviewSection, DividendComparisonSection, Section};
use crate::api::MetricSource;
use crate::commentary::CommentaryEngine;
use crate::commentary::templates::{PAGE_INTRO, PAGE_TITLE};
use crate::error::{CompareError, Result};
use crate::metrics::Symbol;
use compare_templates::Locale;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument};

/// Rendered page: title, intro and sections in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPage {
    pub subject_a: Symbol,
    pub subject_b: Symbol,
    pub locale: Locale,
    pub title: String,
    pub intro: String,
    pub sections: Vec<Section>,
}

impl ComparisonPage {
    /// Number of sections that rendered commentary
    pub fn available_sections(&self) -> usize {
        self.sections.iter().filter(|s| s.is_available()).count()
    }
}

/// Builds comparison pages from a metric source
#[derive(Clone)]
pub struct Comparator {
    source: Arc<dyn MetricSource>,
    engine: Arc<CommentaryEngine>,
}

impl Comparator {
    /// Comparator using the built-in templates
    pub fn new(source: Arc<dyn MetricSource>) -> Result<Self> {
        Ok(Self::with_engine(source, Arc::new(CommentaryEngine::new()?)))
    }

    pub fn with_engine(source: Arc<dyn MetricSource>, engine: Arc<CommentaryEngine>) -> Self {
        Self { source, engine }
    }

    pub async fn company_overview(
        &self,
        subject_a: &Symbol,
        subject_b: &Symbol,
        locale: Locale,
    ) -> Result<Section> {
        CompanyOverviewSection::build(
            self.source.as_ref(),
            &self.engine,
            subject_a,
            subject_b,
            locale,
        )
        .await
    }

    pub async fn dividend_comparison(
        &self,
        subject_a: &Symbol,
        subject_b: &Symbol,
        locale: Locale,
    ) -> Result<Section> {
        DividendComparisonSection::build(
            self.source.as_ref(),
            &self.engine,
            subject_a,
            subject_b,
            locale,
        )
        .await
    }

    /// Render the whole page; sections are built concurrently
    #[instrument(skip_all, fields(a = %subject_a, b = %subject_b, locale = %locale))]
    pub async fn page(
        &self,
        subject_a: &Symbol,
        subject_b: &Symbol,
        locale: Locale,
    ) -> Result<ComparisonPage> {
        if subject_a == subject_b {
            return Err(CompareError::InvalidSymbol(format!(
                "cannot compare {subject_a} with itself"
            )));
        }

        let vars = json!({ "a": subject_a.as_str(), "b": subject_b.as_str() });
        let title = self.engine.render(PAGE_TITLE, locale, &vars)?;
        let intro = self.engine.render(PAGE_INTRO, locale, &vars)?;

        let (overview, dividends) = tokio::join!(
            self.company_overview(subject_a, subject_b, locale),
            self.dividend_comparison(subject_a, subject_b, locale)
        );

        let page = ComparisonPage {
            subject_a: subject_a.clone(),
            subject_b: subject_b.clone(),
            locale,
            title,
            intro,
            sections: vec![overview?, dividends?],
        };
        info!(
            available = page.available_sections(),
            total = page.sections.len(),
            "comparison page rendered"
        );
        Ok(page)
    }
}
