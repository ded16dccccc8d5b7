//! Dividend comparison: yield commentary plus a one-row table

use super::{Section, SectionId, both_fetched, degrade_invalid};
use crate::api::{DividendProfile, MetricSource};
use crate::commentary::CommentaryEngine;
use crate::error::Result;
use crate::fact_sheet::FactSheet;
use crate::format;
use crate::labels::Label;
use crate::metrics::{MetricKind, MetricPair, Symbol};
use compare_templates::Locale;

pub struct DividendComparisonSection;

impl DividendComparisonSection {
    pub const ID: SectionId = SectionId::DividendComparison;

    /// Fetch both dividend profiles concurrently and render the section
    pub async fn build(
        source: &dyn MetricSource,
        engine: &CommentaryEngine,
        subject_a: &Symbol,
        subject_b: &Symbol,
        locale: Locale,
    ) -> Result<Section> {
        let (dividend_a, dividend_b) = tokio::join!(
            source.fetch_dividend(subject_a),
            source.fetch_dividend(subject_b)
        );

        match both_fetched(Self::ID, (subject_a, dividend_a), (subject_b, dividend_b)) {
            Some((a, b)) => {
                degrade_invalid(Self::ID, locale, Self::render(engine, &a, &b, locale))
            }
            None => Ok(Section::unavailable(Self::ID, locale)),
        }
    }

    /// Render from two validated dividend profiles
    pub fn render(
        engine: &CommentaryEngine,
        a: &DividendProfile,
        b: &DividendProfile,
        locale: Locale,
    ) -> Result<Section> {
        let pair = MetricPair::new(
            MetricKind::DividendYield,
            a.symbol.clone(),
            a.dividend_yield_pct,
            b.symbol.clone(),
            b.dividend_yield_pct,
        )?;
        let commentary = engine.dividend_yield(&pair, locale)?;

        let fact_sheet = FactSheet::new(a.symbol.clone(), b.symbol.clone(), locale).row(
            Label::DividendYieldTtm,
            locale,
            format::percent(a.dividend_yield_pct, locale),
            format::percent(b.dividend_yield_pct, locale),
        );

        Ok(Section::available(
            Self::ID,
            locale,
            vec![commentary.text],
            fact_sheet,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockMetricSource;
    use crate::error::CompareError;
    use crate::sections::test_support::{dividend, sym};

    fn engine() -> CommentaryEngine {
        CommentaryEngine::new().unwrap()
    }

    #[test]
    fn test_render_neither_pays() {
        let section = DividendComparisonSection::render(
            &engine(),
            &dividend("AMZN", 0.0),
            &dividend("TSLA", 0.0),
            Locale::English,
        )
        .unwrap();

        assert_eq!(section.paragraphs().len(), 1);
        assert!(section.paragraphs()[0].contains("neither pays dividends"));

        let sheet = section.fact_sheet().unwrap();
        assert_eq!(sheet.rows[0].label, "Dividend Yield (TTM)");
        assert_eq!(sheet.rows[0].value_a, "0.00%");
    }

    #[test]
    fn test_render_significant_gap() {
        let section = DividendComparisonSection::render(
            &engine(),
            &dividend("KO", 3.0),
            &dividend("AAPL", 1.0),
            Locale::English,
        )
        .unwrap();

        assert!(section.paragraphs()[0].contains("KO's dividend yield of 3.00% is significantly higher"));
        assert!(section.paragraphs()[0].contains("200%"));
    }

    #[tokio::test]
    async fn test_build_chinese() {
        let mut source = MockMetricSource::new();
        source
            .expect_fetch_dividend()
            .times(2)
            .returning(|symbol| {
                let pct = if symbol.as_str() == "KO" { 2.85 } else { 0.0 };
                Ok(dividend(symbol.as_str(), pct))
            });

        let section = DividendComparisonSection::build(
            &source,
            &engine(),
            &sym("KO"),
            &sym("NVDA"),
            Locale::Chinese,
        )
        .await
        .unwrap();

        assert_eq!(section.heading(), "股息比较");
        assert!(section.paragraphs()[0].starts_with("KO 的股息率为 2.85%"));
        assert_eq!(section.fact_sheet().unwrap().header(), ["代码", "KO", "NVDA"]);
    }

    #[tokio::test]
    async fn test_build_degrades_on_fetch_failure() {
        let mut source = MockMetricSource::new();
        source.expect_fetch_dividend().returning(|symbol| {
            if symbol.as_str() == "KO" {
                Ok(dividend("KO", 2.85))
            } else {
                Err(CompareError::unavailable(symbol.as_str(), "HTTP 500"))
            }
        });

        let section = DividendComparisonSection::build(
            &source,
            &engine(),
            &sym("KO"),
            &sym("PEP"),
            Locale::English,
        )
        .await
        .unwrap();

        assert!(!section.is_available());
        assert!(section.paragraphs().is_empty());
        assert!(section.fact_sheet().is_none());
        assert!(matches!(
            section,
            Section::Unavailable { ref message, .. } if message == "Dividend data is currently unavailable."
        ));
    }

    #[tokio::test]
    async fn test_build_degrades_on_infinite_yield() {
        let mut source = MockMetricSource::new();
        source.expect_fetch_dividend().returning(|symbol| {
            let pct = if symbol.as_str() == "PEP" { f64::INFINITY } else { 2.85 };
            Ok(dividend(symbol.as_str(), pct))
        });

        let section = DividendComparisonSection::build(
            &source,
            &engine(),
            &sym("KO"),
            &sym("PEP"),
            Locale::English,
        )
        .await
        .unwrap();

        assert!(!section.is_available());
        assert_eq!(section.id(), SectionId::DividendComparison);
    }
}
