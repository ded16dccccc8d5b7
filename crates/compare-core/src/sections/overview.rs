//! Company overview: market cap, beta and ADR commentary plus profile table

use super::{Section, SectionId, both_fetched, degrade_invalid};
use crate::api::{CompanyProfile, MetricSource};
use crate::commentary::CommentaryEngine;
use crate::error::Result;
use crate::fact_sheet::FactSheet;
use crate::format;
use crate::labels::Label;
use crate::metrics::{MetricKind, MetricPair, Symbol};
use compare_templates::Locale;
use tracing::debug;

pub struct CompanyOverviewSection;

impl CompanyOverviewSection {
    pub const ID: SectionId = SectionId::CompanyOverview;

    /// Fetch both profiles concurrently and render the section
    pub async fn build(
        source: &dyn MetricSource,
        engine: &CommentaryEngine,
        subject_a: &Symbol,
        subject_b: &Symbol,
        locale: Locale,
    ) -> Result<Section> {
        let (profile_a, profile_b) = tokio::join!(
            source.fetch_profile(subject_a),
            source.fetch_profile(subject_b)
        );

        match both_fetched(Self::ID, (subject_a, profile_a), (subject_b, profile_b)) {
            Some((a, b)) => {
                degrade_invalid(Self::ID, locale, Self::render(engine, &a, &b, locale))
            }
            None => Ok(Section::unavailable(Self::ID, locale)),
        }
    }

    /// Render from two validated profiles
    pub fn render(
        engine: &CommentaryEngine,
        a: &CompanyProfile,
        b: &CompanyProfile,
        locale: Locale,
    ) -> Result<Section> {
        let market_cap = MetricPair::new(
            MetricKind::MarketCap,
            a.symbol.clone(),
            a.market_cap,
            b.symbol.clone(),
            b.market_cap,
        )?
        .with_units(&a.currency, &b.currency);
        let beta = MetricPair::new(
            MetricKind::Beta,
            a.symbol.clone(),
            a.beta,
            b.symbol.clone(),
            b.beta,
        )?;

        let mut paragraphs = vec![
            engine.market_cap(&market_cap, locale)?.text,
            engine.beta(&beta, locale)?.text,
        ];
        if let Some(note) = engine.adr(&a.symbol, a.is_adr, &b.symbol, b.is_adr, locale)? {
            paragraphs.push(note.text);
        }
        paragraphs.push(Label::SeeTableBelow.text(locale).to_string());

        debug!(a = %a.symbol, b = %b.symbol, %locale, paragraphs = paragraphs.len(), "overview rendered");
        Ok(Section::available(
            Self::ID,
            locale,
            paragraphs,
            fact_sheet(a, b, locale),
        ))
    }
}

fn text_or_na(value: Option<&str>, locale: Locale) -> String {
    value
        .unwrap_or_else(|| Label::NotAvailable.text(locale))
        .to_string()
}

fn yes_no(flag: bool, locale: Locale) -> &'static str {
    if flag {
        Label::Yes.text(locale)
    } else {
        Label::No.text(locale)
    }
}

fn fact_sheet(a: &CompanyProfile, b: &CompanyProfile, locale: Locale) -> FactSheet {
    let both = |field: fn(&CompanyProfile) -> Option<&str>| {
        (text_or_na(field(a), locale), text_or_na(field(b), locale))
    };
    let ipo = |p: &CompanyProfile| match p.ipo_date {
        Some(date) => format::long_date(date, locale),
        None => Label::NotAvailable.text(locale).to_string(),
    };

    let (country_a, country_b) = both(|p| p.country.as_deref());
    let (sector_a, sector_b) = both(|p| p.sector.as_deref());
    let (industry_a, industry_b) = both(|p| p.industry.as_deref());
    let (ceo_a, ceo_b) = both(|p| p.ceo.as_deref());
    let (exchange_a, exchange_b) = both(|p| p.exchange.as_deref());

    FactSheet::new(a.symbol.clone(), b.symbol.clone(), locale)
        .row(Label::CompanyName, locale, &a.company_name, &b.company_name)
        .row(Label::Country, locale, country_a, country_b)
        .row(Label::Sector, locale, sector_a, sector_b)
        .row(Label::Industry, locale, industry_a, industry_b)
        .row(Label::Ceo, locale, ceo_a, ceo_b)
        .row(
            Label::Price,
            locale,
            format::price(a.price, &a.currency, locale),
            format::price(b.price, &b.currency, locale),
        )
        .row(
            Label::MarketCap,
            locale,
            format::billions(a.market_cap, Some(&a.currency), locale),
            format::billions(b.market_cap, Some(&b.currency), locale),
        )
        .row(
            Label::Beta,
            locale,
            format::ratio(a.beta),
            format::ratio(b.beta),
        )
        .row(Label::Exchange, locale, exchange_a, exchange_b)
        .row(Label::IpoDate, locale, ipo(a), ipo(b))
        .row(
            Label::Adr,
            locale,
            yes_no(a.is_adr, locale),
            yes_no(b.is_adr, locale),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockMetricSource;
    use crate::error::CompareError;
    use crate::sections::test_support::{profile, sym};
    use mockall::predicate::eq;

    fn engine() -> CommentaryEngine {
        CommentaryEngine::new().unwrap()
    }

    #[test]
    fn test_render_overview_paragraphs() {
        let a = profile("AAPL", 3.0e9, 1.0, false);
        let b = profile("TSLA", 1.0e9, 1.0, false);

        let section = CompanyOverviewSection::render(&engine(), &a, &b, Locale::English).unwrap();
        let paragraphs = section.paragraphs();

        assert_eq!(section.heading(), "Company Overview");
        assert_eq!(paragraphs.len(), 3);
        assert!(paragraphs[0].contains("notably larger"));
        assert!(paragraphs[0].contains("3.00 times"));
        assert!(paragraphs[1].contains("similar volatility"));
        assert_eq!(
            paragraphs[2],
            "For a detailed comparison, please refer to the table below."
        );
    }

    #[test]
    fn test_render_overview_with_adr_note() {
        let a = profile("BABA", 2.0e11, 0.3, true);
        let b = profile("JD", 5.0e10, 0.4, true);

        let section = CompanyOverviewSection::render(&engine(), &a, &b, Locale::Chinese).unwrap();
        let paragraphs = section.paragraphs();

        assert_eq!(paragraphs.len(), 4);
        assert!(paragraphs[2].contains("均为美国存托凭证"));
        assert_eq!(paragraphs[3], "详细对比请参阅下表。");
    }

    #[test]
    fn test_overview_fact_sheet() {
        let a = profile("AAPL", 1.5e9, 1.24, false);
        let mut b = profile("SONY", 1.0e11, 0.9, true);
        b.ipo_date = None;

        let section = CompanyOverviewSection::render(&engine(), &a, &b, Locale::English).unwrap();
        let sheet = section.fact_sheet().unwrap();

        assert_eq!(sheet.header(), ["Symbol", "AAPL", "SONY"]);
        assert_eq!(sheet.len(), 11);

        let row = |label: &str| sheet.rows.iter().find(|r| r.label == label).unwrap();
        assert_eq!(row("Market Cap").value_a, "1.50 billion USD");
        assert_eq!(row("Industry").value_a, "N/A");
        assert_eq!(row("Price").value_a, "123.46 USD");
        assert_eq!(row("IPO Date").value_a, "December 12, 1980");
        assert_eq!(row("IPO Date").value_b, "N/A");
        assert_eq!(row("ADR").value_b, "Yes");
        assert_eq!(row("Beta").value_a, "1.24");
    }

    #[tokio::test]
    async fn test_build_fetches_both_profiles() {
        let mut source = MockMetricSource::new();
        source
            .expect_fetch_profile()
            .with(eq(sym("AAPL")))
            .times(1)
            .returning(|_| Ok(profile("AAPL", 3.0e12, 1.2, false)));
        source
            .expect_fetch_profile()
            .with(eq(sym("MSFT")))
            .times(1)
            .returning(|_| Ok(profile("MSFT", 3.1e12, 0.9, false)));

        let section = CompanyOverviewSection::build(
            &source,
            &engine(),
            &sym("AAPL"),
            &sym("MSFT"),
            Locale::English,
        )
        .await
        .unwrap();

        assert!(section.is_available());
        assert!(section.paragraphs()[0].contains("comparable market capitalizations"));
    }

    #[tokio::test]
    async fn test_build_degrades_when_one_fetch_fails() {
        let mut source = MockMetricSource::new();
        source
            .expect_fetch_profile()
            .with(eq(sym("AAPL")))
            .returning(|_| Ok(profile("AAPL", 3.0e12, 1.2, false)));
        source
            .expect_fetch_profile()
            .with(eq(sym("XYZ")))
            .returning(|_| Err(CompareError::unavailable("XYZ", "empty response")));

        let section = CompanyOverviewSection::build(
            &source,
            &engine(),
            &sym("AAPL"),
            &sym("XYZ"),
            Locale::English,
        )
        .await
        .unwrap();

        assert_eq!(
            section,
            Section::Unavailable {
                id: SectionId::CompanyOverview,
                heading: "Company Overview".to_string(),
                message: "Company overview data is currently unavailable.".to_string(),
            }
        );
        assert!(section.paragraphs().is_empty());
        assert!(section.fact_sheet().is_none());
    }

    #[tokio::test]
    async fn test_build_degrades_on_non_finite_market_cap() {
        let mut source = MockMetricSource::new();
        source.expect_fetch_profile().returning(|symbol| {
            let market_cap = if symbol.as_str() == "AAPL" { f64::NAN } else { 3.1e12 };
            Ok(profile(symbol.as_str(), market_cap, 1.0, false))
        });

        let section = CompanyOverviewSection::build(
            &source,
            &engine(),
            &sym("AAPL"),
            &sym("MSFT"),
            Locale::Chinese,
        )
        .await
        .unwrap();

        assert_eq!(
            section,
            Section::unavailable(SectionId::CompanyOverview, Locale::Chinese)
        );
    }
}
