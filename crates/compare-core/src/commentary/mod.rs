//! Comparative commentary generation
//!
//! Two stages, kept apart so each can be tested on its own:
//!
//! 1. [`crate::classify`] turns a [`MetricPair`] into a category. No locale
//!    is involved.
//! 2. [`CommentaryEngine`] picks the template for `(metric, category)` and
//!    interpolates pre-formatted values for the requested [`Locale`].

pub mod templates;

use crate::classify::{
    self, GapCategory, PresenceCategory, RatioCategory, classify_flags, classify_gap,
    classify_presence, classify_ratio,
};
use crate::error::Result;
use crate::format;
use crate::metrics::{MetricKind, MetricPair, Side, Symbol};
use compare_templates::{Locale, TemplateCatalog, TemplateError};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

/// Category of a metric pair, whichever classifier produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ComparisonCategory {
    Ratio(RatioCategory),
    Presence(PresenceCategory),
}

impl ComparisonCategory {
    pub fn key(self) -> &'static str {
        match self {
            ComparisonCategory::Ratio(category) => category.key(),
            ComparisonCategory::Presence(category) => category.key(),
        }
    }
}

/// One generated paragraph and the categories behind it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Commentary {
    pub kind: MetricKind,
    pub category: ComparisonCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<GapCategory>,
    pub text: String,
}

/// Template key for a metric and category key
pub fn template_key(kind: MetricKind, category_key: &str) -> String {
    format!("{}.{category_key}", kind.key())
}

/// ADR notes exist only when at least one subject is an ADR
fn adr_template_key(category: PresenceCategory) -> Option<String> {
    match category {
        PresenceCategory::NeitherHas => None,
        PresenceCategory::OnlyAHas | PresenceCategory::OnlyBHas | PresenceCategory::BothHave => {
            Some(template_key(MetricKind::Adr, category.key()))
        }
    }
}

/// Every template key the engine can ask for
pub fn required_keys() -> Vec<String> {
    let ratio_kinds = [MetricKind::MarketCap, MetricKind::Beta];

    let mut keys: Vec<String> = ratio_kinds
        .iter()
        .flat_map(|&kind| {
            RatioCategory::ALL
                .iter()
                .map(move |category| template_key(kind, category.key()))
        })
        .collect();

    keys.extend(
        PresenceCategory::ALL
            .iter()
            .map(|category| template_key(MetricKind::DividendYield, category.key())),
    );
    keys.extend(
        [
            GapCategory::Significant { higher: Side::A },
            GapCategory::Similar,
        ]
        .iter()
        .map(|gap| template_key(MetricKind::DividendYield, gap.key())),
    );
    keys.extend(PresenceCategory::ALL.into_iter().filter_map(adr_template_key));
    keys.extend(
        [
            templates::PAGE_TITLE,
            templates::PAGE_INTRO,
            templates::FVIFA_SUMMARY,
        ]
        .map(String::from),
    );
    keys
}

/// Renders categorized commentary from a locale-indexed template catalog
#[derive(Debug)]
pub struct CommentaryEngine {
    catalog: TemplateCatalog,
}

impl CommentaryEngine {
    /// Engine over the built-in English and Chinese sentences
    pub fn new() -> Result<Self> {
        let catalog = TemplateCatalog::new().with_all(templates::builtin_templates()?);
        Self::with_catalog(catalog)
    }

    /// Engine over a custom catalog
    ///
    /// Fails unless every required key renders in every locale, so a gap is
    /// caught at startup instead of producing empty text later.
    pub fn with_catalog(catalog: TemplateCatalog) -> Result<Self> {
        let keys = required_keys();
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();

        if let Some(&(name, locale)) = catalog.missing(&key_refs).first() {
            let err = if catalog.contains(name) {
                TemplateError::MissingLocale {
                    name: name.to_string(),
                    locale: locale.code().to_string(),
                }
            } else {
                TemplateError::NotRegistered(name.to_string())
            };
            return Err(err.into());
        }

        Ok(Self { catalog })
    }

    /// Render any catalog entry
    pub fn render(&self, key: &str, locale: Locale, vars: &Value) -> Result<String> {
        Ok(self.catalog.render(key, locale, vars)?)
    }

    /// Render the sentence for a metric kind and category
    pub fn render_category(
        &self,
        kind: MetricKind,
        category: ComparisonCategory,
        locale: Locale,
        vars: &Value,
    ) -> Result<String> {
        self.render(&template_key(kind, category.key()), locale, vars)
    }

    /// Market-cap commentary; values in currency units
    pub fn market_cap(&self, pair: &MetricPair, locale: Locale) -> Result<Commentary> {
        debug_assert_eq!(pair.kind, MetricKind::MarketCap);

        let category = classify_ratio(pair.value_a, pair.value_b);
        let mut vars = json!({
            "a": pair.subject_a.as_str(),
            "b": pair.subject_b.as_str(),
            "cap_a": format::billions(pair.value_a, pair.unit(Side::A), locale),
            "cap_b": format::billions(pair.value_b, pair.unit(Side::B), locale),
        });
        match category {
            RatioCategory::ADominant => {
                vars["ratio"] = json!(format::ratio(pair.value_a / pair.value_b));
            }
            RatioCategory::BDominant => {
                vars["ratio"] = json!(format::ratio(pair.value_b / pair.value_a));
            }
            RatioCategory::Comparable | RatioCategory::Indeterminate => {}
        }

        self.ratio_commentary(MetricKind::MarketCap, category, locale, &vars)
    }

    /// Beta (volatility) commentary
    pub fn beta(&self, pair: &MetricPair, locale: Locale) -> Result<Commentary> {
        debug_assert_eq!(pair.kind, MetricKind::Beta);

        let category = classify_ratio(pair.value_a, pair.value_b);
        let vars = json!({
            "a": pair.subject_a.as_str(),
            "b": pair.subject_b.as_str(),
            "beta_a": format::ratio(pair.value_a),
            "beta_b": format::ratio(pair.value_b),
        });

        self.ratio_commentary(MetricKind::Beta, category, locale, &vars)
    }

    fn ratio_commentary(
        &self,
        kind: MetricKind,
        category: RatioCategory,
        locale: Locale,
        vars: &Value,
    ) -> Result<Commentary> {
        let category = ComparisonCategory::Ratio(category);
        let text = self.render_category(kind, category, locale, vars)?;
        debug!(%kind, category = category.key(), %locale, "commentary rendered");

        Ok(Commentary {
            kind,
            category,
            gap: None,
            text,
        })
    }

    /// Dividend-yield commentary; values in percent units
    ///
    /// When both subjects pay, a second sentence either names the
    /// significantly higher payer or calls the yields similar.
    pub fn dividend_yield(&self, pair: &MetricPair, locale: Locale) -> Result<Commentary> {
        debug_assert_eq!(pair.kind, MetricKind::DividendYield);

        let kind = MetricKind::DividendYield;
        let presence = classify_presence(pair.value_a, pair.value_b);
        let category = ComparisonCategory::Presence(presence);
        let vars = json!({
            "a": pair.subject_a.as_str(),
            "b": pair.subject_b.as_str(),
            "yield_a": format::percent(pair.value_a, locale),
            "yield_b": format::percent(pair.value_b, locale),
        });

        let base = self.render_category(kind, category, locale, &vars)?;
        let (text, gap) = match presence {
            PresenceCategory::NeitherHas
            | PresenceCategory::OnlyAHas
            | PresenceCategory::OnlyBHas => (base, None),
            PresenceCategory::BothHave => {
                let gap = classify_gap(pair.value_a, pair.value_b);
                let gap_text = self.render_gap(pair, gap, locale)?;
                (format!("{base} {gap_text}"), Some(gap))
            }
        };

        debug!(%kind, category = category.key(), ?gap, %locale, "commentary rendered");
        Ok(Commentary {
            kind,
            category,
            gap,
            text,
        })
    }

    fn render_gap(&self, pair: &MetricPair, gap: GapCategory, locale: Locale) -> Result<String> {
        let key = template_key(MetricKind::DividendYield, gap.key());
        let vars = match gap {
            GapCategory::Significant { higher } => {
                let lower = higher.other();
                json!({
                    "higher": pair.subject(higher).as_str(),
                    "lower": pair.subject(lower).as_str(),
                    "higher_yield": format::percent(pair.value(higher), locale),
                    "gap": format::whole_percent(
                        classify::relative_gap(pair.value_a, pair.value_b),
                        locale,
                    ),
                })
            }
            GapCategory::Similar => json!({}),
        };
        self.render(&key, locale, &vars)
    }

    /// ADR-status note, `None` when neither subject is an ADR
    pub fn adr(
        &self,
        subject_a: &Symbol,
        a_is_adr: bool,
        subject_b: &Symbol,
        b_is_adr: bool,
        locale: Locale,
    ) -> Result<Option<Commentary>> {
        let presence = classify_flags(a_is_adr, b_is_adr);
        let Some(key) = adr_template_key(presence) else {
            return Ok(None);
        };

        let vars = json!({ "a": subject_a.as_str(), "b": subject_b.as_str() });
        let text = self.render(&key, locale, &vars)?;

        Ok(Some(Commentary {
            kind: MetricKind::Adr,
            category: ComparisonCategory::Presence(presence),
            gap: None,
            text,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompareError;
    use compare_templates::LocalizedTemplate;

    fn sym(s: &str) -> Symbol {
        Symbol::new(s).unwrap()
    }

    fn pair(kind: MetricKind, a: f64, b: f64) -> MetricPair {
        MetricPair::new(kind, sym("AAPL"), a, sym("TSLA"), b).unwrap()
    }

    fn engine() -> CommentaryEngine {
        CommentaryEngine::new().unwrap()
    }

    #[test]
    fn test_catalog_complete_for_every_locale() {
        let catalog = TemplateCatalog::new().with_all(templates::builtin_templates().unwrap());
        let keys = required_keys();
        let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
        assert!(catalog.missing(&key_refs).is_empty());
    }

    #[test]
    fn test_market_cap_a_dominant() {
        let pair = pair(MetricKind::MarketCap, 3_000_000_000.0, 1_000_000_000.0).with_unit("USD");
        let commentary = engine().market_cap(&pair, Locale::English).unwrap();

        assert_eq!(
            commentary.category,
            ComparisonCategory::Ratio(RatioCategory::ADominant)
        );
        assert_eq!(
            commentary.text,
            "For market capitalization, AAPL is notably larger with a market cap of \
             approximately 3.00 billion USD, roughly 3.00 times that of TSLA (1.00 billion USD)."
        );
    }

    #[test]
    fn test_market_cap_b_dominant_uses_inverse_ratio() {
        let pair = pair(MetricKind::MarketCap, 1.0e9, 4.0e9).with_unit("USD");
        let commentary = engine().market_cap(&pair, Locale::English).unwrap();

        assert_eq!(
            commentary.category,
            ComparisonCategory::Ratio(RatioCategory::BDominant)
        );
        assert!(commentary.text.starts_with("In terms of market cap, TSLA stands out"));
        assert!(commentary.text.contains("roughly 4.00 times that of AAPL"));
    }

    #[test]
    fn test_market_cap_zero_denominator_is_indeterminate() {
        let pair = pair(MetricKind::MarketCap, 2.0e9, 0.0).with_unit("USD");
        let commentary = engine().market_cap(&pair, Locale::English).unwrap();

        assert_eq!(
            commentary.category,
            ComparisonCategory::Ratio(RatioCategory::Indeterminate)
        );
        assert!(!commentary.text.contains("inf"));
        assert!(!commentary.text.contains("NaN"));
        assert!(commentary.text.contains("0.00 billion USD"));
    }

    #[test]
    fn test_market_cap_chinese() {
        let pair = pair(MetricKind::MarketCap, 3.0e9, 1.0e9).with_unit("USD");
        let commentary = engine().market_cap(&pair, Locale::Chinese).unwrap();

        assert_eq!(
            commentary.text,
            "从市值来看，AAPL 规模明显更大，市值约为 3.00 十亿 USD，约为 TSLA（1.00 十亿 USD）的 3.00 倍。"
        );
    }

    #[test]
    fn test_beta_comparable() {
        let commentary = engine()
            .beta(&pair(MetricKind::Beta, 1.0, 1.0), Locale::English)
            .unwrap();

        assert_eq!(
            commentary.category,
            ComparisonCategory::Ratio(RatioCategory::Comparable)
        );
        assert!(commentary.text.contains("similar volatility"));
        assert!(commentary.text.contains("AAPL at 1.00 and TSLA at 1.00"));
    }

    #[test]
    fn test_beta_negative_is_indeterminate() {
        let commentary = engine()
            .beta(&pair(MetricKind::Beta, -0.2, 1.1), Locale::Chinese)
            .unwrap();

        assert_eq!(
            commentary.category,
            ComparisonCategory::Ratio(RatioCategory::Indeterminate)
        );
        assert!(commentary.text.contains("-0.20"));
    }

    #[test]
    fn test_locales_agree_on_category() {
        let engine = engine();
        let pair = pair(MetricKind::Beta, 2.1, 1.0);
        let en = engine.beta(&pair, Locale::English).unwrap();
        let zh = engine.beta(&pair, Locale::Chinese).unwrap();

        assert_eq!(en.category, zh.category);
        assert_ne!(en.text, zh.text);
        assert!(zh.text.contains("贝塔系数"));
    }

    #[test]
    fn test_dividend_neither_pays() {
        let commentary = engine()
            .dividend_yield(&pair(MetricKind::DividendYield, 0.0, 0.0), Locale::English)
            .unwrap();

        assert_eq!(
            commentary.category,
            ComparisonCategory::Presence(PresenceCategory::NeitherHas)
        );
        assert!(commentary.text.contains("neither pays dividends"));
        assert!(!commentary.text.contains('%'));
        assert_eq!(commentary.gap, None);
    }

    #[test]
    fn test_dividend_only_one_pays() {
        let engine = engine();

        let only_a = engine
            .dividend_yield(&pair(MetricKind::DividendYield, 0.44, 0.0), Locale::English)
            .unwrap();
        assert!(only_a.text.starts_with("AAPL offers a dividend yield of 0.44%"));

        let only_b = engine
            .dividend_yield(&pair(MetricKind::DividendYield, -1.0, 2.5), Locale::Chinese)
            .unwrap();
        assert_eq!(
            only_b.category,
            ComparisonCategory::Presence(PresenceCategory::OnlyBHas)
        );
        assert!(only_b.text.contains("TSLA 的股息率为 2.50%"));
    }

    #[test]
    fn test_dividend_significant_gap_callout() {
        let commentary = engine()
            .dividend_yield(&pair(MetricKind::DividendYield, 3.0, 1.0), Locale::English)
            .unwrap();

        assert_eq!(
            commentary.gap,
            Some(GapCategory::Significant { higher: Side::A })
        );
        assert!(commentary.text.starts_with(
            "AAPL has a dividend yield of 3.00% and TSLA has 1.00%; both balance"
        ));
        assert!(commentary.text.contains(
            "In particular, AAPL's dividend yield of 3.00% is significantly higher, \
             exceeding TSLA's by about 200%"
        ));
    }

    #[test]
    fn test_dividend_gap_at_threshold_is_similar() {
        let engine = engine();

        let at = engine
            .dividend_yield(&pair(MetricKind::DividendYield, 1.5, 1.0), Locale::English)
            .unwrap();
        assert_eq!(at.gap, Some(GapCategory::Similar));
        assert!(!at.text.contains("significantly higher"));
        assert!(at.text.ends_with("comparable payout and growth strategies."));

        let past = engine
            .dividend_yield(&pair(MetricKind::DividendYield, 1.0, 1.51), Locale::English)
            .unwrap();
        assert_eq!(past.gap, Some(GapCategory::Significant { higher: Side::B }));
        assert!(past.text.contains("TSLA's dividend yield of 1.51% is significantly higher"));
        assert!(past.text.contains("by about 51%"));
    }

    #[test]
    fn test_dividend_chinese_gap() {
        let commentary = engine()
            .dividend_yield(&pair(MetricKind::DividendYield, 1.0, 3.0), Locale::Chinese)
            .unwrap();

        assert!(commentary.text.contains("其中，TSLA 的股息率达 3.00%，高出 AAPL 约 200%"));
    }

    #[test]
    fn test_adr_notes() {
        let engine = engine();
        let (a, b) = (sym("BABA"), sym("AAPL"));

        assert!(engine.adr(&a, false, &b, false, Locale::English).unwrap().is_none());

        let only_a = engine.adr(&a, true, &b, false, Locale::English).unwrap().unwrap();
        assert!(only_a.text.contains("BABA operates as an ADR"));

        let only_b = engine.adr(&a, false, &b, true, Locale::English).unwrap().unwrap();
        assert!(only_b.text.contains("AAPL is structured as an ADR"));

        let both = engine.adr(&a, true, &b, true, Locale::Chinese).unwrap().unwrap();
        assert_eq!(
            both.category,
            ComparisonCategory::Presence(PresenceCategory::BothHave)
        );
        assert!(both.text.contains("均为美国存托凭证"));
    }

    #[test]
    fn test_incomplete_catalog_rejected() {
        let catalog = TemplateCatalog::new().with(
            LocalizedTemplate::builder("market_cap.a_dominant")
                .english("x")
                .build()
                .unwrap(),
        );

        let err = CommentaryEngine::with_catalog(catalog).unwrap_err();
        assert!(matches!(
            err,
            CompareError::TemplateError(TemplateError::MissingLocale { .. })
        ));

        let err = CommentaryEngine::with_catalog(TemplateCatalog::new()).unwrap_err();
        assert!(matches!(
            err,
            CompareError::TemplateError(TemplateError::NotRegistered(_))
        ));
    }

    #[test]
    fn test_commentary_serializes_category() {
        let commentary = engine()
            .beta(&pair(MetricKind::Beta, 3.0, 1.0), Locale::English)
            .unwrap();
        let value = serde_json::to_value(&commentary).unwrap();

        assert_eq!(value["kind"], "beta");
        assert_eq!(value["category"], "a_dominant");
        assert!(value.get("gap").is_none());
    }
}
