//! Metric model: subjects, metric kinds and value pairs

use crate::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticker symbol of a compared subject, upper-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Validate and normalize a ticker
    ///
    /// Accepts ASCII letters, digits and the separators `.`, `-` and `^`
    /// (e.g. `BRK.B`, `RDS-A`, `^GSPC`).
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && trimmed.len() <= 16
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^'));

        if !valid {
            return Err(CompareError::InvalidSymbol(raw.to_string()));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = CompareError;

    fn try_from(value: String) -> Result<Self> {
        Symbol::new(&value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// One side of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Financial attribute being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    MarketCap,
    Beta,
    DividendYield,
    Adr,
}

impl MetricKind {
    /// Template-key prefix
    pub fn key(self) -> &'static str {
        match self {
            MetricKind::MarketCap => "market_cap",
            MetricKind::Beta => "beta",
            MetricKind::DividendYield => "dividend_yield",
            MetricKind::Adr => "adr",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Two subjects' values for one metric
///
/// Both values are finite; no ordering between A and B is implied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPair {
    pub kind: MetricKind,
    pub subject_a: Symbol,
    pub subject_b: Symbol,
    pub value_a: f64,
    pub value_b: f64,
    /// Currency or unit of `value_a`
    pub unit_a: Option<String>,
    /// Currency or unit of `value_b`
    pub unit_b: Option<String>,
}

impl MetricPair {
    /// Build a pair, rejecting NaN and infinities
    pub fn new(
        kind: MetricKind,
        subject_a: Symbol,
        value_a: f64,
        subject_b: Symbol,
        value_b: f64,
    ) -> Result<Self> {
        for value in [value_a, value_b] {
            if !value.is_finite() {
                return Err(CompareError::InvalidMetric {
                    metric: kind.key().to_string(),
                    value,
                });
            }
        }

        Ok(Self {
            kind,
            subject_a,
            subject_b,
            value_a,
            value_b,
            unit_a: None,
            unit_b: None,
        })
    }

    /// Same unit on both sides
    pub fn with_unit(self, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        self.with_units(unit.clone(), unit)
    }

    /// Per-side units, e.g. market caps reported in different currencies
    pub fn with_units(mut self, unit_a: impl Into<String>, unit_b: impl Into<String>) -> Self {
        self.unit_a = Some(unit_a.into());
        self.unit_b = Some(unit_b.into());
        self
    }

    pub fn subject(&self, side: Side) -> &Symbol {
        match side {
            Side::A => &self.subject_a,
            Side::B => &self.subject_b,
        }
    }

    pub fn value(&self, side: Side) -> f64 {
        match side {
            Side::A => self.value_a,
            Side::B => self.value_b,
        }
    }

    pub fn unit(&self, side: Side) -> Option<&str> {
        match side {
            Side::A => self.unit_a.as_deref(),
            Side::B => self.unit_b.as_deref(),
        }
    }
}
