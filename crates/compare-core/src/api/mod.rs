//! Metric sources for comparison pages
//!
//! A [`MetricSource`] returns validated records or an error. Callers in
//! [`crate::sections`] treat every error the same way: the section degrades to
//! its unavailable message.

pub mod fmp;

pub use fmp::FmpClient;

use crate::error::Result;
use crate::metrics::Symbol;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company profile facts used by the overview section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub symbol: Symbol,
    pub company_name: String,
    pub country: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub ceo: Option<String>,
    pub price: f64,
    pub market_cap: f64,
    pub beta: f64,
    pub exchange: Option<String>,
    pub ipo_date: Option<NaiveDate>,
    pub is_adr: bool,
    pub currency: String,
}

/// Trailing-twelve-month dividend facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendProfile {
    pub symbol: Symbol,
    /// Dividend yield in percent units (`0.44` means 0.44%)
    pub dividend_yield_pct: f64,
}

/// Provider of per-symbol financial facts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricSource: Send + Sync {
    /// Company profile for one symbol
    async fn fetch_profile(&self, symbol: &Symbol) -> Result<CompanyProfile>;

    /// Dividend yield for one symbol
    async fn fetch_dividend(&self, symbol: &Symbol) -> Result<DividendProfile>;
}
