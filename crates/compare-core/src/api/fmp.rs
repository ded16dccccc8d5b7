//! Financial Modeling Prep API client
//!
//! Both endpoints answer with a JSON array of records. Only the first record
//! is used, and it must match an explicit schema before anything downstream
//! sees it.

use crate::api::{CompanyProfile, DividendProfile, MetricSource};
use crate::config::CompareConfig;
use crate::error::{CompareError, Result};
use crate::metrics::Symbol;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

const PROFILE_PATH: &str = "profile";
const RATIOS_TTM_PATH: &str = "ratios-ttm";

/// Financial Modeling Prep API client
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    symbol: String,
    company_name: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    industry: Option<String>,
    #[serde(default)]
    ceo: Option<String>,
    price: f64,
    market_cap: f64,
    beta: f64,
    #[serde(default)]
    exchange: Option<String>,
    #[serde(default)]
    ipo_date: Option<String>,
    is_adr: bool,
    currency: String,
}

#[derive(Debug, Deserialize)]
struct RawRatiosTtm {
    symbol: String,
    #[serde(rename = "dividendYieldTTM")]
    dividend_yield_ttm: f64,
}

/// Blank strings from the API mean "not reported"
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// First array element of `body`, deserialized as `T`
fn first_record<T: DeserializeOwned>(symbol: &Symbol, body: Value) -> Result<T> {
    if let Some(message) = body.get("Error Message").and_then(Value::as_str) {
        return Err(CompareError::ApiError(format!("{symbol}: {message}")));
    }

    let Value::Array(mut records) = body else {
        return Err(CompareError::unavailable(
            symbol.as_str(),
            "response is not a JSON array",
        ));
    };

    if records.is_empty() {
        return Err(CompareError::unavailable(symbol.as_str(), "empty response"));
    }

    serde_json::from_value(records.swap_remove(0)).map_err(|e| {
        CompareError::unavailable(symbol.as_str(), format!("malformed record: {e}"))
    })
}

fn check_symbol(requested: &Symbol, returned: &str) -> Result<()> {
    if returned.eq_ignore_ascii_case(requested.as_str()) {
        Ok(())
    } else {
        Err(CompareError::unavailable(
            requested.as_str(),
            format!("response is for '{returned}'"),
        ))
    }
}

fn finite(symbol: &Symbol, field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CompareError::unavailable(
            symbol.as_str(),
            format!("{field} is not a finite number"),
        ))
    }
}

/// Validate a `/profile` response body
pub fn parse_profile(symbol: &Symbol, body: Value) -> Result<CompanyProfile> {
    let raw: RawProfile = first_record(symbol, body)?;
    check_symbol(symbol, &raw.symbol)?;

    for (field, value) in [
        ("price", raw.price),
        ("marketCap", raw.market_cap),
        ("beta", raw.beta),
    ] {
        finite(symbol, field, value)?;
    }

    let currency = raw.currency.trim().to_string();
    if currency.is_empty() {
        return Err(CompareError::unavailable(symbol.as_str(), "missing currency"));
    }

    let ipo_date = non_blank(raw.ipo_date)
        .and_then(|date| NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok());

    Ok(CompanyProfile {
        symbol: symbol.clone(),
        company_name: raw.company_name,
        country: non_blank(raw.country),
        sector: non_blank(raw.sector),
        industry: non_blank(raw.industry),
        ceo: non_blank(raw.ceo),
        price: raw.price,
        market_cap: raw.market_cap,
        beta: raw.beta,
        exchange: non_blank(raw.exchange),
        ipo_date,
        is_adr: raw.is_adr,
        currency,
    })
}

/// Validate a `/ratios-ttm` response body
///
/// The API reports the yield as a fraction; it is converted to percent here.
pub fn parse_dividend(symbol: &Symbol, body: Value) -> Result<DividendProfile> {
    let raw: RawRatiosTtm = first_record(symbol, body)?;
    check_symbol(symbol, &raw.symbol)?;
    finite(symbol, "dividendYieldTTM", raw.dividend_yield_ttm)?;

    Ok(DividendProfile {
        symbol: symbol.clone(),
        dividend_yield_pct: raw.dividend_yield_ttm * 100.0,
    })
}

impl FmpClient {
    /// Create a client from explicit configuration
    pub fn new(config: &CompareConfig) -> Result<Self> {
        config.validate()?;
        let api_key = config.require_api_key()?.to_string();
        let client = Client::builder().timeout(config.request_timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key,
        })
    }

    async fn get_json(&self, path: &str, symbol: &Symbol) -> Result<Value> {
        let url = format!("{}/{path}", self.base_url);
        debug!(%symbol, path, "requesting metric data");

        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol.as_str()), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompareError::unavailable(
                symbol.as_str(),
                format!("HTTP {status}"),
            ));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl MetricSource for FmpClient {
    async fn fetch_profile(&self, symbol: &Symbol) -> Result<CompanyProfile> {
        let body = self.get_json(PROFILE_PATH, symbol).await?;
        parse_profile(symbol, body)
    }

    async fn fetch_dividend(&self, symbol: &Symbol) -> Result<DividendProfile> {
        let body = self.get_json(RATIOS_TTM_PATH, symbol).await?;
        parse_dividend(symbol, body)
    }
}
