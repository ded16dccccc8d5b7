//! Future value interest factor of an annuity
//!
//! `FVIFA = ((1 + r)^n - 1) / r`, with `r` the per-period rate as a decimal
//! and `n` the number of periods. At `r == 0` the factor is `n`.

use crate::commentary::CommentaryEngine;
use crate::commentary::templates::FVIFA_SUMMARY;
use crate::error::Result;
use crate::format;
use crate::labels::Label;
use compare_templates::Locale;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

/// Decimal places of the reported factor
pub const FACTOR_DECIMALS: usize = 4;

/// Raw factor for a decimal rate and a period count
pub fn fvifa(rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        periods
    } else {
        ((1.0 + rate).powf(periods) - 1.0) / rate
    }
}

/// Result of evaluating form input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FvifaOutcome {
    Computed {
        rate_pct: f64,
        periods: f64,
        factor: String,
        summary: String,
    },
    /// Every failing field, in form order
    Invalid { messages: Vec<String> },
}

struct FieldMessages {
    required: Label,
    not_numeric: Label,
    negative: Label,
}

const RATE: FieldMessages = FieldMessages {
    required: Label::RateRequired,
    not_numeric: Label::RateNotNumeric,
    negative: Label::RateNegative,
};

const PERIODS: FieldMessages = FieldMessages {
    required: Label::PeriodsRequired,
    not_numeric: Label::PeriodsNotNumeric,
    negative: Label::PeriodsNegative,
};

fn parse_field(input: &str, messages: &FieldMessages) -> std::result::Result<f64, Label> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(messages.required);
    }

    let value: f64 = trimmed.parse().map_err(|_| messages.not_numeric)?;
    if !value.is_finite() {
        return Err(messages.not_numeric);
    }
    if value < 0.0 {
        return Err(messages.negative);
    }

    Ok(value)
}

/// Validate both inputs and compute the factor
///
/// `rate_input` is a percentage (`"6.4"` means 6.4%). Validation errors are
/// collected for both fields before giving up. Inputs whose factor overflows
/// `f64` are reported as invalid too.
pub fn evaluate(
    engine: &CommentaryEngine,
    rate_input: &str,
    periods_input: &str,
    locale: Locale,
) -> Result<FvifaOutcome> {
    let rate = parse_field(rate_input, &RATE);
    let periods = parse_field(periods_input, &PERIODS);

    let (rate_pct, periods) = match (rate, periods) {
        (Ok(rate_pct), Ok(periods)) => (rate_pct, periods),
        (rate, periods) => {
            let messages = [rate.err(), periods.err()]
                .into_iter()
                .flatten()
                .map(|label| label.text(locale).to_string())
                .collect();
            return Ok(FvifaOutcome::Invalid { messages });
        }
    };

    let raw = fvifa(rate_pct / 100.0, periods);
    if !raw.is_finite() {
        debug!(rate_pct, periods, "fvifa overflowed");
        return Ok(FvifaOutcome::Invalid {
            messages: vec![Label::FactorOutOfRange.text(locale).to_string()],
        });
    }
    let factor = format::fixed(raw, FACTOR_DECIMALS);
    debug!(rate_pct, periods, %factor, "fvifa computed");

    let summary = engine.render(
        FVIFA_SUMMARY,
        locale,
        &json!({
            "rate": rate_pct.to_string(),
            "periods": periods.to_string(),
            "factor": &factor,
        }),
    )?;

    Ok(FvifaOutcome::Computed {
        rate_pct,
        periods,
        factor,
        summary,
    })
}
