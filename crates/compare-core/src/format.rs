//! Locale-aware number and date formatting

use chrono::NaiveDate;
use compare_templates::Locale;

/// Scale used for large currency values
pub const BILLION: f64 = 1_000_000_000.0;

/// Thousands and decimal separators for a locale
fn separators(locale: Locale) -> (char, char) {
    match locale {
        Locale::English | Locale::Chinese => (',', '.'),
    }
}

/// Fixed-point rendering without grouping; never yields `-0.00`
pub fn fixed(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => text,
    }
}

/// Fixed-point rendering with locale separators, e.g. `1,234.56`
pub fn decimal(value: f64, decimals: usize, locale: Locale) -> String {
    let (thousands, point) = separators(locale);
    let text = fixed(value, decimals);

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(thousands);
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}{point}{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Large currency value in billions, e.g. `1.50 billion USD`
pub fn billions(value: f64, currency: Option<&str>, locale: Locale) -> String {
    let amount = decimal(value / BILLION, 2, locale);
    let word = match locale {
        Locale::English => "billion",
        Locale::Chinese => "十亿",
    };

    match currency.filter(|c| !c.is_empty()) {
        Some(currency) => format!("{amount} {word} {currency}"),
        None => format!("{amount} {word}"),
    }
}

/// Percentage with two decimals; `value` is already in percent units
pub fn percent(value: f64, locale: Locale) -> String {
    format!("{}%", decimal(value, 2, locale))
}

/// Fraction as a whole percentage, e.g. `2.0` becomes `200%`
pub fn whole_percent(fraction: f64, locale: Locale) -> String {
    format!("{}%", decimal(fraction * 100.0, 0, locale))
}

/// Ratio or coefficient with two decimals, e.g. `3.00`
pub fn ratio(value: f64) -> String {
    fixed(value, 2)
}

/// Share price with currency code, e.g. `1,234.50 USD`
pub fn price(value: f64, currency: &str, locale: Locale) -> String {
    let amount = decimal(value, 2, locale);
    if currency.is_empty() {
        amount
    } else {
        format!("{amount} {currency}")
    }
}

/// Long-form date, e.g. `December 12, 1980` or `1980年12月12日`
pub fn long_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::English => date.format("%B %-d, %Y").to_string(),
        Locale::Chinese => date.format("%Y年%-m月%-d日").to_string(),
    }
}
