//! Two-column comparison tables

use crate::labels::Label;
use crate::metrics::Symbol;
use compare_templates::Locale;
use serde::Serialize;

/// One labelled row of formatted values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactRow {
    pub label: String,
    pub value_a: String,
    pub value_b: String,
}

/// Side-by-side facts for two subjects, values already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactSheet {
    /// Header of the label column (`Symbol` / `代码`)
    pub label_header: String,
    pub subject_a: Symbol,
    pub subject_b: Symbol,
    pub rows: Vec<FactRow>,
}

impl FactSheet {
    pub fn new(subject_a: Symbol, subject_b: Symbol, locale: Locale) -> Self {
        Self {
            label_header: Label::Symbol.text(locale).to_string(),
            subject_a,
            subject_b,
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn row(
        mut self,
        label: Label,
        locale: Locale,
        value_a: impl Into<String>,
        value_b: impl Into<String>,
    ) -> Self {
        self.rows.push(FactRow {
            label: label.text(locale).to_string(),
            value_a: value_a.into(),
            value_b: value_b.into(),
        });
        self
    }

    pub fn header(&self) -> [&str; 3] {
        [
            self.label_header.as_str(),
            self.subject_a.as_str(),
            self.subject_b.as_str(),
        ]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_sheet_rows() {
        let sheet = FactSheet::new(
            Symbol::new("KO").unwrap(),
            Symbol::new("PEP").unwrap(),
            Locale::Chinese,
        )
        .row(Label::DividendYieldTtm, Locale::Chinese, "2.85%", "3.60%");

        assert_eq!(sheet.header(), ["代码", "KO", "PEP"]);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.rows[0].label, "股息率 (TTM)");
        assert_eq!(sheet.rows[0].value_b, "3.60%");
    }
}
