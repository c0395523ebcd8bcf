//! Read-only computed values shown beside a form (totals, differences, taxes).
//!
//! Formulas read the live, possibly unvalidated record. Anything missing or
//! non-numeric counts as zero so a half-filled form still shows a number.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Record;
use crate::path;
use crate::schema::FormSchema;

#[cfg(test)]
#[path = "derive_test.rs"]
mod derive_test;

/// Arithmetic over named fields of a record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Formula {
    /// `minuend - subtrahend`.
    Difference { minuend: String, subtrahend: String },
    /// Sum of the listed fields.
    Sum { fields: Vec<String> },
    /// `sum(coefficient * field)`.
    Linear { terms: Vec<(String, f64)> },
    /// `base * rate / 100`.
    Percent { base: String, rate: String },
    /// A fixed figure.
    Constant { value: f64 },
}

impl Formula {
    #[must_use]
    pub fn difference(minuend: &str, subtrahend: &str) -> Self {
        Self::Difference { minuend: minuend.to_owned(), subtrahend: subtrahend.to_owned() }
    }

    #[must_use]
    pub fn sum(fields: &[&str]) -> Self {
        Self::Sum { fields: fields.iter().map(|f| (*f).to_owned()).collect() }
    }

    #[must_use]
    pub fn linear(terms: &[(&str, f64)]) -> Self {
        Self::Linear { terms: terms.iter().map(|(f, c)| ((*f).to_owned(), *c)).collect() }
    }

    #[must_use]
    pub fn percent(base: &str, rate: &str) -> Self {
        Self::Percent { base: base.to_owned(), rate: rate.to_owned() }
    }

    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::Constant { value }
    }

    /// Evaluate against `record`.
    #[must_use]
    pub fn evaluate(&self, record: &Record) -> f64 {
        let read = |name: &str| number_or_zero(path::get(record, name));
        match self {
            Self::Difference { minuend, subtrahend } => read(minuend) - read(subtrahend),
            Self::Sum { fields } => fields.iter().map(|f| read(f)).sum(),
            Self::Linear { terms } => terms.iter().map(|(f, c)| c * read(f)).sum(),
            Self::Percent { base, rate } => read(base) * read(rate) / 100.0,
            Self::Constant { value } => *value,
        }
    }
}

fn number_or_zero(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite()).unwrap_or(0.0)
}

/// A computed value ready for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedValue {
    pub label: String,
    pub value: f64,
    /// `value` with two decimals.
    pub display: String,
}

/// Two-decimal rendering used by every derived box.
#[must_use]
pub fn format_amount(value: f64) -> String {
    // Avoid "-0.00" for values that round to zero.
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.abs() < f64::EPSILON {
        return "0.00".to_owned();
    }
    format!("{rounded:.2}")
}

/// Evaluate every derived field of `schema` against `record`.
#[must_use]
pub fn derive_all(schema: &FormSchema, record: &Record) -> Vec<DerivedValue> {
    schema
        .derived
        .iter()
        .map(|derived| {
            let value = derived.formula.evaluate(record);
            DerivedValue { label: derived.label.clone(), value, display: format_amount(value) }
        })
        .collect()
}
