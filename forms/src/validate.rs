//! Coercion and validation of raw form records against a [`FormSchema`].
//!
//! DESIGN
//! ======
//! Validation walks the schema, not the record: unknown keys are dropped, and
//! every declared field ends up either in the normalised payload or in the
//! error map. Errors are keyed by dotted path (see [`crate::path`]).
//!
//! - Numbers are coerced from strings. Blank input becomes `0`; a number with
//!   no value at all is "Expected number, received nan".
//! - Rules run in declaration order and the first failure per field wins.
//! - Optional fields with no value are omitted and skip their rules. Optional
//!   numbers still coerce blank input to `0`.
//! - Refinements only run when every field they read passed.
//!
//! Messages follow the wording users already see from the web validation layer
//! ("String must contain at least 1 character(s)", "Required", ...), unless
//! the schema supplies its own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::Date;

use crate::Record;
use crate::clock::{self, parse_date, parse_month};
use crate::path;
use crate::schema::{Choice, FieldKind, FieldSpec, FormSchema, Refinement, Rule};

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

const NAN_MESSAGE: &str = "Expected number, received nan";
const REQUIRED_MESSAGE: &str = "Required";
const INVALID_DATE_MESSAGE: &str = "Invalid date";

/// Path-keyed validation failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(transparent)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Message for `path`, if that path failed.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(path, message)| (path.as_str(), message.as_str()))
    }

    /// Record a failure. An existing message for the same path is kept.
    pub fn insert(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.entry(path.into()).or_insert_with(|| message.into());
    }

    /// Drop the message for `path`.
    pub fn clear(&mut self, path: &str) {
        self.0.remove(path);
    }

    /// Whether `path` or anything below it failed.
    #[must_use]
    pub fn touches(&self, path: &str) -> bool {
        let nested = format!("{path}.");
        self.0.keys().any(|key| key == path || key.starts_with(&nested))
    }
}

/// Coerce a raw value to a finite number.
///
/// Strings are trimmed and a blank string is zero. Booleans map to 0/1.
///
/// # Errors
///
/// Returns the user-facing message when the value is not numeric.
pub fn coerce_number(raw: &Value) -> Result<f64, String> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::Array(_) | Value::Object(_) => None,
    };
    parsed.filter(|n| n.is_finite()).ok_or_else(|| NAN_MESSAGE.to_owned())
}

/// Validate `record` against `schema` using the current date for date bounds.
///
/// # Errors
///
/// Returns every failing path when any field or refinement fails.
pub fn validate(schema: &FormSchema, record: &Record) -> Result<Record, ValidationErrors> {
    validate_at(schema, record, clock::today())
}

/// Validate `record` against `schema` with an explicit "today".
///
/// # Errors
///
/// Returns every failing path when any field or refinement fails.
pub fn validate_at(schema: &FormSchema, record: &Record, today: Date) -> Result<Record, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let payload = check_fields(&schema.fields, record, "", today, &mut errors);

    for refinement in &schema.refinements {
        check_refinement(refinement, &payload, &mut errors);
    }

    if errors.is_empty() { Ok(payload) } else { Err(errors) }
}

fn check_fields(fields: &[FieldSpec], record: &Record, prefix: &str, today: Date, errors: &mut ValidationErrors) -> Record {
    let mut out = Map::new();
    for field in fields {
        let at = path::join(prefix, &field.name);
        if let Some(value) = check_field(field, record.get(&field.name), &at, today, errors) {
            out.insert(field.name.clone(), value);
        }
    }
    out
}

/// Validate one field; `None` means "leave out of the payload".
fn check_field(field: &FieldSpec, raw: Option<&Value>, at: &str, today: Date, errors: &mut ValidationErrors) -> Option<Value> {
    let raw = match raw {
        Some(value) if field.optional && omitted_when_optional(&field.kind, value) => return None,
        None if field.optional => return None,
        Some(value) if !value.is_null() => value,
        _ => {
            let fallback = if matches!(field.kind, FieldKind::Number) { NAN_MESSAGE } else { REQUIRED_MESSAGE };
            errors.insert(at, field.required_message.as_deref().unwrap_or(fallback));
            return None;
        }
    };

    let result = match &field.kind {
        FieldKind::Text | FieldKind::TextArea => check_text(field, raw),
        FieldKind::Number => check_number(field, raw),
        FieldKind::Date => check_date(field, raw, parse_date, today),
        FieldKind::Month => check_date(field, raw, parse_month, today),
        FieldKind::Select { options } | FieldKind::Radio { options } => check_choice(raw, options),
        FieldKind::Checkbox => match raw {
            Value::Bool(_) => Ok(raw.clone()),
            other => Err(type_mismatch("boolean", other)),
        },
        FieldKind::Group { fields } => match raw {
            Value::Object(map) => Ok(Value::Object(check_fields(fields, map, at, today, errors))),
            other => Err(type_mismatch("object", other)),
        },
        FieldKind::DateRange => check_date_range(raw, at, today, errors),
        FieldKind::LineItems { fields, .. } => check_rows(field, fields, raw, at, today, errors),
    };

    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(at, message);
            None
        }
    }
}

/// Blank optional input is left out, except that a blank number input still
/// coerces to 0 and stays in the payload.
fn omitted_when_optional(kind: &FieldKind, value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty() && !matches!(kind, FieldKind::Number),
        _ => false,
    }
}

fn check_text(field: &FieldSpec, raw: &Value) -> Result<Value, String> {
    let Value::String(text) = raw else {
        return Err(type_mismatch("string", raw));
    };
    let chars = text.chars().count();
    for rule in &field.rules {
        let failure = match rule {
            Rule::MinLen { len, message } if chars < *len => {
                Some(message.clone().unwrap_or_else(|| format!("String must contain at least {len} character(s)")))
            }
            Rule::MaxLen { len, message } if chars > *len => {
                Some(message.clone().unwrap_or_else(|| format!("String must contain at most {len} character(s)")))
            }
            Rule::Len { len, message } if chars != *len => {
                Some(message.clone().unwrap_or_else(|| format!("String must contain exactly {len} character(s)")))
            }
            _ => None,
        };
        if let Some(message) = failure {
            return Err(message);
        }
    }
    Ok(raw.clone())
}

fn check_number(field: &FieldSpec, raw: &Value) -> Result<Value, String> {
    let number = coerce_number(raw)?;
    for rule in &field.rules {
        let failure = match rule {
            Rule::Min { value, message } if number < *value => Some(
                message
                    .clone()
                    .unwrap_or_else(|| format!("Number must be greater than or equal to {value}")),
            ),
            Rule::Max { value, message } if number > *value => {
                Some(message.clone().unwrap_or_else(|| format!("Number must be less than or equal to {value}")))
            }
            _ => None,
        };
        if let Some(message) = failure {
            return Err(message);
        }
    }
    serde_json::Number::from_f64(number)
        .map(Value::Number)
        .ok_or_else(|| NAN_MESSAGE.to_owned())
}

fn check_date(field: &FieldSpec, raw: &Value, parse: fn(&str) -> Option<Date>, today: Date) -> Result<Value, String> {
    let Value::String(text) = raw else {
        return Err(type_mismatch("string", raw));
    };
    let date = parse(text).ok_or_else(|| INVALID_DATE_MESSAGE.to_owned())?;
    for rule in &field.rules {
        let failure = match rule {
            Rule::NotFuture { message } if date > today => {
                Some(message.clone().unwrap_or_else(|| "Date cannot be in the future".to_owned()))
            }
            Rule::NotBefore { date: floor, message } => match parse_date(floor) {
                Some(floor) if date < floor => Some(
                    message
                        .clone()
                        .unwrap_or_else(|| format!("Date cannot be before {}", clock::format_date(floor))),
                ),
                _ => None,
            },
            _ => None,
        };
        if let Some(message) = failure {
            return Err(message);
        }
    }
    Ok(Value::String(text.trim().to_owned()))
}

fn check_choice(raw: &Value, options: &[Choice]) -> Result<Value, String> {
    let Value::String(text) = raw else {
        return Err(type_mismatch("string", raw));
    };
    if options.iter().any(|choice| choice.value == *text) {
        return Ok(raw.clone());
    }
    let expected = options
        .iter()
        .map(|choice| format!("'{}'", choice.value))
        .collect::<Vec<_>>()
        .join(" | ");
    Err(format!("Invalid enum value. Expected {expected}, received '{text}'"))
}

fn check_date_range(raw: &Value, at: &str, today: Date, errors: &mut ValidationErrors) -> Result<Value, String> {
    let Value::Object(map) = raw else {
        return Err(type_mismatch("object", raw));
    };
    let bound = FieldSpec::date("", "");
    let mut out = Map::new();
    for end in ["from", "to"] {
        let end_path = path::join(at, end);
        if let Some(value) = check_field(&bound, map.get(end), &end_path, today, errors) {
            out.insert(end.to_owned(), value);
        }
    }
    Ok(Value::Object(out))
}

fn check_rows(
    field: &FieldSpec,
    row_fields: &[FieldSpec],
    raw: &Value,
    at: &str,
    today: Date,
    errors: &mut ValidationErrors,
) -> Result<Value, String> {
    let Value::Array(rows) = raw else {
        return Err(type_mismatch("array", raw));
    };

    let mut out = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let row_path = path::join(at, &index.to_string());
        match row {
            Value::Object(map) => out.push(Value::Object(check_fields(row_fields, map, &row_path, today, errors))),
            other => errors.insert(row_path, type_mismatch("object", other)),
        }
    }

    for rule in &field.rules {
        if let Rule::MinRows { rows: min, message } = rule {
            if rows.len() < *min {
                return Err(message
                    .clone()
                    .unwrap_or_else(|| format!("Array must contain at least {min} element(s)")));
            }
        }
    }
    Ok(Value::Array(out))
}

fn check_refinement(refinement: &Refinement, payload: &Record, errors: &mut ValidationErrors) {
    match refinement {
        Refinement::LessOrEqual { field, limit, message } => {
            if errors.touches(field) || errors.touches(limit) {
                return;
            }
            let value = path::get(payload, field).and_then(Value::as_f64);
            let ceiling = path::get(payload, limit).and_then(Value::as_f64);
            if let (Some(value), Some(ceiling)) = (value, ceiling) {
                if value > ceiling {
                    errors.insert(field.as_str(), message.as_str());
                }
            }
        }
        Refinement::DateOrder { start, end, message } => {
            if errors.touches(start) || errors.touches(end) {
                return;
            }
            let first = path::get(payload, start).and_then(Value::as_str).and_then(parse_date);
            let last = path::get(payload, end).and_then(Value::as_str).and_then(parse_date);
            if let (Some(first), Some(last)) = (first, last) {
                if last < first {
                    errors.insert(end.as_str(), message.as_str());
                }
            }
        }
    }
}

fn type_mismatch(expected: &str, received: &Value) -> String {
    let received = match received {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("Expected {expected}, received {received}")
}
