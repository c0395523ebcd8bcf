//! Live state of one form: raw values, current errors, submit/reset cycle.
//!
//! `FormState` is what a UI binds to. It owns its schema so it can live inside
//! a reactive signal without borrowing from the catalog.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::Date;

use crate::Record;
use crate::clock;
use crate::derive::{self, DerivedValue};
use crate::path;
use crate::schema::{FieldKind, FormSchema, Notification};
use crate::validate::{self, ValidationErrors};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Result of a successful submit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub form_id: String,
    pub payload: Record,
    pub notification: Notification,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub schema: FormSchema,
    pub values: Record,
    pub errors: ValidationErrors,
    pub today: Date,
    /// Successful submits since creation.
    pub submissions: u32,
}

impl FormState {
    /// Fresh state seeded from schema defaults, dated today.
    #[must_use]
    pub fn new(schema: FormSchema) -> Self {
        Self::with_today(schema, clock::today())
    }

    #[must_use]
    pub fn with_today(schema: FormSchema, today: Date) -> Self {
        let values = schema.defaults(today);
        Self { schema, values, errors: ValidationErrors::new(), today, submissions: 0 }
    }

    /// Current raw value at `path`.
    #[must_use]
    pub fn value(&self, path: &str) -> Option<&Value> {
        path::get(&self.values, path)
    }

    /// Raw value at `path` rendered for a text input.
    #[must_use]
    pub fn text(&self, path: &str) -> String {
        match self.value(path) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string()),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    #[must_use]
    pub fn error(&self, path: &str) -> Option<&str> {
        self.errors.get(path)
    }

    /// Write a value and clear the error shown for that path.
    ///
    /// Returns `false` if the path does not address a writable slot.
    pub fn set(&mut self, path: &str, value: Value) -> bool {
        let written = path::set(&mut self.values, path, value);
        if written {
            self.errors.clear(path);
        }
        written
    }

    /// Append a default row to the line-items field `list`.
    pub fn add_row(&mut self, list: &str) -> bool {
        let Some(row) = self.schema.field_named(list).and_then(|f| f.default_row(self.today)) else {
            return false;
        };
        match self.values.get_mut(list) {
            Some(Value::Array(rows)) => rows.push(Value::Object(row)),
            _ => {
                self.values.insert(list.to_owned(), Value::Array(vec![Value::Object(row)]));
            }
        }
        self.errors.clear(list);
        true
    }

    /// Remove row `index` of `list`. The last remaining row is never removed.
    pub fn remove_row(&mut self, list: &str, index: usize) -> bool {
        let Some(Value::Array(rows)) = self.values.get_mut(list) else {
            return false;
        };
        if rows.len() <= 1 || index >= rows.len() {
            return false;
        }
        rows.remove(index);
        // Row errors are keyed by index, so they no longer line up.
        let prefix = format!("{list}.");
        let stale: Vec<String> = self
            .errors
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(key, _)| key.to_owned())
            .collect();
        for key in stale {
            self.errors.clear(&key);
        }
        true
    }

    /// Number of rows in the line-items field `list`.
    #[must_use]
    pub fn row_count(&self, list: &str) -> usize {
        match self.values.get(list) {
            Some(Value::Array(rows)) => rows.len(),
            _ => 0,
        }
    }

    /// Names of the line-items fields of this form.
    #[must_use]
    pub fn lists(&self) -> Vec<&str> {
        self.schema
            .fields
            .iter()
            .filter(|f| matches!(f.kind, FieldKind::LineItems { .. }))
            .map(|f| f.name.as_str())
            .collect()
    }

    #[must_use]
    pub fn derived(&self) -> Vec<DerivedValue> {
        derive::derive_all(&self.schema, &self.values)
    }

    /// Validate current values, replacing `errors`.
    ///
    /// # Errors
    ///
    /// Returns a copy of the new errors when validation fails.
    pub fn validate(&mut self) -> Result<Record, ValidationErrors> {
        match validate::validate_at(&self.schema, &self.values, self.today) {
            Ok(payload) => {
                self.errors = ValidationErrors::new();
                Ok(payload)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Validate and, on success, reset (unless the form keeps its values).
    ///
    /// # Errors
    ///
    /// Returns the validation errors; values are left as entered.
    pub fn submit(&mut self) -> Result<Submission, ValidationErrors> {
        let payload = self.validate()?;
        self.submissions += 1;
        if self.schema.resets_on_submit {
            self.reset();
        }
        Ok(Submission {
            form_id: self.schema.id.clone(),
            payload,
            notification: self.schema.notification.clone(),
        })
    }

    /// Restore defaults and clear errors.
    pub fn reset(&mut self) {
        self.values = self.schema.defaults(self.today);
        self.errors = ValidationErrors::new();
    }
}
