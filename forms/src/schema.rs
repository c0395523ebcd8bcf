//! Declarative form schema: fields, widgets, constraints and submit behavior.
//!
//! DESIGN
//! ======
//! A schema is plain data (serializable, cloneable) rather than a Rust type per
//! form. The server exposes it as JSON, the client renders from it, and the
//! validator interprets it. Builders keep the catalog files close to a
//! one-line-per-field declaration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::Date;

use crate::Record;
use crate::clock::{format_date, format_month};
use crate::derive::Formula;

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

/// One entry of a select or radio group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Value stored in the record.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

/// Widget and value shape of a field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Date,
    Month,
    Select { options: Vec<Choice> },
    Radio { options: Vec<Choice> },
    Checkbox,
    /// Nested fields stored as an object under this field's name.
    Group { fields: Vec<FieldSpec> },
    /// `{ "from": date, "to": date }`.
    DateRange,
    /// Repeating rows stored as an array of records.
    LineItems { fields: Vec<FieldSpec>, add_label: String },
}

impl FieldKind {
    /// Options for select and radio kinds; empty for everything else.
    #[must_use]
    pub fn options(&self) -> &[Choice] {
        match self {
            Self::Select { options } | Self::Radio { options } => options,
            _ => &[],
        }
    }
}

/// Initial value of a field when a form is created or reset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DefaultValue {
    /// No value at all: "Required", or "Expected number, received nan" for numbers.
    Unset,
    Text(String),
    Number(f64),
    Bool(bool),
    /// The current date (or month, for month fields).
    Today,
    /// The current year as a four-digit string.
    CurrentYear,
}

/// A single field constraint. `message` overrides the generic error text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    MinLen { len: usize, message: Option<String> },
    MaxLen { len: usize, message: Option<String> },
    Len { len: usize, message: Option<String> },
    Min { value: f64, message: Option<String> },
    Max { value: f64, message: Option<String> },
    NotFuture { message: Option<String> },
    NotBefore { date: String, message: Option<String> },
    MinRows { rows: usize, message: Option<String> },
}

/// A field of a form (or of a line-item row / group).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub default: DefaultValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
    /// Empty values are dropped from the payload instead of being checked.
    #[serde(default)]
    pub optional: bool,
    /// Message used when the value is missing entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_message: Option<String>,
}

impl FieldSpec {
    fn new(name: &str, label: &str, kind: FieldKind, default: DefaultValue) -> Self {
        Self {
            name: name.to_owned(),
            label: label.to_owned(),
            kind,
            placeholder: None,
            default,
            rules: Vec::new(),
            optional: false,
            required_message: None,
        }
    }

    #[must_use]
    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text, DefaultValue::Text(String::new()))
    }

    #[must_use]
    pub fn textarea(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::TextArea, DefaultValue::Text(String::new()))
    }

    #[must_use]
    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Number, DefaultValue::Number(0.0))
    }

    #[must_use]
    pub fn date(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Date, DefaultValue::Today)
    }

    #[must_use]
    pub fn month(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Month, DefaultValue::Today)
    }

    #[must_use]
    pub fn checkbox(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Checkbox, DefaultValue::Bool(false))
    }

    #[must_use]
    pub fn date_range(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::DateRange, DefaultValue::Unset)
    }

    /// Select with `(value, label)` options; defaults to the first option.
    #[must_use]
    pub fn select(name: &str, label: &str, options: &[(&str, &str)]) -> Self {
        let options = choices(options);
        let default = first_choice(&options);
        Self::new(name, label, FieldKind::Select { options }, default)
    }

    /// Radio group with `(value, label)` options; defaults to the first option.
    #[must_use]
    pub fn radio(name: &str, label: &str, options: &[(&str, &str)]) -> Self {
        let options = choices(options);
        let default = first_choice(&options);
        Self::new(name, label, FieldKind::Radio { options }, default)
    }

    #[must_use]
    pub fn group(name: &str, label: &str, fields: Vec<FieldSpec>) -> Self {
        Self::new(name, label, FieldKind::Group { fields }, DefaultValue::Unset)
    }

    /// Repeating rows. Starts with one default row and requires at least one.
    #[must_use]
    pub fn line_items(name: &str, label: &str, add_label: &str, fields: Vec<FieldSpec>) -> Self {
        let kind = FieldKind::LineItems { fields, add_label: add_label.to_owned() };
        let mut spec = Self::new(name, label, kind, DefaultValue::Unset);
        spec.rules.push(Rule::MinRows { rows: 1, message: None });
        spec
    }

    /// Non-empty string (`min(1)`) with a custom message.
    #[must_use]
    pub fn required(mut self, message: &str) -> Self {
        self.rules.push(Rule::MinLen { len: 1, message: Some(message.to_owned()) });
        self
    }

    /// Non-empty string with the generic message.
    #[must_use]
    pub fn non_empty(self) -> Self {
        self.min_len(1, None)
    }

    #[must_use]
    pub fn min_len(mut self, len: usize, message: Option<&str>) -> Self {
        self.rules.push(Rule::MinLen { len, message: message.map(str::to_owned) });
        self
    }

    #[must_use]
    pub fn max_len(mut self, len: usize, message: Option<&str>) -> Self {
        self.rules.push(Rule::MaxLen { len, message: message.map(str::to_owned) });
        self
    }

    #[must_use]
    pub fn exact_len(mut self, len: usize, message: Option<&str>) -> Self {
        self.rules.push(Rule::Len { len, message: message.map(str::to_owned) });
        self
    }

    #[must_use]
    pub fn min(mut self, value: f64, message: Option<&str>) -> Self {
        self.rules.push(Rule::Min { value, message: message.map(str::to_owned) });
        self
    }

    #[must_use]
    pub fn max(mut self, value: f64, message: Option<&str>) -> Self {
        self.rules.push(Rule::Max { value, message: message.map(str::to_owned) });
        self
    }

    /// Date must lie between 1900-01-01 and today, the range the pickers allow.
    #[must_use]
    pub fn past_only(mut self) -> Self {
        self.rules.push(Rule::NotFuture { message: None });
        self.rules.push(Rule::NotBefore { date: "1900-01-01".to_owned(), message: None });
        self
    }

    /// Replace the minimum-rows message of a line-items field.
    #[must_use]
    pub fn min_rows_message(mut self, message: &str) -> Self {
        for rule in &mut self.rules {
            if let Rule::MinRows { message: slot, .. } = rule {
                *slot = Some(message.to_owned());
            }
        }
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_owned());
        self
    }

    #[must_use]
    pub fn default_text(mut self, text: &str) -> Self {
        self.default = DefaultValue::Text(text.to_owned());
        self
    }

    #[must_use]
    pub fn default_number(mut self, value: f64) -> Self {
        self.default = DefaultValue::Number(value);
        self
    }

    #[must_use]
    pub fn default_bool(mut self, value: bool) -> Self {
        self.default = DefaultValue::Bool(value);
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: DefaultValue) -> Self {
        self.default = value;
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub fn required_message(mut self, message: &str) -> Self {
        self.required_message = Some(message.to_owned());
        self
    }

    /// Default value of this field as JSON.
    #[must_use]
    pub fn default_json(&self, today: Date) -> Value {
        match (&self.kind, &self.default) {
            (FieldKind::Group { fields }, _) => Value::Object(defaults_for(fields, today)),
            (FieldKind::LineItems { fields, .. }, _) => {
                Value::Array(vec![Value::Object(defaults_for(fields, today))])
            }
            (_, DefaultValue::Unset) => Value::Null,
            (_, DefaultValue::Text(text)) => Value::String(text.clone()),
            (_, DefaultValue::Number(value)) => {
                serde_json::Number::from_f64(*value).map_or(Value::Null, Value::Number)
            }
            (_, DefaultValue::Bool(value)) => Value::Bool(*value),
            (FieldKind::Month, DefaultValue::Today) => Value::String(format_month(today)),
            (_, DefaultValue::Today) => Value::String(format_date(today)),
            (_, DefaultValue::CurrentYear) => Value::String(today.year().to_string()),
        }
    }

    /// Default row for a line-items field; `None` for other kinds.
    #[must_use]
    pub fn default_row(&self, today: Date) -> Option<Record> {
        match &self.kind {
            FieldKind::LineItems { fields, .. } => Some(defaults_for(fields, today)),
            _ => None,
        }
    }
}

/// Build the default record for a list of fields.
#[must_use]
pub fn defaults_for(fields: &[FieldSpec], today: Date) -> Record {
    fields
        .iter()
        .map(|field| (field.name.clone(), field.default_json(today)))
        .collect::<Map<String, Value>>()
}

fn choices(options: &[(&str, &str)]) -> Vec<Choice> {
    options
        .iter()
        .map(|(value, label)| Choice { value: (*value).to_owned(), label: (*label).to_owned() })
        .collect()
}

fn first_choice(options: &[Choice]) -> DefaultValue {
    options
        .first()
        .map_or(DefaultValue::Unset, |choice| DefaultValue::Text(choice.value.clone()))
}

/// Read-only box rendered next to the fields, e.g. "Journal No: Auto-generated".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOnlyField {
    pub label: String,
    pub placeholder: String,
}

/// Computed display value, e.g. "Closing Balance".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedField {
    pub label: String,
    pub formula: Formula,
}

/// Cross-field constraints checked after every field is individually valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Refinement {
    /// Numeric `field <= limit`; the error is reported on `field`.
    LessOrEqual { field: String, limit: String, message: String },
    /// Date `start <= end`; the error is reported on `end`.
    DateOrder { start: String, end: String, message: String },
}

/// Confirmation shown after a successful submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fixed reference table rendered under a form (e.g. cheque status tracker).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Complete description of one tabbed form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// `module.tab`, unique across the catalog.
    pub id: String,
    pub module: String,
    pub tab: String,
    pub tab_label: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub submit_label: String,
    pub notification: Notification,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub readonly: Vec<ReadOnlyField>,
    pub fields: Vec<FieldSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derived: Vec<DerivedField>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refinements: Vec<Refinement>,
    pub resets_on_submit: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<StaticTable>,
}

impl FormSchema {
    /// Start a schema for `module`/`tab`. The submit label defaults to "Save".
    #[must_use]
    pub fn new(module: &str, tab: &str, tab_label: &str, title: &str) -> Self {
        Self {
            id: format!("{module}.{tab}"),
            module: module.to_owned(),
            tab: tab.to_owned(),
            tab_label: tab_label.to_owned(),
            title: title.to_owned(),
            description: None,
            submit_label: "Save".to_owned(),
            notification: Notification { title: format!("{title} Saved"), description: None },
            readonly: Vec::new(),
            fields: Vec::new(),
            derived: Vec::new(),
            refinements: Vec::new(),
            resets_on_submit: true,
            table: None,
        }
    }

    #[must_use]
    pub fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_owned());
        self
    }

    #[must_use]
    pub fn submit_label(mut self, text: &str) -> Self {
        self.submit_label = text.to_owned();
        self
    }

    #[must_use]
    pub fn notify(mut self, title: &str) -> Self {
        self.notification = Notification { title: title.to_owned(), description: None };
        self
    }

    #[must_use]
    pub fn notify_with(mut self, title: &str, description: &str) -> Self {
        self.notification = Notification { title: title.to_owned(), description: Some(description.to_owned()) };
        self
    }

    /// Add an "Auto-generated" read-only box.
    #[must_use]
    pub fn auto_number(mut self, label: &str) -> Self {
        self.readonly
            .push(ReadOnlyField { label: label.to_owned(), placeholder: "Auto-generated".to_owned() });
        self
    }

    #[must_use]
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn derived(mut self, label: &str, formula: Formula) -> Self {
        self.derived.push(DerivedField { label: label.to_owned(), formula });
        self
    }

    #[must_use]
    pub fn refine(mut self, refinement: Refinement) -> Self {
        self.refinements.push(refinement);
        self
    }

    #[must_use]
    pub fn table(mut self, title: &str, columns: &[&str], rows: &[&[&str]]) -> Self {
        let owned = |cells: &[&str]| cells.iter().map(|c| (*c).to_owned()).collect::<Vec<_>>();
        self.table = Some(StaticTable {
            title: title.to_owned(),
            columns: owned(columns),
            rows: rows.iter().map(|row| owned(row)).collect(),
        });
        self
    }

    /// Keep the entered values after a successful submit.
    #[must_use]
    pub fn keep_values(mut self) -> Self {
        self.resets_on_submit = false;
        self
    }

    /// Look up a top-level field by name.
    #[must_use]
    pub fn field_named(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Default record for this form.
    #[must_use]
    pub fn defaults(&self, today: Date) -> Record {
        defaults_for(&self.fields, today)
    }
}
