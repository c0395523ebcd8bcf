//! Shared form model, validation and ERP form catalog.
//!
//! This crate owns the declarative description of every data-entry screen used
//! by `server`, `client` and `cli`. Records stay flexible (`serde_json::Map`)
//! so one validator and one renderer can serve every form; the per-form shape
//! lives entirely in [`schema::FormSchema`] values built by [`catalog`].
//!
//! Flow for a single form:
//!
//! 1. [`state::FormState::new`] seeds values from the schema defaults.
//! 2. The UI writes raw input through [`state::FormState::set`].
//! 3. [`state::FormState::submit`] runs [`validate::validate_at`], and on success
//!    hands back a [`state::Submission`] and resets the form.

pub mod catalog;
pub mod clock;
pub mod derive;
pub mod path;
pub mod schema;
pub mod state;
pub mod validate;

pub use catalog::{Catalog, CatalogError, Module, NavPlacement, Placeholder, catalog};
pub use derive::{DerivedValue, Formula, format_amount};
pub use schema::{
    Choice, DefaultValue, DerivedField, FieldKind, FieldSpec, FormSchema, Notification, ReadOnlyField, Refinement,
    Rule, StaticTable,
};
pub use state::{FormState, Submission};
pub use validate::{ValidationErrors, coerce_number, validate, validate_at};

/// A single form record: field name to JSON value.
pub type Record = serde_json::Map<String, serde_json::Value>;
