//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and the schema-driven form widgets while
//! reading/writing shared state from Leptos context providers.

pub mod field_input;
pub mod form_card;
pub mod header;
pub mod line_items;
pub mod sidebar;
pub mod tab_strip;
pub mod toaster;
