//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only side effects live here behind `hydrate` gates, with no-op
//! fallbacks for SSR and native tests.

pub mod console;
