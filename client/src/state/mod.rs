//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` chrome, `toasts`) so components depend on
//! small focused models. Form values live with the page that renders them.

pub mod toasts;
pub mod ui;
