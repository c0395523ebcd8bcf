//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is immutable after startup, so the only mutable piece is a
//! submission counter; no locks are needed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use forms::Catalog;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    submissions: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog: Arc::new(catalog), submissions: Arc::new(AtomicU64::new(0)) }
    }

    /// Count one accepted submission and return its sequence number (1-based).
    pub fn record_submission(&self) -> u64 {
        self.submissions.fetch_add(1, Ordering::Relaxed) + 1
    }

    #[must_use]
    pub fn submission_count(&self) -> u64 {
        self.submissions.load(Ordering::Relaxed)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// State over the full application catalog.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Catalog::standard())
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
