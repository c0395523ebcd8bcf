//! Local UI chrome state (sidebar, selected tabs).
//!
//! DESIGN
//! ======
//! Presentation state only; form values live in `FormState`. The selected tab
//! of each module survives navigation between pages.

use std::collections::HashMap;

use forms::Module;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Sidebar drawer on narrow screens. Wide layouts always show it.
    pub sidebar_open: bool,
    /// Selected tab per module slug.
    pub active_tabs: HashMap<String, String>,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn select_tab(&mut self, module: &str, tab: &str) {
        self.active_tabs.insert(module.to_owned(), tab.to_owned());
    }

    /// Tab to show for `module`: the remembered one if it still exists,
    /// otherwise the first.
    #[must_use]
    pub fn active_tab(&self, module: &Module) -> Option<String> {
        self.active_tabs
            .get(&module.slug)
            .filter(|tab| module.tab(tab).is_some())
            .cloned()
            .or_else(|| module.default_tab().map(str::to_owned))
    }
}
