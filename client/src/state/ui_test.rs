use super::*;

fn hr() -> &'static Module {
    forms::catalog().module("hr").unwrap()
}

#[test]
fn ui_state_default_sidebar_closed() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
    assert!(state.active_tabs.is_empty());
}

#[test]
fn toggle_and_close_sidebar() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.close_sidebar();
    assert!(!state.sidebar_open);
}

#[test]
fn active_tab_defaults_to_first() {
    let state = UiState::default();
    assert_eq!(state.active_tab(hr()).as_deref(), Some("employee-master"));
}

#[test]
fn selected_tab_is_remembered_per_module() {
    let mut state = UiState::default();
    state.select_tab("hr", "salary-sheet");
    assert_eq!(state.active_tab(hr()).as_deref(), Some("salary-sheet"));
    let assets = forms::catalog().module("assets").unwrap();
    assert_eq!(state.active_tab(assets).as_deref(), Some("asset-master"));
}

#[test]
fn stale_tab_falls_back_to_first() {
    let mut state = UiState::default();
    state.select_tab("hr", "retired-tab");
    assert_eq!(state.active_tab(hr()).as_deref(), Some("employee-master"));
}

#[test]
fn placeholder_module_has_no_tab() {
    let state = UiState::default();
    assert_eq!(state.active_tab(forms::catalog().module("reports").unwrap()), None);
}
