//! Page header with the module title and the drawer toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="page-header">
            <button
                type="button"
                class="page-header__menu btn btn--ghost"
                aria-label="Toggle sidebar"
                on:click=move |_| ui.update(UiState::toggle_sidebar)
            >
                "☰"
            </button>
            <h1 class="page-header__title">{title}</h1>
        </header>
    }
}
