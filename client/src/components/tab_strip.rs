//! Tab strip for modules with several forms.

use forms::Module;
use leptos::prelude::*;

use crate::state::ui::UiState;

#[cfg(test)]
#[path = "tab_strip_test.rs"]
mod tab_strip_test;

pub fn tab_class(active: bool) -> &'static str {
    if active { "tabs__trigger tabs__trigger--active" } else { "tabs__trigger" }
}

#[component]
pub fn TabStrip(module: Module) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let slug = module.slug.clone();

    let triggers = module
        .forms
        .iter()
        .map(|form| {
            let active_module = module.clone();
            let tab = form.tab.clone();
            let is_active = move || ui.with(|u| u.active_tab(&active_module)).as_deref() == Some(tab.as_str());
            let is_active_aria = is_active.clone();
            let select_slug = slug.clone();
            let select_tab = form.tab.clone();
            view! {
                <button
                    type="button"
                    role="tab"
                    class=move || tab_class(is_active())
                    aria-selected=move || if is_active_aria() { "true" } else { "false" }
                    on:click=move |_| ui.update(|u| u.select_tab(&select_slug, &select_tab))
                >
                    {form.tab_label.clone()}
                </button>
            }
        })
        .collect_view();

    view! { <div class="tabs__list" role="tablist">{triggers}</div> }
}
