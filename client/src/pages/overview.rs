//! Dashboard landing page: one card per module.

use forms::{Module, catalog};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::header::Header;
use crate::components::sidebar::module_href;

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

/// Card subtitle summarising what a module page holds.
pub fn form_count_label(module: &Module) -> String {
    match module.forms.len() {
        0 => "Overview".to_owned(),
        1 => "1 form".to_owned(),
        n => format!("{n} forms"),
    }
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let cards = catalog()
        .modules()
        .iter()
        .map(|module| {
            view! {
                <A href=module_href(&module.slug) attr:class="card module-card">
                    <h2 class="card__title">{module.title.clone()}</h2>
                    <p class="card__description">{form_count_label(module)}</p>
                </A>
            }
        })
        .collect_view();

    view! {
        <Header title="Dashboard" />
        <div class="page-body module-grid">{cards}</div>
    }
}
