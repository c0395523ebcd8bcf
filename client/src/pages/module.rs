//! Module page: header, tab strip and the form behind the selected tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form states are created once per page visit, one per tab, so switching tabs
//! keeps what was typed. Only the selected tab's card is mounted. Stacked
//! modules render every card; placeholder modules render a static card.

use forms::{FormState, Module, Placeholder, catalog};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::form_card::FormCard;
use crate::components::header::Header;
use crate::components::tab_strip::TabStrip;
use crate::pages::not_found::NotFoundPage;
use crate::state::ui::UiState;

#[component]
pub fn ModulePage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("module")).unwrap_or_default();

    move || match catalog().module(&slug()) {
        Ok(module) => view! { <ModuleView module=module.clone() /> }.into_any(),
        Err(_) => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn ModuleView(module: Module) -> impl IntoView {
    let title = module.title.clone();
    let body = if let Some(card) = module.placeholder.clone() {
        view! { <PlaceholderCard card /> }.into_any()
    } else if module.is_tabbed() {
        view! { <TabbedForms module /> }.into_any()
    } else {
        let cards = module
            .forms
            .iter()
            .map(|form| {
                let state = RwSignal::new(FormState::new(form.clone()));
                view! { <FormCard form=state /> }
            })
            .collect_view();
        view! { <div class="stack">{cards}</div> }.into_any()
    };

    view! {
        <Header title />
        <div class="page-body">{body}</div>
    }
}

#[component]
fn TabbedForms(module: Module) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let states: Vec<(String, RwSignal<FormState>)> = module
        .forms
        .iter()
        .map(|form| (form.tab.clone(), RwSignal::new(FormState::new(form.clone()))))
        .collect();

    let lookup = module.clone();
    let active = Memo::new(move |_| ui.with(|u| u.active_tab(&lookup)));
    let active_card = move || {
        let active = active.get()?;
        states
            .iter()
            .find(|(tab, _)| *tab == active)
            .map(|(_, state)| view! { <FormCard form=*state /> })
    };

    view! {
        <div class="tabs">
            <TabStrip module />
            <div class="tabs__content" role="tabpanel">{active_card}</div>
        </div>
    }
}

#[component]
fn PlaceholderCard(card: Placeholder) -> impl IntoView {
    view! {
        <section class="card">
            <header class="card__header">
                <h2 class="card__title">{card.title}</h2>
                <p class="card__description">{card.description}</p>
            </header>
            <div class="card__content">
                <p>{card.body}</p>
            </div>
        </section>
    }
}
