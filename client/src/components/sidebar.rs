//! Sidebar navigation: dashboard link, one link per module, settings footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Link order comes from the catalog. On narrow screens the sidebar is a
//! drawer (`UiState::sidebar_open`) that closes whenever a link is followed.

use forms::{NavPlacement, catalog};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

pub const DASHBOARD_HREF: &str = "/dashboard";

pub fn module_href(slug: &str) -> String {
    format!("{DASHBOARD_HREF}/{slug}")
}

/// The dashboard link matches exactly; module links also match nested paths.
pub fn is_active(pathname: &str, href: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    if href == DASHBOARD_HREF {
        return pathname == DASHBOARD_HREF;
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

pub fn nav_class(active: bool) -> &'static str {
    if active { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
}

pub fn sidebar_class(open: bool) -> &'static str {
    if open { "sidebar sidebar--open" } else { "sidebar" }
}

pub fn scrim_class(open: bool) -> &'static str {
    if open { "sidebar__scrim sidebar__scrim--visible" } else { "sidebar__scrim" }
}

#[component]
fn NavLink(href: String, label: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let target = href.clone();
    let active = move || location.pathname.with(|path| is_active(path, &target));

    view! {
        <li>
            <A href=href attr:class=move || nav_class(active()) on:click=move |_| ui.update(UiState::close_sidebar)>
                {label}
            </A>
        </li>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let links = |placement| {
        catalog()
            .nav(placement)
            .map(|module| view! { <NavLink href=module_href(&module.slug) label=module.nav_label.clone() /> })
            .collect_view()
    };

    view! {
        <aside class=move || sidebar_class(ui.with(|u| u.sidebar_open))>
            <div class="sidebar__header">
                <span class="sidebar__logo" aria-hidden="true">"◆"</span>
                <span class="sidebar__brand">"ApexERP"</span>
            </div>
            <nav class="sidebar__content">
                <ul class="sidebar__menu">
                    <NavLink href=DASHBOARD_HREF.to_owned() label="Dashboard".to_owned() />
                    {links(NavPlacement::Main)}
                </ul>
            </nav>
            <div class="sidebar__footer">
                <ul class="sidebar__menu">{links(NavPlacement::Footer)}</ul>
                <div class="sidebar__user">
                    <span class="avatar">"JD"</span>
                    <div class="sidebar__user-text">
                        <span class="sidebar__user-name">"John Doe"</span>
                        <span class="sidebar__user-role">"Admin"</span>
                    </div>
                </div>
            </div>
        </aside>
        <div
            class=move || scrim_class(ui.with(|u| u.sidebar_open))
            on:click=move |_| ui.update(UiState::close_sidebar)
        ></div>
    }
}
