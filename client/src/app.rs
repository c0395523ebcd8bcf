//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::sidebar::{DASHBOARD_HREF, Sidebar};
use crate::components::toaster::Toaster;
use crate::pages::{module::ModulePage, not_found::NotFoundPage, overview::OverviewPage};
use crate::state::{toasts::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(ui);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/apex-erp.css"/>
        <Title text="ApexERP - Unified Manufacturing Management"/>
        <Meta name="description" content="A robust, industrial-grade Manufacturing ERP for streamlined operations."/>

        <Router>
            <div class="dashboard">
                <Sidebar/>
                <main class="dashboard__main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_HREF/> }/>
                        <Route path=StaticSegment("dashboard") view=OverviewPage/>
                        <Route path=(StaticSegment("dashboard"), ParamSegment("module")) view=ModulePage/>
                    </Routes>
                </main>
            </div>
            <Toaster/>
        </Router>
    }
}
