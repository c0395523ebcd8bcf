//! Toast stack in the bottom corner of every page.

use forms::Notification;
use leptos::prelude::*;

use crate::state::toasts::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toasts::TOAST_DURATION_MS;

/// Queue a toast and schedule its dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, notification: &Notification) {
    let Some(id) = toasts.try_update(|t| t.push(notification)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <li class="toast" role="status">
                            <div class="toast__body">
                                <p class="toast__title">{toast.title}</p>
                                {toast.description.map(|d| view! { <p class="toast__description">{d}</p> })}
                            </div>
                            <button
                                type="button"
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
