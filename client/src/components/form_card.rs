//! Card rendering one form from its schema.
//!
//! SYSTEM CONTEXT
//! ==============
//! The card knows nothing about individual forms. It lays out read-only
//! boxes, fields, derived values and the optional reference table, then runs
//! the submit cycle: validate locally, log, toast, and report to the server.

use forms::{FormState, StaticTable};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::field_input::FieldInput;
use crate::components::toaster::show_toast;
use crate::state::toasts::ToastState;
use crate::util::console;

#[component]
pub fn FormCard(form: RwSignal<FormState>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let schema = form.with_untracked(|s| s.schema.clone());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(submission)) = form.try_update(FormState::submit) else {
            return;
        };
        console::log_submission(&submission);
        show_toast(toasts, &submission.notification);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(crate::net::api::report_submission(submission.form_id, submission.payload));
        }
    };

    let readonly = schema
        .readonly
        .iter()
        .map(|ro| {
            view! {
                <div class="field">
                    <label class="field__label">{ro.label.clone()}</label>
                    <input class="field__input" disabled placeholder=ro.placeholder.clone() />
                </div>
            }
        })
        .collect_view();

    let fields = schema
        .fields
        .iter()
        .map(|field| view! { <FieldInput form field=field.clone() path=field.name.clone() /> })
        .collect_view();

    let derived = move || {
        form.with(FormState::derived)
            .into_iter()
            .map(|value| {
                view! {
                    <div class="field derived">
                        <span class="field__label">{value.label}</span>
                        <output class="field__input derived__value">{value.display}</output>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="card form-card" id=schema.id.clone()>
            <header class="card__header">
                <h2 class="card__title">{schema.title.clone()}</h2>
                {schema.description.clone().map(|d| view! { <p class="card__description">{d}</p> })}
            </header>
            <form class="card__content form-grid" novalidate on:submit=on_submit>
                {readonly}
                {fields}
                {derived}
                <div class="form-grid__actions">
                    <button type="submit" class="btn btn--primary">
                        {schema.submit_label.clone()}
                    </button>
                </div>
            </form>
            {schema.table.clone().map(|table| view! { <ReferenceTable table /> })}
        </section>
    }
}

#[component]
fn ReferenceTable(table: StaticTable) -> impl IntoView {
    view! {
        <div class="card__content">
            <h3 class="card__subtitle">{table.title}</h3>
            <table class="data-table">
                <thead>
                    <tr>{table.columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}</tr>
                </thead>
                <tbody>
                    {table
                        .rows
                        .into_iter()
                        .map(|row| {
                            view! { <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}</tr> }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
