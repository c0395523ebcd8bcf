//! Widget for one schema field, bound to a path in the form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every control writes raw input straight into `FormState` (numbers stay
//! strings until validation coerces them) and reads its error back by the same
//! dotted path. Groups and date ranges recurse with joined paths; line items
//! delegate to `line_items`.

use forms::path;
use forms::{Choice, FieldKind, FieldSpec, FormState};
use leptos::prelude::*;
use serde_json::Value;

use crate::components::line_items::LineItems;

#[cfg(test)]
#[path = "field_input_test.rs"]
mod field_input_test;

/// HTML `type` of a single-line input for `kind`.
pub fn input_type(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Number => "number",
        FieldKind::Date => "date",
        FieldKind::Month => "month",
        _ => "text",
    }
}

pub fn field_class(has_error: bool) -> &'static str {
    if has_error { "field field--error" } else { "field" }
}

/// Whether `kind` gets a label above the control. Checkboxes carry their own
/// label beside the box.
pub fn has_outer_label(kind: &FieldKind, bare: bool) -> bool {
    !bare && !matches!(kind, FieldKind::Checkbox)
}

/// Render `field` at `path`. `bare` drops the label (table cells).
#[component]
pub fn FieldInput(
    form: RwSignal<FormState>,
    field: FieldSpec,
    #[prop(into)] path: String,
    #[prop(optional)] bare: bool,
) -> AnyView {
    let placeholder = field.placeholder.clone().unwrap_or_default();
    let control = match field.kind.clone() {
        FieldKind::TextArea => textarea_control(form, path.clone(), placeholder),
        FieldKind::Select { options } => select_control(form, path.clone(), options),
        FieldKind::Radio { options } => radio_control(form, path.clone(), options),
        FieldKind::Checkbox => checkbox_control(form, path.clone(), field.label.clone()),
        FieldKind::Group { fields } => group_control(form, &path, fields),
        FieldKind::DateRange => range_control(form, &path),
        FieldKind::LineItems { .. } => view! { <LineItems form field=field.clone() /> }.into_any(),
        kind => text_control(form, path.clone(), input_type(&kind), placeholder),
    };

    let error_path = path.clone();
    let error = move || form.with(|s| s.error(&error_path).map(str::to_owned));
    let has_error = {
        let error = error.clone();
        move || error().is_some()
    };
    let label = has_outer_label(&field.kind, bare)
        .then(|| view! { <label class="field__label" for=path.clone()>{field.label.clone()}</label> });

    view! {
        <div class=move || field_class(has_error())>
            {label}
            {control}
            {move || error().map(|message| view! { <p class="field__error">{message}</p> })}
        </div>
    }
    .into_any()
}

fn text_control(form: RwSignal<FormState>, path: String, kind: &'static str, placeholder: String) -> AnyView {
    let id = path.clone();
    let read = path.clone();
    view! {
        <input
            id=id
            class="field__input"
            type=kind
            placeholder=placeholder
            prop:value=move || form.with(|s| s.text(&read))
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                form.update(|s| {
                    s.set(&path, Value::String(raw));
                });
            }
        />
    }
    .into_any()
}

fn textarea_control(form: RwSignal<FormState>, path: String, placeholder: String) -> AnyView {
    let id = path.clone();
    let read = path.clone();
    view! {
        <textarea
            id=id
            class="field__input field__input--area"
            placeholder=placeholder
            prop:value=move || form.with(|s| s.text(&read))
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                form.update(|s| {
                    s.set(&path, Value::String(raw));
                });
            }
        ></textarea>
    }
    .into_any()
}

fn select_control(form: RwSignal<FormState>, path: String, options: Vec<Choice>) -> AnyView {
    let id = path.clone();
    let items = options
        .into_iter()
        .map(|choice| {
            let read = path.clone();
            let value = choice.value.clone();
            view! {
                <option value=choice.value prop:selected=move || form.with(|s| s.text(&read)) == value>
                    {choice.label}
                </option>
            }
        })
        .collect_view();
    view! {
        <select
            id=id
            class="field__input"
            on:change=move |ev| {
                let raw = event_target_value(&ev);
                form.update(|s| {
                    s.set(&path, Value::String(raw));
                });
            }
        >
            {items}
        </select>
    }
    .into_any()
}

fn radio_control(form: RwSignal<FormState>, path: String, options: Vec<Choice>) -> AnyView {
    let items = options
        .into_iter()
        .map(|choice| {
            let read = path.clone();
            let write = path.clone();
            let current = choice.value.clone();
            let picked = choice.value.clone();
            view! {
                <label class="field__radio">
                    <input
                        type="radio"
                        name=path.clone()
                        value=choice.value
                        prop:checked=move || form.with(|s| s.text(&read)) == current
                        on:change=move |_| {
                            let picked = picked.clone();
                            form.update(|s| {
                                s.set(&write, Value::String(picked));
                            });
                        }
                    />
                    <span>{choice.label}</span>
                </label>
            }
        })
        .collect_view();
    view! { <div class="field__radios" role="radiogroup">{items}</div> }.into_any()
}

fn checkbox_control(form: RwSignal<FormState>, path: String, label: String) -> AnyView {
    let read = path.clone();
    view! {
        <label class="field__checkbox">
            <input
                type="checkbox"
                prop:checked=move || form.with(|s| matches!(s.value(&read), Some(Value::Bool(true))))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    form.update(|s| {
                        s.set(&path, Value::Bool(checked));
                    });
                }
            />
            <span>{label}</span>
        </label>
    }
    .into_any()
}

fn group_control(form: RwSignal<FormState>, at: &str, fields: Vec<FieldSpec>) -> AnyView {
    let children = fields
        .into_iter()
        .map(|child| {
            let child_path = path::join(at, &child.name);
            view! { <FieldInput form field=child path=child_path /> }
        })
        .collect_view();
    view! { <div class="field__group">{children}</div> }.into_any()
}

fn range_control(form: RwSignal<FormState>, at: &str) -> AnyView {
    let bound = |end: &str, label: &str| {
        let spec = FieldSpec::date(end, label);
        let bound_path = path::join(at, end);
        view! { <FieldInput form field=spec path=bound_path /> }
    };
    view! { <div class="field__range">{bound("from", "From")} {bound("to", "To")}</div> }.into_any()
}
