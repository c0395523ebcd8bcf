//! Editable table of line-item rows.

use forms::{FieldKind, FieldSpec, FormState};
use leptos::prelude::*;

use crate::components::field_input::FieldInput;

#[cfg(test)]
#[path = "line_items_test.rs"]
mod line_items_test;

/// Rows can be removed only while more than one remains.
pub fn can_remove(rows: usize) -> bool {
    rows > 1
}

pub fn cell_path(list: &str, index: usize, field: &str) -> String {
    format!("{list}.{index}.{field}")
}

#[component]
pub fn LineItems(form: RwSignal<FormState>, field: FieldSpec) -> impl IntoView {
    let FieldKind::LineItems { fields, add_label } = field.kind else {
        return ().into_any();
    };
    let list = field.name;

    let rows = {
        let list = list.clone();
        Memo::new(move |_| form.with(|s| s.row_count(&list)))
    };

    let headers = fields.iter().map(|f| view! { <th>{f.label.clone()}</th> }).collect_view();

    let row_view = {
        let list = list.clone();
        move |index: usize| {
            let cells = fields
                .iter()
                .map(|f| {
                    let path = cell_path(&list, index, &f.name);
                    view! {
                        <td>
                            <FieldInput form field=f.clone() path bare=true />
                        </td>
                    }
                })
                .collect_view();
            let remove_list = list.clone();
            view! {
                <tr>
                    {cells}
                    <td class="line-items__actions">
                        <Show when=move || can_remove(rows.get())>
                            {
                                let remove_list = remove_list.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="btn btn--ghost"
                                        aria-label="Remove row"
                                        on:click=move |_| {
                                            form.update(|s| {
                                                s.remove_row(&remove_list, index);
                                            });
                                        }
                                    >
                                        "Remove"
                                    </button>
                                }
                            }
                        </Show>
                    </td>
                </tr>
            }
        }
    };

    let add_list = list.clone();
    view! {
        <div class="line-items">
            <table class="line-items__table">
                <thead>
                    <tr>
                        {headers}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || 0..rows.get() key=|index| *index children=row_view />
                </tbody>
            </table>
            <button
                type="button"
                class="btn btn--outline"
                on:click=move |_| {
                    form.update(|s| {
                        s.add_row(&add_list);
                    });
                }
            >
                {add_label}
            </button>
        </div>
    }
    .into_any()
}
