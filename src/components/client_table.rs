//! Client Table Component
//!
//! Paginated client rows plus the footer controls.

use leptos::prelude::*;

use crate::models::Client;
use crate::paging::{PageRequest, PAGE_SIZE_OPTIONS};

#[component]
pub fn ClientTable(
    clients: ReadSignal<Vec<Client>>,
    total: ReadSignal<u64>,
    page_req: ReadSignal<PageRequest>,
    #[prop(into)] on_edit: Callback<Client>,
    #[prop(into)] on_request_delete: Callback<String>,
    #[prop(into)] on_page_change: Callback<usize>,
    #[prop(into)] on_size_change: Callback<usize>,
) -> impl IntoView {
    let on_prev = move |_| {
        let req = page_req.get();
        if req.has_prev() {
            on_page_change.run(req.page() - 1);
        }
    };
    let on_next = move |_| {
        let req = page_req.get();
        if req.has_next(total.get()) {
            on_page_change.run(req.page() + 1);
        }
    };

    view! {
        <table class="client-table">
            <thead>
                <tr>
                    <th>"Identificador"</th>
                    <th>"Nombre Cliente"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || clients.get()
                    key=|client| client.id.clone()
                    children=move |client| {
                        let edit_target = client.clone();
                        let delete_id = client.id.clone();
                        view! {
                            <tr>
                                <td>{client.id.clone()}</td>
                                <td>{client.name.clone()}</td>
                                <td class="table-actions">
                                    <button
                                        class="edit-btn"
                                        title="Actualizar"
                                        on:click=move |_| on_edit.run(edit_target.clone())
                                    >
                                        "✎"
                                    </button>
                                    <button
                                        class="delete-btn"
                                        title="Eliminar"
                                        on:click=move |_| on_request_delete.run(delete_id.clone())
                                    >
                                        "×"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>

        <div class="table-pagination">
            <label class="page-size">
                "Rows per page:"
                <select on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_size_change.run(size);
                    }
                }>
                    {PAGE_SIZE_OPTIONS.iter().map(|size| {
                        let value = size.to_string();
                        view! {
                            <option
                                value=value.clone()
                                selected=move || page_req.get().size() == *size
                            >
                                {value.clone()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <span class="pagination-range">
                {move || page_req.get().range_label(total.get())}
            </span>
            <button
                class="page-btn"
                disabled=move || !page_req.get().has_prev()
                on:click=on_prev
            >
                "‹"
            </button>
            <button
                class="page-btn"
                disabled=move || !page_req.get().has_next(total.get())
                on:click=on_next
            >
                "›"
            </button>
        </div>
    }
}
