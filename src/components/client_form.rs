//! Client Form Component
//!
//! Modal form for creating a new client or renaming an existing one.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Client;

/// Create/edit modal. `client` carries the row being edited, `None` means a
/// new draft.
#[component]
pub fn ClientForm(
    client: Option<Client>,
    #[prop(into)] on_submit: Callback<Client>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let editing_id = client.as_ref().map(|c| c.id.clone()).unwrap_or_default();
    let title = if client.is_some() {
        "Actualizar cliente"
    } else {
        "Nuevo cliente"
    };
    let (name, set_name) = signal(client.map(|c| c.name).unwrap_or_default());

    let submit_id = editing_id.clone();
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        on_submit.run(Client {
            id: submit_id.clone(),
            name,
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="client-form" on:submit=submit>
                <h2>{title}</h2>

                {(!editing_id.is_empty()).then(|| view! {
                    <label class="form-field">
                        "Identificador"
                        <input type="text" prop:value=editing_id.clone() disabled=true />
                    </label>
                })}

                <label class="form-field">
                    "Nombre Cliente"
                    <input
                        type="text"
                        placeholder="Nombre del cliente"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_name.set(input.value());
                        }
                    />
                </label>

                <div class="form-actions">
                    <button type="submit" disabled=move || name.get().trim().is_empty()>
                        "Guardar"
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                </div>
            </form>
        </div>
    }
}
