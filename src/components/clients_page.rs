//! Clients Page
//!
//! The client administration screen: paginated listing, create/edit modal,
//! delete confirmation, and the wiring to the global message and busy
//! stores.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::api::{self, ApiError, SaveClientArgs};
use crate::context::LoaderContext;
use crate::models::Client;
use crate::mutation::{self, MutationPolicy, PendingOps, SubmitKind};
use crate::paging::PageRequest;
use crate::store::{store_push_message, use_message_store, MessageKind};
use crate::components::{ClientForm, ClientTable, ConfirmDialog};

/// Generic text for list failures; the raw error is never shown
const FETCH_ERROR_TEXT: &str = "Se ha producido un error";

#[component]
pub fn ClientsPage() -> impl IntoView {
    let messages = use_message_store();
    let loader = use_context::<LoaderContext>().expect("LoaderContext should be provided");
    let policy = MutationPolicy::default();

    // Listing state
    let (page_req, set_page_req) = signal(PageRequest::new());
    let (clients, set_clients) = signal(Vec::<Client>::new());
    let (total, set_total) = signal(0u64);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Overlay state
    let (open_form, set_open_form) = signal(false);
    let (client_to_edit, set_client_to_edit) = signal::<Option<Client>>(None);
    let (id_to_delete, set_id_to_delete) = signal(String::new());

    // Last failures, watched by the reporter effects below
    let (fetch_error, set_fetch_error) = signal::<Option<ApiError>>(None);
    let (delete_error, set_delete_error) = signal::<Option<ApiError>>(None);

    // In-flight flags of the four remote operations
    let (is_fetching, set_is_fetching) = signal(false);
    let (is_creating, set_is_creating) = signal(false);
    let (is_updating, set_is_updating) = signal(false);
    let (is_deleting, set_is_deleting) = signal(false);

    // Busy indicator = OR of the four flags
    Effect::new(move |_| {
        let pending = PendingOps {
            fetching: is_fetching.get(),
            creating: is_creating.get(),
            updating: is_updating.get(),
            deleting: is_deleting.get(),
        };
        loader.show_loading(pending.any());
    });

    // Fetch one page whenever page/size change or a mutation asks for a
    // refresh
    Effect::new(move |_| {
        let req = page_req.get();
        let _ = reload_trigger.get();
        set_is_fetching.set(true);
        spawn_local(async move {
            match api::get_clients(req.page(), req.size()).await {
                Ok(page) => {
                    set_clients.set(page.content);
                    set_total.set(page.total_elements);
                }
                Err(err) => set_fetch_error.set(Some(err)),
            }
            set_is_fetching.set(false);
        });
    });

    // Delete failures surface the backend message when there is one
    Effect::new(move |_| {
        if let Some(err) = delete_error.get() {
            if let Some(msg) = mutation::delete_error_message(&err) {
                store_push_message(&messages, msg, MessageKind::Error);
            }
        }
    });

    // List failures surface a fixed generic message
    Effect::new(move |_| {
        if fetch_error.get().is_some() {
            store_push_message(&messages, FETCH_ERROR_TEXT.to_string(), MessageKind::Error);
        }
    });

    let submit_client = Callback::new(move |client: Client| {
        set_open_form.set(false);
        let kind = SubmitKind::for_client(&client);
        match kind {
            SubmitKind::Create => set_is_creating.set(true),
            SubmitKind::Update => set_is_updating.set(true),
        }
        spawn_local(async move {
            let result = match kind {
                SubmitKind::Create => api::create_client(&SaveClientArgs {
                    name: &client.name,
                })
                .await
                .map(|_| ()),
                SubmitKind::Update => api::update_client(
                    &client.id,
                    &SaveClientArgs {
                        name: &client.name,
                    },
                )
                .await
                .map(|_| ()),
            };
            match kind {
                SubmitKind::Create => set_is_creating.set(false),
                SubmitKind::Update => set_is_updating.set(false),
            }
            match result {
                Ok(()) => {
                    store_push_message(
                        &messages,
                        kind.success_message().to_string(),
                        MessageKind::Ok,
                    );
                    set_client_to_edit.set(None);
                    set_reload_trigger.update(|v| *v += 1);
                }
                Err(err) => {
                    if policy.notify_submit_failures {
                        store_push_message(&messages, err.to_string(), MessageKind::Error);
                    } else {
                        console::error_1(&format!("[CLIENTS] save failed: {err}").into());
                    }
                }
            }
        });
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let id = id_to_delete.get();
        if id.is_empty() {
            return;
        }
        set_is_deleting.set(true);
        spawn_local(async move {
            match api::delete_client(&id).await {
                Ok(()) => {
                    set_id_to_delete.set(String::new());
                    set_delete_error.set(None);
                    set_reload_trigger.update(|v| *v += 1);
                }
                // Marker stays so the dialog remains addressable
                Err(err) => set_delete_error.set(Some(err)),
            }
            set_is_deleting.set(false);
        });
    });

    view! {
        <div class="clients-page">
            <h1>"Listado de Clientes"</h1>

            <ClientTable
                clients=clients
                total=total
                page_req=page_req
                on_edit=move |client: Client| {
                    set_client_to_edit.set(Some(client));
                    set_open_form.set(true);
                }
                on_request_delete=move |id: String| set_id_to_delete.set(id)
                on_page_change=move |page: usize| {
                    set_page_req.update(|req| *req = req.with_page(page))
                }
                on_size_change=move |size: usize| {
                    set_page_req.update(|req| *req = req.with_size(size))
                }
            />

            <div class="new-client-row">
                <button class="new-client-btn" on:click=move |_| set_open_form.set(true)>
                    "Nuevo cliente"
                </button>
            </div>

            {move || open_form.get().then(|| view! {
                <ClientForm
                    client=client_to_edit.get()
                    on_submit=submit_client
                    on_close=move |_| {
                        set_client_to_edit.set(None);
                        set_open_form.set(false);
                    }
                />
            })}

            {move || (!id_to_delete.get().is_empty()).then(|| view! {
                <ConfirmDialog
                    title="Eliminar cliente"
                    text="Atención si borra el cliente se perderán sus datos. ¿Desea eliminar el cliente?"
                    on_confirm=confirm_delete
                    on_close=move |_| set_id_to_delete.set(String::new())
                />
            })}
        </div>
    }
}
