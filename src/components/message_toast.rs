//! Message Toast Component
//!
//! Renders the global message store as a stack of transient toasts.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{
    store_dismiss_message, use_message_store, MessageKind, MessageStateStoreFields,
};

/// How long a toast stays on screen
const TOAST_TIMEOUT_MS: u32 = 4_000;

#[component]
pub fn MessageToasts() -> impl IntoView {
    let store = use_message_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.messages().get()
                key=|message| message.id
                children=move |message| {
                    let id = message.id;
                    // Toasts retire themselves; clicking dismisses early
                    spawn_local(async move {
                        TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                        store_dismiss_message(&store, id);
                    });
                    let class = match message.kind {
                        MessageKind::Ok => "toast toast-ok",
                        MessageKind::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class on:click=move |_| store_dismiss_message(&store, id)>
                            {message.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
