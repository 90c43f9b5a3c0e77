//! Ludoteca Frontend App
//!
//! Root component wiring the global stores to the client screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ClientsPage, Loader, MessageToasts};
use crate::context::LoaderContext;
use crate::store::{MessageState, MessageStore};

#[component]
pub fn App() -> impl IntoView {
    let busy = signal(false);

    // Explicit injection points for every screen below
    provide_context(LoaderContext::new(busy));
    provide_context::<MessageStore>(Store::new(MessageState::default()));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <ClientsPage />
            </main>
            <MessageToasts />
            <Loader />
        </div>
    }
}
