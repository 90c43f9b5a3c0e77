//! Loader Overlay Component
//!
//! Full-screen busy indicator driven by `LoaderContext`.

use leptos::prelude::*;

use crate::context::LoaderContext;

#[component]
pub fn Loader() -> impl IntoView {
    let ctx = use_context::<LoaderContext>().expect("LoaderContext should be provided");

    view! {
        <Show when=move || ctx.busy.get()>
            <div class="loader-overlay">
                <div class="loader-spinner"></div>
            </div>
        </Show>
    }
}
