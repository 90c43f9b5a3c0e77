//! Confirm Dialog Component
//!
//! Modal confirmation with confirm/cancel actions.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] text: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="confirm-dialog">
                <h2>{title}</h2>
                <p>{text}</p>
                <div class="dialog-actions">
                    <button class="confirm-btn" on:click=move |_| on_confirm.run(())>
                        "Sí"
                    </button>
                    <button class="cancel-btn" on:click=move |_| on_close.run(())>
                        "No"
                    </button>
                </div>
            </div>
        </div>
    }
}
