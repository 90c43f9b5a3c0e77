//! UI Components
//!
//! Leptos components for the client administration screen.

mod client_form;
mod client_table;
mod clients_page;
mod confirm_dialog;
mod loader;
mod message_toast;

pub use client_form::ClientForm;
pub use client_table::ClientTable;
pub use clients_page::ClientsPage;
pub use confirm_dialog::ConfirmDialog;
pub use loader::Loader;
pub use message_toast::MessageToasts;
