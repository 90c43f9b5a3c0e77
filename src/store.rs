//! Global Message Store
//!
//! Transient user notifications, shared app-wide via reactive_stores.

use leptos::prelude::*;
use reactive_stores::Store;

/// Toast flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Ok,
    Error,
}

/// One transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u32,
    pub text: String,
    pub kind: MessageKind,
}

/// Global notification state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MessageState {
    /// Currently visible messages, oldest first
    pub messages: Vec<Message>,
    /// Id handed to the next pushed message
    pub next_id: u32,
}

/// Type alias for the store
pub type MessageStore = Store<MessageState>;

/// Get the message store from context
pub fn use_message_store() -> MessageStore {
    expect_context::<MessageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Push a message and return its id
pub fn store_push_message(store: &MessageStore, text: String, kind: MessageKind) -> u32 {
    let id = {
        let next_id = store.next_id();
        let mut next = next_id.write();
        *next += 1;
        *next
    };
    store.messages().write().push(Message { id, text, kind });
    id
}

/// Drop a message by id (no-op when already dismissed)
pub fn store_dismiss_message(store: &MessageStore, id: u32) {
    store.messages().write().retain(|m| m.id != id);
}
