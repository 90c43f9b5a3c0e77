//! Application Context
//!
//! Shared handles provided via the Leptos Context API.

use leptos::prelude::*;

/// Global busy indicator, fed by whichever screen is doing remote work
#[derive(Clone, Copy)]
pub struct LoaderContext {
    /// Whether the busy overlay is visible - read
    pub busy: ReadSignal<bool>,
    /// Whether the busy overlay is visible - write
    set_busy: WriteSignal<bool>,
}

impl LoaderContext {
    pub fn new(busy: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            busy: busy.0,
            set_busy: busy.1,
        }
    }

    /// Show or hide the global busy overlay
    pub fn show_loading(&self, on: bool) {
        self.set_busy.set(on);
    }
}
