//! Application Context
//!
//! Shared page signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::Theme;

/// Page-wide signals provided via context
#[derive(Clone, Copy)]
pub struct PageContext {
    /// Current color theme - read
    pub theme: ReadSignal<Theme>,
    /// Current color theme - write
    set_theme: WriteSignal<Theme>,
}

impl PageContext {
    pub fn new(theme: (ReadSignal<Theme>, WriteSignal<Theme>)) -> Self {
        Self {
            theme: theme.0,
            set_theme: theme.1,
        }
    }

    /// Switch between light and dark
    pub fn toggle_theme(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
        log::debug!("[App] theme -> {}", self.theme.get_untracked().as_str());
    }
}

/// Get the page context
pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
