//! Awesome Todo App
//!
//! Root component: provides the page context and the todo store, then
//! renders the page inside the themed root element.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TodoPage;
use crate::config::AppConfig;
use crate::context::PageContext;
use crate::store::TodoState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (theme, set_theme) = signal(config.resolve_theme());
    let initial = if config.seed { TodoState::seeded() } else { TodoState::default() };
    log::info!("[App] starting with {} todos, theme {}", initial.todos.len(), theme.get_untracked().as_str());

    // Provide context to all children
    provide_context(PageContext::new((theme, set_theme)));
    provide_context(Store::new(initial));

    view! {
        <div class=move || format!("app-root {}", theme.get().class())>
            <TodoPage />
        </div>
    }
}
