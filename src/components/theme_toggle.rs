//! Theme Toggle Component

use leptos::prelude::*;

use crate::config::Theme;
use crate::context::use_page_context;

/// Light/dark switch in the page corner
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_page_context();

    view! {
        <button
            class="theme-toggle"
            title=move || match ctx.theme.get() {
                Theme::Light => "Switch to dark theme",
                Theme::Dark => "Switch to light theme",
            }
            on:click=move |_| ctx.toggle_theme()
        >
            {move || match ctx.theme.get() {
                Theme::Light => "☾",
                Theme::Dark => "☀",
            }}
        </button>
    }
}
