//! Button Component

use leptos::prelude::*;

/// Primary action button
///
/// # Arguments
/// * `name` - Button label
/// * `class` - Extra CSS classes appended to the base style
/// * `on_click` - Callback run on click
#[component]
pub fn Button(
    #[prop(into)] name: String,
    #[prop(optional, into)] class: String,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=format!("btn {}", class)
            on:click=move |_| on_click.run(())
        >
            {name}
        </button>
    }
}
