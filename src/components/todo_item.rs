//! Todo Item Component
//!
//! Clickable row container. The whole row is the hit area for `on_click`.

use leptos::prelude::*;

#[component]
pub fn TodoItem(
    on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="todo-item" on:click=move |_| on_click.run(())>
            {children()}
        </div>
    }
}
