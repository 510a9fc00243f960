//! Paper Component
//!
//! Placeholder panel shown in place of an empty list.

use leptos::prelude::*;

#[component]
pub fn Paper(children: Children) -> impl IntoView {
    view! {
        <div class="paper">
            {children()}
        </div>
    }
}
