//! Card Component

use leptos::prelude::*;

/// Elevated panel that groups a section of the page
#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>
            {children()}
        </div>
    }
}
