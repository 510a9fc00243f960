//! Draft Input Component
//!
//! The single text input shared by "new todo" and "rename todo".
//! Enter submits; what it submits depends on the store's edit mode.

use leptos::prelude::*;

use crate::store::{dispatch, use_todo_store, EditMode, TodoAction, TodoStateStoreFields};

#[component]
pub fn DraftInput() -> impl IntoView {
    let store = use_todo_store();

    let input_class = move || match store.edit_mode().get() {
        EditMode::Creating => "draft-input",
        EditMode::Editing(_) => "draft-input editing",
    };

    view! {
        <div class="draft-row">
            <input
                type="text"
                class=input_class
                placeholder="Enter your new todo here"
                prop:value=move || store.draft_text().get()
                on:input=move |ev| {
                    dispatch(&store, TodoAction::UpdateDraftText(event_target_value(&ev)));
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    dispatch(&store, TodoAction::SubmitDraft {
                        key_code: ev.key_code(),
                        value: event_target_value(&ev),
                    });
                }
            />
        </div>
    }
}
