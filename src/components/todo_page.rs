//! Todo Page Component
//!
//! Two cards: active todos with the draft input, and completed todos.

use leptos::prelude::*;

use crate::components::{ActiveTodoList, Button, Card, CompletedTodoList, DraftInput, ThemeToggle};
use crate::store::{dispatch, use_todo_store, TodoAction, TodoStateStoreFields};

#[component]
pub fn TodoPage() -> impl IntoView {
    let store = use_todo_store();

    // Derived on every read; nothing cached
    let has_active = move || store.todos().with(|todos| todos.iter().any(|todo| !todo.checked));

    view! {
        <div class="page">
            <ThemeToggle />

            <div class="page-column">
                <Card>
                    <div class="card-header">
                        <h2 class="card-title">"My Awesome Todo"</h2>

                        <Show when=has_active>
                            <Button
                                name="Mark All Complete"
                                on_click=Callback::new(move |_| dispatch(&store, TodoAction::MarkAllComplete))
                            />
                        </Show>
                    </div>

                    <ActiveTodoList />

                    <DraftInput />
                </Card>

                <Card class="spaced">
                    <h2 class="card-title">"Completed Todos"</h2>

                    <CompletedTodoList />
                </Card>
            </div>
        </div>
    }
}
