//! Completed Todo List Component

use leptos::prelude::*;

use crate::components::{Button, Paper, TodoItem};
use crate::store::{completed_todos, dispatch, use_todo_store, TodoAction, TodoStateStoreFields};

/// Checked todos plus the "Clear completed Todo" button
#[component]
pub fn CompletedTodoList() -> impl IntoView {
    let store = use_todo_store();

    let has_completed = move || store.todos().with(|todos| todos.iter().any(|todo| todo.checked));

    view! {
        <Show
            when=has_completed
            fallback=|| view! { <Paper>"There are currently no done todo"</Paper> }
        >
            <div class="todo-list">
                <For
                    each=move || completed_todos(&store.todos().get())
                    key=|todo| (todo.id, todo.name.clone())
                    children=move |todo| {
                        let id = todo.id;
                        let checked = todo.checked;
                        view! {
                            <TodoItem on_click=Callback::new(move |_| {
                                dispatch(&store, TodoAction::ToggleChecked(id));
                            })>
                                <input
                                    type="checkbox"
                                    class="todo-checkbox"
                                    prop:checked=checked
                                    on:change=|_| {}
                                />
                                <del>{todo.name}</del>
                            </TodoItem>
                        }
                    }
                />
            </div>

            <div class="clear-row">
                <Button
                    class="full-width"
                    name="Clear completed Todo"
                    on_click=Callback::new(move |_| dispatch(&store, TodoAction::ClearCompleted))
                />
            </div>
        </Show>
    }
}
