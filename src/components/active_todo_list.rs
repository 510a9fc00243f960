//! Active Todo List Component
//!
//! Unchecked todos. Clicking a row completes it; the pill on the right
//! starts editing that todo instead.

use leptos::prelude::*;

use crate::components::{Paper, TodoItem};
use crate::store::{active_todos, dispatch, use_todo_store, TodoAction, TodoStateStoreFields};

#[component]
pub fn ActiveTodoList() -> impl IntoView {
    let store = use_todo_store();

    let has_active = move || store.todos().with(|todos| todos.iter().any(|todo| !todo.checked));

    view! {
        <Show
            when=has_active
            fallback=|| view! { <Paper>"There are currently no active todo"</Paper> }
        >
            <div class="todo-list">
                <For
                    each=move || active_todos(&store.todos().get())
                    key=|todo| (todo.id, todo.name.clone())
                    children=move |todo| {
                        let id = todo.id;
                        let name = todo.name.clone();
                        let checked = todo.checked;
                        let is_editing = move || store.edit_mode().get().is_editing(id);
                        let edit_class = move || {
                            if is_editing() { "edit-toggle editing" } else { "edit-toggle" }
                        };

                        view! {
                            <div class="todo-row">
                                <TodoItem on_click=Callback::new(move |_| {
                                    dispatch(&store, TodoAction::ToggleChecked(id));
                                })>
                                    <input
                                        type="checkbox"
                                        class="todo-checkbox"
                                        prop:checked=checked
                                        on:change=|_| {}
                                    />
                                    {name}
                                </TodoItem>

                                // Sibling of the row, so this click never toggles it
                                <span
                                    class=edit_class
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        dispatch(&store, TodoAction::BeginEdit(todo.clone()));
                                    }
                                >
                                    {move || if is_editing() { "Editing" } else { "Edit" }}
                                </span>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
