//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod paper;
mod card;
mod todo_item;
mod theme_toggle;
mod draft_input;
mod active_todo_list;
mod completed_todo_list;
mod todo_page;

pub use button::Button;
pub use paper::Paper;
pub use card::Card;
pub use todo_item::TodoItem;
pub use theme_toggle::ThemeToggle;
pub use draft_input::DraftInput;
pub use active_todo_list::ActiveTodoList;
pub use completed_todo_list::CompletedTodoList;
pub use todo_page::TodoPage;
