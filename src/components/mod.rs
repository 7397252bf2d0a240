//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod stats_bar;
mod todo_form;
mod todo_list;
mod todo_row;

pub use filter_bar::FilterBar;
pub use stats_bar::StatsBar;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
