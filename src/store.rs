//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Todo};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cached copy of the server's todo list, in server order
    pub todos: Vec<Todo>,
    /// Active view filter
    pub filter: Filter,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// List Primitives
// ========================

/// Replace the entry with the same id, keeping its position
pub fn replace_todo(todos: &mut Vec<Todo>, updated: Todo) {
    if let Some(todo) = todos.iter_mut().find(|todo| todo.id == updated.id) {
        *todo = updated;
    }
}

/// Remove the entry with the given id
pub fn remove_todo(todos: &mut Vec<Todo>, id: u32) {
    todos.retain(|todo| todo.id != id);
}
