//! Todo App Root Component
//!
//! Wires the store, loads the list on mount, and lays out the UI.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{FilterBar, StatsBar, TodoForm, TodoList};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide the store to all children
    provide_context(store);

    // Initial load; the view below attaches its handlers whether or not
    // this succeeds
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_todos().await {
                Ok(todos) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} todos", todos.len()).into());
                    store.todos().set(todos);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] Error loading todos: {}", err).into());
                }
            }
        });
    });

    view! {
        <div class="container">
            <h1>"Todo List"</h1>

            <TodoForm />
            <FilterBar />
            <TodoList />
            <StatsBar />
        </div>
    }
}
