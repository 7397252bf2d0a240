//! Todo Row Component
//!
//! A single todo in the list: checkbox, text, delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Todo;
use crate::store::{remove_todo, replace_todo, use_app_store, AppStateStoreFields};
use crate::view::escape_for_display;

/// A single todo row
#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let store = use_app_store();

    let id = todo.id;
    let completed = todo.completed;
    let markup = escape_for_display(&todo.text);

    view! {
        <li class=move || if completed { "todo-item completed" } else { "todo-item" }>
            <input
                type="checkbox"
                class="todo-checkbox"
                checked=completed
                on:change=move |_| {
                    // Send the inverse of the cached value; the server's record wins
                    let current = store.todos().read().iter().find(|t| t.id == id).map(|t| t.completed);
                    let Some(current) = current else { return; };
                    spawn_local(async move {
                        match api::update_todo(id, !current).await {
                            Ok(updated) => replace_todo(&mut store.todos().write(), updated),
                            Err(err) => web_sys::console::error_1(
                                &format!("[ROW] Error updating todo {}: {}", id, err).into(),
                            ),
                        }
                    });
                }
            />
            <span class="todo-text" inner_html=markup></span>
            <button
                class="todo-delete"
                on:click=move |_| {
                    // Optimistic: the local entry goes before the response lands
                    remove_todo(&mut store.todos().write(), id);
                    spawn_local(async move {
                        if let Err(err) = api::delete_todo(id).await {
                            web_sys::console::error_1(
                                &format!("[ROW] Error deleting todo {}: {}", id, err).into(),
                            );
                        }
                    });
                }
            >
                "Delete"
            </button>
        </li>
    }
}
