//! Todo List Component
//!
//! List container with an empty-state placeholder and one row per
//! visible todo.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::filtered_todos;

/// The filtered todo list
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    // Placeholder visibility tracks the unfiltered list, not the filtered
    // view: a filter that excludes everything shows an empty container
    let is_empty = move || store.todos().read().is_empty();

    let visible = move || filtered_todos(&store.todos().read(), store.filter().get());

    view! {
        <Show when=is_empty>
            <div class="empty-state">
                <p>"No todos yet. Add one above!"</p>
            </div>
        </Show>
        <ul class="todo-list">
            <For
                each=visible
                key=|todo| (todo.id, todo.completed, todo.text.clone())
                children=move |todo| view! { <TodoRow todo=todo /> }
            />
        </ul>
    }
}
