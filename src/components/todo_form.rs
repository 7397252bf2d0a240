//! Todo Form Component
//!
//! Text input and add button for creating todos.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::normalize_text;

/// Form for creating new todos
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let focus_input = move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = new_text.get();
        let Some(text) = normalize_text(&raw).map(str::to_owned) else {
            // Blank input: refocus, no request
            focus_input();
            return;
        };

        spawn_local(async move {
            match api::create_todo(&text).await {
                Ok(created) => {
                    store.todos().write().push(created);
                    set_new_text.set(String::new());
                    focus_input();
                }
                Err(ApiError::Status {
                    status,
                    status_text,
                    body,
                }) => {
                    web_sys::console::error_1(
                        &format!("[FORM] HTTP error! status: {} {}", status, body).into(),
                    );
                    alert(&format!("Failed to add todo: {}", status_text));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[FORM] Error adding todo: {}", err).into());
                    alert("Failed to add todo. Please try again.");
                }
            }
        });
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <input
                type="text"
                class="todo-input"
                placeholder="What needs to be done?"
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}

/// Blocking user-visible alert
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
