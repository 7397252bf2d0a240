//! Stats Bar Component
//!
//! Total and completed counters shown under the list.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::stats;

/// Counters computed from the unfiltered list, whatever the filter
#[component]
pub fn StatsBar() -> impl IntoView {
    let store = use_app_store();

    let counts = move || stats(&store.todos().read());

    view! {
        <div class="todo-stats">
            <span class="stat-total">{move || format!("Total: {}", counts().total)}</span>
            <span class="stat-completed">{move || format!("Completed: {}", counts().completed)}</span>
        </div>
    }
}
