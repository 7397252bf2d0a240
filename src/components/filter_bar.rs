//! Filter Bar Component
//!
//! Buttons for switching the active view filter.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{use_app_store, AppStateStoreFields};

/// Filter buttons; exactly one is active at a time
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&filter| {
                let is_active = move || store.filter().get() == filter;
                let btn_class = move || {
                    if is_active() { "filter-btn active" } else { "filter-btn" }
                };

                view! {
                    <button
                        class=btn_class
                        on:click=move |_| store.filter().set(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
