//! Filter Bar Component
//!
//! Search term, semantic toggle and the type/status/tag filters. The filter
//! controls write straight into the query and the list refresh follows from
//! the store change. The search box only reaches the query on Return or the
//! Search button.

use catalog_core::catalog::TermInput;
use catalog_core::domain::{ModelStatus, ModelType};
use leptos::prelude::*;

use super::{ChoiceSelect, TagAutocomplete, MODEL_STATUSES, MODEL_TYPES};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();
    let query = store.query();

    let filters_disabled = Signal::derive(move || query.with(|q| !q.filters_enabled()));
    let input = RwSignal::new(query.with_untracked(TermInput::from_query));

    let commit = move || {
        let typed = input.get_untracked();
        query.maybe_update(|q| typed.commit(q));
    };

    view! {
        <div class="filter-bar">
            <div class="search-row">
                <input
                    type="search"
                    class="search-input"
                    placeholder=move || {
                        if query.with(|q| q.is_semantic()) {
                            "Describe what you are looking for..."
                        } else {
                            "Search by name, developer or notes..."
                        }
                    }
                    prop:value=move || input.with(|i| i.text().to_string())
                    on:input=move |ev| input.update(|i| i.edit(event_target_value(&ev)))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            commit();
                        }
                    }
                />
                <button
                    class="search-btn"
                    class:pending=move || query.with(|q| input.with(|i| i.is_pending(q)))
                    on:click=move |_| commit()
                >
                    "Search"
                </button>
                <label class="semantic-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || query.with(|q| q.is_semantic())
                        on:change=move |ev| {
                            let on = event_target_checked(&ev);
                            query.maybe_update(|q| q.set_semantic(on));
                        }
                    />
                    "Semantic search"
                </label>
            </div>
            <div class="filter-row">
                <ChoiceSelect
                    options=MODEL_TYPES
                    current=Signal::derive(move || query.with(|q| q.model_type()))
                    on_change=Callback::new(move |t: Option<ModelType>| {
                        query.maybe_update(|q| q.set_model_type(t));
                    })
                    placeholder="All types"
                    disabled=filters_disabled
                />
                <ChoiceSelect
                    options=MODEL_STATUSES
                    current=Signal::derive(move || query.with(|q| q.status()))
                    on_change=Callback::new(move |s: Option<ModelStatus>| {
                        query.maybe_update(|q| q.set_status(s));
                    })
                    placeholder="All statuses"
                    disabled=filters_disabled
                />
                <TagAutocomplete
                    all_tags=Signal::derive(move || store.tags().get())
                    current=Signal::derive(move || query.with(|q| q.tag().map(str::to_string)))
                    on_select=Callback::new(move |tag: Option<String>| {
                        query.maybe_update(|q| q.set_tag(tag));
                    })
                    disabled=filters_disabled
                />
            </div>
        </div>
    }
}
