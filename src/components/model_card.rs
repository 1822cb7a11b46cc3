//! Model Card Component
//!
//! One row of the model list: compare checkbox, name linking to the detail
//! view, and the entry's metadata. Clicking a tag filters by it.

use catalog_core::domain::ModelEntry;
use leptos::prelude::*;

use crate::context::{use_app_context, View};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ModelCard(entry: ModelEntry) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = entry.id;

    let selected = move || store.selection().with(|s| s.contains(id));
    let subtitle = [
        entry.developer.clone(),
        entry.model_type.map(|t| t.to_string()),
        entry.status.map(|s| s.to_string()),
        entry.date_interacted.map(|d| d.format("%Y-%m-%d").to_string()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    view! {
        <div class=move || if selected() { "model-card selected" } else { "model-card" }>
            <input
                type="checkbox"
                class="compare-checkbox"
                title="Select for comparison"
                prop:checked=selected
                on:change=move |ev| {
                    let on = event_target_checked(&ev);
                    store.selection().write().toggle(id, on);
                }
            />
            <div class="model-card-body">
                <div class="model-card-header">
                    <button class="model-name link-btn" on:click=move |_| ctx.navigate(View::Detail(id))>
                        {entry.name.clone()}
                    </button>
                    {entry.relevance.map(|r| view! {
                        <span class="relevance" title="Semantic match">{format!("{:.0}%", r * 100.0)}</span>
                    })}
                </div>
                <div class="model-card-meta">{subtitle}</div>
                <div class="model-card-tags">
                    {entry.tags.iter().cloned().map(|tag| {
                        let label = tag.clone();
                        view! {
                            <button
                                class="tag-chip"
                                on:click=move |_| {
                                    let tag = tag.clone();
                                    store.query().maybe_update(|q| q.set_tag(Some(tag)));
                                }
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
