//! Model List Component
//!
//! The main catalog screen: filters, workspace tabs, the selection tray
//! with the compare action, the create form and the current result.

use catalog_core::domain::{ModelEntry, ModelId, ModelStatus, ModelType};
use leptos::prelude::*;

use super::{FilterBar, ModelCard, NewModelForm, WorkspaceTabBar};
use crate::context::{use_app_context, View};
use crate::store::{store_selected_models, use_app_store, AppStateStoreFields};

#[component]
pub fn ModelList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_compare = move |_: leptos::ev::MouseEvent| {
        match store.selection().with_untracked(|s| s.comparison_route()) {
            Ok(route) => ctx.navigate(View::Compare(route)),
            Err(e) => ctx.flash_error(e),
        }
    };

    view! {
        <section class="model-list">
            <WorkspaceTabBar />
            <FilterBar />
            <NewModelForm />

            <Show when=move || store.selection().with(|s| !s.is_empty())>
                <div class="selection-tray">
                    <span class="selection-label">
                        {move || format!("{} selected:", store.selection().with(|s| s.len()))}
                    </span>
                    {move || store_selected_models(&store).into_iter().map(|m| {
                        let id = m.id;
                        view! {
                            <span class="selection-chip">
                                {m.name}
                                <button on:click=move |_| store.selection().write().toggle(id, false)>"×"</button>
                            </span>
                        }
                    }).collect_view()}
                    <button
                        class="compare-btn"
                        prop:disabled=move || store.selection().with(|s| !s.compare_ready())
                        on:click=on_compare
                    >
                        "Compare"
                    </button>
                    <button class="link-btn" on:click=move |_| store.selection().write().clear()>
                        "Clear"
                    </button>
                </div>
            </Show>

            <Show when=move || ctx.loading.get()>
                <div class="spinner" aria-label="Loading"></div>
            </Show>

            <div class="model-cards">
                <For
                    each=move || store.models().get()
                    key=card_key
                    children=move |m| view! { <ModelCard entry=m /> }
                />
            </div>
            <Show when=move || !ctx.loading.get() && store.models().with(|m| m.is_empty())>
                <p class="empty">"No models match the current filters."</p>
            </Show>
            <p class="item-count">{move || format!("{} models", store.models().with(|m| m.len()))}</p>
        </section>
    }
}

/// Re-render a card whenever anything it shows changes
fn card_key(
    m: &ModelEntry,
) -> (ModelId, String, Option<ModelType>, Option<ModelStatus>, Vec<String>, Option<u32>) {
    (
        m.id,
        m.name.clone(),
        m.model_type,
        m.status,
        m.tags.clone(),
        m.relevance.map(f32::to_bits),
    )
}
