//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashMap;

use catalog_core::catalog::{QueryState, SelectionTracker};
use catalog_core::domain::{ModelEntry, ModelId, User, WorkspaceEntry};
use leptos::prelude::*;
use reactive_stores::Store;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Result of the latest applied refresh
    pub models: Vec<ModelEntry>,
    /// Every entry shown so far, for rendering selections that scrolled
    /// out of the current result
    pub seen: HashMap<ModelId, ModelEntry>,
    /// Distinct tags across the whole catalog, for the tag filter
    pub tags: Vec<String>,
    pub workspaces: Vec<WorkspaceEntry>,
    /// Signed-in user
    pub user: Option<User>,
    pub query: QueryState,
    /// Ids picked for comparison
    pub selection: SelectionTracker,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the displayed list and remember its entries
pub fn store_show_models(store: &AppStore, models: Vec<ModelEntry>) {
    store
        .seen()
        .write()
        .extend(models.iter().map(|m| (m.id, m.clone())));
    store.models().set(models);
}

/// Selected entries, joined against the visible list and the seen cache
pub fn store_selected_models(store: &AppStore) -> Vec<ModelEntry> {
    let visible = store.models().get();
    let seen = store.seen().get();
    store.selection().with(|selection| selection.resolve(&visible, &seen))
}

/// Forget everything tied to the signed-in user
pub fn store_reset(store: &AppStore) {
    store.user().set(None);
    store.models().set(Vec::new());
    store.seen().write().clear();
    store.workspaces().set(Vec::new());
    store.tags().set(Vec::new());
    store.selection().write().clear();
}

/// Update a workspace in the store by ID
pub fn store_update_workspace(store: &AppStore, updated: WorkspaceEntry) {
    if let Some(ws) = store
        .workspaces()
        .write()
        .iter_mut()
        .find(|ws| ws.id == updated.id)
    {
        *ws = updated;
    }
}
