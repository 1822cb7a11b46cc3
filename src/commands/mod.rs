//! UI Actions
//!
//! Async wrappers around catalog-core, organized by domain. Each one runs
//! the core operation, mirrors the result into the store and reports
//! failures through the flash banner.

mod model;
mod workspace;
mod auth;
mod insight;

use catalog_core::catalog::{QueryState, RefreshOutcome};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_show_models, AppStateStoreFields, AppStore};

// Re-export all public items
pub use model::*;
pub use workspace::*;
pub use auth::*;
pub use insight::*;

/// Refresh the displayed list for `query`
pub async fn refresh(ctx: AppContext, store: AppStore, query: QueryState) {
    let fetch = ctx.services().fetch;
    ctx.set_loading(true);
    let outcome = fetch.refresh(&query).await;
    apply_refresh(ctx, store, outcome);
}

/// The query a post-mutation refresh runs with, read from the store when
/// the mutation settles. Reading it starts the list spinner.
pub fn live_query(ctx: AppContext, store: AppStore) -> impl Fn() -> QueryState {
    move || {
        ctx.set_loading(true);
        store.query().get_untracked()
    }
}

/// Reflect a refresh outcome. Superseded refreshes leave everything alone.
/// Returns false when the refresh failed and its error now owns the flash.
pub fn apply_refresh(ctx: AppContext, store: AppStore, outcome: RefreshOutcome) -> bool {
    let ok = match outcome {
        RefreshOutcome::Applied(models) => {
            store_show_models(&store, models);
            true
        }
        RefreshOutcome::Failed(e) => {
            ctx.report(&e);
            false
        }
        RefreshOutcome::Superseded => true,
    };
    ctx.set_loading(ctx.services().fetch.is_loading());
    ok
}
