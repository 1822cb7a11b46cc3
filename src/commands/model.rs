//! Model Commands
//!
//! Create/update/delete/move through the mutation coordinator, plus
//! single-entry loads for the detail view.

use catalog_core::catalog::{distinct_tags, DeleteOutcome};
use catalog_core::domain::{ModelDraft, ModelEntry, ModelId, ModelPatch, WorkspaceId};
use catalog_core::ClientResult;
use leptos::prelude::*;
use log::warn;

use super::{apply_refresh, live_query};
use crate::context::AppContext;
use crate::store::{AppStateStoreFields, AppStore};

/// `window.confirm`, the prompt guarding deletes
fn browser_confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

/// Reload the tag filter options from the full catalog
pub async fn load_tags(ctx: AppContext, store: AppStore) {
    match ctx.services().backend.list_models().await {
        Ok(all) => store.tags().set(distinct_tags(&all)),
        Err(e) => warn!("Could not load tag options: {e}"),
    }
}

pub async fn get_model(ctx: AppContext, id: ModelId) -> ClientResult<ModelEntry> {
    ctx.services().backend.get_model(id).await
}

pub async fn create_model(
    ctx: AppContext,
    store: AppStore,
    draft: ModelDraft,
) -> ClientResult<ModelEntry> {
    let user = store.user().with_untracked(|u| u.as_ref().map(|u| u.id));
    let created = ctx
        .services()
        .mutations
        .create(user, draft, &live_query(ctx, store))
        .await?;

    if apply_refresh(ctx, store, created.refresh) {
        ctx.flash_info(format!("Added {}", created.value.name));
    }
    load_tags(ctx, store).await;
    Ok(created.value)
}

pub async fn update_model(
    ctx: AppContext,
    store: AppStore,
    id: ModelId,
    patch: ModelPatch,
) -> ClientResult<ModelEntry> {
    let updated = ctx
        .services()
        .mutations
        .update(id, patch, &live_query(ctx, store))
        .await?;

    let refreshed = apply_refresh(ctx, store, updated.refresh);
    store.seen().write().insert(id, updated.value.clone());
    if refreshed {
        ctx.flash_info("Changes saved");
    }
    load_tags(ctx, store).await;
    Ok(updated.value)
}

/// Returns whether the model was actually deleted
pub async fn delete_model(ctx: AppContext, store: AppStore, id: ModelId) -> ClientResult<bool> {
    let outcome = ctx
        .services()
        .mutations
        .delete(id, &browser_confirm, &live_query(ctx, store))
        .await?;

    match outcome {
        DeleteOutcome::Deleted(refresh) => {
            let refreshed = apply_refresh(ctx, store, refresh);
            store.selection().write().toggle(id, false);
            store.seen().write().remove(&id);
            if refreshed {
                ctx.flash_info("Model deleted");
            }
            load_tags(ctx, store).await;
            Ok(true)
        }
        DeleteOutcome::Cancelled => Ok(false),
    }
}

pub async fn move_model(
    ctx: AppContext,
    store: AppStore,
    id: ModelId,
    from: Option<WorkspaceId>,
    to: WorkspaceId,
) -> ClientResult<()> {
    let moved = ctx
        .services()
        .mutations
        .move_model(id, from, to, &live_query(ctx, store))
        .await?;

    if apply_refresh(ctx, store, moved.refresh) {
        ctx.flash_info("Model moved");
    }
    Ok(())
}
