//! Workspace Commands

use catalog_core::domain::{WorkspaceDraft, WorkspaceEntry, WorkspaceId};
use catalog_core::{ClientError, ClientResult};
use leptos::prelude::*;
use log::info;

use crate::context::AppContext;
use crate::store::{store_update_workspace, AppStateStoreFields, AppStore};

pub async fn load_workspaces(ctx: AppContext, store: AppStore) {
    match ctx.services().backend.list_workspaces().await {
        Ok(loaded) => store.workspaces().set(loaded),
        Err(e) => ctx.report(&e),
    }
}

pub async fn get_workspace(ctx: AppContext, id: WorkspaceId) -> ClientResult<WorkspaceEntry> {
    ctx.services().backend.get_workspace(id).await
}

pub async fn create_workspace(
    ctx: AppContext,
    store: AppStore,
    name: &str,
    description: &str,
) -> ClientResult<WorkspaceEntry> {
    let draft = WorkspaceDraft::new(name, description);
    if draft.name.is_empty() {
        return Err(ClientError::validation("Workspace name is required"));
    }
    let created = ctx.services().backend.create_workspace(&draft).await?;
    info!("Created workspace #{} {:?}", created.id, created.name);
    // Fine-grained update: push new workspace to store
    store.workspaces().write().push(created.clone());
    Ok(created)
}

pub async fn update_workspace(
    ctx: AppContext,
    store: AppStore,
    id: WorkspaceId,
    name: &str,
    description: &str,
) -> ClientResult<WorkspaceEntry> {
    let draft = WorkspaceDraft::new(name, description);
    if draft.name.is_empty() {
        return Err(ClientError::validation("Workspace name is required"));
    }
    let updated = ctx.services().backend.update_workspace(id, &draft).await?;
    store_update_workspace(&store, updated.clone());
    Ok(updated)
}

/// Delete a workspace; a filter pointing at it is dropped and the list
/// reloads.
pub async fn delete_workspace(ctx: AppContext, store: AppStore, id: WorkspaceId) -> ClientResult<()> {
    ctx.services().backend.delete_workspace(id).await?;
    info!("Deleted workspace #{id}");
    store.workspaces().write().retain(|ws| ws.id != id);
    if store.query().with_untracked(|q| q.workspace_id() == Some(id)) {
        store.query().maybe_update(|q| q.set_workspace(None));
    }
    ctx.reload();
    Ok(())
}
