//! Mutation Coordinator
//!
//! Create/update/delete/move against the backend. Nothing is merged into
//! the local list: every successful mutation re-runs the fetch with the
//! query current at the moment the mutation settles, so the list shows
//! server truth under whatever filters the user has moved on to.

use chrono::Utc;
use log::{info, warn};
use std::rc::Rc;

use super::fetch::{FetchOrchestrator, RefreshOutcome};
use super::query::QueryState;
use crate::backend::SharedBackend;
use crate::domain::{
    normalize_list, ModelDraft, ModelEntry, ModelId, ModelPatch, UserId, WorkspaceId,
};
use crate::error::{ClientError, ClientResult};

/// Interactive yes/no prompt guarding destructive actions
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Where a post-mutation refresh reads its query from. Consulted once the
/// mutation has succeeded, immediately before the refresh starts.
pub trait CurrentQuery {
    fn current_query(&self) -> QueryState;
}

impl<F: Fn() -> QueryState> CurrentQuery for F {
    fn current_query(&self) -> QueryState {
        self()
    }
}

/// A fixed query, for callers whose query cannot change mid-flight
impl CurrentQuery for QueryState {
    fn current_query(&self) -> QueryState {
        self.clone()
    }
}

/// A successful mutation and the refresh it triggered
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    pub value: T,
    pub refresh: RefreshOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(RefreshOutcome),
    /// The user declined; nothing was sent
    Cancelled,
}

pub struct MutationCoordinator {
    backend: SharedBackend,
    fetch: Rc<FetchOrchestrator>,
}

impl MutationCoordinator {
    pub fn new(backend: SharedBackend, fetch: Rc<FetchOrchestrator>) -> Self {
        Self { backend, fetch }
    }

    pub async fn create(
        &self,
        user: Option<UserId>,
        mut draft: ModelDraft,
        query: &dyn CurrentQuery,
    ) -> ClientResult<Mutation<ModelEntry>> {
        if user.is_none() {
            return Err(ClientError::validation("User authentication required"));
        }
        draft.name = draft.name.trim().to_string();
        if draft.name.is_empty() {
            return Err(ClientError::validation("Name is required"));
        }
        draft.date_interacted.get_or_insert_with(Utc::now);
        draft.tags = normalize_list(std::mem::take(&mut draft.tags));
        draft.source_links = normalize_list(std::mem::take(&mut draft.source_links));

        let created = self
            .backend
            .create_model(&draft)
            .await
            .inspect_err(|e| warn!("create {:?} failed: {e}", draft.name))?;
        info!("Created model #{} {:?}", created.id, created.name);

        Ok(Mutation {
            value: created,
            refresh: self.refresh(query).await,
        })
    }

    pub async fn update(
        &self,
        id: ModelId,
        mut patch: ModelPatch,
        query: &dyn CurrentQuery,
    ) -> ClientResult<Mutation<ModelEntry>> {
        if let Some(name) = patch.name.as_mut() {
            *name = name.trim().to_string();
            if name.is_empty() {
                return Err(ClientError::validation("Name is required"));
            }
        }
        if patch.is_empty() {
            return Err(ClientError::validation("Nothing to update"));
        }

        let updated = self
            .backend
            .update_model(id, &patch)
            .await
            .inspect_err(|e| warn!("update #{id} failed: {e}"))?;
        info!("Updated model #{id}");

        Ok(Mutation {
            value: updated,
            refresh: self.refresh(query).await,
        })
    }

    /// Nothing is sent unless `confirm` agrees.
    pub async fn delete(
        &self,
        id: ModelId,
        confirm: &dyn Confirm,
        query: &dyn CurrentQuery,
    ) -> ClientResult<DeleteOutcome> {
        if !confirm.confirm("Are you sure you want to delete this model?") {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.backend
            .delete_model(id)
            .await
            .inspect_err(|e| warn!("delete #{id} failed: {e}"))?;
        info!("Deleted model #{id}");

        Ok(DeleteOutcome::Deleted(self.refresh(query).await))
    }

    /// Move a model out of its current workspace. A model without a
    /// workspace, or a move onto the same workspace, is rejected locally.
    pub async fn move_model(
        &self,
        id: ModelId,
        from: Option<WorkspaceId>,
        to: WorkspaceId,
        query: &dyn CurrentQuery,
    ) -> ClientResult<Mutation<()>> {
        let Some(from) = from else {
            return Err(ClientError::validation(
                "This model is not assigned to a workspace",
            ));
        };
        if from == to {
            return Err(ClientError::validation(
                "The model is already in that workspace",
            ));
        }

        self.backend
            .move_model(id, from, to)
            .await
            .inspect_err(|e| warn!("move #{id} {from}->{to} failed: {e}"))?;
        info!("Moved model #{id} from workspace {from} to {to}");

        Ok(Mutation {
            value: (),
            refresh: self.refresh(query).await,
        })
    }

    async fn refresh(&self, query: &dyn CurrentQuery) -> RefreshOutcome {
        self.fetch.refresh(&query.current_query()).await
    }
}
