//! In-memory backend for tests.
//!
//! Records every call, filters with [`SearchParams::matches`], and can hold
//! a search or a delete open on a oneshot gate so tests decide resolution
//! order.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use tokio::sync::oneshot;

use super::traits::{CatalogBackend, SearchParams};
use crate::domain::{
    AuthResponse, AutofillRequest, ComparativeAnalysis, CompareRequest, Credentials, ModelDraft,
    ModelEntry, ModelId, ModelInsights, ModelPatch, Registration, User, WorkspaceDraft,
    WorkspaceEntry, WorkspaceId,
};
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListModels,
    GetModel(ModelId),
    Search(SearchParams),
    Semantic(String),
    Create(ModelDraft),
    Update(ModelId, ModelPatch),
    Delete(ModelId),
    Autofill(String),
    Insights(ModelId),
    Compare(CompareRequest),
    Move(ModelId, WorkspaceId, WorkspaceId),
    Workspace(&'static str),
    Auth(&'static str),
}

#[derive(Default)]
pub struct MemoryBackend {
    models: RefCell<Vec<ModelEntry>>,
    workspaces: RefCell<Vec<WorkspaceEntry>>,
    calls: RefCell<Vec<Call>>,
    /// Searches whose term matches a key, and deletes keyed `delete:<id>`,
    /// wait for the gate to fire
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
    fail_next: RefCell<Option<ClientError>>,
    fail_next_search: RefCell<Option<ClientError>>,
    autofill_body: RefCell<String>,
    next_id: Cell<ModelId>,
}

impl MemoryBackend {
    pub fn with_models(models: Vec<ModelEntry>) -> Self {
        let next = models.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let backend = Self::default();
        *backend.models.borrow_mut() = models;
        backend.next_id.set(next);
        backend
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn reset_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn models(&self) -> Vec<ModelEntry> {
        self.models.borrow().clone()
    }

    /// Hold searches for `term` until the returned sender fires.
    pub fn gate(&self, term: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(term.to_string(), rx);
        tx
    }

    /// Hold the delete of `id` until the returned sender fires.
    pub fn gate_delete(&self, id: ModelId) -> oneshot::Sender<()> {
        self.gate(&format!("delete:{id}"))
    }

    pub fn fail_next(&self, error: ClientError) {
        *self.fail_next.borrow_mut() = Some(error);
    }

    /// Fail the next keyword search only, letting other calls through
    pub fn fail_next_search(&self, error: ClientError) {
        *self.fail_next_search.borrow_mut() = Some(error);
    }

    pub fn set_autofill_body(&self, body: &str) {
        *self.autofill_body.borrow_mut() = body.to_string();
    }

    fn record(&self, call: Call) -> ClientResult<()> {
        self.calls.borrow_mut().push(call);
        match self.fail_next.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn wait_gate(&self, term: &str) {
        let gate = self.gates.borrow_mut().remove(term);
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }

    fn not_found(id: ModelId) -> ClientError {
        ClientError::Server {
            status: 404,
            message: format!("Model {id} not found"),
        }
    }
}

#[async_trait(?Send)]
impl CatalogBackend for MemoryBackend {
    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        self.record(Call::Auth("login"))?;
        Ok(AuthResponse {
            token: Some("token-1".to_string()),
            user: User {
                id: 1,
                username: "tester".to_string(),
                email: credentials.email.clone(),
                is_active: true,
                created_at: None,
            },
        })
    }

    async fn register(&self, registration: &Registration) -> ClientResult<AuthResponse> {
        self.login(&Credentials {
            email: registration.email.clone(),
            password: registration.password.clone(),
        })
        .await
    }

    async fn current_user(&self) -> ClientResult<AuthResponse> {
        self.record(Call::Auth("verify"))?;
        Ok(AuthResponse {
            token: None,
            user: User {
                id: 1,
                username: "tester".to_string(),
                email: "tester@example.com".to_string(),
                is_active: true,
                created_at: None,
            },
        })
    }

    async fn list_models(&self) -> ClientResult<Vec<ModelEntry>> {
        self.record(Call::ListModels)?;
        Ok(self.models())
    }

    async fn get_model(&self, id: ModelId) -> ClientResult<ModelEntry> {
        self.record(Call::GetModel(id))?;
        self.models
            .borrow()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn search_models(&self, params: &SearchParams) -> ClientResult<Vec<ModelEntry>> {
        let result = self.record(Call::Search(params.clone()));
        self.wait_gate(params.q.as_deref().unwrap_or("")).await;
        result?;
        if let Some(err) = self.fail_next_search.borrow_mut().take() {
            return Err(err);
        }
        Ok(self
            .models
            .borrow()
            .iter()
            .filter(|m| params.matches(m))
            .cloned()
            .collect())
    }

    async fn semantic_search(&self, term: &str) -> ClientResult<Vec<ModelEntry>> {
        let result = self.record(Call::Semantic(term.to_string()));
        self.wait_gate(term).await;
        result?;
        let params = SearchParams {
            q: Some(term.to_string()),
            ..Default::default()
        };
        Ok(self
            .models
            .borrow()
            .iter()
            .filter(|m| params.matches(m))
            .cloned()
            .map(|mut m| {
                m.relevance = Some(0.9);
                m
            })
            .collect())
    }

    async fn create_model(&self, draft: &ModelDraft) -> ClientResult<ModelEntry> {
        self.record(Call::Create(draft.clone()))?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let mut entry = ModelEntry::new(id, draft.name.clone());
        entry.developer = draft.developer.clone();
        entry.model_type = draft.model_type;
        entry.status = draft.status;
        entry.date_interacted = draft.date_interacted;
        entry.tags = draft.tags.clone();
        entry.notes = draft.notes.clone();
        entry.source_links = draft.source_links.clone();
        entry.workspace_id = draft.workspace_id;
        self.models.borrow_mut().push(entry.clone());
        Ok(entry)
    }

    async fn update_model(&self, id: ModelId, patch: &ModelPatch) -> ClientResult<ModelEntry> {
        self.record(Call::Update(id, patch.clone()))?;
        let mut models = self.models.borrow_mut();
        let entry = models
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        if let Some(name) = &patch.name {
            entry.name = name.clone();
        }
        if patch.status.is_some() {
            entry.status = patch.status;
        }
        if let Some(tags) = &patch.tags {
            entry.tags = tags.clone();
        }
        if patch.notes.is_some() {
            entry.notes = patch.notes.clone();
        }
        Ok(entry.clone())
    }

    async fn delete_model(&self, id: ModelId) -> ClientResult<()> {
        self.record(Call::Delete(id))?;
        self.wait_gate(&format!("delete:{id}")).await;
        self.models.borrow_mut().retain(|m| m.id != id);
        Ok(())
    }

    async fn autofill(&self, request: &AutofillRequest) -> ClientResult<String> {
        self.record(Call::Autofill(request.model_id.clone()))?;
        Ok(self.autofill_body.borrow().clone())
    }

    async fn model_insights(&self, id: ModelId) -> ClientResult<ModelInsights> {
        self.record(Call::Insights(id))?;
        Ok(ModelInsights {
            insights: format!("Insights for {id}"),
        })
    }

    async fn compare_models(&self, request: &CompareRequest) -> ClientResult<ComparativeAnalysis> {
        self.record(Call::Compare(request.clone()))?;
        Ok(ComparativeAnalysis {
            comparative_analysis: "First paragraph.\nSecond paragraph.".to_string(),
        })
    }

    async fn list_workspaces(&self) -> ClientResult<Vec<WorkspaceEntry>> {
        self.record(Call::Workspace("list"))?;
        Ok(self.workspaces.borrow().clone())
    }

    async fn get_workspace(&self, id: WorkspaceId) -> ClientResult<WorkspaceEntry> {
        self.record(Call::Workspace("get"))?;
        let models = self
            .models
            .borrow()
            .iter()
            .filter(|m| m.workspace_id == Some(id))
            .cloned()
            .collect();
        self.workspaces
            .borrow()
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .map(|mut w| {
                w.models = models;
                w
            })
            .ok_or_else(|| ClientError::Server {
                status: 404,
                message: format!("Workspace {id} not found"),
            })
    }

    async fn create_workspace(&self, draft: &WorkspaceDraft) -> ClientResult<WorkspaceEntry> {
        self.record(Call::Workspace("create"))?;
        let mut workspaces = self.workspaces.borrow_mut();
        let entry = WorkspaceEntry {
            id: workspaces.iter().map(|w| w.id).max().unwrap_or(0) + 1,
            name: draft.name.clone(),
            description: draft.description.clone(),
            created_at: None,
            is_default: workspaces.is_empty(),
            user_id: Some(1),
            models: Vec::new(),
        };
        workspaces.push(entry.clone());
        Ok(entry)
    }

    async fn update_workspace(
        &self,
        id: WorkspaceId,
        draft: &WorkspaceDraft,
    ) -> ClientResult<WorkspaceEntry> {
        self.record(Call::Workspace("update"))?;
        let mut workspaces = self.workspaces.borrow_mut();
        let ws = workspaces
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| ClientError::Server {
                status: 404,
                message: format!("Workspace {id} not found"),
            })?;
        ws.name = draft.name.clone();
        ws.description = draft.description.clone();
        Ok(ws.clone())
    }

    async fn delete_workspace(&self, id: WorkspaceId) -> ClientResult<()> {
        self.record(Call::Workspace("delete"))?;
        self.workspaces.borrow_mut().retain(|w| w.id != id);
        Ok(())
    }

    async fn move_model(
        &self,
        model_id: ModelId,
        from: WorkspaceId,
        to: WorkspaceId,
    ) -> ClientResult<()> {
        self.record(Call::Move(model_id, from, to))?;
        let mut models = self.models.borrow_mut();
        let entry = models
            .iter_mut()
            .find(|m| m.id == model_id)
            .ok_or_else(|| Self::not_found(model_id))?;
        entry.workspace_id = Some(to);
        Ok(())
    }
}
