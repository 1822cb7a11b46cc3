//! Backend Layer - Core Traits
//!
//! The catalog REST service, reduced to the logical operations the client
//! uses. The HTTP implementation lives in `http`; tests use an in-memory one.
//!
//! Futures are `?Send`: the browser runs everything on one thread.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{
    AuthResponse, AutofillRequest, ComparativeAnalysis, CompareRequest, Credentials, ModelDraft,
    ModelEntry, ModelId, ModelInsights, ModelPatch, ModelStatus, ModelType, Registration,
    WorkspaceDraft, WorkspaceEntry, WorkspaceId,
};
use crate::error::ClientResult;

/// Keyword search predicates. `None` fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<WorkspaceId>,
}

impl SearchParams {
    pub fn is_unconstrained(&self) -> bool {
        *self == SearchParams::default()
    }

    /// Whether `entry` satisfies every supplied predicate.
    /// The term matches name, developer or notes case-insensitively.
    pub fn matches(&self, entry: &ModelEntry) -> bool {
        let term_ok = self.q.as_deref().map_or(true, |q| {
            let q = q.to_lowercase();
            [Some(&entry.name), entry.developer.as_ref(), entry.notes.as_ref()]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&q))
        });
        term_ok
            && self.model_type.map_or(true, |t| entry.model_type == Some(t))
            && self.status.map_or(true, |s| entry.status == Some(s))
            && self.tag.as_deref().map_or(true, |tag| entry.has_tag(tag))
            && self.workspace_id.map_or(true, |w| entry.workspace_id == Some(w))
    }
}

/// Logical operations of the catalog backend
#[async_trait(?Send)]
pub trait CatalogBackend {
    // Authentication

    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthResponse>;

    async fn register(&self, registration: &Registration) -> ClientResult<AuthResponse>;

    /// Resolve the user behind the current bearer token
    async fn current_user(&self) -> ClientResult<AuthResponse>;

    // Models

    /// All models owned by the authenticated user
    async fn list_models(&self) -> ClientResult<Vec<ModelEntry>>;

    async fn get_model(&self, id: ModelId) -> ClientResult<ModelEntry>;

    async fn search_models(&self, params: &SearchParams) -> ClientResult<Vec<ModelEntry>>;

    /// Ranked by the backend; entries carry `relevance`
    async fn semantic_search(&self, term: &str) -> ClientResult<Vec<ModelEntry>>;

    async fn create_model(&self, draft: &ModelDraft) -> ClientResult<ModelEntry>;

    async fn update_model(&self, id: ModelId, patch: &ModelPatch) -> ClientResult<ModelEntry>;

    async fn delete_model(&self, id: ModelId) -> ClientResult<()>;

    /// Raw response body: interpretation (structured vs. free text) is the
    /// caller's job.
    async fn autofill(&self, request: &AutofillRequest) -> ClientResult<String>;

    // Insights

    async fn model_insights(&self, id: ModelId) -> ClientResult<ModelInsights>;

    async fn compare_models(&self, request: &CompareRequest) -> ClientResult<ComparativeAnalysis>;

    // Workspaces

    async fn list_workspaces(&self) -> ClientResult<Vec<WorkspaceEntry>>;

    async fn get_workspace(&self, id: WorkspaceId) -> ClientResult<WorkspaceEntry>;

    async fn create_workspace(&self, draft: &WorkspaceDraft) -> ClientResult<WorkspaceEntry>;

    async fn update_workspace(
        &self,
        id: WorkspaceId,
        draft: &WorkspaceDraft,
    ) -> ClientResult<WorkspaceEntry>;

    async fn delete_workspace(&self, id: WorkspaceId) -> ClientResult<()>;

    async fn move_model(
        &self,
        model_id: ModelId,
        from: WorkspaceId,
        to: WorkspaceId,
    ) -> ClientResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ModelEntry {
        let mut e = ModelEntry::new(1, "Stable Diffusion XL");
        e.developer = Some("Stability AI".to_string());
        e.model_type = Some(ModelType::Diffusion);
        e.status = Some(ModelStatus::Tried);
        e.tags = vec!["image".to_string()];
        e.workspace_id = Some(2);
        e
    }

    #[test]
    fn test_unconstrained_matches_everything() {
        assert!(SearchParams::default().is_unconstrained());
        assert!(SearchParams::default().matches(&entry()));
    }

    #[test]
    fn test_predicates_are_anded() {
        let params = SearchParams {
            q: Some("stability".to_string()),
            model_type: Some(ModelType::Diffusion),
            tag: Some("image".to_string()),
            ..Default::default()
        };
        assert!(params.matches(&entry()));

        let params = SearchParams {
            q: Some("stability".to_string()),
            status: Some(ModelStatus::Wishlist),
            ..Default::default()
        };
        assert!(!params.matches(&entry()));
    }

    #[test]
    fn test_query_string_shape() {
        let params = SearchParams {
            q: Some("llama".to_string()),
            model_type: Some(ModelType::Llm),
            workspace_id: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"q": "llama", "type": "LLM", "workspace_id": 3}));
    }
}
