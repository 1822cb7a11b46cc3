//! Query State
//!
//! Filter and search criteria of the model-list view. Lives only as long as
//! the view session; nothing here is persisted.

use std::collections::BTreeSet;

use crate::backend::SearchParams;
use crate::domain::{ModelEntry, ModelStatus, ModelType, WorkspaceId};

/// The backend call a query resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Ranked free-text search; every other filter is ignored
    Semantic { term: String },
    Keyword(SearchParams),
}

/// Current search criteria.
///
/// Setters return whether the state actually changed, so callers only
/// refetch on real changes. While semantic mode is on the type, status and
/// tag filters are disabled and their setters leave the state alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    term: String,
    model_type: Option<ModelType>,
    status: Option<ModelStatus>,
    tag: Option<String>,
    workspace_id: Option<WorkspaceId>,
    semantic: bool,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw term as typed
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn trimmed_term(&self) -> &str {
        self.term.trim()
    }

    pub fn model_type(&self) -> Option<ModelType> {
        self.model_type
    }

    pub fn status(&self) -> Option<ModelStatus> {
        self.status
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn workspace_id(&self) -> Option<WorkspaceId> {
        self.workspace_id
    }

    pub fn is_semantic(&self) -> bool {
        self.semantic
    }

    /// Type/status/tag controls accept input
    pub fn filters_enabled(&self) -> bool {
        !self.semantic
    }

    pub fn set_term(&mut self, term: impl Into<String>) -> bool {
        replace(&mut self.term, term.into())
    }

    pub fn set_model_type(&mut self, model_type: Option<ModelType>) -> bool {
        self.filters_enabled() && replace(&mut self.model_type, model_type)
    }

    pub fn set_status(&mut self, status: Option<ModelStatus>) -> bool {
        self.filters_enabled() && replace(&mut self.status, status)
    }

    /// Blank tags clear the filter
    pub fn set_tag(&mut self, tag: Option<String>) -> bool {
        let tag = tag
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self.filters_enabled() && replace(&mut self.tag, tag)
    }

    pub fn set_workspace(&mut self, workspace_id: Option<WorkspaceId>) -> bool {
        replace(&mut self.workspace_id, workspace_id)
    }

    pub fn set_semantic(&mut self, semantic: bool) -> bool {
        replace(&mut self.semantic, semantic)
    }

    /// Resolve to the backend call.
    ///
    /// Semantic mode with a blank term falls back to keyword search over
    /// whatever filters are populated.
    pub fn to_request(&self) -> FetchRequest {
        let term = self.trimmed_term();
        if self.semantic && !term.is_empty() {
            return FetchRequest::Semantic {
                term: term.to_string(),
            };
        }
        FetchRequest::Keyword(SearchParams {
            q: (!term.is_empty()).then(|| term.to_string()),
            model_type: self.model_type,
            status: self.status,
            tag: self.tag.clone(),
            workspace_id: self.workspace_id,
        })
    }
}

/// Search box text between commits.
///
/// Typing only edits the draft; the query (and so the list) changes when the
/// draft is committed on Return or the Search button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermInput {
    draft: String,
}

impl TermInput {
    pub fn from_query(query: &QueryState) -> Self {
        Self {
            draft: query.term().to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.draft
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// The draft would search for something other than `query` does
    pub fn is_pending(&self, query: &QueryState) -> bool {
        self.draft.trim() != query.trimmed_term()
    }

    /// Write the trimmed draft into `query`. Returns whether the query
    /// changed; whitespace-only edits never do.
    pub fn commit(&self, query: &mut QueryState) -> bool {
        self.is_pending(query) && query.set_term(self.draft.trim())
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Sorted distinct tags across `models`, for the tag filter options
pub fn distinct_tags(models: &[ModelEntry]) -> Vec<String> {
    models
        .iter()
        .flat_map(|m| m.tags.iter())
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
