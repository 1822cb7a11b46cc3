//! Workspace Entity
//!
//! Named grouping of models. Exactly one workspace per user is the default;
//! the backend enforces that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dates;
use super::entity::Entity;
use super::model::ModelEntry;
use super::user::UserId;

pub type WorkspaceId = u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceEntry {
    pub id: WorkspaceId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "dates::optional", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub models: Vec<ModelEntry>,
}

impl Entity for WorkspaceEntry {
    type Id = WorkspaceId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Create/update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WorkspaceDraft {
    /// Trimmed copy; a blank description is dropped.
    pub fn new(name: &str, description: &str) -> Self {
        let description = description.trim();
        Self {
            name: name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        }
    }
}
