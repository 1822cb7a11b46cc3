//! Domain Layer
//!
//! Entities exchanged with the catalog backend and the payloads sent to it.
//! This layer has no transport knowledge (serde only).

mod entity;
mod model;
mod workspace;
mod user;
mod insight;
mod dates;

pub use entity::{Entity, index_by_id};
pub use model::{
    ModelDraft, ModelEntry, ModelId, ModelPatch, ModelStatus, ModelType, normalize_list,
};
pub use workspace::{WorkspaceDraft, WorkspaceEntry, WorkspaceId};
pub use user::{AuthResponse, Credentials, Registration, User, UserId};
pub use insight::{AutofillFile, AutofillRequest, ComparativeAnalysis, CompareRequest, ModelInsights};
