//! Insight, comparison and autofill payloads

use serde::{Deserialize, Serialize};

use super::model::ModelId;

/// Prose generated by the backend for one model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelInsights {
    pub insights: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareRequest {
    pub model_ids: Vec<ModelId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComparativeAnalysis {
    pub comparative_analysis: String,
}

/// File attached to an autofill request
#[derive(Debug, Clone, PartialEq)]
pub struct AutofillFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Source lookup for pre-populating the create form
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AutofillRequest {
    /// Identifier understood by the external source (e.g. `org/model`)
    pub model_id: String,
    pub model_links: Vec<String>,
    /// Sent as multipart parts; JSON requests never carry files
    #[serde(skip)]
    pub files: Vec<AutofillFile>,
}
