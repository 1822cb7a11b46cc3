//! Model Entry
//!
//! A machine-learning model the user has tried, is studying, or wants to try.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dates;
use super::entity::Entity;
use super::user::UserId;
use super::workspace::WorkspaceId;

pub type ModelId = u32;

/// Category of a catalogued model. Wire names match the variant names,
/// except where an acronym is spelled out below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    Audio,
    Chatbot,
    Classification,
    Clustering,
    CodeAssistant,
    DataAnalysis,
    Diffusion,
    Forecasting,
    ImageEditing,
    #[serde(rename = "LLM")]
    Llm,
    LanguageModel,
    MachineTranslation,
    MultiModal,
    #[serde(rename = "NER")]
    Ner,
    ObjectDetection,
    Other,
    Recommendation,
    Reinforcement,
    Segmentation,
    SentimentAnalysis,
    TextGeneration,
    TimeSeries,
    Vision,
    VoiceGeneration,
}

impl ModelType {
    pub const ALL: [ModelType; 24] = [
        ModelType::Audio,
        ModelType::Chatbot,
        ModelType::Classification,
        ModelType::Clustering,
        ModelType::CodeAssistant,
        ModelType::DataAnalysis,
        ModelType::Diffusion,
        ModelType::Forecasting,
        ModelType::ImageEditing,
        ModelType::Llm,
        ModelType::LanguageModel,
        ModelType::MachineTranslation,
        ModelType::MultiModal,
        ModelType::Ner,
        ModelType::ObjectDetection,
        ModelType::Other,
        ModelType::Recommendation,
        ModelType::Reinforcement,
        ModelType::Segmentation,
        ModelType::SentimentAnalysis,
        ModelType::TextGeneration,
        ModelType::TimeSeries,
        ModelType::Vision,
        ModelType::VoiceGeneration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Audio => "Audio",
            ModelType::Chatbot => "Chatbot",
            ModelType::Classification => "Classification",
            ModelType::Clustering => "Clustering",
            ModelType::CodeAssistant => "CodeAssistant",
            ModelType::DataAnalysis => "DataAnalysis",
            ModelType::Diffusion => "Diffusion",
            ModelType::Forecasting => "Forecasting",
            ModelType::ImageEditing => "ImageEditing",
            ModelType::Llm => "LLM",
            ModelType::LanguageModel => "LanguageModel",
            ModelType::MachineTranslation => "MachineTranslation",
            ModelType::MultiModal => "MultiModal",
            ModelType::Ner => "NER",
            ModelType::ObjectDetection => "ObjectDetection",
            ModelType::Other => "Other",
            ModelType::Recommendation => "Recommendation",
            ModelType::Reinforcement => "Reinforcement",
            ModelType::Segmentation => "Segmentation",
            ModelType::SentimentAnalysis => "SentimentAnalysis",
            ModelType::TextGeneration => "TextGeneration",
            ModelType::TimeSeries => "TimeSeries",
            ModelType::Vision => "Vision",
            ModelType::VoiceGeneration => "VoiceGeneration",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown model type: {s}"))
    }
}

/// Where the user stands with a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelStatus {
    Tried,
    Studying,
    Wishlist,
    Archived,
}

impl ModelStatus {
    pub const ALL: [ModelStatus; 4] = [
        ModelStatus::Tried,
        ModelStatus::Studying,
        ModelStatus::Wishlist,
        ModelStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelStatus::Tried => "Tried",
            ModelStatus::Studying => "Studying",
            ModelStatus::Wishlist => "Wishlist",
            ModelStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelStatus::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown model status: {s}"))
    }
}

/// A catalogued model as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: ModelId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelStatus>,
    #[serde(default, with = "dates::optional", skip_serializing_if = "Option::is_none")]
    pub date_interacted: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub source_links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<WorkspaceId>,
    /// Owner display name (shared listings only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Ranking score attached by semantic search
    #[serde(default, alias = "similarity", skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f32>,
}

impl ModelEntry {
    /// Minimal entry, used when building fixtures and placeholders
    pub fn new(id: ModelId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            developer: None,
            model_type: None,
            status: None,
            date_interacted: None,
            tags: Vec::new(),
            notes: None,
            source_links: Vec::new(),
            parameters: None,
            license: None,
            version: None,
            user_id: None,
            workspace_id: None,
            username: None,
            relevance: None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Entity for ModelEntry {
    type Id = ModelId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Payload for creating a model. The owner is taken from the bearer token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelStatus>,
    #[serde(default, with = "dates::optional", skip_serializing_if = "Option::is_none")]
    pub date_interacted: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub source_links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<WorkspaceId>,
}

impl ModelDraft {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Fold a partial entry over this draft: present scalars overwrite,
    /// tags and links are appended.
    pub fn absorb(&mut self, patch: ModelPatch) {
        if let Some(name) = patch.name.filter(|n| !n.trim().is_empty()) {
            self.name = name;
        }
        if patch.developer.is_some() {
            self.developer = patch.developer;
        }
        if patch.model_type.is_some() {
            self.model_type = patch.model_type;
        }
        if patch.status.is_some() {
            self.status = patch.status;
        }
        if patch.date_interacted.is_some() {
            self.date_interacted = patch.date_interacted;
        }
        if patch.notes.is_some() {
            self.notes = patch.notes;
        }
        if patch.parameters.is_some() {
            self.parameters = patch.parameters;
        }
        if patch.license.is_some() {
            self.license = patch.license;
        }
        if patch.version.is_some() {
            self.version = patch.version;
        }
        if patch.workspace_id.is_some() {
            self.workspace_id = patch.workspace_id;
        }
        if let Some(tags) = patch.tags {
            self.tags.extend(tags);
        }
        if let Some(links) = patch.source_links {
            self.source_links.extend(links);
        }
        self.tags = normalize_list(std::mem::take(&mut self.tags));
        self.source_links = normalize_list(std::mem::take(&mut self.source_links));
    }
}

/// Partial update. Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ModelStatus>,
    #[serde(default, with = "dates::optional", skip_serializing_if = "Option::is_none")]
    pub date_interacted: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_links: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<WorkspaceId>,
}

impl ModelPatch {
    /// Full replacement patch, as sent by the detail editor
    pub fn from_entry(entry: &ModelEntry) -> Self {
        Self {
            name: Some(entry.name.clone()),
            developer: entry.developer.clone(),
            model_type: entry.model_type,
            status: entry.status,
            date_interacted: entry.date_interacted,
            tags: Some(normalize_list(entry.tags.clone())),
            notes: entry.notes.clone(),
            source_links: Some(normalize_list(entry.source_links.clone())),
            parameters: entry.parameters,
            license: entry.license.clone(),
            version: entry.version.clone(),
            workspace_id: entry.workspace_id,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ModelPatch::default()
    }
}

/// Trim entries, drop blanks and duplicates, keep first-seen order.
pub fn normalize_list(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if value.is_empty() || out.iter().any(|v| v == value) {
            continue;
        }
        out.push(value.to_string());
    }
    out
}

fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_type_wire_names() {
        assert_eq!(serde_json::to_string(&ModelType::Llm).unwrap(), "\"LLM\"");
        assert_eq!(serde_json::to_string(&ModelType::Ner).unwrap(), "\"NER\"");
        assert_eq!(
            serde_json::from_str::<ModelType>("\"CodeAssistant\"").unwrap(),
            ModelType::CodeAssistant
        );
        for t in ModelType::ALL {
            assert_eq!(t.as_str().parse::<ModelType>().unwrap(), t);
        }
    }

    #[test]
    fn test_entry_tolerates_sparse_payload() {
        let entry: ModelEntry = serde_json::from_str(
            r#"{"id": 4, "name": "Mistral 7B", "tags": null, "similarity": 0.82}"#,
        )
        .unwrap();
        assert_eq!(entry.id, 4);
        assert!(entry.tags.is_empty());
        assert!(entry.source_links.is_empty());
        assert_eq!(entry.relevance, Some(0.82));
    }

    #[test]
    fn test_draft_omits_unset_fields() {
        let draft = ModelDraft::named("Whisper");
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["name"], "Whisper");
        assert!(json.get("developer").is_none());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_normalize_list() {
        let out = normalize_list(vec![
            " nlp ".to_string(),
            "".to_string(),
            "vision".to_string(),
            "nlp".to_string(),
        ]);
        assert_eq!(out, vec!["nlp", "vision"]);
    }

    #[test]
    fn test_absorb_appends_lists_and_overwrites_scalars() {
        let mut draft = ModelDraft::named("Llama");
        draft.tags = vec!["local".to_string()];
        draft.developer = Some("unknown".to_string());

        draft.absorb(ModelPatch {
            developer: Some("Meta".to_string()),
            tags: Some(vec!["llm".to_string(), "local".to_string()]),
            source_links: Some(vec!["https://ai.meta.com".to_string()]),
            ..Default::default()
        });

        assert_eq!(draft.name, "Llama");
        assert_eq!(draft.developer.as_deref(), Some("Meta"));
        assert_eq!(draft.tags, vec!["local", "llm"]);
        assert_eq!(draft.source_links, vec!["https://ai.meta.com"]);
    }
}
