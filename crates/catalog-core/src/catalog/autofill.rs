//! Autofill
//!
//! Pre-populates the create form from an external metadata source proxied
//! by the backend. The reply is usually a partial model entry, but when it
//! is not well-formed structured data the text is kept as notes instead of
//! being rejected.

use log::{debug, info};

use crate::backend::SharedBackend;
use crate::domain::{AutofillRequest, ModelDraft, ModelPatch};
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq)]
pub enum AutofillReply {
    Structured(ModelPatch),
    FreeText(String),
}

/// Classify a raw autofill body.
pub fn interpret(body: &str) -> AutofillReply {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return AutofillReply::Structured(ModelPatch::default());
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value @ serde_json::Value::Object(_)) => match serde_json::from_value(value) {
            Ok(patch) => AutofillReply::Structured(patch),
            Err(e) => {
                debug!("autofill object does not fit a model entry: {e}");
                AutofillReply::FreeText(trimmed.to_string())
            }
        },
        Ok(serde_json::Value::String(text)) => AutofillReply::FreeText(text),
        _ => AutofillReply::FreeText(trimmed.to_string()),
    }
}

/// Merge a reply into `draft`.
///
/// Links end up as: the draft's own, then the ones sent with the request,
/// then the ones the source returned.
pub fn apply(draft: &mut ModelDraft, request_links: &[String], reply: AutofillReply) {
    match reply {
        AutofillReply::Structured(mut patch) => {
            let mut links = request_links.to_vec();
            links.extend(patch.source_links.take().unwrap_or_default());
            patch.source_links = Some(links);
            draft.absorb(patch);
        }
        AutofillReply::FreeText(text) => {
            let notes = match draft.notes.take().filter(|n| !n.trim().is_empty()) {
                Some(existing) => format!("{existing}\n\n{text}"),
                None => text,
            };
            draft.absorb(ModelPatch {
                notes: Some(notes),
                source_links: Some(request_links.to_vec()),
                ..Default::default()
            });
        }
    }
}

/// A reply that has arrived but not yet been merged. The form keeps
/// changing while the request is out, so merging waits for the draft as it
/// is when the reply lands.
#[derive(Debug, Clone, PartialEq)]
pub struct Autofilled {
    request_links: Vec<String>,
    reply: AutofillReply,
}

impl Autofilled {
    pub fn reply(&self) -> &AutofillReply {
        &self.reply
    }

    pub fn merge_into(self, draft: &mut ModelDraft) {
        apply(draft, &self.request_links, self.reply);
    }
}

/// Ask the backend. Server messages come back verbatim.
pub async fn run_autofill(
    backend: &SharedBackend,
    request: &AutofillRequest,
) -> ClientResult<Autofilled> {
    if request.model_id.trim().is_empty() {
        return Err(ClientError::validation("Enter a model identifier to autofill from"));
    }
    info!(
        "Autofill for {:?} ({} links, {} files)",
        request.model_id,
        request.model_links.len(),
        request.files.len()
    );

    let body = backend.autofill(request).await?;
    Ok(Autofilled {
        request_links: request.model_links.clone(),
        reply: interpret(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelType;

    #[test]
    fn test_interpret_structured() {
        let reply = interpret(r#"{"name": "Qwen2", "model_type": "LLM", "tags": ["chat"]}"#);
        match reply {
            AutofillReply::Structured(patch) => {
                assert_eq!(patch.name.as_deref(), Some("Qwen2"));
                assert_eq!(patch.model_type, Some(ModelType::Llm));
            }
            other => panic!("expected structured reply, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_free_text() {
        assert_eq!(
            interpret("A 7B model tuned for chat."),
            AutofillReply::FreeText("A 7B model tuned for chat.".to_string())
        );
        assert_eq!(
            interpret(r#""quoted prose""#),
            AutofillReply::FreeText("quoted prose".to_string())
        );
        // well-formed JSON that is not a model entry
        assert!(matches!(
            interpret(r#"{"model_type": 12}"#),
            AutofillReply::FreeText(_)
        ));
    }

    #[test]
    fn test_apply_structured_merges_lists_in_order() {
        let mut draft = ModelDraft::named("draft name");
        draft.tags = vec!["mine".to_string()];
        draft.source_links = vec!["https://a".to_string()];

        let reply = interpret(
            r#"{"developer": "Alibaba", "tags": ["chat", "mine"], "source_links": ["https://c"]}"#,
        );
        apply(&mut draft, &["https://b".to_string()], reply);

        assert_eq!(draft.name, "draft name");
        assert_eq!(draft.developer.as_deref(), Some("Alibaba"));
        assert_eq!(draft.tags, vec!["mine", "chat"]);
        assert_eq!(draft.source_links, vec!["https://a", "https://b", "https://c"]);
    }

    #[test]
    fn test_apply_free_text_appends_to_notes() {
        let mut draft = ModelDraft::named("x");
        draft.notes = Some("my notes".to_string());

        apply(
            &mut draft,
            &["https://hub/x".to_string()],
            AutofillReply::FreeText("source says hi".to_string()),
        );

        assert_eq!(draft.notes.as_deref(), Some("my notes\n\nsource says hi"));
        assert_eq!(draft.source_links, vec!["https://hub/x"]);
    }
}
