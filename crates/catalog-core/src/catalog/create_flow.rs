//! Create-model modal state
//!
//! `Idle -> Editing -> Submitting -> (Idle | Editing with error)`.
//! Cancelling from `Editing` returns to `Idle`.

use crate::domain::ModelDraft;
use crate::error::ClientResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CreateFlow {
    #[default]
    Idle,
    Editing {
        draft: ModelDraft,
        error: Option<String>,
    },
    Submitting {
        draft: ModelDraft,
    },
}

impl CreateFlow {
    /// Open the modal with an empty draft. No-op unless idle.
    pub fn open(&mut self) {
        if matches!(self, CreateFlow::Idle) {
            *self = CreateFlow::Editing {
                draft: ModelDraft::default(),
                error: None,
            };
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, CreateFlow::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, CreateFlow::Submitting { .. })
    }

    pub fn draft(&self) -> Option<&ModelDraft> {
        match self {
            CreateFlow::Idle => None,
            CreateFlow::Editing { draft, .. } | CreateFlow::Submitting { draft } => Some(draft),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CreateFlow::Editing { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Change the draft; only while editing.
    pub fn edit(&mut self, f: impl FnOnce(&mut ModelDraft)) -> bool {
        match self {
            CreateFlow::Editing { draft, .. } => {
                f(draft);
                true
            }
            _ => false,
        }
    }

    /// Show an error without leaving `Editing` (e.g. a failed autofill)
    pub fn set_error(&mut self, message: impl Into<String>) {
        if let CreateFlow::Editing { error, .. } = self {
            *error = Some(message.into());
        }
    }

    /// `Editing -> Submitting`; hands out the draft to send.
    pub fn submit(&mut self) -> Option<ModelDraft> {
        match std::mem::take(self) {
            CreateFlow::Editing { draft, .. } => {
                *self = CreateFlow::Submitting {
                    draft: draft.clone(),
                };
                Some(draft)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Settle a submission: success closes the modal, failure reopens the
    /// draft with the error shown.
    pub fn finish<T>(&mut self, result: &ClientResult<T>) {
        let CreateFlow::Submitting { draft } = std::mem::take(self) else {
            return;
        };
        *self = match result {
            Ok(_) => CreateFlow::Idle,
            Err(e) => CreateFlow::Editing {
                draft,
                error: Some(e.to_string()),
            },
        };
    }

    /// Close without submitting. Ignored while a submission is in flight.
    pub fn cancel(&mut self) {
        if matches!(self, CreateFlow::Editing { .. }) {
            *self = CreateFlow::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn test_happy_path() {
        let mut flow = CreateFlow::default();
        flow.open();
        assert!(flow.edit(|d| d.name = "Gemma".to_string()));

        let draft = flow.submit().unwrap();
        assert_eq!(draft.name, "Gemma");
        assert!(flow.is_submitting());
        assert!(!flow.edit(|d| d.name.clear()));

        flow.finish::<()>(&Ok(()));
        assert_eq!(flow, CreateFlow::Idle);
    }

    #[test]
    fn test_failure_returns_to_editing_with_error() {
        let mut flow = CreateFlow::default();
        flow.open();
        flow.edit(|d| d.name = "Gemma".to_string());
        flow.submit();

        flow.finish::<()>(&Err(ClientError::validation("Name is required")));
        assert_eq!(flow.error(), Some("Name is required"));
        assert_eq!(flow.draft().map(|d| d.name.as_str()), Some("Gemma"));
    }

    #[test]
    fn test_cancel_and_invalid_transitions() {
        let mut flow = CreateFlow::default();
        assert!(flow.submit().is_none());
        flow.finish::<()>(&Ok(()));
        assert_eq!(flow, CreateFlow::Idle);

        flow.open();
        flow.cancel();
        assert!(!flow.is_open());

        flow.open();
        flow.submit();
        flow.cancel();
        assert!(flow.is_submitting());
    }
}
