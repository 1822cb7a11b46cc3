//! Fetch Orchestrator
//!
//! Turns a [`QueryState`] into a backend search and owns the displayed list.
//! Only the most recently started refresh may touch that list: every refresh
//! takes a ticket, and a response whose ticket is no longer the latest is
//! dropped on arrival, success or failure alike.

use log::{debug, warn};
use std::cell::{Cell, RefCell};

use super::query::{FetchRequest, QueryState};
use crate::backend::SharedBackend;
use crate::domain::{ModelEntry, ModelId};
use crate::error::ClientError;

/// What a refresh did to the displayed list
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The list was replaced with these entries
    Applied(Vec<ModelEntry>),
    /// A newer refresh started before this one resolved
    Superseded,
    /// The list was left as it was
    Failed(ClientError),
}

impl RefreshOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, RefreshOutcome::Applied(_))
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            RefreshOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

pub struct FetchOrchestrator {
    backend: SharedBackend,
    latest: Cell<u64>,
    settled: Cell<u64>,
    models: RefCell<Vec<ModelEntry>>,
}

impl FetchOrchestrator {
    pub fn new(backend: SharedBackend) -> Self {
        Self {
            backend,
            latest: Cell::new(0),
            settled: Cell::new(0),
            models: RefCell::new(Vec::new()),
        }
    }

    /// Currently displayed entries
    pub fn models(&self) -> Vec<ModelEntry> {
        self.models.borrow().clone()
    }

    pub fn contains(&self, id: ModelId) -> bool {
        self.models.borrow().iter().any(|m| m.id == id)
    }

    /// The latest refresh has not resolved yet
    pub fn is_loading(&self) -> bool {
        self.latest.get() != self.settled.get()
    }

    pub async fn refresh(&self, query: &QueryState) -> RefreshOutcome {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);

        let result = match query.to_request() {
            FetchRequest::Semantic { term } => {
                debug!("refresh #{ticket}: semantic search {term:?}");
                self.backend.semantic_search(&term).await
            }
            FetchRequest::Keyword(params) => {
                debug!("refresh #{ticket}: keyword search {params:?}");
                self.backend.search_models(&params).await
            }
        };

        if ticket != self.latest.get() {
            debug!(
                "refresh #{ticket} superseded by #{}, discarding",
                self.latest.get()
            );
            return RefreshOutcome::Superseded;
        }
        self.settled.set(ticket);

        match result {
            Ok(models) => {
                debug!("refresh #{ticket}: {} entries", models.len());
                *self.models.borrow_mut() = models.clone();
                RefreshOutcome::Applied(models)
            }
            Err(e) => {
                warn!("refresh #{ticket} failed: {e}");
                RefreshOutcome::Failed(e)
            }
        }
    }
}
