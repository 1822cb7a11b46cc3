//! Selection Tracker
//!
//! Model ids picked for comparison. Keyed by id, in the order they were
//! picked, and independent of whatever list is currently displayed.

use std::collections::HashMap;

use super::comparison::ComparisonRoute;
use crate::domain::{index_by_id, ModelEntry, ModelId};
use crate::error::{ClientError, ClientResult};

/// Minimum number of models a comparison needs
pub const MIN_COMPARE: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    ids: Vec<ModelId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove `id`. Re-selecting keeps the original position.
    pub fn toggle(&mut self, id: ModelId, selected: bool) {
        let present = self.contains(id);
        if selected && !present {
            self.ids.push(id);
        } else if !selected && present {
            self.ids.retain(|&i| i != id);
        }
    }

    pub fn contains(&self, id: ModelId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in insertion order
    pub fn ids(&self) -> &[ModelId] {
        &self.ids
    }

    pub fn compare_ready(&self) -> bool {
        self.ids.len() >= MIN_COMPARE
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Navigation payload for the comparison view
    pub fn comparison_route(&self) -> ClientResult<ComparisonRoute> {
        if !self.compare_ready() {
            return Err(ClientError::validation(
                "Please select at least 2 models to compare",
            ));
        }
        Ok(ComparisonRoute::new(self.ids.clone()))
    }

    /// Resolve selected ids for display.
    ///
    /// Looks in the visible list first, then in `seen` (entries displayed
    /// earlier in the session). Ids found in neither are skipped.
    pub fn resolve(&self, visible: &[ModelEntry], seen: &HashMap<ModelId, ModelEntry>) -> Vec<ModelEntry> {
        let visible = index_by_id(visible);
        self.ids
            .iter()
            .filter_map(|id| visible.get(id).copied().or_else(|| seen.get(id)))
            .cloned()
            .collect()
    }
}
