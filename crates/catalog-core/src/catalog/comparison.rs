//! Comparison view support: the `models=3,5` navigation payload, loading
//! the compared entries with the analysis, and splitting the prose.

use futures::future::try_join_all;
use log::info;

use super::selection::MIN_COMPARE;
use crate::backend::SharedBackend;
use crate::domain::{CompareRequest, ModelEntry, ModelId};
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRoute {
    ids: Vec<ModelId>,
}

impl ComparisonRoute {
    pub fn new(ids: Vec<ModelId>) -> Self {
        Self { ids }
    }

    pub fn ids(&self) -> &[ModelId] {
        &self.ids
    }

    /// `models=3,5`
    pub fn to_query(&self) -> String {
        let ids: Vec<String> = self.ids.iter().map(|id| id.to_string()).collect();
        format!("models={}", ids.join(","))
    }

    /// Parse a query string, with or without the leading `?`.
    /// Unparseable ids are skipped; fewer than two remaining is an error.
    pub fn parse(query: &str) -> ClientResult<Self> {
        let query = query.trim().trim_start_matches('?');
        let ids: Vec<ModelId> = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .filter(|(key, _)| *key == "models")
            .flat_map(|(_, value)| value.split(','))
            .filter_map(|id| id.trim().parse().ok())
            .collect();

        if ids.len() < MIN_COMPARE {
            return Err(ClientError::validation(
                "Not enough models selected for comparison",
            ));
        }
        Ok(Self { ids })
    }
}

/// Everything the comparison view renders
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub models: Vec<ModelEntry>,
    pub analysis: String,
}

impl Comparison {
    pub fn paragraphs(&self) -> Vec<&str> {
        paragraphs(&self.analysis)
    }
}

/// Fetch every compared model (concurrently) and the analysis.
/// Any failure fails the whole load.
pub async fn load_comparison(
    backend: &SharedBackend,
    route: &ComparisonRoute,
    prompt: Option<&str>,
) -> ClientResult<Comparison> {
    info!("Comparing models {:?}", route.ids());
    let models = try_join_all(route.ids().iter().map(|&id| backend.get_model(id))).await?;

    let request = CompareRequest {
        model_ids: route.ids().to_vec(),
        prompt: prompt
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string),
    };
    let analysis = backend.compare_models(&request).await?;

    Ok(Comparison {
        models,
        analysis: analysis.comparative_analysis,
    })
}

/// Split prose on newline boundaries, dropping blank segments.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect()
}
