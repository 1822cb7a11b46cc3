//! Catalog Overview
//!
//! Summary figures for the landing page, computed from the full model list.

use chrono::{DateTime, Datelike, Utc};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use crate::backend::SharedBackend;
use crate::domain::{ModelEntry, ModelStatus};
use crate::error::ClientResult;

pub const RECENT_LIMIT: usize = 5;
pub const POPULAR_TAG_LIMIT: usize = 15;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStats {
    pub total: usize,
    /// Distinct model types in use
    pub type_count: usize,
    /// Distinct tags in use
    pub tag_count: usize,
    /// Interacted with during the calendar month of `now`
    pub this_month: usize,
    /// Non-zero counts, in status order
    pub by_status: Vec<(ModelStatus, usize)>,
    /// Most recently interacted first; undated entries last
    pub recent: Vec<ModelEntry>,
    /// Most used first, ties by name
    pub popular_tags: Vec<(String, usize)>,
}

pub fn catalog_stats(models: &[ModelEntry], now: DateTime<Utc>) -> CatalogStats {
    let type_count = models
        .iter()
        .filter_map(|m| m.model_type)
        .collect::<HashSet<_>>()
        .len();

    let by_status = ModelStatus::ALL
        .iter()
        .map(|&s| (s, models.iter().filter(|m| m.status == Some(s)).count()))
        .filter(|(_, n)| *n > 0)
        .collect();

    let this_month = models
        .iter()
        .filter_map(|m| m.date_interacted)
        .filter(|d| d.year() == now.year() && d.month() == now.month())
        .count();

    let mut tag_uses: HashMap<&str, usize> = HashMap::new();
    for tag in models.iter().flat_map(|m| m.tags.iter()) {
        let tag = tag.trim();
        if !tag.is_empty() {
            *tag_uses.entry(tag).or_default() += 1;
        }
    }
    let tag_count = tag_uses.len();
    let mut popular_tags: Vec<(String, usize)> = tag_uses
        .into_iter()
        .map(|(t, n)| (t.to_string(), n))
        .collect();
    popular_tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    popular_tags.truncate(POPULAR_TAG_LIMIT);

    // `None < Some`, so reversing puts undated entries last
    let mut recent = models.to_vec();
    recent.sort_by_key(|m| Reverse(m.date_interacted));
    recent.truncate(RECENT_LIMIT);

    CatalogStats {
        total: models.len(),
        type_count,
        tag_count,
        this_month,
        by_status,
        recent,
        popular_tags,
    }
}

/// Overview of everything the user owns, as of now
pub async fn load_stats(backend: &SharedBackend) -> ClientResult<CatalogStats> {
    let all = backend.list_models().await?;
    Ok(catalog_stats(&all, Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelType;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn model(
        id: u32,
        status: Option<ModelStatus>,
        date: Option<DateTime<Utc>>,
        tags: &[&str],
    ) -> ModelEntry {
        let mut e = ModelEntry::new(id, format!("model {id}"));
        e.status = status;
        e.date_interacted = date;
        e.tags = tags.iter().map(|t| t.to_string()).collect();
        e
    }

    #[test]
    fn test_empty_catalog() {
        let stats = catalog_stats(&[], at(2024, 6, 15));
        assert_eq!(stats, CatalogStats::default());
    }

    #[test]
    fn test_counts() {
        let mut models = vec![
            model(1, Some(ModelStatus::Tried), None, &["chat", "code"]),
            model(2, Some(ModelStatus::Wishlist), None, &["chat"]),
            model(3, Some(ModelStatus::Tried), None, &[]),
            model(4, None, None, &["vision"]),
        ];
        models[0].model_type = Some(ModelType::Llm);
        models[1].model_type = Some(ModelType::Llm);
        models[2].model_type = Some(ModelType::Vision);

        let stats = catalog_stats(&models, at(2024, 6, 15));

        assert_eq!(stats.total, 4);
        assert_eq!(stats.type_count, 2);
        assert_eq!(stats.tag_count, 3);
        assert_eq!(
            stats.by_status,
            vec![(ModelStatus::Tried, 2), (ModelStatus::Wishlist, 1)]
        );
        assert_eq!(
            stats.popular_tags,
            vec![
                ("chat".to_string(), 2),
                ("code".to_string(), 1),
                ("vision".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_this_month_requires_same_year() {
        let models = vec![
            model(1, None, Some(at(2024, 6, 1)), &[]),
            model(2, None, Some(at(2024, 6, 30)), &[]),
            model(3, None, Some(at(2023, 6, 15)), &[]),
            model(4, None, Some(at(2024, 5, 31)), &[]),
            model(5, None, None, &[]),
        ];

        assert_eq!(catalog_stats(&models, at(2024, 6, 15)).this_month, 2);
    }

    #[test]
    fn test_recent_newest_first_undated_last() {
        let models = vec![
            model(1, None, None, &[]),
            model(2, None, Some(at(2024, 1, 1)), &[]),
            model(3, None, Some(at(2024, 3, 1)), &[]),
            model(4, None, None, &[]),
            model(5, None, Some(at(2024, 2, 1)), &[]),
            model(6, None, Some(at(2023, 12, 1)), &[]),
        ];

        let recent: Vec<u32> = catalog_stats(&models, at(2024, 6, 15))
            .recent
            .iter()
            .map(|m| m.id)
            .collect();

        assert_eq!(recent, vec![3, 5, 2, 6, 1]);
    }
}
