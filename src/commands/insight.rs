//! Insight Commands
//!
//! Derived views of the catalog: overview figures, AI insights,
//! comparisons, autofill.

use catalog_core::catalog::{
    autofill, comparison, stats, Autofilled, CatalogStats, Comparison, ComparisonRoute,
};
use catalog_core::domain::{AutofillRequest, ModelId};
use catalog_core::ClientResult;

use crate::context::AppContext;

pub async fn load_stats(ctx: AppContext) -> ClientResult<CatalogStats> {
    stats::load_stats(&ctx.services().backend).await
}

pub async fn model_insights(ctx: AppContext, id: ModelId) -> ClientResult<String> {
    let insights = ctx.services().backend.model_insights(id).await?;
    Ok(insights.insights)
}

pub async fn load_comparison(
    ctx: AppContext,
    route: ComparisonRoute,
    prompt: Option<String>,
) -> ClientResult<Comparison> {
    let backend = ctx.services().backend;
    comparison::load_comparison(&backend, &route, prompt.as_deref()).await
}

/// What the metadata source knows about `request.model_id`, to be merged
/// into the draft once it arrives
pub async fn run_autofill(ctx: AppContext, request: AutofillRequest) -> ClientResult<Autofilled> {
    let backend = ctx.services().backend;
    autofill::run_autofill(&backend, &request).await
}
