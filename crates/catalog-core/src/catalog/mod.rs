//! Model-list state coordination
//!
//! - query: search/filter criteria and the backend call they resolve to
//! - fetch: last-request-wins refresh of the displayed list
//! - selection: ids picked for comparison
//! - mutation: create/update/delete/move followed by a refresh
//! - create_flow, autofill, comparison, auth: the flows around them
//! - stats: overview figures for the landing page

mod query;
mod fetch;
mod selection;
mod mutation;
mod create_flow;
pub mod autofill;
pub mod comparison;
pub mod auth;
pub mod stats;


pub use query::{distinct_tags, FetchRequest, QueryState, TermInput};
pub use fetch::{FetchOrchestrator, RefreshOutcome};
pub use selection::{SelectionTracker, MIN_COMPARE};
pub use mutation::{Confirm, CurrentQuery, DeleteOutcome, Mutation, MutationCoordinator};
pub use create_flow::CreateFlow;
pub use autofill::{AutofillReply, Autofilled};
pub use comparison::{paragraphs, Comparison, ComparisonRoute};
pub use stats::{catalog_stats, CatalogStats};
