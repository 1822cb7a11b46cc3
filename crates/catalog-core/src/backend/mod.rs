//! Backend Layer
//!
//! - traits: the logical operations of the catalog REST service
//! - http: reqwest implementation carrying the session's bearer token

mod traits;
mod http;

#[cfg(test)]
pub(crate) mod memory;

pub use traits::{CatalogBackend, SearchParams};
pub use http::HttpBackend;

use std::rc::Rc;

/// Shared handle used by every core component
pub type SharedBackend = Rc<dyn CatalogBackend>;
