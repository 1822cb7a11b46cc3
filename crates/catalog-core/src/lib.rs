//! Model Catalog Core
//!
//! Layered like the front end that uses it:
//! - domain: entities and payloads exchanged with the backend
//! - backend: the REST service behind a trait, plus the reqwest client
//! - catalog: query/fetch/selection/mutation state of the model list
//!
//! Single-threaded by design: shared handles are `Rc`, interior state is
//! `Cell`/`RefCell`, and backend futures are not `Send`.

pub mod domain;
pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod session;

pub use backend::{CatalogBackend, HttpBackend, SearchParams, SharedBackend};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use session::SessionContext;
