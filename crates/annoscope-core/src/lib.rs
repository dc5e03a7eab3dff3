//! annoscope-core — concept-set document search.
//!
//! This crate holds the catalog of known concepts and the two search paths
//! built on it.
//!
//! # Architecture
//!
//! ```text
//! concept URIs ──► SourceResolver ──► QueryDispatcher ──► ResultIntersector ──► documents
//!                        │                  │ (one fetch per concept)
//!                        │                  └──► RetrievalClient
//!                  CatalogIndex ──► AutocompleteMatcher ──► search hits
//! ```
//!
//! The catalog is built once and shared read-only through a [`CatalogCell`];
//! the only suspension points are the retrieval calls.

pub mod autocomplete;
pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod intersect;
pub mod resolver;
pub mod retrieval;
pub mod search;
pub mod types;

pub use catalog::{CatalogCell, CatalogIndex};
pub use dispatcher::Outcome;
pub use error::{RetrievalError, SearchError};
pub use intersect::Intersection;
pub use retrieval::RetrievalClient;
pub use search::ConceptSearch;
pub use types::{
    CatalogEntry, Document, MatchedEntity, PartialDocument, ResultSet, SearchHit, Taxonomy,
    UNKNOWN_SOURCE,
};
