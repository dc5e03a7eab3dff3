//! Error types shared by the search pipeline.

use std::time::Duration;
use thiserror::Error;

/// Failure reported by a [`RetrievalClient`](crate::retrieval::RetrievalClient).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RetrievalError {
    #[error("knowledge store did not answer within {0:?}")]
    Timeout(Duration),
    #[error("knowledge store unavailable: {0}")]
    Unavailable(String),
    #[error("malformed result from knowledge store: {0}")]
    Malformed(String),
    /// The task running the fetch panicked or was cancelled.
    #[error("retrieval task aborted: {0}")]
    Aborted(String),
}

/// Errors surfaced by the search pipeline.
///
/// Per-concept variants (`UnsupportedTaxonomy`, `RetrievalFailure`) are
/// collected into [`Intersection::errors`](crate::intersect::Intersection)
/// rather than aborting the request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("concept catalog is not initialized")]
    NotInitialized,
    #[error("no query strategy for source {taxonomy:?} of concept {uri}")]
    UnsupportedTaxonomy { uri: String, taxonomy: String },
    #[error("retrieval failed for concept {uri}: {cause}")]
    RetrievalFailure {
        uri: String,
        #[source]
        cause: RetrievalError,
    },
}

impl SearchError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::NotInitialized => "not_initialized",
            SearchError::UnsupportedTaxonomy { .. } => "unsupported_taxonomy",
            SearchError::RetrievalFailure { .. } => "retrieval_failure",
        }
    }

    /// The concept URI the error is about, if it is a per-concept error.
    pub fn concept_uri(&self) -> Option<&str> {
        match self {
            SearchError::NotInitialized => None,
            SearchError::UnsupportedTaxonomy { uri, .. }
            | SearchError::RetrievalFailure { uri, .. } => Some(uri),
        }
    }
}
