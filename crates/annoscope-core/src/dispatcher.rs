//! QueryDispatcher — concurrent fan-out of one retrieval call per concept.
//!
//! Every concept URI gets its own fetch future, all polled together and
//! joined once (settle-all): a failing or panicking fetch only turns its own
//! slot into [`Outcome::Failure`]. Outcomes come back in input order whatever
//! the completion order was. The fetches live inside the dispatch future, so
//! dropping it (client disconnect, caller timeout) cancels every fetch.

use crate::error::{RetrievalError, SearchError};
use crate::resolver::SourceResolver;
use crate::retrieval::RetrievalClient;
use crate::types::{ResultSet, Taxonomy};
use futures::future::join_all;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Settled result of one concept's retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(ResultSet),
    Failure(SearchError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Keep only rows annotated with `concept_uri` itself, dropping rows that
    /// matched through a sub-concept. Surviving rows list just that concept.
    pub fn direct_only(self, concept_uri: &str) -> Outcome {
        match self {
            Outcome::Success(mut set) => {
                set.retain_mut(|row| {
                    row.matched_entities.retain(|e| e.concept_uri == concept_uri);
                    !row.matched_entities.is_empty()
                });
                Outcome::Success(set)
            }
            failure => failure,
        }
    }
}

pub struct QueryDispatcher {
    resolver: SourceResolver,
    client: Arc<dyn RetrievalClient>,
}

impl QueryDispatcher {
    pub fn new(resolver: SourceResolver, client: Arc<dyn RetrievalClient>) -> Self {
        Self { resolver, client }
    }

    /// Fetch every concept concurrently and return one outcome per input URI,
    /// aligned with `concept_uris`.
    pub async fn dispatch(&self, concept_uris: &[String]) -> Vec<Outcome> {
        let outcomes = join_all(concept_uris.iter().map(|uri| self.settle(uri))).await;

        let failed = outcomes.iter().filter(|o| !o.is_success()).count();
        tracing::info!(
            concepts = concept_uris.len(),
            failed,
            "dispatch settled"
        );
        outcomes
    }

    async fn settle(&self, uri: &str) -> Outcome {
        let taxonomy = match self.resolver.taxonomy(uri) {
            Ok(taxonomy) => taxonomy,
            Err(err) => {
                tracing::error!(uri, error = %err, "concept has no retrieval strategy");
                return Outcome::Failure(err);
            }
        };

        let cause = match self.fetch(taxonomy, uri).await {
            Ok(results) => {
                tracing::info!(uri, results = results.len(), "concept query returned");
                return Outcome::Success(results);
            }
            Err(cause) => cause,
        };
        tracing::warn!(uri, error = %cause, "concept query failed");
        Outcome::Failure(SearchError::RetrievalFailure {
            uri: uri.to_string(),
            cause,
        })
    }

    /// One client call, with a panic inside the client mapped to `Aborted`.
    async fn fetch(&self, taxonomy: Taxonomy, uri: &str) -> Result<ResultSet, RetrievalError> {
        AssertUnwindSafe(self.client.fetch(taxonomy, uri))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(RetrievalError::Aborted(panic_message(panic.as_ref()))))
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "retrieval task panicked".to_string())
}
