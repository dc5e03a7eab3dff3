//! The retrieval boundary: one query per concept against the knowledge store.
//!
//! Implementations live in `annoscope-retrieval`; the core only sees this
//! trait and the decoded [`ResultSet`].

use crate::error::RetrievalError;
use crate::types::{ResultSet, Taxonomy};
use async_trait::async_trait;
use std::sync::Arc;

/// Fetch the documents annotated with `concept_uri` (or one of its
/// sub-concepts) from the knowledge store.
///
/// Implementations must report failures as [`RetrievalError`] values rather
/// than panicking. They must be safe to call concurrently.
#[async_trait]
pub trait RetrievalClient: Send + Sync {
    async fn fetch(&self, taxonomy: Taxonomy, concept_uri: &str) -> Result<ResultSet, RetrievalError>;
}

#[async_trait]
impl<C: RetrievalClient + ?Sized> RetrievalClient for Arc<C> {
    async fn fetch(&self, taxonomy: Taxonomy, concept_uri: &str) -> Result<ResultSet, RetrievalError> {
        (**self).fetch(taxonomy, concept_uri).await
    }
}
