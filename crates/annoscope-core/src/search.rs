//! ConceptSearch — the request-level entry point.
//!
//! Each request takes one snapshot of the current catalog and builds its
//! resolver, dispatcher and matcher around it, so a concurrent reload never
//! changes the catalog under a running request.

use crate::autocomplete::AutocompleteMatcher;
use crate::catalog::CatalogCell;
use crate::config::SearchConfig;
use crate::dispatcher::{Outcome, QueryDispatcher};
use crate::error::SearchError;
use crate::intersect::{intersect, Intersection};
use crate::resolver::{SourceResolver, UriMatching};
use crate::retrieval::RetrievalClient;
use crate::types::SearchHit;
use std::sync::Arc;

pub struct ConceptSearch {
    catalog: CatalogCell,
    client: Arc<dyn RetrievalClient>,
    uri_matching: UriMatching,
    max_autocomplete: usize,
}

impl ConceptSearch {
    pub fn new(catalog: CatalogCell, client: Arc<dyn RetrievalClient>, settings: &SearchConfig) -> Self {
        Self {
            catalog,
            client,
            uri_matching: settings.uri_matching,
            max_autocomplete: settings.max_autocomplete,
        }
    }

    pub fn catalog(&self) -> &CatalogCell {
        &self.catalog
    }

    pub fn max_autocomplete(&self) -> usize {
        self.max_autocomplete
    }

    /// Documents annotated with every concept in `concept_uris` or one of its
    /// sub-concepts.
    ///
    /// An empty request is answered without consulting the catalog.
    pub async fn search_documents(&self, concept_uris: &[String]) -> Result<Intersection, SearchError> {
        if concept_uris.is_empty() {
            tracing::info!("no concepts requested");
            return Ok(Intersection::default());
        }
        tracing::info!(concepts = ?concept_uris, "searching documents");
        let outcomes = self.dispatch(concept_uris).await?;
        Ok(intersect(outcomes))
    }

    /// Like [`search_documents`](Self::search_documents), but a document only
    /// counts for a concept when it is annotated with that exact URI.
    pub async fn search_documents_direct(&self, concept_uris: &[String]) -> Result<Intersection, SearchError> {
        if concept_uris.is_empty() {
            tracing::info!("no concepts requested");
            return Ok(Intersection::default());
        }
        tracing::info!(concepts = ?concept_uris, "searching documents, direct annotations only");
        let outcomes = self.dispatch(concept_uris).await?;
        Ok(intersect(
            outcomes
                .into_iter()
                .zip(concept_uris)
                .map(|(outcome, uri)| outcome.direct_only(uri)),
        ))
    }

    async fn dispatch(&self, concept_uris: &[String]) -> Result<Vec<Outcome>, SearchError> {
        let catalog = self.catalog.current()?;
        let resolver = SourceResolver::new(catalog, self.uri_matching);
        let dispatcher = QueryDispatcher::new(resolver, Arc::clone(&self.client));
        Ok(dispatcher.dispatch(concept_uris).await)
    }

    /// Autocomplete with the configured cap.
    pub fn autocomplete(&self, input: &str) -> Result<Vec<SearchHit>, SearchError> {
        self.autocomplete_capped(input, self.max_autocomplete)
    }

    pub fn autocomplete_capped(&self, input: &str, cap: usize) -> Result<Vec<SearchHit>, SearchError> {
        let catalog = self.catalog.current()?;
        Ok(AutocompleteMatcher::new(catalog).search(input, cap))
    }
}
