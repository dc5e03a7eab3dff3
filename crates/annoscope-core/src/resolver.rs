//! SourceResolver — maps a concept URI to the taxonomy it belongs to.

use crate::catalog::CatalogIndex;
use crate::error::SearchError;
use crate::types::{Taxonomy, UNKNOWN_SOURCE};
use serde::Deserialize;
use std::sync::Arc;

/// How an input URI is matched against the catalog's stored URIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UriMatching {
    /// Hash lookup on the full URI.
    #[default]
    Exact,
    /// First catalog entry whose URI is a substring of the input. Tolerates
    /// decorated input URIs but can pick the wrong entry when one stored URI
    /// is a textual prefix of another.
    Contains,
}

#[derive(Debug, Clone)]
pub struct SourceResolver {
    catalog: Arc<CatalogIndex>,
    matching: UriMatching,
}

impl SourceResolver {
    pub fn new(catalog: Arc<CatalogIndex>, matching: UriMatching) -> Self {
        Self { catalog, matching }
    }

    /// Source name of the catalog entry for `uri`, or [`UNKNOWN_SOURCE`].
    pub fn resolve(&self, uri: &str) -> &str {
        let found = match self.matching {
            UriMatching::Exact => self.catalog.find_exact(uri),
            UriMatching::Contains => self.catalog.find_containing(uri),
        };
        found.map_or(UNKNOWN_SOURCE, |e| e.source.as_str())
    }

    /// Resolve `uri` to a taxonomy that has a retrieval strategy.
    pub fn taxonomy(&self, uri: &str) -> Result<Taxonomy, SearchError> {
        let source = self.resolve(uri);
        tracing::debug!(uri, source, "resolved concept source");
        Taxonomy::from_source(source).ok_or_else(|| SearchError::UnsupportedTaxonomy {
            uri: uri.to_string(),
            taxonomy: source.to_string(),
        })
    }
}
