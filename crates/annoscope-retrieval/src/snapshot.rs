//! SnapshotRetrieval — answers concept queries from an exported JSON file.
//!
//! The file maps each concept URI to the rows the knowledge store returned
//! for it:
//!
//! ```json
//! { "http://purl.obolibrary.org/obo/NCBITaxon_4565": [
//!     { "document": "...", "title": "...", "date": "2019",
//!       "authors": "A$B", "matchedEntities": "uri$label" } ] }
//! ```
//!
//! A concept absent from the file has no documents.

use crate::rows::{decode_rows, RawRow};
use annoscope_core::{RetrievalClient, RetrievalError, ResultSet, Taxonomy};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("cannot read retrieval snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse retrieval snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default)]
pub struct SnapshotRetrieval {
    rows: HashMap<String, Vec<RawRow>>,
}

impl SnapshotRetrieval {
    pub fn new(rows: HashMap<String, Vec<RawRow>>) -> Self {
        Self { rows }
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json_str(&json).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), concepts = snapshot.len(), "retrieval snapshot loaded");
        Ok(snapshot)
    }

    /// Number of concepts with recorded rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl RetrievalClient for SnapshotRetrieval {
    async fn fetch(&self, taxonomy: Taxonomy, concept_uri: &str) -> Result<ResultSet, RetrievalError> {
        let results = self
            .rows
            .get(concept_uri)
            .map(|rows| decode_rows(rows))
            .unwrap_or_default();
        tracing::trace!(%taxonomy, concept_uri, rows = results.len(), "snapshot fetch");
        Ok(results)
    }
}
