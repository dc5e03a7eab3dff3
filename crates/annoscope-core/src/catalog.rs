//! Catalog — the read-only index of known concepts.
//!
//! A [`CatalogIndex`] is built once from one or more JSON snapshot files and
//! never mutated afterwards. The process-wide current index lives in a
//! [`CatalogCell`]; a reload builds a fresh index and swaps it in, so any
//! request already holding an `Arc<CatalogIndex>` keeps a consistent view.

use crate::error::SearchError;
use crate::types::{CatalogEntry, UNKNOWN_SOURCE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse catalog snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// CatalogIndex
// ---------------------------------------------------------------------------

/// Immutable, in-memory catalog of concept labels.
#[derive(Debug)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
    /// `entries[i].label.to_lowercase()`, computed once at build time.
    lowered: Vec<String>,
    /// First position of each concept URI in `entries`.
    by_uri: HashMap<String, usize>,
    loaded_at: DateTime<Utc>,
}

impl CatalogIndex {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let lowered = entries.iter().map(|e| e.label.to_lowercase()).collect();
        let mut by_uri = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            by_uri.entry(entry.concept_uri.clone()).or_insert(i);
        }
        Self {
            entries,
            lowered,
            by_uri,
            loaded_at: Utc::now(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Entries paired with their lower-cased label, in catalog order.
    pub fn labelled(&self) -> impl Iterator<Item = (&CatalogEntry, &str)> {
        self.entries
            .iter()
            .zip(self.lowered.iter().map(String::as_str))
    }

    /// First entry whose concept URI equals `uri`.
    pub fn find_exact(&self, uri: &str) -> Option<&CatalogEntry> {
        self.by_uri.get(uri).map(|&i| &self.entries[i])
    }

    /// First entry, in catalog order, whose concept URI occurs inside `uri`.
    ///
    /// Entries with an empty URI never match.
    pub fn find_containing(&self, uri: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .find(|e| !e.concept_uri.is_empty() && uri.contains(e.concept_uri.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Snapshot loading
// ---------------------------------------------------------------------------

/// One record of a catalog snapshot file as exported from the knowledge store.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRecord {
    entity_uri: String,
    entity_label: String,
    #[serde(default)]
    entity_pref_label: Option<String>,
    #[serde(default, deserialize_with = "de_count")]
    count: u64,
    #[serde(default, alias = "entityType")]
    source: Option<String>,
}

/// Counts are exported as strings by some dumps and as numbers by others.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Number(u64),
    Text(String),
}

fn de_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    match RawCount::deserialize(deserializer)? {
        RawCount::Number(n) => Ok(n),
        RawCount::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl From<SnapshotRecord> for CatalogEntry {
    fn from(record: SnapshotRecord) -> Self {
        Self {
            concept_uri: record.entity_uri,
            label: record.entity_label,
            preferred_label: record.entity_pref_label.filter(|l| !l.is_empty()),
            source: record
                .source
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            document_count: record.count,
        }
    }
}

/// Parse one snapshot document (a JSON array of records).
pub fn parse_snapshot(json: &str) -> Result<Vec<CatalogEntry>, serde_json::Error> {
    let records: Vec<SnapshotRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(CatalogEntry::from).collect())
}

/// Read every snapshot in `paths` and concatenate them, in order, into one
/// index.
pub fn load_catalog<P: AsRef<Path>>(paths: &[P]) -> Result<CatalogIndex, CatalogError> {
    let mut entries = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let loaded = parse_snapshot(&json).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), entries = loaded.len(), "catalog snapshot read");
        entries.extend(loaded);
    }
    let index = CatalogIndex::new(entries);
    tracing::info!(entries = index.len(), files = paths.len(), "catalog loaded");
    Ok(index)
}

// ---------------------------------------------------------------------------
// CatalogCell
// ---------------------------------------------------------------------------

/// Process-wide holder of the current catalog.
///
/// Cloning the cell shares the same slot. Readers take an `Arc` snapshot with
/// [`CatalogCell::current`]; [`CatalogCell::replace`] is the only writer.
#[derive(Debug, Clone)]
pub struct CatalogCell {
    slot: Arc<watch::Sender<Option<Arc<CatalogIndex>>>>,
}

impl CatalogCell {
    /// A cell with no catalog; `current()` fails with `NotInitialized`.
    pub fn empty() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { slot: Arc::new(tx) }
    }

    pub fn new(index: CatalogIndex) -> Self {
        let cell = Self::empty();
        cell.replace(index);
        cell
    }

    pub fn current(&self) -> Result<Arc<CatalogIndex>, SearchError> {
        self.slot.borrow().clone().ok_or(SearchError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Swap in a freshly built index and return it.
    pub fn replace(&self, index: CatalogIndex) -> Arc<CatalogIndex> {
        let index = Arc::new(index);
        self.slot.send_replace(Some(Arc::clone(&index)));
        index
    }

    /// Watch for catalog replacements.
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<CatalogIndex>>> {
        self.slot.subscribe()
    }
}

impl Default for CatalogCell {
    fn default() -> Self {
        Self::empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
