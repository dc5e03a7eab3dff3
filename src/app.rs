//! Wiring: builds a [`ConceptSearch`] from a [`Config`].

use annoscope_core::catalog::{load_catalog, CatalogCell};
use annoscope_core::config::Config;
use annoscope_core::{ConceptSearch, RetrievalClient};
use annoscope_retrieval::{SnapshotRetrieval, TimeoutRetrieval};
use std::sync::Arc;

/// Load the catalog and retrieval snapshot named in `config`.
///
/// A catalog that fails to load is logged and left uninitialised: the server
/// still starts, answers `503` for catalog-backed requests, and can be fixed
/// with a reload. A missing retrieval snapshot is fatal.
pub fn build_search(config: &Config) -> anyhow::Result<ConceptSearch> {
    let catalog = match load_catalog(&config.catalog.paths) {
        Ok(index) => CatalogCell::new(index),
        Err(err) => {
            tracing::error!(error = %err, "catalog not loaded");
            CatalogCell::empty()
        }
    };

    let snapshot = SnapshotRetrieval::from_path(&config.retrieval.snapshot)?;
    if snapshot.is_empty() {
        tracing::warn!(
            path = %config.retrieval.snapshot.display(),
            "retrieval snapshot has no concepts; every search will be empty"
        );
    }
    let client: Arc<dyn RetrievalClient> = match config.retrieval.timeout() {
        Some(budget) => {
            let timed = TimeoutRetrieval::new(snapshot, budget);
            tracing::info!(budget = ?timed.budget(), "retrieval timeout enabled");
            Arc::new(timed)
        }
        None => {
            tracing::info!("retrieval timeout disabled");
            Arc::new(snapshot)
        }
    };

    Ok(ConceptSearch::new(catalog, client, &config.search))
}
