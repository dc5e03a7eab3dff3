//! HTTP surface.
//!
//! | Route | Answer |
//! |-------|--------|
//! | `GET /autoComplete?input=…` | JSON array of catalog suggestions |
//! | `GET /searchDocumentsSubConcept?uri=a,b,…` | `{ result, errors }` for the concept set, sub-concepts included |
//! | `GET /searchDocuments?uri=a,b,…` | `{ result, errors }` for documents annotated with the exact concepts |
//! | `POST /reloadCatalog` | re-reads the catalog snapshots and swaps them in |
//!
//! `uri` may also be repeated (`uri=a&uri=b`). Routes are also served with a
//! trailing slash for older clients.

use annoscope_core::catalog::load_catalog;
use annoscope_core::{ConceptSearch, Document, Intersection, SearchError, SearchHit};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<ConceptSearch>,
    /// Snapshot files read again on reload.
    pub catalog_paths: Arc<Vec<PathBuf>>,
}

impl AppState {
    pub fn new(search: ConceptSearch, catalog_paths: Vec<PathBuf>) -> Self {
        Self {
            search: Arc::new(search),
            catalog_paths: Arc::new(catalog_paths),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/autoComplete", get(auto_complete))
        .route("/autoComplete/", get(auto_complete))
        .route("/searchDocumentsSubConcept", get(search_documents))
        .route("/searchDocumentsSubConcept/", get(search_documents))
        .route("/searchDocuments", get(search_documents_direct))
        .route("/searchDocuments/", get(search_documents_direct))
        .route("/reloadCatalog", post(reload_catalog))
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "annoscope listening");
    if !state.search.catalog().is_initialized() {
        tracing::warn!("serving without a catalog; POST /reloadCatalog once the snapshots are fixed");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("annoscope stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HitBody {
    #[serde(rename = "entityUri")]
    pub entity_uri: String,
    #[serde(rename = "entityLabel")]
    pub entity_label: String,
    #[serde(rename = "entityPrefLabel", skip_serializing_if = "Option::is_none")]
    pub entity_pref_label: Option<String>,
    pub count: u64,
}

impl From<SearchHit> for HitBody {
    fn from(hit: SearchHit) -> Self {
        Self {
            entity_uri: hit.concept_uri,
            entity_label: hit.label,
            entity_pref_label: hit.preferred_label,
            count: hit.document_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EntityBody {
    #[serde(rename = "entityUri")]
    pub entity_uri: String,
    #[serde(rename = "entityLabel")]
    pub entity_label: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentBody {
    pub document: String,
    pub title: String,
    pub date: String,
    pub authors: Vec<String>,
    #[serde(rename = "matchedEntities")]
    pub matched_entities: Vec<EntityBody>,
}

impl From<Document> for DocumentBody {
    fn from(doc: Document) -> Self {
        Self {
            document: doc.document_uri,
            title: doc.title,
            date: doc.date,
            authors: doc.authors,
            matched_entities: doc
                .matched_entities
                .into_iter()
                .map(|e| EntityBody {
                    entity_uri: e.concept_uri,
                    entity_label: e.label,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    pub kind: &'static str,
    pub message: String,
}

impl From<&SearchError> for ErrorBody {
    fn from(err: &SearchError) -> Self {
        Self {
            uri: err.concept_uri().map(str::to_string),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBody {
    pub result: Vec<DocumentBody>,
    pub errors: Vec<ErrorBody>,
}

impl From<Intersection> for SearchBody {
    fn from(found: Intersection) -> Self {
        Self {
            errors: found.errors.iter().map(ErrorBody::from).collect(),
            result: found.documents.into_iter().map(DocumentBody::from).collect(),
        }
    }
}

/// A `/searchDocuments` row: the document without its matched entities.
#[derive(Debug, Serialize)]
pub struct ArticleBody {
    pub document: String,
    pub title: String,
    pub date: String,
    pub authors: Vec<String>,
}

impl From<Document> for ArticleBody {
    fn from(doc: Document) -> Self {
        Self {
            document: doc.document_uri,
            title: doc.title,
            date: doc.date,
            authors: doc.authors,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleSearchBody {
    pub result: Vec<ArticleBody>,
    pub errors: Vec<ErrorBody>,
}

impl From<Intersection> for ArticleSearchBody {
    fn from(found: Intersection) -> Self {
        Self {
            errors: found.errors.iter().map(ErrorBody::from).collect(),
            result: found.documents.into_iter().map(ArticleBody::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReloadBody {
    pub entries: usize,
    #[serde(rename = "loadedAt")]
    pub loaded_at: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ApiError {
    Search(SearchError),
    Reload(String),
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        ApiError::Search(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Search(err) => {
                let status = match &err {
                    SearchError::NotInitialized => StatusCode::SERVICE_UNAVAILABLE,
                    _ => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, ErrorBody::from(&err))
            }
            ApiError::Reload(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    uri: None,
                    kind: "reload_failed",
                    message,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct AutoCompleteParams {
    #[serde(default)]
    input: String,
}

async fn auto_complete(
    State(state): State<AppState>,
    Query(params): Query<AutoCompleteParams>,
) -> Result<Json<Vec<HitBody>>, ApiError> {
    tracing::debug!(input = %params.input, "autoComplete");
    let hits = state.search.autocomplete(&params.input)?;
    Ok(Json(hits.into_iter().map(HitBody::from).collect()))
}

/// Collect the `uri` parameters, each split on commas, dropping blanks.
pub fn split_uris<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    values
        .into_iter()
        .flat_map(|raw| raw.split(','))
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
        .collect()
}

fn uri_params(params: &[(String, String)]) -> Vec<String> {
    split_uris(
        params
            .iter()
            .filter(|(key, _)| key == "uri")
            .map(|(_, value)| value.as_str()),
    )
}

async fn search_documents(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SearchBody>, ApiError> {
    let uris = uri_params(&params);
    tracing::info!(uris = ?uris, "searchDocumentsSubConcept");
    let found = state.search.search_documents(&uris).await?;
    Ok(Json(SearchBody::from(found)))
}

async fn search_documents_direct(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ArticleSearchBody>, ApiError> {
    let uris = uri_params(&params);
    tracing::info!(uris = ?uris, "searchDocuments");
    let found = state.search.search_documents_direct(&uris).await?;
    Ok(Json(ArticleSearchBody::from(found)))
}

async fn reload_catalog(State(state): State<AppState>) -> Result<Json<ReloadBody>, ApiError> {
    let paths = Arc::clone(&state.catalog_paths);
    let index = tokio::task::spawn_blocking(move || load_catalog(paths.as_slice()))
        .await
        .map_err(|err| ApiError::Reload(err.to_string()))?
        .map_err(|err| {
            tracing::error!(error = %err, "catalog reload failed; keeping previous catalog");
            ApiError::Reload(err.to_string())
        })?;

    let index = state.search.catalog().replace(index);
    tracing::info!(entries = index.len(), "catalog reloaded");
    Ok(Json(ReloadBody {
        entries: index.len(),
        loaded_at: index.loaded_at().to_rfc3339(),
    }))
}
