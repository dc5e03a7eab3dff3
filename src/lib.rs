//! annoscope — concept-set document search over an annotated knowledge base.
//!
//! The search engine itself lives in `annoscope-core`; retrieval adapters in
//! `annoscope-retrieval`. This crate wires them together ([`app`]) and exposes
//! the HTTP surface ([`server`]) so integration tests can drive the router
//! directly.
//!
//! # Architecture
//!
//! ```text
//! HTTP / CLI ──► ConceptSearch ──► dispatcher ──► RetrievalClient (snapshot, timeout)
//!                     │
//!                     └──► CatalogCell ──► autocomplete
//! ```

pub mod app;
pub mod server;
