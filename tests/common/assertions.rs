//! Domain-specific assertion macros for annoscope harnesses.
//!
//! These wrap `pretty_assertions` and print the full offending value so a
//! failure shows *which* document or suggestion broke the expectation.

/// Assert the document URIs of an [`Intersection`](annoscope_core::Intersection), in order.
///
/// ```rust
/// assert_document_uris!(found, ["doc/1", "doc/2"]);
/// ```
#[macro_export]
macro_rules! assert_document_uris {
    ($found:expr, [$($uri:expr),* $(,)?]) => {{
        let found: &annoscope_core::Intersection = &$found;
        let actual: Vec<&str> = found.documents.iter().map(|d| d.document_uri.as_str()).collect();
        let expected: Vec<&str> = vec![$($uri),*];
        pretty_assertions::assert_eq!(actual, expected, "document URIs differ; full result: {:#?}", found);
    }};
}

/// Assert the concept URIs matched on one document, in order.
#[macro_export]
macro_rules! assert_matched_concepts {
    ($doc:expr, [$($uri:expr),* $(,)?]) => {{
        let doc: &annoscope_core::Document = &$doc;
        let actual: Vec<&str> = doc.matched_entities.iter().map(|e| e.concept_uri.as_str()).collect();
        let expected: Vec<&str> = vec![$($uri),*];
        pretty_assertions::assert_eq!(actual, expected, "matched entities of {} differ", doc.document_uri);
    }};
}

/// Assert the labels of autocomplete hits, in order.
#[macro_export]
macro_rules! assert_hit_labels {
    ($hits:expr, [$($label:expr),* $(,)?]) => {{
        let hits: &[annoscope_core::SearchHit] = &$hits;
        let actual: Vec<&str> = hits.iter().map(|h| h.label.as_str()).collect();
        let expected: Vec<&str> = vec![$($label),*];
        pretty_assertions::assert_eq!(actual, expected);
    }};
}
