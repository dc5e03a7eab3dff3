//! Decoding of knowledge-store binding rows.
//!
//! Authors arrive as `"Name A$Name B"` and matched entities as
//! `"uri$label$$uri$label"`.

use annoscope_core::{MatchedEntity, PartialDocument, ResultSet};
use serde::Deserialize;

pub const AUTHOR_SEPARATOR: char = '$';
pub const ENTITY_SEPARATOR: &str = "$$";
pub const PAIR_SEPARATOR: char = '$';

/// One result row exactly as the knowledge store returns it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRow {
    pub document: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub matched_entities: String,
}

pub fn decode_row(row: &RawRow) -> PartialDocument {
    PartialDocument {
        document_uri: row.document.clone(),
        title: row.title.clone(),
        date: row.date.clone(),
        authors: split_authors(&row.authors),
        matched_entities: split_entities(&row.matched_entities),
    }
}

pub fn decode_rows(rows: &[RawRow]) -> ResultSet {
    rows.iter().map(decode_row).collect()
}

/// Split a `$`-joined author list. Blank names are dropped.
pub fn split_authors(packed: &str) -> Vec<String> {
    packed
        .split(AUTHOR_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a `uri$label$$uri$label` list. Segments without a URI are dropped;
/// a segment without a label gets an empty one.
pub fn split_entities(packed: &str) -> Vec<MatchedEntity> {
    packed
        .split(ENTITY_SEPARATOR)
        .filter_map(|segment| {
            let mut parts = segment.splitn(2, PAIR_SEPARATOR);
            let uri = parts.next().map(str::trim).filter(|u| !u.is_empty())?;
            let label = parts.next().unwrap_or_default();
            Some(MatchedEntity::new(uri, label))
        })
        .collect()
}
