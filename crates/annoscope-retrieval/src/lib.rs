//! annoscope-retrieval — retrieval client adapters for annoscope.
//!
//! Each adapter implements [`annoscope_core::RetrievalClient`]. The knowledge
//! store hands back flat binding rows where list-valued fields are packed into
//! `$`-delimited strings; [`rows`] unpacks them at this boundary so the core
//! only ever sees native vectors.

pub mod rows;
pub mod snapshot;
pub mod timeout;

pub use rows::{decode_row, decode_rows, RawRow};
pub use snapshot::{SnapshotError, SnapshotRetrieval};
pub use timeout::TimeoutRetrieval;
