//! Shared test utilities for annoscope integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Timing-sensitive helpers are meant to run under
//! `#[tokio::test(start_paused = true)]` so delays are deterministic.

pub mod assertions;
pub mod builders;
pub mod fake_retrieval;
pub mod fixtures;

pub use builders::*;
pub use fake_retrieval::*;
pub use fixtures::*;
