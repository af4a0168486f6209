//! Directed synonym graph over dense integer ranks.
//!
//! The graph is built once from a filtered thesaurus mapping and is
//! immutable afterwards; every query engine borrows it read-only.

pub mod builder;
pub mod csr;

pub use builder::GraphBundle;
pub use csr::CsrGraph;
