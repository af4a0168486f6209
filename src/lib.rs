//! # Synograph
//!
//! A thesaurus graph analysis library for Rust.
//!
//! Synograph models a thesaurus as a directed graph of words connected by
//! synonym relations and answers two questions about it:
//!
//! - What is the shortest chain of synonym hops linking two words?
//! - How does the set of synonyms reachable within k hops grow with k?
//!
//! ## Features
//!
//! - Flat-file thesaurus parsing (grammalecte `.dat` format)
//! - Self-consistency filtering of dangling synonym references
//! - Compressed sparse row adjacency over dense integer ranks
//! - Priority-queue Dijkstra shortest-path queries
//! - Frontier-based synonym-set growth traces
//! - Out-degree (definition length) statistics
//! - Compact checksummed on-disk graph artifacts

pub mod cli;
pub mod error;
pub mod graph;
pub mod search;
pub mod storage;
pub mod thesaurus;

pub mod prelude {
    pub use crate::error::{Result, SynographError};
    pub use crate::graph::{CsrGraph, GraphBundle};
    pub use crate::search::{
        GrowthStep, PathOutcome, SynonymPath, shortest_path, synonym_set_growth,
    };
    pub use crate::thesaurus::{RawMapping, filter_dangling, parse_dat, parse_dat_file};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
