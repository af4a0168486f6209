//! Query engines over the immutable graph bundle.
//!
//! Three read-only engines share the bundle built by
//! [`GraphBundle::build`](crate::graph::GraphBundle::build):
//! - shortest synonym chains (Dijkstra with predecessor backtracking),
//! - synonym-set growth traces (frontier expansion),
//! - out-degree statistics.

pub mod degree;
pub mod growth;
pub mod shortest_path;

pub use degree::{definition_lengths, degree_of, out_degrees};
pub use growth::{DEFAULT_ITERMAX, GrowthStep, GrowthTrace, synonym_set_growth};
pub use shortest_path::{
    DEFAULT_HOP_LIMIT, PathOutcome, SynonymPath, shortest_path, shortest_path_with_limit,
};
