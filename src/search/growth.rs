//! Synonym-set growth traces.
//!
//! Starting from a single word, the reachable set is expanded one hop at a
//! time and its cumulative size recorded per iteration. This is a pure
//! breadth expansion over the sparse adjacency: each iteration only touches
//! the edges out of the current frontier, which keeps repeated multi-hop
//! queries tractable where iterated adjacency-matrix products are not.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::GraphBundle;

/// Default iteration bound; a dozen or so iterations saturate most words.
pub const DEFAULT_ITERMAX: usize = 20;

/// One step of a growth trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthStep {
    /// Iteration number, starting at 1.
    pub iteration: usize,
    /// Cumulative size of the reachable set after this iteration.
    pub set_size: usize,
}

/// Ordered trace of (iteration, cumulative set size) pairs.
pub type GrowthTrace = Vec<GrowthStep>;

/// Trace how the set of synonyms reachable from `word` grows per hop.
///
/// At each iteration the frontier is expanded by one hop; nodes already in
/// the reachable set are subtracted and the cumulative size is recorded.
/// The trace stops early once the frontier empties (fixed point: the
/// reachable component is exhausted), so its length is at most `itermax`.
/// Sizes are monotone non-decreasing across the trace.
///
/// Unlike the shortest-path engine, an unknown word here is a loud error: a
/// growth trace for a word outside the vocabulary is meaningless and an
/// empty trace would be misleading.
pub fn synonym_set_growth(
    bundle: &GraphBundle,
    word: &str,
    itermax: usize,
) -> Result<GrowthTrace> {
    let source = bundle.rank(word)?;
    let graph = bundle.graph();

    let mut in_set = vec![false; graph.node_count()];
    in_set[source as usize] = true;
    let mut set_size = 1usize;
    let mut frontier = vec![source];

    let mut trace = GrowthTrace::new();

    for iteration in 1..=itermax {
        let mut next_frontier = Vec::new();
        for &node in &frontier {
            for &succ in graph.successors(node) {
                if !in_set[succ as usize] {
                    in_set[succ as usize] = true;
                    next_frontier.push(succ);
                }
            }
        }
        set_size += next_frontier.len();
        trace.push(GrowthStep {
            iteration,
            set_size,
        });
        debug!(
            "Growth iteration {}: {} words reachable from '{}'",
            iteration, set_size, word
        );

        if next_frontier.is_empty() {
            break; // fixed point, the saturated size is recorded once
        }
        frontier = next_frontier;
    }

    Ok(trace)
}
