//! Shortest synonym-chain queries.
//!
//! Runs a single-source Dijkstra search over the sparse directed adjacency
//! and reconstructs the chain by predecessor backtracking. Edges carry a
//! uniform hop cost of 1 today; Dijkstra stays the correct algorithm if the
//! reserved per-edge weight slot is ever populated.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::graph::GraphBundle;

/// Searches beyond this many hops are treated as unreached.
pub const DEFAULT_HOP_LIMIT: u32 = 100;

const UNREACHED: u32 = u32::MAX;

/// A shortest synonym chain between two words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymPath {
    /// Words along the chain, source first, target last.
    pub words: Vec<String>,
    /// Number of hops, equal to `words.len() - 1`.
    pub hops: u32,
}

/// Outcome of a shortest-path query.
///
/// An unknown word is a documented no-op rather than a hard failure: the
/// query surface is exploratory, so the engine reports which word is missing
/// and computes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathOutcome {
    /// A shortest chain was found.
    Found(SynonymPath),
    /// Both words resolve but no directed chain connects them.
    NoPath,
    /// The named word has no entry in the vocabulary.
    UnknownWord(String),
}

/// Compute the shortest synonym chain from `word1` to `word2`.
///
/// Traversal follows edges in their stored direction only. When several
/// shortest chains exist, the one returned is decided by the order in which
/// the search relaxed edges; the choice is stable for a given graph but no
/// explicit tie-break is imposed. Chains longer than
/// [`DEFAULT_HOP_LIMIT`] count as unreached.
pub fn shortest_path(bundle: &GraphBundle, word1: &str, word2: &str) -> PathOutcome {
    shortest_path_with_limit(bundle, word1, word2, DEFAULT_HOP_LIMIT)
}

/// [`shortest_path`] with an explicit hop limit.
pub fn shortest_path_with_limit(
    bundle: &GraphBundle,
    word1: &str,
    word2: &str,
    limit: u32,
) -> PathOutcome {
    let Some(source) = bundle.try_rank(word1) else {
        warn!("'{}' does not belong to the dictionary", word1);
        return PathOutcome::UnknownWord(word1.to_string());
    };
    let Some(target) = bundle.try_rank(word2) else {
        warn!("'{}' does not belong to the dictionary", word2);
        return PathOutcome::UnknownWord(word2.to_string());
    };

    let (dist, pred) = dijkstra(bundle, source, limit);

    if dist[target as usize] == UNREACHED {
        return PathOutcome::NoPath;
    }

    // Backtrack predecessors from target to source.
    let mut ranks = vec![target];
    let mut current = target;
    while current != source {
        current = pred[current as usize];
        ranks.push(current);
    }
    ranks.reverse();

    let words: Vec<String> = ranks
        .iter()
        .map(|&rank| bundle.name(rank).to_string())
        .collect();
    let hops = (words.len() - 1) as u32;
    PathOutcome::Found(SynonymPath { words, hops })
}

/// Binary-heap Dijkstra over the CSR adjacency.
///
/// Returns per-node hop distances (`UNREACHED` when not reached within
/// `limit`) and the predecessor recorded by the last relaxation that
/// improved each node.
fn dijkstra(bundle: &GraphBundle, source: u32, limit: u32) -> (Vec<u32>, Vec<u32>) {
    let graph = bundle.graph();
    let n = graph.node_count();

    let mut dist = vec![UNREACHED; n];
    let mut pred = vec![UNREACHED; n];
    let mut heap = BinaryHeap::new();

    dist[source as usize] = 0;
    heap.push(Reverse((0u32, source)));

    while let Some(Reverse((d, node))) = heap.pop() {
        if d > dist[node as usize] {
            continue; // stale heap entry
        }
        if d >= limit {
            continue;
        }
        for &next in graph.successors(node) {
            let candidate = d + 1;
            if candidate < dist[next as usize] {
                dist[next as usize] = candidate;
                pred[next as usize] = node;
                heap.push(Reverse((candidate, next)));
            }
        }
    }

    (dist, pred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thesaurus::RawMapping;

    fn bundle(entries: &[(&str, &[&str])]) -> GraphBundle {
        let raw: RawMapping = entries
            .iter()
            .map(|(name, synos)| {
                (
                    name.to_string(),
                    synos.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        GraphBundle::build(&raw).unwrap()
    }

    fn chain_bundle() -> GraphBundle {
        bundle(&[
            ("roi", &["autocrate"]),
            ("autocrate", &["chef"]),
            ("chef", &["coq"]),
            ("coq", &["oiseau"]),
            ("oiseau", &[]),
        ])
    }

    #[test]
    fn test_chain_scenario() {
        let bundle = chain_bundle();

        match shortest_path(&bundle, "roi", "oiseau") {
            PathOutcome::Found(path) => {
                assert_eq!(path.words, ["roi", "autocrate", "chef", "coq", "oiseau"]);
                assert_eq!(path.hops, 4);
            }
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn test_source_equals_target() {
        let bundle = chain_bundle();

        match shortest_path(&bundle, "chef", "chef") {
            PathOutcome::Found(path) => {
                assert_eq!(path.words, ["chef"]);
                assert_eq!(path.hops, 0);
            }
            other => panic!("expected a zero-hop path, got {other:?}"),
        }
    }

    #[test]
    fn test_direction_matters() {
        let bundle = chain_bundle();
        // Edges all point down the chain; the reverse query has no path.
        assert_eq!(shortest_path(&bundle, "oiseau", "roi"), PathOutcome::NoPath);
    }

    #[test]
    fn test_disjoint_components_yield_no_path() {
        let bundle = bundle(&[
            ("roi", &["autocrate"]),
            ("autocrate", &["roi"]),
            ("coq", &["oiseau"]),
            ("oiseau", &["coq"]),
        ]);
        assert_eq!(shortest_path(&bundle, "roi", "oiseau"), PathOutcome::NoPath);
    }

    #[test]
    fn test_unknown_word_is_reported_not_raised() {
        let bundle = chain_bundle();
        assert_eq!(
            shortest_path(&bundle, "navire", "roi"),
            PathOutcome::UnknownWord("navire".to_string())
        );
        assert_eq!(
            shortest_path(&bundle, "roi", "navire"),
            PathOutcome::UnknownWord("navire".to_string())
        );
    }

    #[test]
    fn test_shorter_route_wins() {
        let bundle = bundle(&[
            ("roi", &["autocrate", "oiseau"]),
            ("autocrate", &["chef"]),
            ("chef", &["oiseau"]),
            ("oiseau", &[]),
        ]);

        match shortest_path(&bundle, "roi", "oiseau") {
            PathOutcome::Found(path) => assert_eq!(path.hops, 1),
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn test_path_edges_exist_in_graph() {
        let bundle = chain_bundle();

        let PathOutcome::Found(path) = shortest_path(&bundle, "roi", "oiseau") else {
            panic!("expected a path");
        };
        for pair in path.words.windows(2) {
            let from = bundle.rank(&pair[0]).unwrap();
            let to = bundle.rank(&pair[1]).unwrap();
            assert!(bundle.graph().has_edge(from, to));
        }
    }

    #[test]
    fn test_hop_limit_bounds_the_search() {
        let bundle = chain_bundle();
        assert_eq!(
            shortest_path_with_limit(&bundle, "roi", "oiseau", 3),
            PathOutcome::NoPath
        );
        assert!(matches!(
            shortest_path_with_limit(&bundle, "roi", "oiseau", 4),
            PathOutcome::Found(_)
        ));
    }
}
