//! Query-engine scenarios: shortest chains, growth traces, degree counts.

use std::collections::VecDeque;

use synograph::prelude::*;
use synograph::search::{degree_of, out_degrees};

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
    let filtered = filter_dangling(&raw);
    GraphBundle::build(&filtered).unwrap()
}

/// Independent BFS hop distance, for cross-checking Dijkstra results.
fn bfs_distance(bundle: &GraphBundle, from: &str, to: &str) -> Option<u32> {
    let source = bundle.try_rank(from)?;
    let target = bundle.try_rank(to)?;

    let mut dist = vec![None; bundle.len()];
    dist[source as usize] = Some(0u32);
    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        let d = dist[node as usize].unwrap();
        for &next in bundle.graph().successors(node) {
            if dist[next as usize].is_none() {
                dist[next as usize] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist[target as usize]
}

#[test]
fn test_concrete_chain_scenario() {
    let bundle = bundle(&[
        ("roi", &["autocrate"]),
        ("autocrate", &["chef"]),
        ("chef", &["coq"]),
        ("coq", &["oiseau"]),
        ("oiseau", &[]),
    ]);

    match shortest_path(&bundle, "roi", "oiseau") {
        PathOutcome::Found(path) => {
            assert_eq!(path.words, ["roi", "autocrate", "chef", "coq", "oiseau"]);
            assert_eq!(path.hops, 4);
        }
        other => panic!("expected a path, got {other:?}"),
    }
}

#[test]
fn test_path_optimality_against_bfs() {
    // A mesh with several routes of different lengths.
    let bundle = bundle(&[
        ("a", &["b", "c"]),
        ("b", &["d", "e"]),
        ("c", &["e"]),
        ("d", &["f"]),
        ("e", &["f", "g"]),
        ("f", &["g"]),
        ("g", &[]),
    ]);

    for from in ["a", "b", "c", "d", "e", "f", "g"] {
        for to in ["a", "b", "c", "d", "e", "f", "g"] {
            let expected = bfs_distance(&bundle, from, to);
            match shortest_path(&bundle, from, to) {
                PathOutcome::Found(path) => assert_eq!(
                    Some(path.hops),
                    expected,
                    "wrong distance for {from} -> {to}"
                ),
                PathOutcome::NoPath => {
                    assert_eq!(expected, None, "missed a path for {from} -> {to}")
                }
                PathOutcome::UnknownWord(word) => panic!("unexpected unknown word {word}"),
            }
        }
    }
}

#[test]
fn test_unreachable_pair() {
    let bundle = bundle(&[
        ("roi", &["autocrate"]),
        ("autocrate", &["roi"]),
        ("poisson", &["chat"]),
        ("chat", &["poisson"]),
    ]);

    assert_eq!(shortest_path(&bundle, "roi", "chat"), PathOutcome::NoPath);
}

#[test]
fn test_unknown_word_policies_differ_per_engine() {
    let bundle = bundle(&[("roi", &[])]);

    // Shortest path: reported, not raised.
    assert_eq!(
        shortest_path(&bundle, "roi", "navire"),
        PathOutcome::UnknownWord("navire".to_string())
    );

    // Growth and degree: loud failures.
    assert!(matches!(
        synonym_set_growth(&bundle, "navire", 20),
        Err(SynographError::WordNotFound(_))
    ));
    assert!(matches!(
        degree_of(&bundle, "navire"),
        Err(SynographError::WordNotFound(_))
    ));
}

#[test]
fn test_growth_saturates_at_component_size() {
    let bundle = bundle(&[
        ("roi", &["autocrate", "chef"]),
        ("autocrate", &["roi"]),
        ("chef", &["coq"]),
        ("coq", &["chef"]),
        ("oiseau", &[]), // different component, never reached
    ]);

    let trace = synonym_set_growth(&bundle, "roi", 20).unwrap();

    // Reachable component is {roi, autocrate, chef, coq}.
    assert_eq!(trace.last().unwrap().set_size, 4);

    // Once two consecutive sizes agree the trace has stopped growing.
    let sizes: Vec<usize> = trace.iter().map(|s| s.set_size).collect();
    if let Some(fixed) = sizes.windows(2).position(|w| w[0] == w[1]) {
        assert!(sizes[fixed..].iter().all(|&s| s == sizes[fixed]));
    }
    for pair in sizes.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn test_degree_counts_on_synthetic_graph() {
    let bundle = bundle(&[("a", &["b", "c"]), ("b", &["c"]), ("c", &[]), ("d", &[])]);

    let degrees = out_degrees(bundle.graph());
    assert_eq!(degrees[bundle.rank("a").unwrap() as usize], 2);
    assert_eq!(degrees[bundle.rank("b").unwrap() as usize], 1);
    assert_eq!(degrees[bundle.rank("c").unwrap() as usize], 0);
    assert_eq!(degrees[bundle.rank("d").unwrap() as usize], 0);

    assert_eq!(degree_of(&bundle, "a").unwrap(), 2);
}
