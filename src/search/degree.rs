//! Out-degree (definition length) statistics.
//!
//! For each word, the out-degree of its node is its synonym count. The
//! counts feed distribution statistics (histograms, top-k rankings); the
//! ranking and selection themselves are the caller's concern.

use crate::error::Result;
use crate::graph::{CsrGraph, GraphBundle};

/// Out-degree of every node, indexed by rank.
pub fn out_degrees(graph: &CsrGraph) -> Vec<u32> {
    (0..graph.node_count() as u32)
        .map(|node| graph.out_degree(node))
        .collect()
}

/// Every word paired with its synonym count, in rank order.
pub fn definition_lengths(bundle: &GraphBundle) -> Vec<(&str, u32)> {
    bundle
        .names()
        .iter()
        .enumerate()
        .map(|(rank, name)| (name.as_str(), bundle.graph().out_degree(rank as u32)))
        .collect()
}

/// Synonym count of a single word; unknown words fail loudly.
pub fn degree_of(bundle: &GraphBundle, word: &str) -> Result<u32> {
    let rank = bundle.rank(word)?;
    Ok(bundle.graph().out_degree(rank))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynographError;
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

    #[test]
    fn test_out_degrees_triangle() {
        // a -> b, a -> c, b -> c
        let bundle = bundle(&[("a", &["b", "c"]), ("b", &["c"]), ("c", &[])]);

        let degrees = out_degrees(bundle.graph());
        assert_eq!(degrees[bundle.rank("a").unwrap() as usize], 2);
        assert_eq!(degrees[bundle.rank("b").unwrap() as usize], 1);
        assert_eq!(degrees[bundle.rank("c").unwrap() as usize], 0);
    }

    #[test]
    fn test_definition_lengths_are_in_rank_order() {
        let bundle = bundle(&[("roi", &["autocrate"]), ("autocrate", &[])]);

        let lengths = definition_lengths(&bundle);
        assert_eq!(lengths, vec![("autocrate", 0), ("roi", 1)]);
    }

    #[test]
    fn test_degree_of_unknown_word_fails() {
        let bundle = bundle(&[("roi", &[])]);
        assert!(matches!(
            degree_of(&bundle, "navire"),
            Err(SynographError::WordNotFound(_))
        ));
    }
}
