//! Graph bundle construction from a filtered thesaurus mapping.

use ahash::AHashMap;
use log::info;

use crate::error::{Result, SynographError};
use crate::graph::CsrGraph;
use crate::thesaurus::RawMapping;

/// The immutable graph bundle shared by every query engine.
///
/// Holds the directed adjacency structure, the name table (rank -> word)
/// and the rank lookup table (word -> rank). Built once by
/// [`GraphBundle::build`] and read-only afterwards; engines borrow it for
/// the duration of a call.
#[derive(Debug, Clone)]
pub struct GraphBundle {
    graph: CsrGraph,
    names: Vec<String>,
    table: AHashMap<String, u32>,
}

impl GraphBundle {
    /// Build the bundle from a filtered mapping.
    ///
    /// Ranks are assigned in sorted key order, so the same mapping always
    /// produces the same rank assignment regardless of hash-map iteration
    /// order. The mapping must be closed over its own vocabulary (see
    /// [`filter_dangling`](crate::thesaurus::filter_dangling)); a synonym
    /// without an entry of its own cannot be ranked.
    pub fn build(filtered: &RawMapping) -> Result<GraphBundle> {
        let mut names: Vec<String> = filtered.keys().cloned().collect();
        names.sort_unstable();

        let table: AHashMap<String, u32> = names
            .iter()
            .enumerate()
            .map(|(rank, name)| (name.clone(), rank as u32))
            .collect();

        // Edges grouped by source rank, as CSR construction requires.
        let mut edges: Vec<(u32, u32)> = Vec::new();
        for (rank, name) in names.iter().enumerate() {
            for syno in filtered.get(name).into_iter().flatten() {
                let target = *table.get(syno).ok_or_else(|| {
                    SynographError::graph(format!(
                        "Synonym '{}' of '{}' has no entry of its own; \
                         the mapping was not filtered",
                        syno, name
                    ))
                })?;
                edges.push((rank as u32, target));
            }
        }

        let graph = CsrGraph::from_edges(names.len(), &edges);
        info!(
            "Built synonym graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(GraphBundle {
            graph,
            names,
            table,
        })
    }

    /// Reassemble a bundle from a name table and an edge list.
    ///
    /// Used when loading a persisted artifact; `names` must already be in
    /// rank order. The edge list may arrive in any order and is regrouped
    /// by source rank here, so no edge is lost to the CSR layout.
    pub(crate) fn from_parts(names: Vec<String>, mut edges: Vec<(u32, u32)>) -> GraphBundle {
        let table: AHashMap<String, u32> = names
            .iter()
            .enumerate()
            .map(|(rank, name)| (name.clone(), rank as u32))
            .collect();
        edges.sort_by_key(|&(source, _)| source);
        let graph = CsrGraph::from_edges(names.len(), &edges);
        GraphBundle {
            graph,
            names,
            table,
        }
    }

    /// The adjacency structure.
    pub fn graph(&self) -> &CsrGraph {
        &self.graph
    }

    /// The name table: `names()[rank]` is the word at that rank.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Resolve a word to its rank, failing loudly for unknown words.
    pub fn rank(&self, word: &str) -> Result<u32> {
        self.try_rank(word)
            .ok_or_else(|| SynographError::word_not_found(word))
    }

    /// Resolve a word to its rank, or `None` if it has no entry.
    pub fn try_rank(&self, word: &str) -> Option<u32> {
        self.table.get(word).copied()
    }

    /// The word at a given rank.
    pub fn name(&self, rank: u32) -> &str {
        &self.names[rank as usize]
    }

    /// Number of vocabulary words.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
