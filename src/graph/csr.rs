//! Compressed sparse row adjacency for the directed synonym graph.

/// A sparse directed graph in compressed sparse row form.
///
/// Edge (i, j) exists iff the word at rank j is listed as a synonym of the
/// word at rank i. Each edge carries an `f32` weight slot; today every
/// weight is 1.0 and no algorithm consumes it, the slot exists so that
/// weighted relations can be stored later without restructuring.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrGraph {
    /// `row_offsets[i]..row_offsets[i + 1]` indexes the edges out of node i.
    row_offsets: Vec<usize>,
    /// Target rank of each edge, grouped by source node.
    targets: Vec<u32>,
    /// Per-edge weight slot, parallel to `targets`.
    weights: Vec<f32>,
}

impl CsrGraph {
    /// Build a CSR graph from an edge list.
    ///
    /// `edges` must be grouped by source node in ascending source order;
    /// every node index must be below `node_count`.
    pub fn from_edges(node_count: usize, edges: &[(u32, u32)]) -> Self {
        let mut row_offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::with_capacity(edges.len());

        row_offsets.push(0);
        let mut edge_iter = edges.iter().peekable();
        for node in 0..node_count as u32 {
            while let Some((source, target)) = edge_iter.peek() {
                if *source != node {
                    break;
                }
                targets.push(*target);
                edge_iter.next();
            }
            row_offsets.push(targets.len());
        }
        debug_assert!(edge_iter.peek().is_none(), "edges not grouped by source");

        let weights = vec![1.0; targets.len()];
        CsrGraph {
            row_offsets,
            targets,
            weights,
        }
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.row_offsets.len() - 1
    }

    /// Number of directed edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Ranks of the direct successors of `node`.
    pub fn successors(&self, node: u32) -> &[u32] {
        let start = self.row_offsets[node as usize];
        let end = self.row_offsets[node as usize + 1];
        &self.targets[start..end]
    }

    /// Weight slots of the edges out of `node`, parallel to
    /// [`successors`](Self::successors).
    pub fn edge_weights(&self, node: u32) -> &[f32] {
        let start = self.row_offsets[node as usize];
        let end = self.row_offsets[node as usize + 1];
        &self.weights[start..end]
    }

    /// Out-degree of `node`.
    pub fn out_degree(&self, node: u32) -> u32 {
        (self.row_offsets[node as usize + 1] - self.row_offsets[node as usize]) as u32
    }

    /// Whether the directed edge `source -> target` exists.
    pub fn has_edge(&self, source: u32, target: u32) -> bool {
        self.successors(source).contains(&target)
    }

    /// Iterate over all edges as (source, target) pairs, grouped by source.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.node_count() as u32)
            .flat_map(move |node| self.successors(node).iter().map(move |&t| (node, t)))
    }
}
