//! Shared utilities for graph metrics
//!
//! Provides a read-only, dense view of the donation network for metric execution.

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Vertices are addressed by their dense index `0..node_count`. Every raw edge is
/// kept, including parallel edges and self-loops, so directional and weighted
/// consumers see exactly what was loaded. Undirected, simplified adjacency lives
/// in [`crate::DegreeIndex`].
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,
    /// Edge weights aligned with `out_targets`
    pub out_weights: Vec<f64>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,
    /// Edge weights aligned with `in_sources`
    pub in_weights: Vec<f64>,
}

impl GraphView {
    /// Build a view from `(source, target, weight)` triples over `node_count` dense indices.
    ///
    /// # Panics
    ///
    /// Panics if an endpoint is `>= node_count`.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, f64)>,
    {
        // Temp adjacency lists, flattened below
        let mut outgoing: Vec<Vec<(usize, f64)>> = vec![Vec::new(); node_count];
        let mut incoming: Vec<Vec<(usize, f64)>> = vec![Vec::new(); node_count];

        for (u, v, w) in edges {
            assert!(
                u < node_count && v < node_count,
                "edge ({u}, {v}) out of range for {node_count} nodes"
            );
            outgoing[u].push((v, w));
            incoming[v].push((u, w));
        }

        let (out_offsets, out_targets, out_weights) = flatten(outgoing);
        let (in_offsets, in_sources, in_weights) = flatten(incoming);

        GraphView {
            node_count,
            out_offsets,
            out_targets,
            out_weights,
            in_offsets,
            in_sources,
            in_weights,
        }
    }

    /// Number of raw directed edges (parallel edges and self-loops included)
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.out_targets[self.out_offsets[idx]..self.out_offsets[idx + 1]]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        &self.in_sources[self.in_offsets[idx]..self.in_offsets[idx + 1]]
    }

    /// Weights of the outgoing edges of a node, aligned with [`successors`](Self::successors)
    pub fn successor_weights(&self, idx: usize) -> &[f64] {
        &self.out_weights[self.out_offsets[idx]..self.out_offsets[idx + 1]]
    }

    /// Weights of the incoming edges of a node, aligned with [`predecessors`](Self::predecessors)
    pub fn predecessor_weights(&self, idx: usize) -> &[f64] {
        &self.in_weights[self.in_offsets[idx]..self.in_offsets[idx + 1]]
    }

    /// Iterate every raw edge as `(source, target, weight)`, grouped by source
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.node_count).flat_map(move |u| {
            self.successors(u)
                .iter()
                .zip(self.successor_weights(u))
                .map(move |(&v, &w)| (u, v, w))
        })
    }
}

fn flatten(lists: Vec<Vec<(usize, f64)>>) -> (Vec<usize>, Vec<usize>, Vec<f64>) {
    let mut offsets = Vec::with_capacity(lists.len() + 1);
    let total = lists.iter().map(Vec::len).sum();
    let mut targets = Vec::with_capacity(total);
    let mut weights = Vec::with_capacity(total);

    offsets.push(0);
    for row in lists {
        for (t, w) in row {
            targets.push(t);
            weights.push(w);
        }
        offsets.push(targets.len());
    }

    (offsets, targets, weights)
}

/// Small canonical graphs shared by the unit tests of every metric.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::GraphView;

    /// Unit-weight graph from undirected pairs (stored once, in the given direction)
    pub fn graph(node_count: usize, pairs: &[(usize, usize)]) -> GraphView {
        GraphView::from_edges(node_count, pairs.iter().map(|&(u, v)| (u, v, 1.0)))
    }

    pub fn cycle(n: usize) -> GraphView {
        let pairs: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        graph(n, &pairs)
    }

    pub fn complete(n: usize) -> GraphView {
        let pairs: Vec<_> = (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect();
        graph(n, &pairs)
    }

    /// Node 0 is the center, 1..=leaves are the leaves
    pub fn star(leaves: usize) -> GraphView {
        let pairs: Vec<_> = (1..=leaves).map(|l| (0, l)).collect();
        graph(leaves + 1, &pairs)
    }

    pub fn path(n: usize) -> GraphView {
        let pairs: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
        graph(n, &pairs)
    }

    /// Triangle 0-1-2 plus pendant 3 hanging off 2
    pub fn triangle_with_pendant() -> GraphView {
        graph(4, &[(0, 1), (1, 2), (2, 0), (2, 3)])
    }
}
