//! Degree index
//!
//! Derived once from a [`GraphView`]: raw in/out donation counts, the multigraph
//! degree, and the simplified undirected neighbour sets used by assortativity
//! and clustering.

use crate::common::GraphView;
use rustc_hash::FxHashSet;

/// Per-vertex degrees and distinct undirected neighbour sets.
///
/// `(u, v)` and `(v, u)` collapse into one relation, parallel edges collapse,
/// and a vertex is never its own neighbour.
#[derive(Debug, Clone)]
pub struct DegreeIndex {
    neighbors: Vec<FxHashSet<usize>>,
    in_degree: Vec<usize>,
    out_degree: Vec<usize>,
    /// Non-loop edge incidences, parallel edges counted
    multi_degree: Vec<usize>,
    undirected_edge_count: usize,
}

impl DegreeIndex {
    pub fn new(view: &GraphView) -> Self {
        let n = view.node_count;
        let mut neighbors = vec![FxHashSet::default(); n];
        let mut multi_degree = vec![0; n];

        for (u, v, _) in view.edges() {
            if u == v {
                continue;
            }
            neighbors[u].insert(v);
            neighbors[v].insert(u);
            multi_degree[u] += 1;
            multi_degree[v] += 1;
        }

        let undirected_edge_count = neighbors.iter().map(FxHashSet::len).sum::<usize>() / 2;

        DegreeIndex {
            neighbors,
            in_degree: (0..n).map(|i| view.in_degree(i)).collect(),
            out_degree: (0..n).map(|i| view.out_degree(i)).collect(),
            multi_degree,
            undirected_edge_count,
        }
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Total degree: number of distinct neighbours
    pub fn degree(&self, idx: usize) -> usize {
        self.neighbors[idx].len()
    }

    /// Raw number of donations received
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_degree[idx]
    }

    /// Raw number of donations made
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_degree[idx]
    }

    pub fn multi_degree(&self, idx: usize) -> usize {
        self.multi_degree[idx]
    }

    pub fn neighbors(&self, idx: usize) -> &FxHashSet<usize> {
        &self.neighbors[idx]
    }

    /// O(1) membership test on the simplified undirected graph
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.neighbors[u].contains(&v)
    }

    /// Number of edges in the simplified undirected graph
    pub fn undirected_edge_count(&self) -> usize {
        self.undirected_edge_count
    }

    /// Each simplified undirected edge once, as `(u, v)` with `u < v`
    pub fn undirected_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(u, set)| {
            set.iter().filter(move |&&v| u < v).map(move |&v| (u, v))
        })
    }

    pub fn max_degree(&self) -> usize {
        self.neighbors.iter().map(FxHashSet::len).max().unwrap_or(0)
    }

    pub fn mean_degree(&self) -> f64 {
        if self.neighbors.is_empty() {
            return 0.0;
        }
        2.0 * self.undirected_edge_count as f64 / self.neighbors.len() as f64
    }
}
