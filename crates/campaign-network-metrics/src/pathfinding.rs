//! Single-source shortest paths
//!
//! BFS (hop count) and Dijkstra (edge weight) from one source to every
//! reachable vertex. Unreachable vertices are absent from the result.

use super::common::GraphView;
use crate::config::Traversal;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// Visit the neighbours of `idx` under `traversal`, with the connecting edge weight.
/// Self-loops are skipped.
fn for_each_neighbor<F>(view: &GraphView, idx: usize, traversal: Traversal, mut visit: F)
where
    F: FnMut(usize, f64),
{
    for (&next, &w) in view.successors(idx).iter().zip(view.successor_weights(idx)) {
        if next != idx {
            visit(next, w);
        }
    }
    if traversal == Traversal::Undirected {
        for (&next, &w) in view.predecessors(idx).iter().zip(view.predecessor_weights(idx)) {
            if next != idx {
                visit(next, w);
            }
        }
    }
}

/// Breadth-First Search hop distances from `source`.
///
/// The source maps to 0.
pub fn bfs_distances(
    view: &GraphView,
    source: usize,
    traversal: Traversal,
) -> FxHashMap<usize, usize> {
    let mut dist = FxHashMap::default();
    let mut queue = VecDeque::new();

    dist.insert(source, 0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_hops = dist[&current] + 1;
        for_each_neighbor(view, current, traversal, |next, _| {
            if !dist.contains_key(&next) {
                dist.insert(next, next_hops);
                queue.push_back(next);
            }
        });
    }

    dist
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node_idx: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare costs reversed for min-heap
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm: weighted distances from `source`.
///
/// Parallel edges resolve to the cheapest one. Negative or non-finite weights
/// are skipped.
pub fn dijkstra_distances(
    view: &GraphView,
    source: usize,
    traversal: Traversal,
) -> FxHashMap<usize, f64> {
    let mut dist: FxHashMap<usize, f64> = FxHashMap::default();
    let mut heap = BinaryHeap::new();

    dist.insert(source, 0.0);
    heap.push(State { cost: 0.0, node_idx: source });

    while let Some(State { cost, node_idx }) = heap.pop() {
        if cost > *dist.get(&node_idx).unwrap_or(&f64::INFINITY) {
            continue;
        }

        for_each_neighbor(view, node_idx, traversal, |next_idx, weight| {
            if !(weight >= 0.0 && weight.is_finite()) {
                return;
            }

            let next_cost = cost + weight;
            if next_cost < *dist.get(&next_idx).unwrap_or(&f64::INFINITY) {
                dist.insert(next_idx, next_cost);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        });
    }

    dist
}
