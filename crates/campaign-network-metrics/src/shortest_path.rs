//! Landmark-based average shortest path estimation
//!
//! Exact single-source searches run only from a sample of landmark vertices;
//! every `(landmark, reachable vertex, distance)` triple is pooled and averaged.
//!
//! The result is a **biased approximation** of the average shortest path:
//!
//! * with fewer landmarks than vertices only part of the pair space is seen,
//!   and the bias grows as the landmark count shrinks relative to the graph;
//! * unreachable pairs are left out rather than penalised, so on a graph split
//!   into several components the estimate reflects within-component distances
//!   only and drifts away from an all-pairs average that charges a finite
//!   penalty for disconnection.
//!
//! With every vertex as a landmark (graphs smaller than the landmark cap) the
//! estimate equals the exact mean over all reachable ordered pairs.

use crate::common::GraphView;
use crate::config::{Deadline, LandmarkConfig, PathWeighting};
use crate::error::{Metric, MetricsError, MetricsResult};
use crate::pathfinding::{bfs_distances, dijkstra_distances};
use crate::sampling::{landmark_rng, sample_landmarks, target_landmarks};
use rayon::prelude::*;
use tracing::{debug, info};

/// Outcome of a landmark estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathEstimate {
    /// Mean distance over all pooled pairs
    pub average: f64,
    /// Realised number of landmarks (may differ from the target under Bernoulli sampling)
    pub landmarks: usize,
    /// Number of `(landmark, reachable vertex)` pairs averaged
    pub pairs: u64,
}

/// Distance totals from one or more landmarks.
///
/// Merging is associative and commutative, so landmark searches can finish
/// in any order.
#[derive(Debug, Default, Clone, Copy)]
struct DistanceSum {
    hops: u64,
    weight: f64,
    pairs: u64,
}

impl DistanceSum {
    fn merge(self, other: DistanceSum) -> DistanceSum {
        DistanceSum {
            hops: self.hops + other.hops,
            weight: self.weight + other.weight,
            pairs: self.pairs + other.pairs,
        }
    }

    fn total(&self, weighting: PathWeighting) -> f64 {
        match weighting {
            PathWeighting::Hops => self.hops as f64,
            PathWeighting::Weight => self.weight,
        }
    }
}

/// Distances from a single landmark, the landmark itself excluded
fn landmark_distances(view: &GraphView, landmark: usize, config: &LandmarkConfig) -> DistanceSum {
    match config.weighting {
        PathWeighting::Hops => {
            let dist = bfs_distances(view, landmark, config.traversal);
            let (hops, pairs) = dist
                .iter()
                .filter(|&(&v, _)| v != landmark)
                .fold((0u64, 0u64), |(h, p), (_, &d)| (h + d as u64, p + 1));
            DistanceSum { hops, weight: 0.0, pairs }
        }
        PathWeighting::Weight => {
            let dist = dijkstra_distances(view, landmark, config.traversal);
            // Sum in vertex order so repeat runs agree bit for bit
            let mut reached: Vec<(usize, f64)> = dist
                .into_iter()
                .filter(|&(v, _)| v != landmark)
                .collect();
            reached.sort_unstable_by_key(|&(v, _)| v);
            DistanceSum {
                hops: 0,
                weight: reached.iter().map(|&(_, d)| d).sum(),
                pairs: reached.len() as u64,
            }
        }
    }
}

/// Mean distance over the given landmarks.
///
/// Searches run in parallel; per-landmark sums are merged in landmark order.
pub fn average_distance_from(
    view: &GraphView,
    landmarks: &[usize],
    config: &LandmarkConfig,
    deadline: Deadline,
) -> MetricsResult<PathEstimate> {
    let partials: Vec<DistanceSum> = landmarks
        .par_iter()
        .map(|&landmark| {
            deadline.check(Metric::ShortestPath)?;
            Ok(landmark_distances(view, landmark, config))
        })
        .collect::<MetricsResult<_>>()?;

    let total = partials
        .into_iter()
        .fold(DistanceSum::default(), DistanceSum::merge);

    if total.pairs == 0 {
        return Err(MetricsError::undefined(
            Metric::ShortestPath,
            "no vertex is reachable from any landmark",
        ));
    }

    Ok(PathEstimate {
        average: total.total(config.weighting) / total.pairs as f64,
        landmarks: landmarks.len(),
        pairs: total.pairs,
    })
}

/// Approximate average shortest path length from sampled landmarks.
///
/// Fails with [`MetricsError::UndefinedMetric`] for graphs with fewer than two
/// vertices, an empty landmark sample, or no reachable pair at all.
pub fn estimate_average_shortest_path(
    view: &GraphView,
    config: &LandmarkConfig,
    deadline: Deadline,
) -> MetricsResult<PathEstimate> {
    let n = view.node_count;
    if n < 2 {
        return Err(MetricsError::undefined(
            Metric::ShortestPath,
            format!("graph has {n} vertices, at least 2 are needed"),
        ));
    }

    let target = target_landmarks(n, config.max_landmarks);
    let mut rng = landmark_rng(config);
    let landmarks = sample_landmarks(n, target, config.sampling, &mut rng);
    debug!(target, sampled = landmarks.len(), strategy = ?config.sampling, "landmarks drawn");

    if landmarks.is_empty() {
        return Err(MetricsError::undefined(
            Metric::ShortestPath,
            "landmark sample is empty",
        ));
    }

    let estimate = average_distance_from(view, &landmarks, config, deadline)?;
    info!(
        average = estimate.average,
        landmarks = estimate.landmarks,
        pairs = estimate.pairs,
        "average shortest path estimated"
    );
    Ok(estimate)
}
