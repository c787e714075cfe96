//! Metric configuration
//!
//! Every approximation parameter and multigraph policy is explicit here rather
//! than hidden inside a calculator.

use crate::error::{Metric, MetricsError, MetricsResult};
use std::time::{Duration, Instant};

/// Default cap on the number of shortest-path landmarks
pub const DEFAULT_MAX_LANDMARKS: usize = 1000;

/// How parallel edges between the same pair of vertices are treated by assortativity.
///
/// Clustering is always computed on the simplified graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParallelEdges {
    /// One logical undirected edge per vertex pair, degree = distinct neighbours
    #[default]
    Collapse,
    /// Every raw donation counts, degree = number of edge incidences
    Multiplicity,
}

/// Direction followed by single-source searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Traversal {
    #[default]
    Undirected,
    /// Follow donor -> recipient only
    Directed,
}

/// Distance measure used by single-source searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PathWeighting {
    /// Breadth-first hop count
    #[default]
    Hops,
    /// Dijkstra over edge weights (minimum over parallel edges)
    Weight,
}

/// How landmarks are drawn from the vertex set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SamplingStrategy {
    /// Keep each vertex independently with probability `target / vertex_count`.
    /// The realised sample size varies around the target.
    #[default]
    Bernoulli,
    /// Draw exactly `target` distinct vertices
    Exact,
}

/// Landmark shortest-path estimator configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LandmarkConfig {
    /// Upper bound on the landmark count (capped again by the vertex count)
    pub max_landmarks: usize,
    pub sampling: SamplingStrategy,
    /// Fixed seed for reproducible sampling; `None` draws from OS entropy
    pub seed: Option<u64>,
    pub traversal: Traversal,
    pub weighting: PathWeighting,
}

impl Default for LandmarkConfig {
    fn default() -> Self {
        Self {
            max_landmarks: DEFAULT_MAX_LANDMARKS,
            sampling: SamplingStrategy::Bernoulli,
            seed: None,
            traversal: Traversal::Undirected,
            weighting: PathWeighting::Hops,
        }
    }
}

/// Configuration shared by all metric calculators
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MetricsConfig {
    pub parallel_edges: ParallelEdges,
    pub landmarks: LandmarkConfig,
    /// Maximum neighbour-pair checks (sum of k(k-1)/2) clustering may perform
    pub max_pair_checks: Option<u64>,
    /// Overall wall-clock budget in milliseconds
    pub deadline_ms: Option<u64>,
}

impl MetricsConfig {
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }

    /// Start the overall deadline clock for one run
    pub fn start_deadline(&self) -> Deadline {
        Deadline::after(self.deadline())
    }
}

/// A point in time after which long-running passes give up.
///
/// Checked cooperatively between units of work (one vertex, one landmark).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    /// A deadline that never expires
    pub fn none() -> Self {
        Self { expires_at: None }
    }

    pub fn after(limit: Option<Duration>) -> Self {
        Self {
            expires_at: limit.map(|d| Instant::now() + d),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|t| Instant::now() >= t)
    }

    pub fn check(&self, metric: Metric) -> MetricsResult<()> {
        if self.is_expired() {
            return Err(MetricsError::exhausted(metric, "deadline expired"));
        }
        Ok(())
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}
