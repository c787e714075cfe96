//! Degree assortativity (Newman)
//!
//! Pearson correlation of the degrees found at the two ends of every edge.
//! Each undirected edge contributes both ordered pairs `(du, dv)` and
//! `(dv, du)`, so the two degree sequences share their mean and variance.

use crate::common::GraphView;
use crate::config::ParallelEdges;
use crate::degree::DegreeIndex;
use crate::error::{Metric, MetricsError, MetricsResult};
use tracing::debug;

/// Running sums over the ordered degree pairs.
///
/// Degrees are integers, so the sums are kept exact and the result does not
/// depend on the order edges are visited in.
#[derive(Debug, Default, Clone, Copy)]
struct PairSums {
    pairs: u128,
    sum: u128,
    sum_sq: u128,
    sum_product: u128,
}

impl PairSums {
    /// Add `(a, b)` and `(b, a)`
    fn add_edge(&mut self, a: usize, b: usize) {
        let (a, b) = (a as u128, b as u128);
        self.pairs += 2;
        self.sum += a + b;
        self.sum_sq += a * a + b * b;
        self.sum_product += 2 * a * b;
    }

    fn correlation(&self) -> MetricsResult<f64> {
        if self.pairs == 0 {
            return Err(MetricsError::undefined(
                Metric::Assortativity,
                "graph has no edges",
            ));
        }

        let n = self.pairs as i128;
        let sum = self.sum as i128;
        let covariance = n * self.sum_product as i128 - sum * sum;
        let variance = n * self.sum_sq as i128 - sum * sum;

        if variance == 0 {
            return Err(MetricsError::undefined(
                Metric::Assortativity,
                "edge endpoint degrees have zero variance",
            ));
        }

        Ok(covariance as f64 / variance as f64)
    }
}

/// Degree assortativity coefficient in `[-1, 1]`.
///
/// With [`ParallelEdges::Collapse`] the simplified undirected graph is used and
/// degree is the number of distinct neighbours. With
/// [`ParallelEdges::Multiplicity`] every non-loop donation is an edge and degree
/// counts edge incidences.
///
/// Fails with [`MetricsError::UndefinedMetric`] when there are no edges or when
/// every endpoint has the same degree (regular graphs, single edges).
pub fn assortativity(
    index: &DegreeIndex,
    view: &GraphView,
    parallel_edges: ParallelEdges,
) -> MetricsResult<f64> {
    let mut sums = PairSums::default();

    match parallel_edges {
        ParallelEdges::Collapse => {
            for (u, v) in index.undirected_edges() {
                sums.add_edge(index.degree(u), index.degree(v));
            }
        }
        ParallelEdges::Multiplicity => {
            for (u, v, _) in view.edges() {
                if u != v {
                    sums.add_edge(index.multi_degree(u), index.multi_degree(v));
                }
            }
        }
    }

    let r = sums.correlation()?;
    debug!(pairs = sums.pairs as u64, r, "assortativity computed");
    Ok(r)
}
