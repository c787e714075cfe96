//! Local clustering coefficient
//!
//! For a vertex with `k` distinct neighbours, the fraction of the `k(k-1)/2`
//! neighbour pairs that are themselves connected. Vertices with `k < 2` score 0.
//! The graph average is taken over every vertex, isolated ones included.

use crate::config::{Deadline, MetricsConfig};
use crate::degree::DegreeIndex;
use crate::error::{Metric, MetricsError, MetricsResult};
use rayon::prelude::*;
use tracing::{debug, info};

/// Number of closed triangles through `v`: edges among its neighbours.
///
/// O(k^2) pair checks, each an O(1) hash-set lookup.
pub fn local_triangle_count(index: &DegreeIndex, v: usize) -> usize {
    let neighbors: Vec<usize> = index.neighbors(v).iter().copied().collect();
    let mut triangles = 0;

    for (i, &a) in neighbors.iter().enumerate() {
        for &b in &neighbors[i + 1..] {
            if index.is_adjacent(a, b) {
                triangles += 1;
            }
        }
    }

    triangles
}

/// Local clustering coefficient of one vertex, in `[0, 1]`
pub fn local_clustering_coefficient(index: &DegreeIndex, v: usize) -> f64 {
    let k = index.degree(v);
    if k < 2 {
        return 0.0;
    }
    let possible = k * (k - 1) / 2;
    local_triangle_count(index, v) as f64 / possible as f64
}

/// Total neighbour-pair checks a full clustering pass performs: sum of k(k-1)/2
pub fn pair_checks(index: &DegreeIndex) -> u64 {
    (0..index.node_count())
        .map(|v| {
            let k = index.degree(v) as u64;
            k * k.saturating_sub(1) / 2
        })
        .sum()
}

/// Local clustering coefficients for every vertex, in index order.
///
/// Fails fast with [`MetricsError::ResourceExhaustion`] when the pair-check
/// budget in `config` would be exceeded or the deadline expires mid-pass.
pub fn local_clustering_coefficients(
    index: &DegreeIndex,
    config: &MetricsConfig,
    deadline: Deadline,
) -> MetricsResult<Vec<f64>> {
    if let Some(budget) = config.max_pair_checks {
        let needed = pair_checks(index);
        if needed > budget {
            return Err(MetricsError::exhausted(
                Metric::ClusteringCoefficient,
                format!("{needed} neighbour-pair checks needed, budget is {budget}"),
            ));
        }
    }

    (0..index.node_count())
        .into_par_iter()
        .map(|v| {
            deadline.check(Metric::ClusteringCoefficient)?;
            Ok(local_clustering_coefficient(index, v))
        })
        .collect()
}

/// Mean local clustering coefficient over all vertices.
///
/// Coefficients are computed in parallel but summed in index order, so repeat
/// runs are bit-identical. An empty graph is [`MetricsError::UndefinedMetric`].
pub fn average_clustering_coefficient(
    index: &DegreeIndex,
    config: &MetricsConfig,
    deadline: Deadline,
) -> MetricsResult<f64> {
    let n = index.node_count();
    if n == 0 {
        return Err(MetricsError::undefined(
            Metric::ClusteringCoefficient,
            "graph has no vertices",
        ));
    }

    let coefficients = local_clustering_coefficients(index, config, deadline)?;
    let average = coefficients.iter().sum::<f64>() / n as f64;

    debug!(
        vertices = n,
        below_two = (0..n).filter(|&v| index.degree(v) < 2).count(),
        "local clustering coefficients computed"
    );
    info!(average, "average clustering coefficient");
    Ok(average)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{fixtures, GraphView};

    fn average(view: &GraphView) -> MetricsResult<f64> {
        average_clustering_coefficient(
            &DegreeIndex::new(view),
            &MetricsConfig::default(),
            Deadline::none(),
        )
    }

    #[test]
    fn test_complete_graph_is_fully_clustered() {
        for n in 3..7 {
            let index = DegreeIndex::new(&fixtures::complete(n));
            for v in 0..n {
                assert_eq!(local_clustering_coefficient(&index, v), 1.0);
            }
            assert_eq!(average(&fixtures::complete(n)).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_star_has_zero_clustering() {
        for leaves in 2..6 {
            assert_eq!(average(&fixtures::star(leaves)).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_path_has_zero_clustering() {
        for n in 4..8 {
            assert_eq!(average(&fixtures::path(n)).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_triangle_with_pendant() {
        let view = fixtures::triangle_with_pendant();
        let index = DegreeIndex::new(&view);
        let local = local_clustering_coefficients(&index, &MetricsConfig::default(), Deadline::none())
            .unwrap();

        assert_eq!(local[0], 1.0);
        assert_eq!(local[1], 1.0);
        assert!((local[2] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(local[3], 0.0);

        let avg = average(&view).unwrap();
        assert!((avg - 7.0 / 12.0).abs() < 1e-12, "avg = {avg}");
    }

    #[test]
    fn test_isolated_vertices_count_toward_average() {
        // Triangle plus three isolated vertices: 3 * 1.0 / 6
        let view = fixtures::graph(6, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(average(&view).unwrap(), 0.5);
    }

    #[test]
    fn test_reciprocal_donations_do_not_double_count_triangles() {
        let view = GraphView::from_edges(
            3,
            vec![
                (0, 1, 1.0),
                (1, 0, 1.0),
                (1, 2, 1.0),
                (2, 1, 1.0),
                (0, 2, 1.0),
                (0, 2, 7.0),
            ],
        );
        let index = DegreeIndex::new(&view);
        assert_eq!(local_triangle_count(&index, 0), 1);
        assert_eq!(average(&view).unwrap(), 1.0);
    }

    #[test]
    fn test_empty_graph_is_undefined() {
        let view = GraphView::from_edges(0, Vec::new());
        let err = average(&view).unwrap_err();
        assert!(err.is_undefined());
        assert_eq!(err.metric(), Metric::ClusteringCoefficient);
    }

    #[test]
    fn test_pair_check_budget() {
        let index = DegreeIndex::new(&fixtures::complete(5));
        // Each vertex has k = 4 -> 6 pairs, 5 vertices
        assert_eq!(pair_checks(&index), 30);

        let config = MetricsConfig {
            max_pair_checks: Some(29),
            ..MetricsConfig::default()
        };
        let err = average_clustering_coefficient(&index, &config, Deadline::none()).unwrap_err();
        assert!(matches!(err, MetricsError::ResourceExhaustion { .. }));

        let config = MetricsConfig {
            max_pair_checks: Some(30),
            ..MetricsConfig::default()
        };
        assert!(average_clustering_coefficient(&index, &config, Deadline::none()).is_ok());
    }

    #[test]
    fn test_expired_deadline_fails_instead_of_truncating() {
        let index = DegreeIndex::new(&fixtures::complete(4));
        let deadline = Deadline::after(Some(std::time::Duration::ZERO));
        let err = average_clustering_coefficient(&index, &MetricsConfig::default(), deadline)
            .unwrap_err();
        assert!(matches!(err, MetricsError::ResourceExhaustion { .. }));
    }

    #[test]
    fn test_idempotent() {
        let view = fixtures::graph(
            8,
            &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2), (5, 6), (6, 7), (1, 5)],
        );
        let a = average(&view).unwrap();
        let b = average(&view).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
