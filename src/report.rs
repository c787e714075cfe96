//! Network report: runs every metric over one graph snapshot
//!
//! The three calculators are independent. They run concurrently and share a
//! single deadline; a failed metric never hides the others.

use crate::algo;
use crate::graph::Graph;
use campaign_network_metrics::{MetricsConfig, MetricsError, MetricsResult, PathEstimate};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Results of one metrics run
#[derive(Debug, Clone)]
pub struct NetworkReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub dropped_edges: usize,
    pub assortativity: MetricsResult<f64>,
    pub average_clustering_coefficient: MetricsResult<f64>,
    pub average_shortest_path: MetricsResult<PathEstimate>,
    pub elapsed: Duration,
}

/// Compute all metrics for `graph`
pub fn analyze(graph: &Graph, config: &MetricsConfig) -> NetworkReport {
    let start = Instant::now();
    let deadline = config.start_deadline();

    info!(
        "Analyzing network: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let (assortativity, (average_clustering_coefficient, average_shortest_path)) = rayon::join(
        || algo::assortativity(graph, config),
        || {
            rayon::join(
                || algo::average_clustering_coefficient(graph, config, deadline),
                || algo::average_shortest_path(graph, config, deadline),
            )
        },
    );

    let report = NetworkReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        dropped_edges: graph.dropped_edge_count(),
        assortativity,
        average_clustering_coefficient,
        average_shortest_path,
        elapsed: start.elapsed(),
    };

    for err in report.failures() {
        warn!("{}", err);
    }
    info!("Analysis finished in {:?}", report.elapsed);

    report
}

impl NetworkReport {
    /// Errors of the metrics that did not complete
    pub fn failures(&self) -> Vec<&MetricsError> {
        [
            self.assortativity.as_ref().err(),
            self.average_clustering_coefficient.as_ref().err(),
            self.average_shortest_path.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.failures().is_empty()
    }

    pub fn to_json(&self) -> Value {
        json!({
            "vertices": self.vertex_count,
            "edges": self.edge_count,
            "dropped_edges": self.dropped_edges,
            "elapsed_ms": self.elapsed.as_millis() as u64,
            "assortativity": metric_json(&self.assortativity, |r| json!(r)),
            "average_clustering_coefficient":
                metric_json(&self.average_clustering_coefficient, |c| json!(c)),
            "average_shortest_path": metric_json(&self.average_shortest_path, |p| {
                json!({
                    "average": p.average,
                    "landmarks": p.landmarks,
                    "pairs": p.pairs,
                })
            }),
        })
    }
}

fn metric_json<T>(result: &MetricsResult<T>, value: impl FnOnce(&T) -> Value) -> Value {
    match result {
        Ok(v) => json!({ "status": "ok", "value": value(v) }),
        Err(e) => json!({
            "status": if e.is_undefined() { "undefined" } else { "resource_exhausted" },
            "error": e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Vertex};
    use campaign_network_metrics::Metric;

    fn triangle_with_pendant() -> Graph {
        Graph::build(
            ["a", "b", "c", "d"].map(Vertex::new),
            vec![
                Edge::new("a", "b", 1.0),
                Edge::new("b", "c", 1.0),
                Edge::new("c", "a", 1.0),
                Edge::new("c", "d", 1.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_analyze_all_metrics() {
        let graph = triangle_with_pendant();
        let mut config = MetricsConfig::default();
        config.landmarks.seed = Some(1);

        let report = analyze(&graph, &config);

        assert!(report.is_complete());
        assert_eq!(report.vertex_count, 4);
        assert_eq!(report.edge_count, 4);
        assert!((report.average_clustering_coefficient.clone().unwrap() - 7.0 / 12.0).abs() < 1e-12);
        assert!(report.assortativity.clone().unwrap() < 0.0);

        let path = report.average_shortest_path.unwrap();
        // 4 vertices, all landmarks: d(a,b)=1 d(a,c)=1 d(a,d)=2, same for b, c reaches all in 1
        assert_eq!(path.landmarks, 4);
        assert_eq!(path.pairs, 12);
        assert!((path.average - 16.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_failed_metric_does_not_hide_others() {
        // A cycle has zero degree variance
        let graph = Graph::build(
            ["a", "b", "c"].map(Vertex::new),
            vec![Edge::new("a", "b", 1.0), Edge::new("b", "c", 1.0), Edge::new("c", "a", 1.0)],
        )
        .unwrap();

        let report = analyze(&graph, &MetricsConfig::default());

        let failures = report.failures();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].metric(), Metric::Assortativity);
        assert_eq!(report.average_clustering_coefficient.clone().unwrap(), 1.0);
        assert_eq!(report.average_shortest_path.clone().unwrap().average, 1.0);

        let json = report.to_json();
        assert_eq!(json["assortativity"]["status"], "undefined");
        assert_eq!(json["average_clustering_coefficient"]["status"], "ok");
        assert_eq!(json["average_clustering_coefficient"]["value"], 1.0);
        assert_eq!(json["average_shortest_path"]["value"]["landmarks"], 3);
    }

    #[test]
    fn test_expired_deadline_reports_exhaustion() {
        let graph = triangle_with_pendant();
        let mut config = MetricsConfig::default();
        config.deadline_ms = Some(0);

        let report = analyze(&graph, &config);

        let clustering = report.average_clustering_coefficient.unwrap_err();
        assert!(!clustering.is_undefined());
        assert!(!report.average_shortest_path.unwrap_err().is_undefined());
        // Assortativity is a single pass without deadline checks
        assert!(report.assortativity.is_ok());
    }
}
