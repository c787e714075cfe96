//! Graph metrics module
//!
//! Metrics are implemented in the `campaign-network-metrics` crate over dense
//! vertex indices. This module provides the integration/adapter layer between
//! the id-keyed [`Graph`] and those index-based calculators.

use crate::graph::{Edge, Graph, Vertex, VertexId};
use campaign_network_metrics::{Deadline, GraphView, MetricsConfig, MetricsResult};
use indexmap::IndexMap;

// Re-export metric types
pub use campaign_network_metrics::{
    DegreeIndex, LandmarkConfig, Metric, MetricsError, ParallelEdges, PathEstimate,
    PathWeighting, SamplingStrategy, Traversal,
};

/// Build a dense GraphView from the vertex table and the kept edges.
///
/// A vertex's index is its position in `vertices`. Edges whose endpoints are
/// not in `vertices` are skipped.
pub fn build_view(vertices: &IndexMap<VertexId, Vertex>, edges: &[Edge]) -> GraphView {
    let triples = edges.iter().filter_map(|edge| {
        let u = vertices.get_index_of(&edge.source)?;
        let v = vertices.get_index_of(&edge.target)?;
        Some((u, v, edge.weight))
    });

    GraphView::from_edges(vertices.len(), triples)
}

/// Newman degree assortativity of the graph
pub fn assortativity(graph: &Graph, config: &MetricsConfig) -> MetricsResult<f64> {
    campaign_network_metrics::assortativity(
        graph.degree_index(),
        graph.view(),
        config.parallel_edges,
    )
}

/// Local clustering coefficient of every vertex, in table order
pub fn local_clustering_coefficients<'g>(
    graph: &'g Graph,
    config: &MetricsConfig,
    deadline: Deadline,
) -> MetricsResult<Vec<(&'g VertexId, f64)>> {
    let coefficients =
        campaign_network_metrics::local_clustering_coefficients(graph.degree_index(), config, deadline)?;

    Ok(graph
        .vertices()
        .map(|v| &v.id)
        .zip(coefficients)
        .collect())
}

/// Mean local clustering coefficient over all vertices
pub fn average_clustering_coefficient(
    graph: &Graph,
    config: &MetricsConfig,
    deadline: Deadline,
) -> MetricsResult<f64> {
    campaign_network_metrics::average_clustering_coefficient(graph.degree_index(), config, deadline)
}

/// Landmark approximation of the average shortest path
pub fn average_shortest_path(
    graph: &Graph,
    config: &MetricsConfig,
    deadline: Deadline,
) -> MetricsResult<PathEstimate> {
    campaign_network_metrics::estimate_average_shortest_path(graph.view(), &config.landmarks, deadline)
}
