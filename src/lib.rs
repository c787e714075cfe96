//! Campaign Network
//!
//! Structural metrics over a campaign-donation network: candidates are
//! vertices, donations are directed weighted edges between them.
//!
//! # Metrics
//!
//! - Newman degree assortativity (undirected, total degree)
//! - Average local clustering coefficient
//! - Landmark-based approximation of the average shortest path
//!
//! The calculators live in the `campaign-network-metrics` crate and work on a
//! dense index projection; this crate owns the id-keyed data model, input
//! validation, configuration and the combined report.
//!
//! ## Example Usage
//!
//! ```rust
//! use campaign_network::graph::{Edge, Graph, Vertex};
//! use campaign_network::{analyze, EngineConfig};
//!
//! let graph = Graph::build(
//!     vec![Vertex::new("a"), Vertex::new("b"), Vertex::new("c")],
//!     vec![
//!         Edge::new("a", "b", 100.0),
//!         Edge::new("b", "c", 250.0),
//!         Edge::new("c", "a", 40.0),
//!     ],
//! )
//! .unwrap();
//!
//! let config = EngineConfig::default();
//! let report = analyze(&graph, &config.metrics);
//!
//! assert_eq!(report.average_clustering_coefficient.unwrap(), 1.0);
//! // Every vertex has degree 2: assortativity is undefined
//! assert!(report.assortativity.is_err());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod report;

// Re-export main types for convenience
pub use graph::{
    Edge, Graph, GraphError, GraphResult, MissingEndpointPolicy, PropertyMap, PropertyValue,
    Vertex, VertexId,
};

pub use config::{ConfigError, ConfigResult, EngineConfig};

pub use report::{analyze, NetworkReport};

pub use campaign_network_metrics::{
    Deadline, LandmarkConfig, Metric, MetricsConfig, MetricsError, MetricsResult, ParallelEdges,
    PathEstimate, PathWeighting, SamplingStrategy, Traversal,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
