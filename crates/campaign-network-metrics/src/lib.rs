pub mod common;
pub mod config;
pub mod error;
pub mod degree;
pub mod assortativity;
pub mod clustering;
pub mod pathfinding;
pub mod sampling;
pub mod shortest_path;

pub use common::GraphView;
pub use config::{
    Deadline, LandmarkConfig, MetricsConfig, ParallelEdges, PathWeighting, SamplingStrategy,
    Traversal, DEFAULT_MAX_LANDMARKS,
};
pub use error::{Metric, MetricsError, MetricsResult};
pub use degree::DegreeIndex;
pub use assortativity::assortativity;
pub use clustering::{
    average_clustering_coefficient, local_clustering_coefficient, local_clustering_coefficients,
    local_triangle_count,
};
pub use pathfinding::{bfs_distances, dijkstra_distances};
pub use sampling::sample_landmarks;
pub use shortest_path::{estimate_average_shortest_path, PathEstimate};
