//! Donation network data model
//!
//! This module implements the graph model consumed by the metrics:
//! - Candidates as vertices with opaque attribute bags
//! - Donations as directed, weighted edges (parallel edges allowed)
//! - Validation of the vertex and edge tables
//! - Insertion-ordered storage with a dense projection for metric passes

pub mod edge;
pub mod model;
pub mod property;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use model::{Graph, GraphError, GraphResult, MissingEndpointPolicy};
pub use property::{PropertyMap, PropertyValue};
pub use types::VertexId;
pub use vertex::Vertex;
