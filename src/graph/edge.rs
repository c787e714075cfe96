//! Edge implementation for the donation network
//!
//! An edge is one donation, directed from donor to recipient, weighted by the
//! amount. Multiple donations between the same pair are separate edges.

use super::property::{PropertyMap, PropertyValue};
use super::types::VertexId;
use serde::{Deserialize, Serialize};

/// One row of the edge table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Donor (edge goes FROM this vertex)
    pub source: VertexId,

    /// Recipient (edge goes TO this vertex)
    pub target: VertexId,

    /// Non-negative amount
    pub weight: f64,

    /// Date, description, receipt number...
    #[serde(default)]
    pub attributes: PropertyMap,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(source: impl Into<VertexId>, target: impl Into<VertexId>, weight: f64) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
            weight,
            attributes: PropertyMap::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get_attribute(&self, key: &str) -> Option<&PropertyValue> {
        self.attributes.get(key)
    }

    /// Check if this edge connects two specific vertices (in either direction)
    pub fn connects(&self, a: &VertexId, b: &VertexId) -> bool {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Weights must be finite and non-negative
    pub fn has_valid_weight(&self) -> bool {
        self.weight.is_finite() && self.weight >= 0.0
    }
}
