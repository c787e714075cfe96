//! Vertex implementation for the donation network
//!
//! A vertex is a candidate, keyed by a stable identifier, with an opaque
//! attribute bag (name, city, party, status...).

use super::property::{PropertyMap, PropertyValue};
use super::types::VertexId;
use serde::{Deserialize, Serialize};

/// One row of the vertex table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: VertexId,

    /// Attributes carried through untouched
    #[serde(default)]
    pub attributes: PropertyMap,
}

impl Vertex {
    /// Create a vertex with no attributes
    pub fn new(id: impl Into<VertexId>) -> Self {
        Vertex {
            id: id.into(),
            attributes: PropertyMap::new(),
        }
    }

    pub fn new_with_attributes(id: impl Into<VertexId>, attributes: PropertyMap) -> Self {
        Vertex {
            id: id.into(),
            attributes,
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.attributes.insert(key.into(), value.into())
    }

    pub fn get_attribute(&self, key: &str) -> Option<&PropertyValue> {
        self.attributes.get(key)
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}
