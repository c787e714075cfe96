//! Immutable in-memory donation graph
//!
//! Built once from a vertex table and an edge table. Owns all storage and the
//! derived dense view and degree index; metric calculators only borrow it.

use super::edge::Edge;
use super::types::VertexId;
use super::vertex::Vertex;
use crate::algo::build_view;
use campaign_network_metrics::{DegreeIndex, GraphView};
use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Validation errors raised while building or querying the graph
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0} appears more than once in the vertex table")]
    DuplicateVertex(VertexId),

    #[error("Edge {donor} -> {recipient} references unknown vertex {missing}")]
    UnknownEndpoint {
        donor: VertexId,
        recipient: VertexId,
        missing: VertexId,
    },

    #[error("Edge {donor} -> {recipient} has invalid weight {weight} (must be finite and >= 0)")]
    InvalidWeight {
        donor: VertexId,
        recipient: VertexId,
        weight: f64,
    },

    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// What to do with an edge whose donor or recipient is not in the vertex table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingEndpointPolicy {
    /// Discard the edge and count it
    #[default]
    Drop,
    /// Add the endpoint as a vertex with empty attributes
    Materialize,
    /// Fail with [`GraphError::UnknownEndpoint`]
    Reject,
}

/// The donation network
///
/// Vertices keep table order; a vertex's dense index in [`GraphView`] and
/// [`DegreeIndex`] is its position in that order.
#[derive(Debug)]
pub struct Graph {
    vertices: IndexMap<VertexId, Vertex>,
    edges: Vec<Edge>,
    view: GraphView,
    degrees: DegreeIndex,
    dropped_edges: usize,
    materialized_vertices: usize,
}

impl Graph {
    /// Build with the default [`MissingEndpointPolicy::Drop`]
    pub fn build<V, E>(vertices: V, edges: E) -> GraphResult<Self>
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = Edge>,
    {
        Self::build_with_policy(vertices, edges, MissingEndpointPolicy::default())
    }

    pub fn build_with_policy<V, E>(
        vertices: V,
        edges: E,
        policy: MissingEndpointPolicy,
    ) -> GraphResult<Self>
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = Edge>,
    {
        // 1. Vertex table, ids must be unique
        let mut table: IndexMap<VertexId, Vertex> = IndexMap::new();
        for vertex in vertices {
            match table.entry(vertex.id.clone()) {
                Entry::Occupied(_) => return Err(GraphError::DuplicateVertex(vertex.id)),
                Entry::Vacant(slot) => {
                    slot.insert(vertex);
                }
            }
        }

        // 2. Edge table, weights validated, unknown endpoints per policy
        let mut kept = Vec::new();
        let mut dropped_edges = 0;
        let mut materialized_vertices = 0;

        for edge in edges {
            if !edge.has_valid_weight() {
                return Err(GraphError::InvalidWeight {
                    donor: edge.source,
                    recipient: edge.target,
                    weight: edge.weight,
                });
            }

            let missing = [&edge.source, &edge.target]
                .into_iter()
                .find(|id| !table.contains_key(*id))
                .cloned();

            if let Some(missing) = missing {
                match policy {
                    MissingEndpointPolicy::Drop => {
                        dropped_edges += 1;
                        continue;
                    }
                    MissingEndpointPolicy::Reject => {
                        return Err(GraphError::UnknownEndpoint {
                            donor: edge.source,
                            recipient: edge.target,
                            missing,
                        });
                    }
                    MissingEndpointPolicy::Materialize => {
                        for id in [&edge.source, &edge.target] {
                            if !table.contains_key(id) {
                                debug!("Materializing vertex {} from edge table", id);
                                table.insert(id.clone(), Vertex::new(id.clone()));
                                materialized_vertices += 1;
                            }
                        }
                    }
                }
            }

            kept.push(edge);
        }

        if dropped_edges > 0 {
            warn!("Dropped {} edges referencing vertices outside the vertex table", dropped_edges);
        }

        // 3. Dense projection and degree index
        let view = build_view(&table, &kept);
        let degrees = DegreeIndex::new(&view);

        info!(
            "Built graph: {} vertices, {} edges ({} undirected)",
            table.len(),
            kept.len(),
            degrees.undirected_edge_count()
        );

        Ok(Graph {
            vertices: table,
            edges: kept,
            view,
            degrees,
            dropped_edges,
            materialized_vertices,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of raw donations kept (parallel edges counted)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges in the simplified undirected graph
    pub fn undirected_edge_count(&self) -> usize {
        self.degrees.undirected_edge_count()
    }

    pub fn dropped_edge_count(&self) -> usize {
        self.dropped_edges
    }

    pub fn materialized_vertex_count(&self) -> usize {
        self.materialized_vertices
    }

    pub fn vertex(&self, id: &VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Vertices in table order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Dense index of a vertex
    pub fn index_of(&self, id: &VertexId) -> GraphResult<usize> {
        self.vertices
            .get_index_of(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))
    }

    /// Vertex id at a dense index
    pub fn id_at(&self, idx: usize) -> Option<&VertexId> {
        self.vertices.get_index(idx).map(|(id, _)| id)
    }

    /// Distinct undirected neighbours (never the vertex itself)
    pub fn neighbors(&self, id: &VertexId) -> GraphResult<HashSet<&VertexId>> {
        let idx = self.index_of(id)?;
        Ok(self
            .degrees
            .neighbors(idx)
            .iter()
            .filter_map(|&n| self.id_at(n))
            .collect())
    }

    /// Total degree: number of distinct neighbours
    pub fn degree(&self, id: &VertexId) -> GraphResult<usize> {
        Ok(self.degrees.degree(self.index_of(id)?))
    }

    /// Raw number of donations received
    pub fn in_degree(&self, id: &VertexId) -> GraphResult<usize> {
        Ok(self.degrees.in_degree(self.index_of(id)?))
    }

    /// Raw number of donations made
    pub fn out_degree(&self, id: &VertexId) -> GraphResult<usize> {
        Ok(self.degrees.out_degree(self.index_of(id)?))
    }

    /// Every kept donation as `(donor, recipient, amount)`, direction preserved
    pub fn edges(&self) -> impl Iterator<Item = (&VertexId, &VertexId, f64)> {
        self.edges.iter().map(|e| (&e.source, &e.target, e.weight))
    }

    /// Kept edge rows with their attributes
    pub fn edge_rows(&self) -> &[Edge] {
        &self.edges
    }

    pub fn view(&self) -> &GraphView {
        &self.view
    }

    pub fn degree_index(&self) -> &DegreeIndex {
        &self.degrees
    }
}
