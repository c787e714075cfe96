//! JSON-lines table loading

use anyhow::{Context, Result};
use campaign_network::{Edge, Graph, MissingEndpointPolicy, Vertex};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read one row per non-blank line
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let mut rows = Vec::new();

    for (n, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("cannot read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let row = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: malformed row", path.display(), n + 1))?;
        rows.push(row);
    }

    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn load_graph(vertices: &Path, edges: &Path, policy: MissingEndpointPolicy) -> Result<Graph> {
    let vertex_rows: Vec<Vertex> = read_rows(vertices)?;
    let edge_rows: Vec<Edge> = read_rows(edges)?;
    let graph = Graph::build_with_policy(vertex_rows, edge_rows, policy)?;
    Ok(graph)
}
