//! Core type definitions for the donation network

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, stable identifier of a vertex (e.g. a candidate's CPF)
///
/// Tables may carry ids as strings or as integers; both normalise to the
/// same textual key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(from = "RawVertexId", into = "String")]
pub struct VertexId(String);

impl VertexId {
    pub fn new(id: impl Into<String>) -> Self {
        VertexId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VertexId {
    fn from(s: String) -> Self {
        VertexId(s)
    }
}

impl From<&str> for VertexId {
    fn from(s: &str) -> Self {
        VertexId(s.to_string())
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        VertexId(id.to_string())
    }
}

impl From<VertexId> for String {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVertexId {
    Text(String),
    Number(u64),
}

impl From<RawVertexId> for VertexId {
    fn from(raw: RawVertexId) -> Self {
        match raw {
            RawVertexId::Text(s) => VertexId(s),
            RawVertexId::Number(n) => n.into(),
        }
    }
}
