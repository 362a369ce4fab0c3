//! Identity types for stored elements.
//!
//! Identifiers are assigned by the store in creation order:
//! - Unique within their namespace (vertices and edges count separately)
//! - Immutable once assigned
//! - Totally ordered, which is the order `limit` relies on

use std::fmt;

/// Unique identifier for a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    /// Create a new VertexId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Unique identifier for an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    /// Create a new EdgeId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
