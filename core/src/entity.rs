//! Entity structures for the provenance store.
//!
//! Vertices and edges are the two element kinds. Both carry textual
//! annotations; vertices additionally carry the set of graph labels they
//! are tagged with.

use crate::{EdgeId, VertexId};
use std::collections::{BTreeMap, BTreeSet};

/// Type alias for annotation storage.
pub type Annotations = BTreeMap<String, String>;

/// Helper macro to create annotation maps.
#[macro_export]
macro_rules! annotations {
    () => {
        $crate::Annotations::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = $crate::Annotations::new();
            $(
                map.insert($key.to_string(), $value.to_string());
            )+
            map
        }
    };
}

/// A vertex in the provenance graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    /// Unique identifier for this vertex.
    pub id: VertexId,
    /// Graph labels this vertex is tagged with.
    pub labels: BTreeSet<String>,
    /// Annotation values.
    pub annotations: Annotations,
}

impl Vertex {
    /// Create a new, untagged vertex.
    pub fn new(id: VertexId, annotations: Annotations) -> Self {
        Self {
            id,
            labels: BTreeSet::new(),
            annotations,
        }
    }

    /// Get an annotation value by key.
    pub fn get_annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Returns true if the vertex carries the given label.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}

/// A directed edge in the provenance graph.
///
/// Edges point from the dependent element (`source`, the child) to the
/// element it depends on (`destination`, the parent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// Child endpoint.
    pub source: VertexId,
    /// Parent endpoint.
    pub destination: VertexId,
    /// Annotation values.
    pub annotations: Annotations,
}

impl Edge {
    /// Create a new edge.
    pub fn new(
        id: EdgeId,
        source: VertexId,
        destination: VertexId,
        annotations: Annotations,
    ) -> Self {
        Self {
            id,
            source,
            destination,
            annotations,
        }
    }

    /// Get an annotation value by key.
    pub fn get_annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }
}
