//! Indexes for efficient graph lookups.

use tagraph_core::{EdgeId, VertexId};
use std::collections::{BTreeSet, HashMap};

/// Label index: label -> Set<VertexId>
///
/// Sets are ordered so that scans come back in creation order.
#[derive(Debug, Default)]
pub struct LabelIndex {
    index: HashMap<String, BTreeSet<VertexId>>,
}

impl LabelIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: &str, vertex_id: VertexId) {
        self.index
            .entry(label.to_string())
            .or_default()
            .insert(vertex_id);
    }

    /// Remove a whole label, returning the vertices that carried it.
    pub fn remove_label(&mut self, label: &str) -> BTreeSet<VertexId> {
        self.index.remove(label).unwrap_or_default()
    }

    pub fn get(&self, label: &str) -> impl Iterator<Item = VertexId> + '_ {
        self.index
            .get(label)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    pub fn count(&self, label: &str) -> usize {
        self.index.get(label).map(BTreeSet::len).unwrap_or(0)
    }
}

/// Adjacency index: VertexId -> { outbound: Set<EdgeId>, inbound: Set<EdgeId> }
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    /// Edges where the vertex is the source
    outbound: HashMap<VertexId, BTreeSet<EdgeId>>,
    /// Edges where the vertex is the destination
    inbound: HashMap<VertexId, BTreeSet<EdgeId>>,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, edge_id: EdgeId, source: VertexId, destination: VertexId) {
        self.outbound.entry(source).or_default().insert(edge_id);
        self.inbound.entry(destination).or_default().insert(edge_id);
    }

    /// Get edges leaving a vertex.
    pub fn edges_from(&self, vertex_id: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.outbound
            .get(&vertex_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Get edges entering a vertex.
    pub fn edges_to(&self, vertex_id: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.inbound
            .get(&vertex_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }
}
