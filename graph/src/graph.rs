//! Core graph storage implementation.

use crate::index::{AdjacencyIndex, LabelIndex};
use std::collections::{BTreeMap, BTreeSet};
use tagraph_core::{Annotations, Edge, EdgeId, GraphError, GraphResult, Vertex, VertexId};

/// ID allocator for vertices and edges.
#[derive(Debug)]
struct IdAllocator {
    next_vertex_id: u64,
    next_edge_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self {
            next_vertex_id: 1,
            next_edge_id: 1,
        }
    }

    fn alloc_vertex_id(&mut self) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        id
    }

    fn alloc_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        id
    }
}

/// The in-memory provenance graph.
///
/// Elements are kept in id order, so every scan yields them in the order
/// they were ingested.
#[derive(Debug)]
pub struct Graph {
    /// Vertex storage
    vertices: BTreeMap<VertexId, Vertex>,
    /// Edge storage
    edges: BTreeMap<EdgeId, Edge>,
    /// ID allocator
    id_alloc: IdAllocator,
    /// Label index
    label_index: LabelIndex,
    /// Adjacency index
    adj_index: AdjacencyIndex,
    /// Edge properties only the store's owner may write
    reserved_edge_keys: BTreeSet<String>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
            id_alloc: IdAllocator::new(),
            label_index: LabelIndex::new(),
            adj_index: AdjacencyIndex::new(),
            reserved_edge_keys: BTreeSet::new(),
        }
    }

    /// Refuse `key` on edges ingested from now on. It stays writable
    /// through [`Graph::update_edge_attr`].
    pub fn reserve_edge_key(&mut self, key: impl Into<String>) {
        self.reserved_edge_keys.insert(key.into());
    }

    // ==================== Vertex Operations ====================

    /// Ingest a new vertex with the given annotations.
    pub fn create_vertex(&mut self, annotations: Annotations) -> VertexId {
        let id = self.id_alloc.alloc_vertex_id();
        self.vertices.insert(id, Vertex::new(id, annotations));
        id
    }

    /// Get a vertex by ID.
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Tag a vertex with a label. Returns true if the label was new.
    pub fn add_vertex_label(&mut self, id: VertexId, label: &str) -> GraphResult<bool> {
        let vertex = self
            .vertices
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))?;

        if !vertex.labels.insert(label.to_string()) {
            return Ok(false);
        }
        self.label_index.insert(label, id);
        Ok(true)
    }

    /// Drop a label from every vertex carrying it. Returns how many lost it.
    pub fn remove_label(&mut self, label: &str) -> usize {
        let tagged = self.label_index.remove_label(label);
        for id in &tagged {
            if let Some(vertex) = self.vertices.get_mut(id) {
                vertex.labels.remove(label);
            }
        }
        tagged.len()
    }

    // ==================== Edge Operations ====================

    /// Ingest a new edge from `source` (child) to `destination` (parent).
    pub fn create_edge(
        &mut self,
        source: VertexId,
        destination: VertexId,
        annotations: Annotations,
    ) -> GraphResult<EdgeId> {
        for endpoint in [source, destination] {
            if !self.vertices.contains_key(&endpoint) {
                return Err(GraphError::VertexNotFound(endpoint));
            }
        }
        if let Some(key) = annotations
            .keys()
            .find(|key| self.reserved_edge_keys.contains(*key))
        {
            return Err(GraphError::ReservedAnnotation { key: key.clone() });
        }

        let id = self.id_alloc.alloc_edge_id();
        self.adj_index.insert(id, source, destination);
        self.edges
            .insert(id, Edge::new(id, source, destination, annotations));
        Ok(id)
    }

    /// Get an edge by ID.
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Rewrite one edge property in place.
    ///
    /// `update` sees the current value and returns the new one (`None`
    /// removes the property). The read and the write happen inside this one
    /// call, so callers never hold a stale copy of the value.
    pub fn update_edge_attr<F>(&mut self, id: EdgeId, key: &str, update: F) -> GraphResult<()>
    where
        F: FnOnce(Option<&str>) -> Option<String>,
    {
        let edge = self
            .edges
            .get_mut(&id)
            .ok_or(GraphError::EdgeNotFound(id))?;

        match update(edge.annotations.get(key).map(String::as_str)) {
            Some(value) => {
                edge.annotations.insert(key.to_string(), value);
            }
            None => {
                edge.annotations.remove(key);
            }
        }
        Ok(())
    }

    /// Apply `update` to the property `key` of every edge.
    pub fn update_all_edge_attrs<F>(&mut self, key: &str, mut update: F)
    where
        F: FnMut(Option<&str>) -> Option<String>,
    {
        for edge in self.edges.values_mut() {
            match update(edge.annotations.get(key).map(String::as_str)) {
                Some(value) => {
                    edge.annotations.insert(key.to_string(), value);
                }
                None => {
                    edge.annotations.remove(key);
                }
            }
        }
    }

    // ==================== Query Operations ====================

    /// All vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// All edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// Find vertices by label, in creation order.
    pub fn vertices_with_label<'a>(&'a self, label: &str) -> impl Iterator<Item = &'a Vertex> + 'a {
        self.label_index
            .get(label)
            .filter_map(move |id| self.vertices.get(&id))
    }

    /// Number of vertices carrying a label.
    pub fn label_count(&self, label: &str) -> usize {
        self.label_index.count(label)
    }

    /// Find edges leaving a vertex.
    pub fn edges_from(&self, vertex_id: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.adj_index.edges_from(vertex_id)
    }

    /// Find edges entering a vertex.
    pub fn edges_to(&self, vertex_id: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.adj_index.edges_to(vertex_id)
    }

    // ==================== Statistics ====================

    /// Get the number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
