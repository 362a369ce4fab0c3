//! Graph algebra operation implementations.
//!
//! Every operation first collects the ids it selects into a [`Selection`]
//! and only then tags them, so an operation whose target is also one of its
//! operands reads the operand as it was before the operation started.

mod adjacency;
mod collapse;
mod create;
mod export;
mod limit;
mod select;
mod set_ops;

pub use adjacency::get_adjacent_vertex;
pub use collapse::collapse_edge;
pub use create::create_empty_graph;
pub use export::{export_graph, list_graphs, stat_graph};
pub use limit::limit_graph;
pub use select::{get_edge, get_edge_endpoint, get_vertex};
pub use set_ops::{intersect_graph, subtract_graph, union_graph};

use std::collections::BTreeSet;
use tagraph_core::{Edge, EdgeId, Vertex, VertexId};
use tagraph_graph::Graph;

use crate::environment::{GraphEnvironment, GraphName};
use crate::error::ExecutionResult;
use crate::membership;

/// Operand view of one graph.
///
/// The base graph contains everything and is tested without a filter; any
/// other graph is tested through vertex labels and edge membership.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scope<'a> {
    name: &'a GraphName,
    is_base: bool,
    key: &'a str,
}

impl<'a> Scope<'a> {
    pub fn new(env: &'a GraphEnvironment, name: &'a GraphName) -> Self {
        Self {
            name,
            is_base: env.is_base_graph(name),
            key: env.membership_key(),
        }
    }

    pub fn is_base(&self) -> bool {
        self.is_base
    }

    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.is_base || vertex.has_label(self.name.as_str())
    }

    pub fn contains_vertex_id(&self, graph: &Graph, id: VertexId) -> bool {
        graph
            .get_vertex(id)
            .map_or(false, |vertex| self.contains_vertex(vertex))
    }

    pub fn contains_edge(&self, edge: &Edge) -> bool {
        self.is_base || membership::contains(edge.get_annotation(self.key), self.name.as_str())
    }

    /// A user annotation of `edge`. The membership property is not one.
    pub fn edge_annotation<'e>(&self, edge: &'e Edge, field: &str) -> Option<&'e str> {
        if field == self.key {
            None
        } else {
            edge.get_annotation(field)
        }
    }

    /// Vertices of this graph in creation order.
    pub fn vertices<'g>(&'g self, graph: &'g Graph) -> Box<dyn Iterator<Item = &'g Vertex> + 'g> {
        if self.is_base {
            Box::new(graph.vertices())
        } else {
            Box::new(graph.vertices_with_label(self.name.as_str()))
        }
    }

    /// Edges of this graph in creation order.
    pub fn edges<'g>(&'g self, graph: &'g Graph) -> impl Iterator<Item = &'g Edge> + 'g {
        graph.edges().filter(move |edge| self.contains_edge(edge))
    }
}

/// Ids chosen by an operation, applied afterwards by [`tag`].
#[derive(Debug, Default)]
pub(crate) struct Selection {
    pub vertices: BTreeSet<VertexId>,
    pub edges: BTreeSet<EdgeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an edge together with both endpoints.
    pub fn add_edge_with_endpoints(&mut self, edge: &Edge) {
        self.edges.insert(edge.id);
        self.vertices.insert(edge.source);
        self.vertices.insert(edge.destination);
    }
}

/// Number of elements an operation tagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tagged {
    pub vertices: usize,
    pub edges: usize,
}

/// Tag every selected element with `target`.
///
/// Vertices take a label. Edges get `target` appended to their membership
/// inside the store's update call.
pub(crate) fn tag(
    graph: &mut Graph,
    env: &GraphEnvironment,
    target: &GraphName,
    selection: Selection,
) -> ExecutionResult<Tagged> {
    let name = target.as_str();
    for id in &selection.vertices {
        graph.add_vertex_label(*id, name)?;
    }
    for id in &selection.edges {
        graph.update_edge_attr(*id, env.membership_key(), |current| {
            Some(membership::append(current, name))
        })?;
    }
    Ok(Tagged {
        vertices: selection.vertices.len(),
        edges: selection.edges.len(),
    })
}
