//! exportGraph, listGraphs and statGraph.

use tagraph_core::{GraphError, Vertex, VertexId};
use tagraph_graph::Graph;

use super::Scope;
use crate::environment::{GraphEnvironment, GraphName};
use crate::error::ExecutionResult;
use crate::instruction::ListStyle;
use crate::result::{
    ExportedEdge, ExportedGraph, ExportedVertex, GraphListEntry, GraphListing, GraphStats,
};

fn exported_vertex(vertex: &Vertex) -> ExportedVertex {
    ExportedVertex {
        id: vertex.id,
        annotations: vertex.annotations.clone(),
    }
}

fn resolve_endpoint(graph: &Graph, id: VertexId) -> ExecutionResult<ExportedVertex> {
    graph
        .get_vertex(id)
        .map(exported_vertex)
        .ok_or_else(|| GraphError::VertexNotFound(id).into())
}

/// Snapshot of `target`. Edge endpoints are resolved from the store even
/// when they are not themselves in `target`.
pub fn export_graph(
    graph: &Graph,
    env: &GraphEnvironment,
    target: &GraphName,
) -> ExecutionResult<ExportedGraph> {
    let scope = Scope::new(env, target);
    let vertices = scope.vertices(graph).map(exported_vertex).collect();
    let edges = scope
        .edges(graph)
        .map(|edge| {
            let mut annotations = edge.annotations.clone();
            annotations.remove(env.membership_key());
            Ok(ExportedEdge {
                id: edge.id,
                source: resolve_endpoint(graph, edge.source)?,
                destination: resolve_endpoint(graph, edge.destination)?,
                annotations,
            })
        })
        .collect::<ExecutionResult<Vec<_>>>()?;
    Ok(ExportedGraph { vertices, edges })
}

/// Vertex and edge counts of `target`.
pub fn stat_graph(graph: &Graph, env: &GraphEnvironment, target: &GraphName) -> GraphStats {
    let scope = Scope::new(env, target);
    if scope.is_base() {
        return GraphStats {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
        };
    }
    GraphStats {
        vertices: graph.label_count(target.as_str()),
        edges: scope.edges(graph).count(),
    }
}

/// The base graph, then every bound symbol in symbol order.
pub fn list_graphs(graph: &Graph, env: &GraphEnvironment, style: ListStyle) -> GraphListing {
    let stats = |name: &GraphName| match style {
        ListStyle::Name => None,
        ListStyle::Detail => Some(stat_graph(graph, env, name)),
    };
    let base = env.base();
    let mut entries = vec![GraphListEntry {
        symbol: base.to_string(),
        graph: base.clone(),
        stats: stats(base),
    }];
    entries.extend(env.symbols().map(|(symbol, name)| GraphListEntry {
        symbol: symbol.to_string(),
        graph: name.clone(),
        stats: stats(name),
    }));
    GraphListing { style, entries }
}
