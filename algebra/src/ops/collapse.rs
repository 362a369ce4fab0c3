//! collapseEdge - one representative per class of parallel edges.

use std::collections::BTreeMap;
use tagraph_core::{EdgeId, VertexId};
use tagraph_graph::Graph;

use super::{tag, Scope, Selection, Tagged};
use crate::environment::{GraphEnvironment, GraphName};
use crate::error::ExecutionResult;

type EdgeClass = (VertexId, VertexId, Vec<Option<String>>);

/// Group the edges of `source` (both endpoints in `source`) by endpoint
/// pair and the values of `fields`. `target` gains both endpoints and the
/// lowest-id edge of each group.
pub fn collapse_edge(
    graph: &mut Graph,
    env: &GraphEnvironment,
    target: &GraphName,
    source: &GraphName,
    fields: &[String],
) -> ExecutionResult<Tagged> {
    let source = Scope::new(env, source);
    let mut representatives: BTreeMap<EdgeClass, EdgeId> = BTreeMap::new();

    for edge in source.edges(graph) {
        if !source.contains_vertex_id(graph, edge.source)
            || !source.contains_vertex_id(graph, edge.destination)
        {
            continue;
        }
        let values = fields
            .iter()
            .map(|field| source.edge_annotation(edge, field).map(str::to_string))
            .collect();
        // edges arrive in id order, so the first one seen is the lowest
        representatives
            .entry((edge.source, edge.destination, values))
            .or_insert(edge.id);
    }

    let mut selection = Selection::new();
    for ((from, to, _), edge) in representatives {
        selection.vertices.insert(from);
        selection.vertices.insert(to);
        selection.edges.insert(edge);
    }
    tag(graph, env, target, selection)
}
