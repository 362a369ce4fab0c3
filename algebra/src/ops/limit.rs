//! limitGraph - the first k elements of a graph.

use tagraph_graph::Graph;

use super::{tag, Scope, Selection, Tagged};
use crate::environment::{GraphEnvironment, GraphName};
use crate::error::ExecutionResult;

/// `target` gains the `limit` lowest-id vertices of `source` and,
/// independently, its `limit` lowest-id edges.
pub fn limit_graph(
    graph: &mut Graph,
    env: &GraphEnvironment,
    target: &GraphName,
    source: &GraphName,
    limit: usize,
) -> ExecutionResult<Tagged> {
    let source = Scope::new(env, source);
    let mut selection = Selection::new();
    selection
        .vertices
        .extend(source.vertices(graph).take(limit).map(|vertex| vertex.id));
    selection
        .edges
        .extend(source.edges(graph).take(limit).map(|edge| edge.id));
    tag(graph, env, target, selection)
}
