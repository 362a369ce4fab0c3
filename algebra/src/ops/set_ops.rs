//! Union, intersection and difference.

use tagraph_graph::Graph;

use super::{tag, Scope, Selection, Tagged};
use crate::environment::{GraphEnvironment, GraphName};
use crate::error::ExecutionResult;

/// `target` gains every element of `source`.
pub fn union_graph(
    graph: &mut Graph,
    env: &GraphEnvironment,
    target: &GraphName,
    source: &GraphName,
) -> ExecutionResult<Tagged> {
    let source = Scope::new(env, source);
    let mut selection = Selection::new();
    selection
        .vertices
        .extend(source.vertices(graph).map(|vertex| vertex.id));
    selection
        .edges
        .extend(source.edges(graph).map(|edge| edge.id));
    tag(graph, env, target, selection)
}

/// `target` gains every element present in both operands.
pub fn intersect_graph(
    graph: &mut Graph,
    env: &GraphEnvironment,
    target: &GraphName,
    lhs: &GraphName,
    rhs: &GraphName,
) -> ExecutionResult<Tagged> {
    let lhs = Scope::new(env, lhs);
    let rhs = Scope::new(env, rhs);
    let mut selection = Selection::new();
    selection.vertices.extend(
        lhs.vertices(graph)
            .filter(|vertex| rhs.contains_vertex(vertex))
            .map(|vertex| vertex.id),
    );
    selection.edges.extend(
        lhs.edges(graph)
            .filter(|edge| rhs.contains_edge(edge))
            .map(|edge| edge.id),
    );
    tag(graph, env, target, selection)
}

/// `target` gains every element of `minuend` that is not in `subtrahend`.
pub fn subtract_graph(
    graph: &mut Graph,
    env: &GraphEnvironment,
    target: &GraphName,
    minuend: &GraphName,
    subtrahend: &GraphName,
) -> ExecutionResult<Tagged> {
    let minuend = Scope::new(env, minuend);
    let subtrahend = Scope::new(env, subtrahend);

    // Nothing survives subtracting the base graph.
    if subtrahend.is_base() {
        return Ok(Tagged::default());
    }

    let mut selection = Selection::new();
    selection.vertices.extend(
        minuend
            .vertices(graph)
            .filter(|vertex| !subtrahend.contains_vertex(vertex))
            .map(|vertex| vertex.id),
    );
    selection.edges.extend(
        minuend
            .edges(graph)
            .filter(|edge| !subtrahend.contains_edge(edge))
            .map(|edge| edge.id),
    );
    tag(graph, env, target, selection)
}
