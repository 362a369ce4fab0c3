//! getVertex, getEdge and getEdgeEndpoint.

use tagraph_graph::Graph;

use super::{tag, Scope, Selection, Tagged};
use crate::comparison::Comparison;
use crate::environment::{GraphEnvironment, GraphName};
use crate::error::ExecutionResult;
use crate::instruction::Component;

/// `target` gains the vertices of `subject` matching `predicate` (all of
/// them when there is none).
pub fn get_vertex(
    graph: &mut Graph,
    env: &GraphEnvironment,
    target: &GraphName,
    subject: &GraphName,
    predicate: Option<&Comparison>,
) -> ExecutionResult<Tagged> {
    let matcher = predicate.map(Comparison::compile).transpose()?;
    let subject = Scope::new(env, subject);
    let mut selection = Selection::new();
    selection.vertices.extend(
        subject
            .vertices(graph)
            .filter(|vertex| {
                matcher
                    .as_ref()
                    .map_or(true, |m| m.matches(vertex.get_annotation(m.field())))
            })
            .map(|vertex| vertex.id),
    );
    tag(graph, env, target, selection)
}

/// `target` gains the edges of `subject` matching `predicate`. Endpoints
/// are not tagged.
pub fn get_edge(
    graph: &mut Graph,
    env: &GraphEnvironment,
    target: &GraphName,
    subject: &GraphName,
    predicate: Option<&Comparison>,
) -> ExecutionResult<Tagged> {
    let matcher = predicate.map(Comparison::compile).transpose()?;
    let subject = Scope::new(env, subject);
    let mut selection = Selection::new();
    selection.edges.extend(
        subject
            .edges(graph)
            .filter(|edge| {
                matcher
                    .as_ref()
                    .map_or(true, |m| m.matches(subject.edge_annotation(edge, m.field())))
            })
            .map(|edge| edge.id),
    );
    tag(graph, env, target, selection)
}

/// `target` gains the chosen endpoints of every edge of `subject` whose
/// endpoints both lie in `subject`.
pub fn get_edge_endpoint(
    graph: &mut Graph,
    env: &GraphEnvironment,
    target: &GraphName,
    subject: &GraphName,
    component: Component,
) -> ExecutionResult<Tagged> {
    let subject = Scope::new(env, subject);
    let mut selection = Selection::new();
    for edge in subject.edges(graph) {
        if !subject.contains_vertex_id(graph, edge.source)
            || !subject.contains_vertex_id(graph, edge.destination)
        {
            continue;
        }
        if matches!(component, Component::Source | Component::Both) {
            selection.vertices.insert(edge.source);
        }
        if matches!(component, Component::Destination | Component::Both) {
            selection.vertices.insert(edge.destination);
        }
    }
    tag(graph, env, target, selection)
}
