//! getAdjacentVertex - one lineage hop.

use tagraph_graph::Graph;

use super::{tag, Scope, Selection, Tagged};
use crate::environment::{GraphEnvironment, GraphName};
use crate::error::ExecutionResult;
use crate::instruction::Direction;

/// Edges point child to parent. Walking to ancestors takes every edge of
/// `subject` whose child is a `source` vertex; walking to descendants takes
/// every edge whose parent is one. Both endpoints must lie in `subject`, and
/// `target` gains the edge with both endpoints.
pub fn get_adjacent_vertex(
    graph: &mut Graph,
    env: &GraphEnvironment,
    target: &GraphName,
    subject: &GraphName,
    source: &GraphName,
    direction: Direction,
) -> ExecutionResult<Tagged> {
    let subject = Scope::new(env, subject);
    let source = Scope::new(env, source);
    let mut selection = Selection::new();

    let starts = source
        .vertices(graph)
        .filter(|vertex| subject.contains_vertex(vertex))
        .map(|vertex| vertex.id);

    for start in starts {
        if direction.includes_ancestors() {
            for edge in graph.edges_from(start).filter_map(|id| graph.get_edge(id)) {
                if subject.contains_edge(edge) && subject.contains_vertex_id(graph, edge.destination)
                {
                    selection.add_edge_with_endpoints(edge);
                }
            }
        }
        if direction.includes_descendants() {
            for edge in graph.edges_to(start).filter_map(|id| graph.get_edge(id)) {
                if subject.contains_edge(edge) && subject.contains_vertex_id(graph, edge.source) {
                    selection.add_edge_with_endpoints(edge);
                }
            }
        }
    }

    tag(graph, env, target, selection)
}
