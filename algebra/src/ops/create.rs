//! createEmptyGraph - drops every tag of a graph.

use tagraph_graph::Graph;

use super::Tagged;
use crate::environment::{GraphEnvironment, GraphName};
use crate::error::ExecutionResult;
use crate::membership;

/// Remove `target` from every vertex label set and every edge membership.
///
/// Returns how many vertices and edges lost the tag.
pub fn create_empty_graph(
    graph: &mut Graph,
    env: &GraphEnvironment,
    target: &GraphName,
) -> ExecutionResult<Tagged> {
    let name = target.as_str();
    let vertices = graph.remove_label(name);

    let mut edges = 0;
    graph.update_all_edge_attrs(env.membership_key(), |current| {
        if membership::contains(current, name) {
            edges += 1;
        }
        membership::remove(current, name)
    });

    Ok(Tagged { vertices, edges })
}
