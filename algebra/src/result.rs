//! Instruction output types.

use std::fmt;
use tagraph_core::{Annotations, EdgeId, VertexId};

use crate::environment::GraphName;
use crate::instruction::ListStyle;

/// Outcome of one instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum InstructionOutput {
    /// The instruction only changed membership.
    Unit,
    /// `exportGraph`
    Snapshot(ExportedGraph),
    /// `listGraphs`
    Listing(GraphListing),
    /// `statGraph`
    Stats(GraphStats),
}

impl InstructionOutput {
    pub fn as_snapshot(&self) -> Option<&ExportedGraph> {
        match self {
            InstructionOutput::Snapshot(graph) => Some(graph),
            _ => None,
        }
    }

    pub fn as_listing(&self) -> Option<&GraphListing> {
        match self {
            InstructionOutput::Listing(listing) => Some(listing),
            _ => None,
        }
    }

    pub fn as_stats(&self) -> Option<GraphStats> {
        match self {
            InstructionOutput::Stats(stats) => Some(*stats),
            _ => None,
        }
    }
}

/// Vertex and edge counts of one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "# vertices = {}, # edges = {}", self.vertices, self.edges)
    }
}

/// A vertex as exported: annotations only, no graph labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedVertex {
    pub id: VertexId,
    pub annotations: Annotations,
}

/// An edge as exported, with both endpoints resolved and the membership
/// property removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedEdge {
    pub id: EdgeId,
    pub source: ExportedVertex,
    pub destination: ExportedVertex,
    pub annotations: Annotations,
}

/// Snapshot of one graph, elements in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportedGraph {
    pub vertices: Vec<ExportedVertex>,
    pub edges: Vec<ExportedEdge>,
}

impl ExportedGraph {
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.iter().map(|v| v.id).collect()
    }

    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.iter().map(|e| e.id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }
}

/// One row of a [`GraphListing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphListEntry {
    /// Bound symbol, or the base graph's name.
    pub symbol: String,
    pub graph: GraphName,
    /// Present for [`ListStyle::Detail`].
    pub stats: Option<GraphStats>,
}

/// Output of `listGraphs`: the base graph first, then bound symbols sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphListing {
    pub style: ListStyle,
    pub entries: Vec<GraphListEntry>,
}

impl GraphListing {
    pub fn symbols(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.symbol.as_str()).collect()
    }
}

impl fmt::Display for GraphListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match (self.style, entry.stats) {
                (ListStyle::Detail, Some(stats)) => {
                    writeln!(f, "{} ({}): {}", entry.symbol, entry.graph, stats)?
                }
                _ => writeln!(f, "{}", entry.symbol)?,
            }
        }
        Ok(())
    }
}
