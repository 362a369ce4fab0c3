//! Session result types.

use tagraph_algebra::{ExportedGraph, GraphListing, GraphStats, InstructionOutput};

/// Outputs of a completed script, one per instruction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptResult {
    pub outputs: Vec<InstructionOutput>,
}

impl ScriptResult {
    /// Number of instructions executed.
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Output of the last instruction.
    pub fn last(&self) -> Option<&InstructionOutput> {
        self.outputs.last()
    }

    /// Every exported snapshot, in script order.
    pub fn snapshots(&self) -> impl Iterator<Item = &ExportedGraph> + '_ {
        self.outputs.iter().filter_map(InstructionOutput::as_snapshot)
    }

    /// Every listing, in script order.
    pub fn listings(&self) -> impl Iterator<Item = &GraphListing> + '_ {
        self.outputs.iter().filter_map(InstructionOutput::as_listing)
    }

    /// Every stat, in script order.
    pub fn stats(&self) -> impl Iterator<Item = GraphStats> + '_ {
        self.outputs.iter().filter_map(InstructionOutput::as_stats)
    }
}
