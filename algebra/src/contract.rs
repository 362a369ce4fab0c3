//! The backend-agnostic graph algebra.
//!
//! A backend implements one method per instruction; [`GraphAlgebra::execute`]
//! dispatches an [`Instruction`] value to them.
//!
//! Every backend must special-case the base graph: as an operand it stands
//! for all elements and takes no membership filter, while any other operand
//! requires one.

use crate::comparison::Comparison;
use crate::environment::GraphName;
use crate::error::ExecutionResult;
use crate::instruction::{Component, Direction, Instruction, ListStyle};
use crate::result::{ExportedGraph, GraphListing, GraphStats, InstructionOutput};

pub trait GraphAlgebra {
    /// Clear every membership tag for `target`.
    fn create_empty_graph(&mut self, target: &GraphName) -> ExecutionResult<()>;

    /// `target` gains every element of `source`.
    fn union_graph(&mut self, target: &GraphName, source: &GraphName) -> ExecutionResult<()>;

    /// `target` gains every element in both `lhs` and `rhs`.
    fn intersect_graph(
        &mut self,
        target: &GraphName,
        lhs: &GraphName,
        rhs: &GraphName,
    ) -> ExecutionResult<()>;

    /// `target` gains every element of `minuend` not in `subtrahend`.
    fn subtract_graph(
        &mut self,
        target: &GraphName,
        minuend: &GraphName,
        subtrahend: &GraphName,
    ) -> ExecutionResult<()>;

    /// `target` gains the first `limit` vertices and the first `limit` edges
    /// of `source`, by creation id.
    fn limit_graph(
        &mut self,
        target: &GraphName,
        source: &GraphName,
        limit: usize,
    ) -> ExecutionResult<()>;

    fn get_vertex(
        &mut self,
        target: &GraphName,
        subject: &GraphName,
        predicate: Option<&Comparison>,
    ) -> ExecutionResult<()>;

    fn get_edge(
        &mut self,
        target: &GraphName,
        subject: &GraphName,
        predicate: Option<&Comparison>,
    ) -> ExecutionResult<()>;

    fn get_edge_endpoint(
        &mut self,
        target: &GraphName,
        subject: &GraphName,
        component: Component,
    ) -> ExecutionResult<()>;

    /// Keep one representative edge per (endpoints, `fields` values) class.
    fn collapse_edge(
        &mut self,
        target: &GraphName,
        source: &GraphName,
        fields: &[String],
    ) -> ExecutionResult<()>;

    /// One hop from the `source` vertices, restricted to `subject`.
    fn get_adjacent_vertex(
        &mut self,
        target: &GraphName,
        subject: &GraphName,
        source: &GraphName,
        direction: Direction,
    ) -> ExecutionResult<()>;

    fn export_graph(&self, target: &GraphName) -> ExecutionResult<ExportedGraph>;

    fn list_graphs(&self, style: ListStyle) -> ExecutionResult<GraphListing>;

    fn stat_graph(&self, target: &GraphName) -> ExecutionResult<GraphStats>;

    /// Forget predicate and graph symbols. Membership tags are left alone.
    fn erase_symbols(&mut self, symbols: &[String]) -> ExecutionResult<()>;

    /// Same membership effect as [`union_graph`](Self::union_graph).
    fn distinctify_graph(&mut self, target: &GraphName, source: &GraphName) -> ExecutionResult<()> {
        self.union_graph(target, source)
    }

    /// Run one instruction.
    fn execute(&mut self, instruction: &Instruction) -> ExecutionResult<InstructionOutput> {
        let output = match instruction {
            Instruction::CreateEmptyGraph { target } => {
                self.create_empty_graph(target)?;
                InstructionOutput::Unit
            }
            Instruction::UnionGraph { target, source } => {
                self.union_graph(target, source)?;
                InstructionOutput::Unit
            }
            Instruction::IntersectGraph { target, lhs, rhs } => {
                self.intersect_graph(target, lhs, rhs)?;
                InstructionOutput::Unit
            }
            Instruction::SubtractGraph {
                target,
                minuend,
                subtrahend,
            } => {
                self.subtract_graph(target, minuend, subtrahend)?;
                InstructionOutput::Unit
            }
            Instruction::LimitGraph {
                target,
                source,
                limit,
            } => {
                self.limit_graph(target, source, *limit)?;
                InstructionOutput::Unit
            }
            Instruction::GetVertex {
                target,
                subject,
                predicate,
            } => {
                self.get_vertex(target, subject, predicate.as_ref())?;
                InstructionOutput::Unit
            }
            Instruction::GetEdge {
                target,
                subject,
                predicate,
            } => {
                self.get_edge(target, subject, predicate.as_ref())?;
                InstructionOutput::Unit
            }
            Instruction::GetEdgeEndpoint {
                target,
                subject,
                component,
            } => {
                self.get_edge_endpoint(target, subject, *component)?;
                InstructionOutput::Unit
            }
            Instruction::CollapseEdge {
                target,
                source,
                fields,
            } => {
                self.collapse_edge(target, source, fields)?;
                InstructionOutput::Unit
            }
            Instruction::GetAdjacentVertex {
                target,
                subject,
                source,
                direction,
            } => {
                self.get_adjacent_vertex(target, subject, source, *direction)?;
                InstructionOutput::Unit
            }
            Instruction::ExportGraph { target } => {
                InstructionOutput::Snapshot(self.export_graph(target)?)
            }
            Instruction::ListGraphs { style } => InstructionOutput::Listing(self.list_graphs(*style)?),
            Instruction::StatGraph { target } => InstructionOutput::Stats(self.stat_graph(target)?),
            Instruction::EraseSymbols { symbols } => {
                self.erase_symbols(symbols)?;
                InstructionOutput::Unit
            }
            Instruction::DistinctifyGraph { target, source } => {
                self.distinctify_graph(target, source)?;
                InstructionOutput::Unit
            }
        };
        Ok(output)
    }
}
