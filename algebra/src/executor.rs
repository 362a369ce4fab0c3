//! Tagged graph executor - realizes the algebra over one shared store.
//!
//! Graph membership is kept on the elements themselves: a vertex carries a
//! label per graph, an edge lists its graphs in a membership property.
//! The executor delegates to the operation modules in `ops/`:
//! - `ops/create.rs` - createEmptyGraph
//! - `ops/set_ops.rs` - union, intersect, subtract
//! - `ops/limit.rs` - limitGraph
//! - `ops/select.rs` - getVertex, getEdge, getEdgeEndpoint
//! - `ops/collapse.rs` - collapseEdge
//! - `ops/adjacency.rs` - getAdjacentVertex
//! - `ops/export.rs` - exportGraph, listGraphs, statGraph

use tagraph_graph::Graph;
use tagraph_predicate::PredicateSymbolTable;

use crate::comparison::Comparison;
use crate::contract::GraphAlgebra;
use crate::environment::{GraphEnvironment, GraphName};
use crate::error::{ExecutionError, ExecutionResult};
use crate::instruction::{Component, Direction, ListStyle};
use crate::ops::{self, Tagged};
use crate::result::{ExportedGraph, GraphListing, GraphStats};

/// Graph algebra over a tagged property graph.
pub struct TaggedGraphExecutor<'a> {
    graph: &'a mut Graph,
    environment: &'a mut GraphEnvironment,
    predicates: &'a mut PredicateSymbolTable,
}

impl<'a> TaggedGraphExecutor<'a> {
    /// Create a new executor.
    pub fn new(
        graph: &'a mut Graph,
        environment: &'a mut GraphEnvironment,
        predicates: &'a mut PredicateSymbolTable,
    ) -> Self {
        Self {
            graph,
            environment,
            predicates,
        }
    }

    /// The base graph is never tagged, so it cannot be written to.
    fn writable(&self, target: &GraphName, instruction: &'static str) -> ExecutionResult<()> {
        if self.environment.is_base_graph(target) {
            return Err(ExecutionError::base_graph_target(target.as_str(), instruction));
        }
        Ok(())
    }

    fn log(instruction: &'static str, target: &GraphName, tagged: Tagged) {
        tracing::debug!(
            instruction,
            target = %target,
            vertices = tagged.vertices,
            edges = tagged.edges,
            "executed graph instruction"
        );
    }
}

impl GraphAlgebra for TaggedGraphExecutor<'_> {
    fn create_empty_graph(&mut self, target: &GraphName) -> ExecutionResult<()> {
        self.writable(target, "createEmptyGraph")?;
        let cleared = ops::create_empty_graph(self.graph, self.environment, target)?;
        Self::log("createEmptyGraph", target, cleared);
        Ok(())
    }

    fn union_graph(&mut self, target: &GraphName, source: &GraphName) -> ExecutionResult<()> {
        self.writable(target, "unionGraph")?;
        let tagged = ops::union_graph(self.graph, self.environment, target, source)?;
        Self::log("unionGraph", target, tagged);
        Ok(())
    }

    fn intersect_graph(
        &mut self,
        target: &GraphName,
        lhs: &GraphName,
        rhs: &GraphName,
    ) -> ExecutionResult<()> {
        self.writable(target, "intersectGraph")?;
        let tagged = ops::intersect_graph(self.graph, self.environment, target, lhs, rhs)?;
        Self::log("intersectGraph", target, tagged);
        Ok(())
    }

    fn subtract_graph(
        &mut self,
        target: &GraphName,
        minuend: &GraphName,
        subtrahend: &GraphName,
    ) -> ExecutionResult<()> {
        self.writable(target, "subtractGraph")?;
        let tagged =
            ops::subtract_graph(self.graph, self.environment, target, minuend, subtrahend)?;
        Self::log("subtractGraph", target, tagged);
        Ok(())
    }

    fn limit_graph(
        &mut self,
        target: &GraphName,
        source: &GraphName,
        limit: usize,
    ) -> ExecutionResult<()> {
        self.writable(target, "limitGraph")?;
        let tagged = ops::limit_graph(self.graph, self.environment, target, source, limit)?;
        Self::log("limitGraph", target, tagged);
        Ok(())
    }

    fn get_vertex(
        &mut self,
        target: &GraphName,
        subject: &GraphName,
        predicate: Option<&Comparison>,
    ) -> ExecutionResult<()> {
        self.writable(target, "getVertex")?;
        let tagged = ops::get_vertex(self.graph, self.environment, target, subject, predicate)?;
        Self::log("getVertex", target, tagged);
        Ok(())
    }

    fn get_edge(
        &mut self,
        target: &GraphName,
        subject: &GraphName,
        predicate: Option<&Comparison>,
    ) -> ExecutionResult<()> {
        self.writable(target, "getEdge")?;
        let tagged = ops::get_edge(self.graph, self.environment, target, subject, predicate)?;
        Self::log("getEdge", target, tagged);
        Ok(())
    }

    fn get_edge_endpoint(
        &mut self,
        target: &GraphName,
        subject: &GraphName,
        component: Component,
    ) -> ExecutionResult<()> {
        self.writable(target, "getEdgeEndpoint")?;
        let tagged =
            ops::get_edge_endpoint(self.graph, self.environment, target, subject, component)?;
        Self::log("getEdgeEndpoint", target, tagged);
        Ok(())
    }

    fn collapse_edge(
        &mut self,
        target: &GraphName,
        source: &GraphName,
        fields: &[String],
    ) -> ExecutionResult<()> {
        self.writable(target, "collapseEdge")?;
        let tagged = ops::collapse_edge(self.graph, self.environment, target, source, fields)?;
        Self::log("collapseEdge", target, tagged);
        Ok(())
    }

    fn get_adjacent_vertex(
        &mut self,
        target: &GraphName,
        subject: &GraphName,
        source: &GraphName,
        direction: Direction,
    ) -> ExecutionResult<()> {
        self.writable(target, "getAdjacentVertex")?;
        let tagged = ops::get_adjacent_vertex(
            self.graph,
            self.environment,
            target,
            subject,
            source,
            direction,
        )?;
        Self::log("getAdjacentVertex", target, tagged);
        Ok(())
    }

    fn export_graph(&self, target: &GraphName) -> ExecutionResult<ExportedGraph> {
        let snapshot = ops::export_graph(self.graph, self.environment, target)?;
        tracing::debug!(
            instruction = "exportGraph",
            target = %target,
            vertices = snapshot.vertices.len(),
            edges = snapshot.edges.len(),
            "executed graph instruction"
        );
        Ok(snapshot)
    }

    fn list_graphs(&self, style: ListStyle) -> ExecutionResult<GraphListing> {
        let listing = ops::list_graphs(self.graph, self.environment, style);
        tracing::debug!(
            instruction = "listGraphs",
            graphs = listing.entries.len(),
            "executed graph instruction"
        );
        Ok(listing)
    }

    fn stat_graph(&self, target: &GraphName) -> ExecutionResult<GraphStats> {
        let stats = ops::stat_graph(self.graph, self.environment, target);
        tracing::debug!(
            instruction = "statGraph",
            target = %target,
            vertices = stats.vertices,
            edges = stats.edges,
            "executed graph instruction"
        );
        Ok(stats)
    }

    fn erase_symbols(&mut self, symbols: &[String]) -> ExecutionResult<()> {
        let mut erased = 0;
        for symbol in symbols {
            let predicate = self.predicates.erase(symbol);
            let graph = self.environment.unbind(symbol).is_some();
            if predicate || graph {
                erased += 1;
            }
        }
        tracing::debug!(
            instruction = "eraseSymbols",
            requested = symbols.len(),
            erased,
            "executed graph instruction"
        );
        Ok(())
    }

    fn distinctify_graph(&mut self, target: &GraphName, source: &GraphName) -> ExecutionResult<()> {
        self.writable(target, "distinctifyGraph")?;
        let tagged = ops::union_graph(self.graph, self.environment, target, source)?;
        Self::log("distinctifyGraph", target, tagged);
        Ok(())
    }
}
