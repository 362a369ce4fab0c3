//! Assertion builders for checking graph membership after a step.

use std::collections::BTreeSet;

use tagraph_algebra::{ExportedGraph, GraphStats, Instruction};
use tagraph_session::Session;

use crate::error::{TestError, TestResult};

/// Expected contents of one named graph.
///
/// Elements are identified by their `name` annotation; order is ignored.
#[derive(Debug, Clone, Default)]
pub struct Assertion {
    pub graph: Option<String>,
    pub vertices: Option<BTreeSet<String>>,
    pub edges: Option<BTreeSet<String>>,
    pub stats: Option<GraphStats>,
    pub error: Option<String>,
}

impl Assertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the graph symbol the remaining expectations apply to.
    pub fn graph(mut self, symbol: &str) -> Self {
        self.graph = Some(symbol.to_string());
        self
    }

    pub fn vertices<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.vertices = Some(names.into_iter().map(str::to_string).collect());
        self
    }

    pub fn edges<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.edges = Some(names.into_iter().map(str::to_string).collect());
        self
    }

    /// The graph holds nothing.
    pub fn empty(self) -> Self {
        self.vertices([]).edges([])
    }

    pub fn stats(mut self, vertices: usize, edges: usize) -> Self {
        self.stats = Some(GraphStats { vertices, edges });
        self
    }

    /// The step fails with a message containing `fragment`.
    pub fn error(mut self, fragment: &str) -> Self {
        self.error = Some(fragment.to_string());
        self
    }

    /// Check a step outcome, then the graph state it left behind.
    pub fn verify(
        &self,
        step: &str,
        outcome: &Result<(), String>,
        session: &mut Session,
    ) -> TestResult<()> {
        match (&self.error, outcome) {
            (Some(expected), Err(msg)) if msg.contains(expected.as_str()) => {}
            (Some(expected), Err(msg)) => {
                return Err(TestError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected, msg),
                ))
            }
            (Some(expected), Ok(())) => {
                return Err(TestError::assertion_failed(
                    step,
                    format!("expected error containing '{}', but step succeeded", expected),
                ))
            }
            (None, Err(msg)) => return Err(TestError::step_execution(step, msg.clone())),
            (None, Ok(())) => {}
        }

        let Some(symbol) = &self.graph else {
            return Ok(());
        };
        let target = session.graph(symbol)?;
        let snapshot = session.execute(&Instruction::ExportGraph { target })?;
        let snapshot = snapshot.as_snapshot().cloned().unwrap_or_default();

        if let Some(expected) = &self.vertices {
            let actual = vertex_names(&snapshot);
            if &actual != expected {
                return Err(TestError::assertion_failed(
                    step,
                    format!("{} vertices: expected {:?}, got {:?}", symbol, expected, actual),
                ));
            }
        }
        if let Some(expected) = &self.edges {
            let actual = edge_names(&snapshot);
            if &actual != expected {
                return Err(TestError::assertion_failed(
                    step,
                    format!("{} edges: expected {:?}, got {:?}", symbol, expected, actual),
                ));
            }
        }
        if let Some(expected) = self.stats {
            let actual = GraphStats {
                vertices: snapshot.vertices.len(),
                edges: snapshot.edges.len(),
            };
            if actual != expected {
                return Err(TestError::assertion_failed(
                    step,
                    format!("{} stats: expected {}, got {}", symbol, expected, actual),
                ));
            }
        }
        Ok(())
    }
}

fn vertex_names(graph: &ExportedGraph) -> BTreeSet<String> {
    graph
        .vertices
        .iter()
        .map(|v| v.annotations.get("name").cloned().unwrap_or_else(|| v.id.to_string()))
        .collect()
}

fn edge_names(graph: &ExportedGraph) -> BTreeSet<String> {
    graph
        .edges
        .iter()
        .map(|e| e.annotations.get("name").cloned().unwrap_or_else(|| e.id.to_string()))
        .collect()
}
