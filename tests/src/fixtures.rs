//! Seeded sessions and symbol-level helpers for scenarios.
//!
//! The provenance store used by most scenarios:
//!
//! ```text
//! v1 {a}  --e1 {a}-->  v2 {a, b}  --e2 {b}-->  v3 {b}
//! ```
//!
//! `$A` holds everything annotated `a = 1` and `$B` everything annotated
//! `b = 1`, so they overlap on `v2`.

use tagraph_algebra::{
    Comparison, Component, Direction, ExecutionError, GraphName, GraphStats, Instruction,
    InstructionOutput, ListStyle,
};
use tagraph_core::annotations;
use tagraph_predicate::Expr;
use tagraph_session::{Session, SessionConfig, SessionResult};

/// A session over the two-graph provenance store.
pub fn provenance() -> SessionResult<Session> {
    provenance_with(SessionConfig::default())
}

/// Same store as [`provenance`], under a custom configuration.
pub fn provenance_with(config: SessionConfig) -> SessionResult<Session> {
    let mut session = Session::new(config)?;
    let store = session.store_mut();
    let v1 = store.create_vertex(annotations! { "name" => "v1", "a" => "1" });
    let v2 = store.create_vertex(annotations! { "name" => "v2", "a" => "1", "b" => "1" });
    let v3 = store.create_vertex(annotations! { "name" => "v3", "b" => "1" });
    store
        .create_edge(v1, v2, annotations! { "name" => "e1", "a" => "1" })
        .map_err(ExecutionError::from)?;
    store
        .create_edge(v2, v3, annotations! { "name" => "e2", "b" => "1" })
        .map_err(ExecutionError::from)?;

    for (symbol, field) in [("$A", "a"), ("$B", "b")] {
        let base = session.base_graph().as_str().to_string();
        let filter = Expr::compare(field, "=", "1");
        session.get_vertex(symbol, &base, Some(&filter))?;
        session.get_edge(symbol, &base, Some(&filter))?;
    }
    Ok(session)
}

/// A session over a small process tree for traversal scenarios.
///
/// ```text
/// main.o --> cc --> make --> bash
///                     |
///                     +==> Makefile   (two parallel `Used` edges)
/// ```
///
/// Edges point from the newer element to the one it derives from, so
/// ancestors of `main.o` are reached by following edges forward.
pub fn process_tree() -> SessionResult<Session> {
    let mut session = Session::new(SessionConfig::default())?;
    let store = session.store_mut();
    let bash = store.create_vertex(annotations! { "name" => "bash", "type" => "Process" });
    let make = store.create_vertex(annotations! { "name" => "make", "type" => "Process" });
    let cc = store.create_vertex(annotations! { "name" => "cc", "type" => "Process" });
    let obj = store.create_vertex(annotations! { "name" => "main.o", "type" => "Artifact" });
    let mkfile = store.create_vertex(annotations! { "name" => "Makefile", "type" => "Artifact" });
    store
        .create_edge(make, bash, annotations! { "name" => "make-bash", "type" => "WasTriggeredBy" })
        .map_err(ExecutionError::from)?;
    store
        .create_edge(cc, make, annotations! { "name" => "cc-make", "type" => "WasTriggeredBy" })
        .map_err(ExecutionError::from)?;
    store
        .create_edge(obj, cc, annotations! { "name" => "obj-cc", "type" => "WasGeneratedBy" })
        .map_err(ExecutionError::from)?;
    store
        .create_edge(make, mkfile, annotations! { "name" => "make-mk1", "type" => "Used" })
        .map_err(ExecutionError::from)?;
    store
        .create_edge(make, mkfile, annotations! { "name" => "make-mk2", "type" => "Used" })
        .map_err(ExecutionError::from)?;
    Ok(session)
}

/// Symbol-level shorthand over [`Session`].
///
/// Targets that are not yet bound are created on first use, the way a
/// query front end allocates a fresh graph for each assignment.
pub trait GraphOps {
    /// Storage name for `symbol`, creating an empty graph if unbound.
    fn target(&mut self, symbol: &str) -> SessionResult<GraphName>;

    fn union(&mut self, target: &str, source: &str) -> SessionResult<()>;
    fn intersect(&mut self, target: &str, lhs: &str, rhs: &str) -> SessionResult<()>;
    fn subtract(&mut self, target: &str, minuend: &str, subtrahend: &str) -> SessionResult<()>;
    fn limit(&mut self, target: &str, source: &str, limit: usize) -> SessionResult<()>;
    fn get_vertex(&mut self, target: &str, subject: &str, filter: Option<&Expr>)
        -> SessionResult<()>;
    fn get_edge(&mut self, target: &str, subject: &str, filter: Option<&Expr>)
        -> SessionResult<()>;
    fn endpoints(&mut self, target: &str, subject: &str, component: Component)
        -> SessionResult<()>;
    fn collapse(&mut self, target: &str, source: &str, fields: &[&str]) -> SessionResult<()>;
    fn adjacent(
        &mut self,
        target: &str,
        subject: &str,
        source: &str,
        direction: Direction,
    ) -> SessionResult<()>;
    fn stat(&mut self, symbol: &str) -> SessionResult<GraphStats>;
    fn list(&mut self, style: ListStyle) -> SessionResult<Vec<String>>;
    fn erase(&mut self, symbols: &[&str]) -> SessionResult<()>;
}

impl GraphOps for Session {
    fn target(&mut self, symbol: &str) -> SessionResult<GraphName> {
        match self.graph(symbol) {
            Ok(name) => Ok(name),
            Err(_) => self.create_graph(symbol),
        }
    }

    fn union(&mut self, target: &str, source: &str) -> SessionResult<()> {
        let instruction = Instruction::UnionGraph {
            source: self.graph(source)?,
            target: self.target(target)?,
        };
        self.execute(&instruction).map(drop)
    }

    fn intersect(&mut self, target: &str, lhs: &str, rhs: &str) -> SessionResult<()> {
        let instruction = Instruction::IntersectGraph {
            lhs: self.graph(lhs)?,
            rhs: self.graph(rhs)?,
            target: self.target(target)?,
        };
        self.execute(&instruction).map(drop)
    }

    fn subtract(&mut self, target: &str, minuend: &str, subtrahend: &str) -> SessionResult<()> {
        let instruction = Instruction::SubtractGraph {
            minuend: self.graph(minuend)?,
            subtrahend: self.graph(subtrahend)?,
            target: self.target(target)?,
        };
        self.execute(&instruction).map(drop)
    }

    fn limit(&mut self, target: &str, source: &str, limit: usize) -> SessionResult<()> {
        let instruction = Instruction::LimitGraph {
            source: self.graph(source)?,
            target: self.target(target)?,
            limit,
        };
        self.execute(&instruction).map(drop)
    }

    fn get_vertex(
        &mut self,
        target: &str,
        subject: &str,
        filter: Option<&Expr>,
    ) -> SessionResult<()> {
        let predicate = filter.map(|expr| self.comparison(expr)).transpose()?;
        let instruction = Instruction::GetVertex {
            subject: self.graph(subject)?,
            target: self.target(target)?,
            predicate,
        };
        self.execute(&instruction).map(drop)
    }

    fn get_edge(&mut self, target: &str, subject: &str, filter: Option<&Expr>) -> SessionResult<()> {
        let predicate: Option<Comparison> = filter.map(|expr| self.comparison(expr)).transpose()?;
        let instruction = Instruction::GetEdge {
            subject: self.graph(subject)?,
            target: self.target(target)?,
            predicate,
        };
        self.execute(&instruction).map(drop)
    }

    fn endpoints(
        &mut self,
        target: &str,
        subject: &str,
        component: Component,
    ) -> SessionResult<()> {
        let instruction = Instruction::GetEdgeEndpoint {
            subject: self.graph(subject)?,
            target: self.target(target)?,
            component,
        };
        self.execute(&instruction).map(drop)
    }

    fn collapse(&mut self, target: &str, source: &str, fields: &[&str]) -> SessionResult<()> {
        let instruction = Instruction::CollapseEdge {
            source: self.graph(source)?,
            target: self.target(target)?,
            fields: fields.iter().map(|f| f.to_string()).collect(),
        };
        self.execute(&instruction).map(drop)
    }

    fn adjacent(
        &mut self,
        target: &str,
        subject: &str,
        source: &str,
        direction: Direction,
    ) -> SessionResult<()> {
        let instruction = Instruction::GetAdjacentVertex {
            subject: self.graph(subject)?,
            source: self.graph(source)?,
            target: self.target(target)?,
            direction,
        };
        self.execute(&instruction).map(drop)
    }

    fn stat(&mut self, symbol: &str) -> SessionResult<GraphStats> {
        let target = self.graph(symbol)?;
        let output = self.execute(&Instruction::StatGraph { target })?;
        Ok(output.as_stats().unwrap_or_default())
    }

    fn list(&mut self, style: ListStyle) -> SessionResult<Vec<String>> {
        match self.execute(&Instruction::ListGraphs { style })? {
            InstructionOutput::Listing(listing) => Ok(listing
                .to_string()
                .lines()
                .map(str::to_string)
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    fn erase(&mut self, symbols: &[&str]) -> SessionResult<()> {
        let instruction = Instruction::EraseSymbols {
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        };
        self.execute(&instruction).map(drop)
    }
}
