//! The graph algebra instruction set.

use std::fmt;

use crate::comparison::Comparison;
use crate::environment::GraphName;

/// Which endpoint(s) of an edge `getEdgeEndpoint` selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Source,
    Destination,
    Both,
}

/// Traversal direction of `getAdjacentVertex`.
///
/// Edges point from child to parent: `Ancestor` follows them forward,
/// `Descendant` backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ancestor,
    Descendant,
    Both,
}

impl Direction {
    pub fn includes_ancestors(&self) -> bool {
        matches!(self, Direction::Ancestor | Direction::Both)
    }

    pub fn includes_descendants(&self) -> bool {
        matches!(self, Direction::Descendant | Direction::Both)
    }
}

/// Presentation of `listGraphs` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    /// Names only.
    #[default]
    Name,
    /// Names with vertex and edge counts.
    Detail,
}

/// One graph algebra instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    CreateEmptyGraph {
        target: GraphName,
    },
    UnionGraph {
        target: GraphName,
        source: GraphName,
    },
    IntersectGraph {
        target: GraphName,
        lhs: GraphName,
        rhs: GraphName,
    },
    SubtractGraph {
        target: GraphName,
        minuend: GraphName,
        subtrahend: GraphName,
    },
    LimitGraph {
        target: GraphName,
        source: GraphName,
        limit: usize,
    },
    GetVertex {
        target: GraphName,
        subject: GraphName,
        predicate: Option<Comparison>,
    },
    GetEdge {
        target: GraphName,
        subject: GraphName,
        predicate: Option<Comparison>,
    },
    GetEdgeEndpoint {
        target: GraphName,
        subject: GraphName,
        component: Component,
    },
    CollapseEdge {
        target: GraphName,
        source: GraphName,
        fields: Vec<String>,
    },
    GetAdjacentVertex {
        target: GraphName,
        subject: GraphName,
        source: GraphName,
        direction: Direction,
    },
    ExportGraph {
        target: GraphName,
    },
    ListGraphs {
        style: ListStyle,
    },
    StatGraph {
        target: GraphName,
    },
    EraseSymbols {
        symbols: Vec<String>,
    },
    DistinctifyGraph {
        target: GraphName,
        source: GraphName,
    },
}

impl Instruction {
    /// Instruction name as written in scripts.
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::CreateEmptyGraph { .. } => "createEmptyGraph",
            Instruction::UnionGraph { .. } => "unionGraph",
            Instruction::IntersectGraph { .. } => "intersectGraph",
            Instruction::SubtractGraph { .. } => "subtractGraph",
            Instruction::LimitGraph { .. } => "limitGraph",
            Instruction::GetVertex { .. } => "getVertex",
            Instruction::GetEdge { .. } => "getEdge",
            Instruction::GetEdgeEndpoint { .. } => "getEdgeEndpoint",
            Instruction::CollapseEdge { .. } => "collapseEdge",
            Instruction::GetAdjacentVertex { .. } => "getAdjacentVertex",
            Instruction::ExportGraph { .. } => "exportGraph",
            Instruction::ListGraphs { .. } => "listGraphs",
            Instruction::StatGraph { .. } => "statGraph",
            Instruction::EraseSymbols { .. } => "eraseSymbols",
            Instruction::DistinctifyGraph { .. } => "distinctifyGraph",
        }
    }

    /// The graph this instruction writes to, if it writes at all.
    pub fn target(&self) -> Option<&GraphName> {
        match self {
            Instruction::CreateEmptyGraph { target }
            | Instruction::UnionGraph { target, .. }
            | Instruction::IntersectGraph { target, .. }
            | Instruction::SubtractGraph { target, .. }
            | Instruction::LimitGraph { target, .. }
            | Instruction::GetVertex { target, .. }
            | Instruction::GetEdge { target, .. }
            | Instruction::GetEdgeEndpoint { target, .. }
            | Instruction::CollapseEdge { target, .. }
            | Instruction::GetAdjacentVertex { target, .. }
            | Instruction::DistinctifyGraph { target, .. } => Some(target),
            Instruction::ExportGraph { .. }
            | Instruction::ListGraphs { .. }
            | Instruction::StatGraph { .. }
            | Instruction::EraseSymbols { .. } => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        match self {
            Instruction::CreateEmptyGraph { target }
            | Instruction::ExportGraph { target }
            | Instruction::StatGraph { target } => write!(f, "({target})"),
            Instruction::UnionGraph { target, source }
            | Instruction::DistinctifyGraph { target, source } => {
                write!(f, "({target}, {source})")
            }
            Instruction::IntersectGraph { target, lhs, rhs } => {
                write!(f, "({target}, {lhs}, {rhs})")
            }
            Instruction::SubtractGraph {
                target,
                minuend,
                subtrahend,
            } => write!(f, "({target}, {minuend}, {subtrahend})"),
            Instruction::LimitGraph {
                target,
                source,
                limit,
            } => write!(f, "({target}, {source}, {limit})"),
            Instruction::GetVertex {
                target,
                subject,
                predicate,
            }
            | Instruction::GetEdge {
                target,
                subject,
                predicate,
            } => match predicate {
                Some(predicate) => write!(f, "({target}, {subject}, {predicate})"),
                None => write!(f, "({target}, {subject})"),
            },
            Instruction::GetEdgeEndpoint {
                target,
                subject,
                component,
            } => write!(f, "({target}, {subject}, {component:?})"),
            Instruction::CollapseEdge {
                target,
                source,
                fields,
            } => write!(f, "({target}, {source}, [{}])", fields.join(", ")),
            Instruction::GetAdjacentVertex {
                target,
                subject,
                source,
                direction,
            } => write!(f, "({target}, {subject}, {source}, {direction:?})"),
            Instruction::ListGraphs { style } => write!(f, "({style:?})"),
            Instruction::EraseSymbols { symbols } => write!(f, "({})", symbols.join(", ")),
        }
    }
}
