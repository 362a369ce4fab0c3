//! Predicate trees.

use crate::operator::{BinaryOperator, OperatorKind};
use std::fmt;

/// A node of a predicate tree.
///
/// The variants fix the tree shape: a terminal has no children, `not` has
/// exactly one, every other operator exactly two. Children are owned
/// exclusively by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateNode {
    /// Field name or literal text.
    Terminal(String),
    /// `not operand`
    Not(Box<PredicateNode>),
    /// `left <operator> right`
    Binary {
        operator: BinaryOperator,
        left: Box<PredicateNode>,
        right: Box<PredicateNode>,
    },
}

impl PredicateNode {
    pub fn terminal(value: impl Into<String>) -> Self {
        PredicateNode::Terminal(value.into())
    }

    pub fn negate(operand: PredicateNode) -> Self {
        PredicateNode::Not(Box::new(operand))
    }

    pub fn binary(operator: BinaryOperator, left: PredicateNode, right: PredicateNode) -> Self {
        PredicateNode::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `field <comparator> literal`
    pub fn comparison(
        comparator: BinaryOperator,
        field: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        Self::binary(
            comparator,
            PredicateNode::terminal(field),
            PredicateNode::terminal(literal),
        )
    }

    /// The node's value: terminal text or operator token.
    pub fn value(&self) -> &str {
        match self {
            PredicateNode::Terminal(value) => value,
            PredicateNode::Not(_) => OperatorKind::NOT,
            PredicateNode::Binary { operator, .. } => operator.as_str(),
        }
    }

    pub fn left(&self) -> Option<&PredicateNode> {
        match self {
            PredicateNode::Terminal(_) => None,
            PredicateNode::Not(operand) => Some(operand),
            PredicateNode::Binary { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&PredicateNode> {
        match self {
            PredicateNode::Binary { right, .. } => Some(right),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PredicateNode::Terminal(_))
    }

    /// Render the tree one node per line with `|-- ` branches.
    pub fn to_tree_string(&self) -> String {
        let mut buffer = String::new();
        self.write_tree(&mut buffer, "", "");
        buffer
    }

    fn write_tree(&self, buffer: &mut String, prefix: &str, children_prefix: &str) {
        buffer.push_str(prefix);
        buffer.push_str(self.value());
        buffer.push('\n');
        match self {
            PredicateNode::Terminal(_) => {}
            PredicateNode::Not(operand) => {
                operand.write_tree(
                    buffer,
                    &format!("{children_prefix}|-- "),
                    &format!("{children_prefix}    "),
                );
            }
            PredicateNode::Binary { left, right, .. } => {
                left.write_tree(
                    buffer,
                    &format!("{children_prefix}|-- "),
                    &format!("{children_prefix}|   "),
                );
                right.write_tree(
                    buffer,
                    &format!("{children_prefix}|-- "),
                    &format!("{children_prefix}    "),
                );
            }
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_terminal() {
            write!(f, "{}", self)
        } else {
            write!(f, "({})", self)
        }
    }
}

/// Infix rendering: `(type = Process) and (not (pid < 10))`.
impl fmt::Display for PredicateNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredicateNode::Terminal(value) => f.write_str(value),
            PredicateNode::Not(operand) => {
                write!(f, "not ")?;
                operand.fmt_operand(f)
            }
            PredicateNode::Binary {
                operator,
                left,
                right,
            } => {
                left.fmt_operand(f)?;
                write!(f, " {} ", operator)?;
                right.fmt_operand(f)
            }
        }
    }
}
