//! Single-field annotation filters.

use regex_lite::Regex;
use std::cmp::Ordering;
use std::fmt;
use tagraph_predicate::{BinaryOperator, CompileError, PredicateNode};

use crate::error::{ExecutionError, ExecutionResult};

/// Comparator applied by a [`Comparison`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateOperator {
    Equal,
    NotEqual,
    Lesser,
    LesserEqual,
    Greater,
    GreaterEqual,
    Like,
    Regex,
}

impl PredicateOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredicateOperator::Equal => "=",
            PredicateOperator::NotEqual => "!=",
            PredicateOperator::Lesser => "<",
            PredicateOperator::LesserEqual => "<=",
            PredicateOperator::Greater => ">",
            PredicateOperator::GreaterEqual => ">=",
            PredicateOperator::Like => "like",
            PredicateOperator::Regex => "regex",
        }
    }

    /// Map a predicate comparator. Boolean operators have no counterpart.
    pub fn from_binary(operator: BinaryOperator) -> Option<Self> {
        let op = match operator {
            BinaryOperator::Equal | BinaryOperator::DoubleEqual => PredicateOperator::Equal,
            BinaryOperator::NotEqual | BinaryOperator::LessGreater => PredicateOperator::NotEqual,
            BinaryOperator::Less => PredicateOperator::Lesser,
            BinaryOperator::LessEqual => PredicateOperator::LesserEqual,
            BinaryOperator::Greater => PredicateOperator::Greater,
            BinaryOperator::GreaterEqual => PredicateOperator::GreaterEqual,
            BinaryOperator::Like => PredicateOperator::Like,
            BinaryOperator::Tilde | BinaryOperator::Regex => PredicateOperator::Regex,
            BinaryOperator::And | BinaryOperator::Or => return None,
        };
        Some(op)
    }
}

impl fmt::Display for PredicateOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `field <operator> value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub field: String,
    pub operator: PredicateOperator,
    pub value: String,
}

impl Comparison {
    pub fn new(
        field: impl Into<String>,
        operator: PredicateOperator,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Build the matcher. Fails only for a malformed `like`/`regex` pattern.
    pub fn compile(&self) -> ExecutionResult<Matcher<'_>> {
        let pattern = match self.operator {
            PredicateOperator::Like => Some(like_to_regex(&self.value)),
            PredicateOperator::Regex => Some(format!("^(?:{})$", self.value)),
            _ => None,
        };
        let regex = pattern
            .map(|pattern| {
                Regex::new(&pattern).map_err(|source| ExecutionError::InvalidPattern {
                    operator: self.operator.as_str(),
                    pattern: self.value.clone(),
                    source,
                })
            })
            .transpose()?;
        Ok(Matcher {
            comparison: self,
            regex,
        })
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} '{}'", self.field, self.operator, self.value)
    }
}

impl TryFrom<&PredicateNode> for Comparison {
    type Error = CompileError;

    fn try_from(node: &PredicateNode) -> Result<Self, Self::Error> {
        if let PredicateNode::Binary {
            operator,
            left,
            right,
        } = node
        {
            if let (Some(op), PredicateNode::Terminal(field), PredicateNode::Terminal(value)) = (
                PredicateOperator::from_binary(*operator),
                left.as_ref(),
                right.as_ref(),
            ) {
                return Ok(Comparison::new(field.clone(), op, value.clone()));
            }
        }
        Err(CompileError::not_a_comparison(node.to_string()))
    }
}

impl TryFrom<PredicateNode> for Comparison {
    type Error = CompileError;

    fn try_from(node: PredicateNode) -> Result<Self, Self::Error> {
        Comparison::try_from(&node)
    }
}

/// `%` matches any run, `_` any single character; the rest is literal.
fn like_to_regex(pattern: &str) -> String {
    let mut out = String::from("^(?:");
    for c in pattern.chars() {
        match c {
            '%' => out.push_str(".*"),
            '_' => out.push('.'),
            other => out.push_str(&regex_lite::escape(other.encode_utf8(&mut [0; 4]))),
        }
    }
    out.push_str(")$");
    out
}

/// A compiled [`Comparison`].
#[derive(Debug)]
pub struct Matcher<'c> {
    comparison: &'c Comparison,
    regex: Option<Regex>,
}

impl Matcher<'_> {
    pub fn field(&self) -> &str {
        &self.comparison.field
    }

    /// Test an annotation value. A missing annotation never matches.
    pub fn matches(&self, annotation: Option<&str>) -> bool {
        let Some(actual) = annotation else {
            return false;
        };
        let expected = self.comparison.value.as_str();
        let ordering = || actual.cmp(expected);
        match self.comparison.operator {
            PredicateOperator::Equal => actual == expected,
            PredicateOperator::NotEqual => actual != expected,
            PredicateOperator::Lesser => ordering() == Ordering::Less,
            PredicateOperator::LesserEqual => ordering() != Ordering::Greater,
            PredicateOperator::Greater => ordering() == Ordering::Greater,
            PredicateOperator::GreaterEqual => ordering() != Ordering::Less,
            PredicateOperator::Like | PredicateOperator::Regex => self
                .regex
                .as_ref()
                .map_or(false, |regex| regex.is_match(actual)),
        }
    }
}
