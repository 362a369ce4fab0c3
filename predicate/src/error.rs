//! Predicate error types.

use crate::expr::{Span, SymbolType};
use thiserror::Error;

/// Result type for predicate resolution.
pub type CompileResult<T> = Result<T, CompileError>;

/// Result type for predicate decoding.
pub type FormatResult<T> = Result<T, FormatError>;

fn located(span: &Option<Span>) -> String {
    match span {
        Some(span) => format!(" at {}", span),
        None => String::new(),
    }
}

/// Errors raised while turning an expression into a predicate tree.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Unexpected '{operator}' operands count{}: {actual}. Expected: {expected}", located(.span))]
    ArityMismatch {
        operator: String,
        actual: usize,
        expected: usize,
        span: Option<Span>,
    },

    #[error("Unexpected comparator {operator}{}", located(.span))]
    UnknownOperator {
        operator: String,
        span: Option<Span>,
    },

    #[error("Unexpected {side} operand{}: expected {expected}, found {found}", located(.span))]
    UnexpectedOperand {
        side: &'static str,
        expected: &'static str,
        found: &'static str,
        span: Option<Span>,
    },

    #[error("Cannot resolve graph predicate variable {name}{}", located(.span))]
    UnknownPredicate { name: String, span: Option<Span> },

    #[error("Illegal predicate variable {name} of type {actual}{}", located(.span))]
    IllegalVariableType {
        name: String,
        actual: SymbolType,
        span: Option<Span>,
    },

    #[error("Unsupported expression type: {kind}{}", located(.span))]
    UnsupportedExpression {
        kind: &'static str,
        span: Option<Span>,
    },

    #[error("Predicate is not a single comparison: {tree}")]
    NotAComparison { tree: String },
}

impl CompileError {
    pub fn arity_mismatch(
        operator: impl Into<String>,
        actual: usize,
        expected: usize,
        span: Option<Span>,
    ) -> Self {
        Self::ArityMismatch {
            operator: operator.into(),
            actual,
            expected,
            span,
        }
    }

    pub fn unknown_operator(operator: impl Into<String>, span: Option<Span>) -> Self {
        Self::UnknownOperator {
            operator: operator.into(),
            span,
        }
    }

    pub fn unknown_predicate(name: impl Into<String>, span: Option<Span>) -> Self {
        Self::UnknownPredicate {
            name: name.into(),
            span,
        }
    }

    pub fn not_a_comparison(tree: impl Into<String>) -> Self {
        Self::NotAComparison { tree: tree.into() }
    }

    /// Source location of the offending token, if known.
    pub fn span(&self) -> Option<Span> {
        match self {
            Self::ArityMismatch { span, .. }
            | Self::UnknownOperator { span, .. }
            | Self::UnexpectedOperand { span, .. }
            | Self::UnknownPredicate { span, .. }
            | Self::IllegalVariableType { span, .. }
            | Self::UnsupportedExpression { span, .. } => *span,
            Self::NotAComparison { .. } => None,
        }
    }
}

/// Errors raised while decoding a postfix predicate stream.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Empty predicate stream")]
    EmptyStream,

    #[error("Malformed terminal token '{token}': {source}")]
    InvalidHex {
        token: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("Terminal token '{token}' does not decode to UTF-8 text")]
    InvalidUtf8 { token: String },

    #[error("Terminal token '{token}' is not wrapped in quote markers")]
    MissingQuotes { token: String },

    #[error("Operator '{operator}' at token {position} needs {expected} operand(s), found {found}")]
    StackUnderflow {
        operator: &'static str,
        position: usize,
        expected: usize,
        found: usize,
    },

    #[error("Predicate stream left {remaining} items on the stack, expected 1")]
    UnbalancedStream { remaining: usize },

    #[error("Predicate stream has no version prefix")]
    MissingVersion,

    #[error("Unsupported predicate stream version: {0}")]
    UnsupportedVersion(String),
}
