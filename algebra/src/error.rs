//! Algebra error types.

use tagraph_core::GraphError;
use thiserror::Error;

/// Result type for algebra operations.
pub type ExecutionResult<T> = Result<T, ExecutionError>;

/// Errors that can occur while executing an instruction.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Store error: {0}")]
    Store(#[from] GraphError),

    #[error("Invalid graph name '{name}': {reason}")]
    InvalidGraphName { name: String, reason: &'static str },

    #[error("Invalid {operator} pattern '{pattern}': {source}")]
    InvalidPattern {
        operator: &'static str,
        pattern: String,
        #[source]
        source: regex_lite::Error,
    },

    #[error("Unknown graph symbol: {symbol}")]
    UnknownGraphSymbol { symbol: String },

    #[error("Base graph '{name}' cannot be the target of {instruction}")]
    BaseGraphTarget {
        name: String,
        instruction: &'static str,
    },
}

impl ExecutionError {
    pub fn invalid_graph_name(name: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidGraphName {
            name: name.into(),
            reason,
        }
    }

    pub fn unknown_graph_symbol(symbol: impl Into<String>) -> Self {
        Self::UnknownGraphSymbol {
            symbol: symbol.into(),
        }
    }

    pub fn base_graph_target(name: impl Into<String>, instruction: &'static str) -> Self {
        Self::BaseGraphTarget {
            name: name.into(),
            instruction,
        }
    }
}
