//! Session error types.

use std::path::PathBuf;
use thiserror::Error;

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Predicate resolution error.
    #[error("compile error: {0}")]
    Compile(#[from] tagraph_predicate::CompileError),

    /// Predicate stream decoding error.
    #[error("format error: {0}")]
    Format(#[from] tagraph_predicate::FormatError),

    /// Instruction execution error.
    #[error("execution error: {0}")]
    Execution(#[from] tagraph_algebra::ExecutionError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// A script stopped part way. The first `completed` instructions took
    /// effect and stay in effect.
    #[error("script aborted after {completed} instruction(s): {source}")]
    ScriptAborted {
        completed: usize,
        source: Box<SessionError>,
    },
}

impl SessionError {
    pub fn script_aborted(completed: usize, source: SessionError) -> Self {
        Self::ScriptAborted {
            completed,
            source: Box::new(source),
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
