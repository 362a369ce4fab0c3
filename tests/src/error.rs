//! Test framework errors.

use tagraph_session::SessionError;
use thiserror::Error;

/// Result type for scenario runs.
pub type TestResult<T> = Result<T, TestError>;

#[derive(Debug, Error)]
pub enum TestError {
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    #[error("seed failed: {0}")]
    Seed(String),

    #[error("step '{step}' failed: {message}")]
    StepExecution { step: String, message: String },

    #[error("assertion failed in step '{step}': {message}")]
    AssertionFailed { step: String, message: String },
}

impl TestError {
    pub fn seed(message: impl Into<String>) -> Self {
        Self::Seed(message.into())
    }

    pub fn step_execution(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StepExecution {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}
