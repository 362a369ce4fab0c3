//! Tagraph Session
//!
//! Entry point for callers of the graph algebra.
//!
//! Responsibilities:
//! - Own the backing store and the symbol tables bound over it
//! - Resolve, import and export predicates
//! - Run single instructions and multi-instruction scripts
//! - Load session configuration

mod config;
mod error;
mod result;
mod session;

pub use config::{
    SessionConfig, DEFAULT_BASE_GRAPH_NAME, DEFAULT_GRAPH_NAME_PREFIX, DEFAULT_MEMBERSHIP_KEY,
};
pub use error::{ConfigError, SessionError, SessionResult};
pub use result::ScriptResult;
pub use session::Session;
