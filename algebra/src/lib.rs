//! Tagraph Algebra
//!
//! Named, possibly overlapping subgraphs of one shared provenance graph.
//!
//! Responsibilities:
//! - Define the instruction set over named graphs
//! - Bind graph symbols to storage names
//! - Evaluate single-field annotation filters
//! - Execute instructions by tagging elements of the shared store
//!
//! # Module Structure
//!
//! - `instruction` - The `Instruction` enum and its parameter types
//! - `contract` - The backend-agnostic `GraphAlgebra` trait
//! - `executor` - `TaggedGraphExecutor`, the in-memory backend
//! - `ops/` - Individual operation implementations
//! - `environment` - Graph names and symbol bindings
//! - `comparison` - Annotation filters
//! - `membership` - Edge membership encoding
//! - `error` - Error types for execution failures
//! - `result` - Instruction output types

mod comparison;
mod contract;
mod environment;
mod error;
mod executor;
mod instruction;
pub mod membership;
mod ops;
mod result;

pub use comparison::{Comparison, Matcher, PredicateOperator};
pub use contract::GraphAlgebra;
pub use environment::{GraphEnvironment, GraphName};
pub use error::{ExecutionError, ExecutionResult};
pub use executor::TaggedGraphExecutor;
pub use instruction::{Component, Direction, Instruction, ListStyle};
pub use result::{
    ExportedEdge, ExportedGraph, ExportedVertex, GraphListEntry, GraphListing, GraphStats,
    InstructionOutput,
};
