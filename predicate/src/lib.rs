//! Tagraph Predicate
//!
//! Compile annotation filters into predicate trees and move them across
//! process boundaries.
//!
//! Responsibilities:
//! - Resolve parsed filter expressions into canonical `PredicateNode` trees
//! - Keep named predicates in a per-session symbol table
//! - Encode trees as a postfix token stream and decode them back
//!
//! # Module Structure
//!
//! - `expr` - Expression types handed over by the query parser
//! - `operator` - The fixed operator vocabulary
//! - `node` - The predicate tree
//! - `resolver` - Expression to tree compilation
//! - `symbols` - Named predicate storage
//! - `codec` - Postfix wire format
//! - `error` - Error types for compilation and decoding

pub mod codec;
mod error;
mod expr;
mod node;
mod operator;
mod resolver;
mod symbols;

pub use error::{CompileError, CompileResult, FormatError, FormatResult};
pub use expr::{Expr, Span, SymbolType, Token};
pub use node::PredicateNode;
pub use operator::{BinaryOperator, OperatorKind};
pub use resolver::PredicateResolver;
pub use symbols::PredicateSymbolTable;
