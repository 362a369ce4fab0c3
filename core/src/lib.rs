//! Tagraph Core Types
//!
//! This crate provides the foundational types shared by the store, the
//! predicate compiler and the graph algebra:
//! - Identity types (VertexId, EdgeId)
//! - Literal values with a canonical string form (Value)
//! - Provenance entities (Vertex, Edge) and their annotations
//! - Store error types

mod entity;
mod error;
mod id;
mod value;

pub use entity::*;
pub use error::*;
pub use id::*;
pub use value::*;
