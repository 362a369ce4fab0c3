//! Tagraph Graph Storage
//!
//! This crate provides the shared property-graph store that every named
//! graph is a view over:
//! - Vertex and edge storage in creation order
//! - Label index: find vertices by graph label
//! - Adjacency index: find edges from/to a vertex
//! - Per-element conditional property updates

mod graph;
mod index;

pub use graph::*;
