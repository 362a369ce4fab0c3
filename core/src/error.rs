//! Common error types for the provenance store.

use crate::{EdgeId, VertexId};
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Vertex not found.
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    /// Edge not found.
    #[error("Edge not found: {0}")]
    EdgeNotFound(EdgeId),

    /// An ingested edge carries a property the store keeps for itself.
    #[error("Edge annotation '{key}' is reserved")]
    ReservedAnnotation { key: String },
}

/// Result type for store operations.
pub type GraphResult<T> = Result<T, GraphError>;
