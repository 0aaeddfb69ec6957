//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node with this name already exists.
    #[error("Cannot add duplicate node `{0}` to graph")]
    DuplicateNode(String),

    /// Node not found by name.
    #[error("Node `{0}` not found")]
    NodeNotFound(String),

    /// The edge to remove does not exist.
    #[error("Edge `{origin}` -> `{destination}` not found")]
    EdgeNotFound { origin: String, destination: String },

    /// An edge-classification hook could not place an edge in any category.
    #[error("Could not classify edge from `{origin}` to `{destination}`")]
    Classification { origin: String, destination: String },

    /// A traversal needed a default start node but the graph has none.
    #[error("Cannot traverse an empty graph")]
    EmptyGraph,

    /// A traversal reached an edge whose destination was removed.
    #[error("Edge `{origin}` -> `{destination}` points at a removed node")]
    DanglingEdge { origin: String, destination: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error (CLI output only).
    #[error("JSON error: {0}")]
    Json(String),
}

impl GraphError {
    /// True for the errors raised when a node or an edge is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeNotFound(_) | Self::EdgeNotFound { .. })
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
