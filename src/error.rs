//! Error types shared by the graph and every solver.
//!
//! Structural problems (missing vertices, incomplete graphs, bad weights)
//! are reported before any algorithmic work starts. An unreachable target
//! in a shortest-path query is *not* an error; see
//! [`Route::NotReachable`](crate::path::Route::NotReachable).

use thiserror::Error;

/// Errors raised by graph construction and the solvers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// The vertex value cannot be used as an identifier.
    #[error("invalid vertex identifier: {0}")]
    InvalidVertex(String),

    /// An operation referenced a vertex absent from the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// Edge weights must be finite and non-negative.
    #[error("invalid edge weight {weight}: must be finite and non-negative")]
    InvalidWeight { weight: f64 },

    /// The graph cannot carry a Hamiltonian cycle (e.g. a missing edge).
    #[error("graph is not valid for TSP: {reason}")]
    InvalidGraphForTsp { reason: String },

    /// The exact solver was given more vertices than it is configured for.
    #[error("graph has {vertices} vertices, exact solver limit is {limit}")]
    TooManyVertices { vertices: usize, limit: usize },

    /// A solver or generator configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A snapshot could not be turned back into a graph.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

impl GraphError {
    pub(crate) fn not_found(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::VertexNotFound(format!("{vertex:?}"))
    }

    pub(crate) fn not_tsp(reason: impl Into<String>) -> Self {
        GraphError::InvalidGraphForTsp {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GraphError::not_found(&7usize).to_string(),
            "vertex not found: 7"
        );
        assert_eq!(
            GraphError::TooManyVertices {
                vertices: 30,
                limit: 16
            }
            .to_string(),
            "graph has 30 vertices, exact solver limit is 16"
        );
        assert!(GraphError::not_tsp("missing edge 0 -> 3")
            .to_string()
            .contains("missing edge 0 -> 3"));
    }

    #[test]
    fn test_string_vertex_debug_quoted() {
        let err = GraphError::not_found(&"paris");
        assert_eq!(err, GraphError::VertexNotFound("\"paris\"".into()));
    }
}
