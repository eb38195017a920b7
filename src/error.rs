//! Error type for the strict (`try_*`) graph API.
//!
//! The permissive methods never surface these; they log the rejection and leave
//! the graph untouched.

use thiserror::Error;

/// Rejections reported by the strict graph operations.
///
/// Vertex labels of the undirected graph are generic, so they are carried in
/// their `Debug` rendering to keep the error type free of type parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A matrix index does not name an existing vertex.
    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending index.
        vertex: usize,
        /// Number of vertices at the time of the call.
        vertex_count: usize,
    },

    /// Both endpoints of an edge are the same vertex.
    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop {
        /// The repeated endpoint.
        vertex: String,
    },

    /// Edge weights must be strictly positive.
    #[error("edge {src} -> {dst} needs a strictly positive weight")]
    NonPositiveWeight {
        /// Edge source.
        src: usize,
        /// Edge destination.
        dst: usize,
    },

    /// The adjacency matrix for this many vertices cannot be allocated.
    #[error("an adjacency matrix for {vertex_count} vertices cannot be allocated")]
    CapacityOverflow {
        /// The requested vertex count.
        vertex_count: usize,
    },

    /// A labeled vertex does not exist in the graph.
    #[error("unknown vertex {vertex}")]
    UnknownVertex {
        /// The missing label.
        vertex: String,
    },
}

impl GraphError {
    pub(crate) fn out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }

    pub(crate) fn self_loop(vertex: &impl core::fmt::Debug) -> Self {
        Self::SelfLoop {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn unknown(vertex: &impl core::fmt::Debug) -> Self {
        Self::UnknownVertex {
            vertex: format!("{vertex:?}"),
        }
    }
}

/// Result alias used across the strict API.
pub type Result<T> = core::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_vertex() {
        let err = GraphError::out_of_range(7, 3);
        assert_eq!(
            err.to_string(),
            "vertex 7 out of range for a graph with 3 vertices"
        );
        assert_eq!(
            GraphError::self_loop(&2usize).to_string(),
            "self-loop on vertex 2 is not allowed"
        );
        assert_eq!(GraphError::unknown(&"Q").to_string(), "unknown vertex \"Q\"");
    }
}
