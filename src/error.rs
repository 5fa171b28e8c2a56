//! Errors reported by graph storage and the algorithms running on top of it.

use thiserror::Error;

use crate::graph::Vertex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex index outside of `[0, num_vertices)`.
    #[error("vertex {vertex} is out of bounds for a graph with {num_vertices} vertices")]
    OutOfBounds { vertex: Vertex, num_vertices: usize },

    /// The backend does not store edges from a vertex to itself.
    #[error("vertex {0} cannot be adjacent to itself")]
    SelfLoop(Vertex),

    #[error("the graph has a cycle")]
    CycleDetected,

    /// `to` cannot be reached from `from`.
    #[error("no path between source {from} and destination {to}")]
    NoPath { from: Vertex, to: Vertex },

    #[error("priority map is empty")]
    EmptyPriorityMap,

    /// Row `row` of an input matrix has `len` entries instead of `expected`.
    #[error("matrix row {row} has {len} entries, expected {expected}")]
    MalformedMatrix { row: usize, len: usize, expected: usize },

    #[error("unknown graph representation `{0}`")]
    UnknownRepresentation(String),
}

pub type Result<T> = std::result::Result<T, GraphError>;
