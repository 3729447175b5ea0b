//! Error types for topology construction and repair.

use std::fmt;

use diredge_types::{EdgeId, FaceId, VertexId};
use thiserror::Error;

/// Result type for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Which per-record list disagreed with the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountKind {
    /// `OtherHalf` entries vs directed edges.
    Twins,
    /// `FirstDirectedEdge` entries vs vertices.
    FirstDirectedEdges,
}

impl fmt::Display for CountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Twins => f.write_str("twin"),
            Self::FirstDirectedEdges => f.write_str("first-directed-edge"),
        }
    }
}

/// Errors that abort topology construction or repair.
///
/// Manifold violations found by validation are not errors; they are reported
/// through [`crate::ManifoldFailure`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    /// A face references a vertex that does not exist.
    #[error("face {face} references vertex {vertex} (mesh has {vertex_count} vertices)")]
    MalformedTopology {
        /// The offending face.
        face: FaceId,
        /// The out-of-range vertex id.
        vertex: VertexId,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A twin or first-directed-edge entry names an edge that does not exist.
    #[error("{kind} entry {index} references edge {edge} (mesh has {edge_count} directed edges)")]
    EdgeOutOfRange {
        /// Which list the entry came from.
        kind: CountKind,
        /// Position of the entry in its list.
        index: usize,
        /// The out-of-range edge id.
        edge: EdgeId,
        /// Number of directed edges in the mesh.
        edge_count: usize,
    },

    /// A per-record list has the wrong length.
    #[error("{kind} count mismatch: expected {expected}, got {actual}")]
    CountMismatch {
        /// Which list disagreed.
        kind: CountKind,
        /// Count implied by the mesh.
        expected: usize,
        /// Count supplied.
        actual: usize,
    },

    /// Twin pairing is not symmetric.
    #[error("edge {edge} names twin {twin}, which does not point back")]
    TwinInconsistency {
        /// The edge whose twin does not point back.
        edge: EdgeId,
        /// Its twin.
        twin: EdgeId,
    },

    /// A boundary walk could not be closed into a loop.
    #[error("boundary walk from edge {edge} does not close")]
    OpenBoundaryWalk {
        /// The boundary edge the walk started from.
        edge: EdgeId,
    },

    /// Two boundary loops (or two parts of one loop) meet at a vertex.
    #[error("boundary loops share vertex {vertex}; filling them is not supported")]
    SharedBoundaryVertex {
        /// The shared vertex.
        vertex: VertexId,
    },

    /// An edge is still without a twin after a hole was patched.
    #[error("hole repair left edge {edge} without a twin")]
    IncompleteRepair {
        /// The unpaired edge.
        edge: EdgeId,
    },
}
