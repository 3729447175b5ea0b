//! Triangle faces.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edge::EDGES_PER_FACE;
use crate::{EdgeId, FaceId, VertexId};

/// A triangular face.
///
/// The vertex order defines the orientation (counter-clockwise when viewed
/// from outside) and also the order of the face's three directed edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    /// Dense, zero-based face id, assigned in input order.
    pub id: FaceId,

    /// The three corner vertices.
    pub vertices: [VertexId; 3],
}

impl Face {
    /// Create a face.
    #[inline]
    #[must_use]
    pub const fn new(id: FaceId, vertices: [VertexId; 3]) -> Self {
        Self { id, vertices }
    }

    /// Id of the first of this face's three directed edges.
    ///
    /// ```
    /// use diredge_types::Face;
    ///
    /// assert_eq!(Face::new(4, [0, 1, 2]).first_edge(), 12);
    /// ```
    #[inline]
    #[must_use]
    pub const fn first_edge(&self) -> EdgeId {
        self.id * EDGES_PER_FACE
    }

    /// Ids of this face's directed edges, in vertex order.
    #[inline]
    #[must_use]
    pub const fn edges(&self) -> [EdgeId; 3] {
        let first = self.first_edge();
        [first, first + 1, first + 2]
    }
}
