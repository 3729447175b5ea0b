//! Directed edges and the index arithmetic that links them.
//!
//! The three directed edges of face `f` always occupy ids `3f`, `3f + 1` and
//! `3f + 2`, in the order of the face's vertices. Edge `3f + k` points *to*
//! `face.vertices[k]`, so it runs from `face.vertices[k - 1]` (its tail) to
//! `face.vertices[k]` (its head). `next`, `prev` and `face_of` are therefore
//! plain arithmetic on the id.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{EdgeId, FaceId, VertexId};

/// Number of directed edges owned by each triangle.
pub const EDGES_PER_FACE: u32 = 3;

/// Face owning edge `e`.
#[inline]
#[must_use]
pub const fn face_of(e: EdgeId) -> FaceId {
    e / EDGES_PER_FACE
}

/// Next edge around the same face.
///
/// ```
/// use diredge_types::next;
///
/// assert_eq!(next(3), 4);
/// assert_eq!(next(5), 3);
/// ```
#[inline]
#[must_use]
pub const fn next(e: EdgeId) -> EdgeId {
    face_of(e) * EDGES_PER_FACE + (e + 1) % EDGES_PER_FACE
}

/// Previous edge around the same face.
///
/// ```
/// use diredge_types::prev;
///
/// assert_eq!(prev(3), 5);
/// assert_eq!(prev(4), 3);
/// ```
#[inline]
#[must_use]
pub const fn prev(e: EdgeId) -> EdgeId {
    face_of(e) * EDGES_PER_FACE + (e + 2) % EDGES_PER_FACE
}

/// One oriented side of a triangle edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectedEdge {
    /// Dense, zero-based edge id.
    pub id: EdgeId,

    /// Head vertex (the vertex this edge points to).
    pub vertex: VertexId,

    /// Oppositely oriented edge on the neighbouring face; `None` on an open
    /// boundary.
    pub twin: Option<EdgeId>,
}

impl DirectedEdge {
    /// Create an unpaired edge.
    #[inline]
    #[must_use]
    pub const fn new(id: EdgeId, vertex: VertexId) -> Self {
        Self {
            id,
            vertex,
            twin: None,
        }
    }

    /// Next edge around the owning face.
    #[inline]
    #[must_use]
    pub const fn next(&self) -> EdgeId {
        next(self.id)
    }

    /// Previous edge around the owning face.
    #[inline]
    #[must_use]
    pub const fn prev(&self) -> EdgeId {
        prev(self.id)
    }

    /// Owning face.
    #[inline]
    #[must_use]
    pub const fn face(&self) -> FaceId {
        face_of(self.id)
    }

    /// Whether the edge lies on an open boundary.
    #[inline]
    #[must_use]
    pub const fn is_boundary(&self) -> bool {
        self.twin.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triplet_arithmetic() {
        for f in 0..4u32 {
            let base = f * 3;
            assert_eq!(next(base), base + 1);
            assert_eq!(next(base + 1), base + 2);
            assert_eq!(next(base + 2), base);
            assert_eq!(prev(base), base + 2);
            assert_eq!(prev(base + 1), base);
            assert_eq!(prev(base + 2), base + 1);
            assert_eq!(face_of(base + 2), f);
        }
    }

    #[test]
    fn next_and_prev_are_inverse() {
        for e in 0..30u32 {
            assert_eq!(prev(next(e)), e);
            assert_eq!(next(prev(e)), e);
            assert_eq!(next(next(next(e))), e);
        }
    }

    #[test]
    fn edge_methods_follow_id() {
        let e = DirectedEdge::new(7, 3);
        assert_eq!(e.face(), 2);
        assert_eq!(e.next(), 8);
        assert_eq!(e.prev(), 6);
        assert!(e.is_boundary());
    }
}
