//! Vertex records.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{EdgeId, VertexId};

/// A mesh vertex with its topological bookkeeping.
///
/// `first_directed_edge` and `degree` are filled in once directed edges have
/// been built; a freshly parsed vertex has neither.
///
/// # Example
///
/// ```
/// use diredge_types::Vertex;
///
/// let v = Vertex::from_coords(3, 1.0, 2.0, 3.0);
/// assert_eq!(v.id, 3);
/// assert_eq!(v.degree, 0);
/// assert!(v.first_directed_edge.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Dense, zero-based vertex id.
    pub id: VertexId,

    /// Position in 3D space.
    pub position: Point3<f64>,

    /// One outgoing directed edge (an edge whose tail is this vertex).
    pub first_directed_edge: Option<EdgeId>,

    /// Number of faces referencing this vertex.
    pub degree: u32,
}

impl Vertex {
    /// Create a vertex at a position, with no topology attached yet.
    #[inline]
    #[must_use]
    pub const fn new(id: VertexId, position: Point3<f64>) -> Self {
        Self {
            id,
            position,
            first_directed_edge: None,
            degree: 0,
        }
    }

    /// Create a vertex from coordinates.
    #[inline]
    #[must_use]
    pub fn from_coords(id: VertexId, x: f64, y: f64, z: f64) -> Self {
        Self::new(id, Point3::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_has_no_topology() {
        let v = Vertex::new(0, Point3::origin());
        assert_eq!(v.first_directed_edge, None);
        assert_eq!(v.degree, 0);
    }

    #[test]
    fn from_coords_sets_position() {
        let v = Vertex::from_coords(7, -1.0, 0.5, 2.0);
        assert_eq!(v.id, 7);
        assert!((v.position.x + 1.0).abs() < f64::EPSILON);
        assert!((v.position.y - 0.5).abs() < f64::EPSILON);
        assert!((v.position.z - 2.0).abs() < f64::EPSILON);
    }
}
