//! Triangle soup and its conversion to an indexed mesh.

use hashbrown::HashMap;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{IndexedMesh, VertexId};

/// Unindexed triangles: every corner carries its own position.
///
/// This is the content of a `.tri` file.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleSoup {
    /// Triangles as three corner positions each.
    pub triangles: Vec<[Point3<f64>; 3]>,
}

impl TriangleSoup {
    /// Create an empty soup.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the soup has no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Index the soup, merging corners with identical positions.
    ///
    /// Vertex ids are assigned in first-seen order and faces keep the soup's
    /// triangle order. Positions are compared exactly (`0.0` and `-0.0` are
    /// the same position).
    ///
    /// # Example
    ///
    /// ```
    /// use diredge_types::{MeshTopology, Point3, TriangleSoup};
    ///
    /// let soup = TriangleSoup {
    ///     triangles: vec![
    ///         [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
    ///         [Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
    ///     ],
    /// };
    ///
    /// let mesh = soup.to_indexed();
    /// assert_eq!(mesh.vertex_count(), 4);
    /// assert_eq!(mesh.faces[1].vertices, [1, 3, 2]);
    /// ```
    #[must_use]
    pub fn to_indexed(&self) -> IndexedMesh {
        let mut mesh = IndexedMesh::with_capacity(self.triangles.len(), self.triangles.len());
        let mut seen: HashMap<[u64; 3], VertexId> = HashMap::new();

        for triangle in &self.triangles {
            let mut corners = [0; 3];
            for (slot, p) in corners.iter_mut().zip(triangle) {
                *slot = *seen
                    .entry(position_key(p))
                    .or_insert_with(|| mesh.push_vertex(*p));
            }
            mesh.push_face(corners);
        }

        mesh
    }
}

impl From<&IndexedMesh> for TriangleSoup {
    fn from(mesh: &IndexedMesh) -> Self {
        let triangles = mesh
            .faces
            .iter()
            .map(|f| f.vertices.map(|v| mesh.vertices[v as usize].position))
            .collect();
        Self { triangles }
    }
}

/// Hashable identity of a position.
fn position_key(p: &Point3<f64>) -> [u64; 3] {
    // Adding 0.0 folds -0.0 onto 0.0.
    [
        (p.x + 0.0).to_bits(),
        (p.y + 0.0).to_bits(),
        (p.z + 0.0).to_bits(),
    ]
}
