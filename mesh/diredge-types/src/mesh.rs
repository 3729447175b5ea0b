//! Mesh containers: indexed faces, serialized directed-edge records and the
//! fully linked directed-edge mesh.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edge::{prev, DirectedEdge};
use crate::{EdgeId, Face, MeshTopology, Vertex, VertexId};

/// An indexed triangle mesh: vertices plus faces referencing them by id.
///
/// This is the content of a `.face` file, and the input to directed-edge
/// construction.
///
/// # Example
///
/// ```
/// use diredge_types::{IndexedMesh, MeshTopology};
///
/// let mut mesh = IndexedMesh::new();
/// let a = mesh.push_vertex([0.0, 0.0, 0.0].into());
/// let b = mesh.push_vertex([1.0, 0.0, 0.0].into());
/// let c = mesh.push_vertex([0.0, 1.0, 0.0].into());
/// mesh.push_face([a, b, c]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex records, `vertices[i].id == i`.
    pub vertices: Vec<Vertex>,

    /// Face records, `faces[i].id == i`.
    pub faces: Vec<Face>,
}

impl IndexedMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from raw positions and vertex-index triples.
    ///
    /// Ids are assigned densely in input order.
    ///
    /// ```
    /// use diredge_types::{IndexedMesh, MeshTopology};
    ///
    /// let mesh = IndexedMesh::from_raw(
    ///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    ///     &[[0, 1, 2]],
    /// );
    /// assert_eq!(mesh.faces[0].id, 0);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[[f64; 3]], faces: &[[VertexId; 3]]) -> Self {
        let mut mesh = Self::with_capacity(positions.len(), faces.len());
        for p in positions {
            mesh.push_vertex(Point3::new(p[0], p[1], p[2]));
        }
        for f in faces {
            mesh.push_face(*f);
        }
        mesh
    }

    /// Append a vertex and return its id.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: ids are u32, meshes with more than 4B vertices are unsupported
    pub fn push_vertex(&mut self, position: Point3<f64>) -> VertexId {
        let id = self.vertices.len() as VertexId;
        self.vertices.push(Vertex::new(id, position));
        id
    }

    /// Append a face and return its id.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: ids are u32, meshes with more than 4B faces are unsupported
    pub fn push_face(&mut self, vertices: [VertexId; 3]) -> u32 {
        let id = self.faces.len() as u32;
        self.faces.push(Face::new(id, vertices));
        id
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// The raw content of a `.diredge` file before any topology is linked.
///
/// `first_directed_edges[v]` and `twins[e]` are kept exactly as read, so
/// that their lengths can be checked against the vertex and edge counts.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectedEdgeRecords {
    /// Vertices and faces.
    pub mesh: IndexedMesh,

    /// `FirstDirectedEdge` entries, in vertex-id order.
    pub first_directed_edges: Vec<Option<EdgeId>>,

    /// `OtherHalf` entries, in edge-id order.
    pub twins: Vec<Option<EdgeId>>,
}

/// A triangle mesh with directed edges laid out in per-face triplets.
///
/// Built by the topology crate, either from scratch or from
/// [`DirectedEdgeRecords`]. `edges.len()` is always `3 * faces.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DirectedEdgeMesh {
    /// Vertex records, `vertices[i].id == i`.
    pub vertices: Vec<Vertex>,

    /// Face records, `faces[i].id == i`.
    pub faces: Vec<Face>,

    /// Directed edges, `edges[i].id == i`.
    pub edges: Vec<DirectedEdge>,
}

impl DirectedEdgeMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Number of directed edges.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Head vertex of edge `e`.
    ///
    /// # Panics
    ///
    /// Panics if `e` is not a valid edge id.
    #[inline]
    #[must_use]
    pub fn head(&self, e: EdgeId) -> VertexId {
        self.edges[e as usize].vertex
    }

    /// Tail vertex of edge `e` (the head of its predecessor in the face).
    ///
    /// # Panics
    ///
    /// Panics if `e` is not a valid edge id.
    #[inline]
    #[must_use]
    pub fn tail(&self, e: EdgeId) -> VertexId {
        self.edges[prev(e) as usize].vertex
    }

    /// Twin of edge `e`, if paired.
    #[inline]
    #[must_use]
    pub fn twin(&self, e: EdgeId) -> Option<EdgeId> {
        self.edges.get(e as usize).and_then(|edge| edge.twin)
    }

    /// Iterate over the ids of edges without a twin.
    pub fn boundary_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges
            .iter()
            .filter(|e| e.is_boundary())
            .map(|e| e.id)
    }

    /// Count edges without a twin.
    #[must_use]
    pub fn boundary_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_boundary()).count()
    }

    /// Whether every edge has a twin.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.edges.iter().all(|e| !e.is_boundary())
    }

    /// Copy out positions and faces, dropping all edge data.
    ///
    /// Vertices come back as freshly parsed ones would: no degree and no first
    /// directed edge.
    #[must_use]
    pub fn to_indexed(&self) -> IndexedMesh {
        IndexedMesh {
            vertices: self
                .vertices
                .iter()
                .map(|v| Vertex::new(v.id, v.position))
                .collect(),
            faces: self.faces.clone(),
        }
    }

    /// Serialize the linked topology back into flat records.
    #[must_use]
    pub fn to_records(&self) -> DirectedEdgeRecords {
        DirectedEdgeRecords {
            mesh: self.to_indexed(),
            first_directed_edges: self
                .vertices
                .iter()
                .map(|v| v.first_directed_edge)
                .collect(),
            twins: self.edges.iter().map(|e| e.twin).collect(),
        }
    }
}

impl MeshTopology for DirectedEdgeMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> DirectedEdgeMesh {
        let mesh = IndexedMesh::from_raw(
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            &[[0, 1, 2]],
        );
        DirectedEdgeMesh {
            vertices: mesh.vertices,
            faces: mesh.faces,
            edges: vec![
                DirectedEdge::new(0, 0),
                DirectedEdge::new(1, 1),
                DirectedEdge::new(2, 2),
            ],
        }
    }

    #[test]
    fn push_assigns_dense_ids() {
        let mut mesh = IndexedMesh::new();
        assert_eq!(mesh.push_vertex(Point3::origin()), 0);
        assert_eq!(mesh.push_vertex(Point3::origin()), 1);
        assert_eq!(mesh.push_face([0, 1, 0]), 0);
        assert_eq!(mesh.faces[0].id, 0);
    }

    #[test]
    fn head_and_tail() {
        let mesh = single_triangle();
        // Edge 0 points to vertex 0 and comes from vertex 2.
        assert_eq!(mesh.head(0), 0);
        assert_eq!(mesh.tail(0), 2);
        assert_eq!(mesh.tail(1), 0);
        assert_eq!(mesh.tail(2), 1);
    }

    #[test]
    fn open_triangle_is_all_boundary() {
        let mesh = single_triangle();
        assert_eq!(mesh.boundary_edge_count(), 3);
        assert!(!mesh.is_closed());
        assert_eq!(mesh.boundary_edges().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(mesh.twin(0), None);
        assert_eq!(mesh.twin(99), None);
    }

    #[test]
    fn records_mirror_topology() {
        let mut mesh = single_triangle();
        mesh.vertices[1].first_directed_edge = Some(2);
        let records = mesh.to_records();
        assert_eq!(records.twins, vec![None, None, None]);
        assert_eq!(records.first_directed_edges, vec![None, Some(2), None]);
        assert_eq!(records.mesh.face_count(), 1);
    }

    #[test]
    fn records_keep_topology_out_of_vertices() {
        let mut mesh = single_triangle();
        for (vertex, edge) in mesh.vertices.iter_mut().zip([1, 2, 0]) {
            vertex.degree = 1;
            vertex.first_directed_edge = Some(edge);
        }

        let records = mesh.to_records();
        assert_eq!(records.first_directed_edges, vec![Some(1), Some(2), Some(0)]);
        assert!(records
            .mesh
            .vertices
            .iter()
            .all(|v| v.degree == 0 && v.first_directed_edge.is_none()));
        assert_eq!(records.mesh.vertices[2].position, mesh.vertices[2].position);
    }
}
