//! Walks over the directed-edge arrays.
//!
//! Both walks rotate around the tail vertex of the start edge using
//! `current <- twin(prev(current))`: `prev(current)` enters the vertex, its
//! twin leaves it again on the neighbouring face. Walks are bounded by the
//! number of edges so that inconsistent twin data cannot loop forever.

use diredge_types::{prev, DirectedEdge, EdgeId};

/// Outcome of a one-ring walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingWalk {
    /// The walk came back to its start edge after `degree` steps.
    Closed {
        /// Number of faces passed, the local vertex degree.
        degree: usize,
    },
    /// The walk met `edge`, an edge without a twin.
    Boundary {
        /// The boundary edge that stopped the walk.
        edge: EdgeId,
    },
    /// The walk did not return to its start within the step bound.
    Unclosed,
}

impl RingWalk {
    /// Degree of a closed ring.
    #[inline]
    #[must_use]
    pub const fn degree(self) -> Option<usize> {
        match self {
            Self::Closed { degree } => Some(degree),
            _ => None,
        }
    }
}

/// Walk the one-ring around the tail of `start` and count its faces.
///
/// Returns [`RingWalk::Boundary`] instead of looping when an edge on the path
/// has no twin, and [`RingWalk::Unclosed`] if twins are inconsistent enough
/// that the walk never comes back.
///
/// # Example
///
/// ```
/// use diredge_types::IndexedMesh;
/// use diredge_topology::{build_mesh, one_ring, BuildParams, RingWalk};
///
/// let tet = IndexedMesh::from_raw(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
///     &[[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]],
/// );
/// let de = build_mesh(&tet, &BuildParams::default()).unwrap();
///
/// assert_eq!(one_ring(&de.edges, 0), RingWalk::Closed { degree: 3 });
/// ```
#[must_use]
pub fn one_ring(edges: &[DirectedEdge], start: EdgeId) -> RingWalk {
    if start as usize >= edges.len() {
        return RingWalk::Unclosed;
    }

    let mut current = start;
    let mut degree = 0;

    loop {
        let incoming = prev(current);
        let Some(twin) = edges[incoming as usize].twin else {
            return RingWalk::Boundary { edge: incoming };
        };
        if twin as usize >= edges.len() {
            return RingWalk::Unclosed;
        }

        current = twin;
        degree += 1;

        if current == start {
            return RingWalk::Closed { degree };
        }
        if degree > edges.len() {
            return RingWalk::Unclosed;
        }
    }
}

/// Rotate around the tail of `start` until an incoming edge without a twin is
/// found, and return that edge.
///
/// Started from a boundary edge, this returns the boundary edge that precedes
/// it along the same boundary loop. Returns `None` if the rotation closes (the
/// vertex is interior) or exceeds the step bound.
#[must_use]
pub fn one_boundary_step(edges: &[DirectedEdge], start: EdgeId) -> Option<EdgeId> {
    if start as usize >= edges.len() {
        return None;
    }

    let mut current = start;

    for _ in 0..=edges.len() {
        let incoming = prev(current);
        let twin = match edges[incoming as usize].twin {
            None => return Some(incoming),
            Some(t) if t as usize >= edges.len() => return None,
            Some(t) => t,
        };

        current = twin;
        if current == start {
            return None;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_mesh, BuildParams};
    use diredge_types::{DirectedEdgeMesh, IndexedMesh};

    fn build(positions: &[[f64; 3]], faces: &[[u32; 3]]) -> DirectedEdgeMesh {
        build_mesh(
            &IndexedMesh::from_raw(positions, faces),
            &BuildParams::default(),
        )
        .unwrap()
    }

    fn octahedron() -> DirectedEdgeMesh {
        build(
            &[
                [1.0, 0.0, 0.0],
                [-1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, -1.0, 0.0],
                [0.0, 0.0, 1.0],
                [0.0, 0.0, -1.0],
            ],
            &[
                [0, 2, 4],
                [2, 1, 4],
                [1, 3, 4],
                [3, 0, 4],
                [2, 0, 5],
                [1, 2, 5],
                [3, 1, 5],
                [0, 3, 5],
            ],
        )
    }

    /// Four triangles fanned around vertex 0, open on the outside.
    fn open_fan() -> DirectedEdgeMesh {
        build(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [-1.0, 0.0, 0.0],
                [0.0, -1.0, 0.0],
            ],
            &[[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 1]],
        )
    }

    #[test]
    fn ring_degree_matches_incidence_on_closed_mesh() {
        let de = octahedron();
        assert!(de.is_closed());
        for v in &de.vertices {
            let start = v.first_directed_edge.unwrap();
            assert_eq!(
                one_ring(&de.edges, start),
                RingWalk::Closed {
                    degree: v.degree as usize
                }
            );
        }
    }

    #[test]
    fn ring_walk_from_any_outgoing_edge() {
        let de = octahedron();
        for e in 0..de.edge_count() as u32 {
            assert_eq!(one_ring(&de.edges, e).degree(), Some(4));
        }
    }

    #[test]
    fn interior_vertex_of_closed_fan() {
        let mut de = open_fan();
        // Vertex 0 is interior: all four spokes are paired.
        let start = de.vertices[0].first_directed_edge.unwrap();
        assert_eq!(one_ring(&de.edges, start).degree(), Some(4));

        // Break one spoke: the walk reports the boundary instead of looping.
        let spoke = de.edges.iter().find(|e| e.twin.is_some()).unwrap().id;
        de.edges[spoke as usize].twin = None;
        assert!(matches!(
            one_ring(&de.edges, start),
            RingWalk::Boundary { .. }
        ));
    }

    #[test]
    fn rim_vertex_hits_boundary() {
        let de = open_fan();
        let start = de.vertices[1].first_directed_edge.unwrap();
        assert!(matches!(
            one_ring(&de.edges, start),
            RingWalk::Boundary { .. }
        ));
    }

    #[test]
    fn boundary_step_walks_rim_backwards() {
        let de = open_fan();
        // Rim edges: 1->2 (edge 2), 2->3 (edge 5), 3->4 (edge 8), 4->1 (edge 11).
        assert_eq!(one_boundary_step(&de.edges, 5), Some(2));
        assert_eq!(one_boundary_step(&de.edges, 2), Some(11));
        assert_eq!(one_boundary_step(&de.edges, 11), Some(8));
        assert_eq!(one_boundary_step(&de.edges, 8), Some(5));
    }

    #[test]
    fn boundary_step_on_closed_mesh_is_none() {
        let de = octahedron();
        assert_eq!(one_boundary_step(&de.edges, 0), None);
    }

    #[test]
    fn asymmetric_twins_do_not_hang() {
        let mut de = octahedron();
        for e in &mut de.edges {
            e.twin = Some(0);
        }
        assert_eq!(one_ring(&de.edges, 4), RingWalk::Unclosed);
        assert_eq!(one_boundary_step(&de.edges, 4), None);
    }

    #[test]
    fn out_of_range_start() {
        let de = octahedron();
        assert_eq!(one_ring(&de.edges, 1000), RingWalk::Unclosed);
        assert_eq!(one_boundary_step(&de.edges, 1000), None);
    }
}
