//! Hole detection and centroid-fan filling.
//!
//! A hole is a closed loop of directed edges without twins. Loops are traced
//! with [`one_boundary_step`], which follows a boundary backwards: each step
//! yields the boundary edge ending where the current one starts.
//!
//! Filling a hole appends one vertex at the centroid of the loop and one
//! triangle per loop edge, then pairs the new edges with each other and with
//! the loop. Nothing is removed or renumbered.
//!
//! # Example
//!
//! ```
//! use diredge_types::IndexedMesh;
//! use diredge_topology::{build_mesh, detect_holes, fill_holes, BuildParams, RepairParams};
//!
//! // A single triangle is one hole of three edges.
//! let mesh = IndexedMesh::from_raw(
//!     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
//!     &[[0, 1, 2]],
//! );
//! let mut de = build_mesh(&mesh, &BuildParams::default()).unwrap();
//! assert_eq!(detect_holes(&de).unwrap()[0].edge_count(), 3);
//!
//! let summary = fill_holes(&mut de, &RepairParams::default()).unwrap();
//! assert_eq!(summary.holes_filled, 1);
//! assert!(de.is_closed());
//! ```

use diredge_types::{
    DirectedEdge, DirectedEdgeMesh, EdgeId, Face, FaceId, Point3, Vector3, Vertex, VertexId,
};
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::construct::{pair_twins, TwinMatching};
use crate::error::{TopologyError, TopologyResult};
use crate::navigate::one_boundary_step;
use crate::validate::check_twin_symmetry;

/// A closed loop of boundary edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryLoop {
    /// Edge ids in trace order. Each edge ends where the previous one
    /// starts; the edge the trace started from comes last.
    pub edges: Vec<EdgeId>,
}

impl BoundaryLoop {
    /// Number of edges in the loop.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Configuration for hole repair.
///
/// # Example
///
/// ```
/// use diredge_topology::{RepairParams, TwinMatching};
///
/// let params = RepairParams::default()
///     .with_max_hole_edges(64)
///     .with_twin_matching(TwinMatching::Scan);
/// assert_eq!(params.max_hole_edges, Some(64));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RepairParams {
    /// How new edges are paired.
    ///
    /// Default: [`TwinMatching::Indexed`]
    pub twin_matching: TwinMatching,

    /// Loops with more edges than this are left open.
    ///
    /// Default: None (fill every hole)
    pub max_hole_edges: Option<usize>,
}

impl RepairParams {
    /// Set the twin matching strategy.
    #[must_use]
    pub fn with_twin_matching(mut self, matching: TwinMatching) -> Self {
        self.twin_matching = matching;
        self
    }

    /// Only fill holes with at most `max` edges.
    #[must_use]
    pub fn with_max_hole_edges(mut self, max: usize) -> Self {
        self.max_hole_edges = Some(max);
        self
    }
}

/// What [`fill_holes`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HoleRepairSummary {
    /// Number of holes patched.
    pub holes_filled: usize,
    /// Edge counts of loops left open because of `max_hole_edges`.
    pub skipped: Vec<usize>,
    /// Centroid vertices appended.
    pub vertices_added: usize,
    /// Fan faces appended.
    pub faces_added: usize,
}

/// Trace every boundary loop, in order of each loop's lowest boundary edge.
///
/// # Errors
///
/// Returns [`TopologyError::OpenBoundaryWalk`] if a trace cannot continue or
/// does not return to its start edge.
pub fn detect_holes(mesh: &DirectedEdgeMesh) -> TopologyResult<Vec<BoundaryLoop>> {
    let edge_count = mesh.edges.len();
    let mut traced = vec![false; edge_count];
    let mut loops = Vec::new();

    for start in mesh.boundary_edges() {
        if traced[start as usize] {
            continue;
        }

        let mut edges = Vec::new();
        let mut current = start;
        loop {
            let step = one_boundary_step(&mesh.edges, current)
                .ok_or(TopologyError::OpenBoundaryWalk { edge: start })?;
            if edges.len() >= edge_count || (traced[step as usize] && step != start) {
                return Err(TopologyError::OpenBoundaryWalk { edge: start });
            }
            traced[step as usize] = true;
            edges.push(step);
            if step == start {
                break;
            }
            current = step;
        }

        loops.push(BoundaryLoop { edges });
    }

    if !loops.is_empty() {
        debug!(
            "Detected {} boundary loops, sizes: {:?}",
            loops.len(),
            loops.iter().map(BoundaryLoop::edge_count).collect::<Vec<_>>()
        );
    }

    Ok(loops)
}

/// Fill every hole with a centroid fan.
///
/// Loops are detected up front and filled in discovery order. Loops longer
/// than `params.max_hole_edges` are skipped and left open.
///
/// # Errors
///
/// Fails before modifying the mesh with:
/// - [`TopologyError::TwinInconsistency`] if the input pairing is asymmetric
/// - [`TopologyError::OpenBoundaryWalk`] if a loop cannot be traced
/// - [`TopologyError::SharedBoundaryVertex`] if a vertex ends more than one
///   boundary edge
///
/// and with [`TopologyError::IncompleteRepair`] if an edge of a patched hole
/// is still unpaired afterwards.
pub fn fill_holes(
    mesh: &mut DirectedEdgeMesh,
    params: &RepairParams,
) -> TopologyResult<HoleRepairSummary> {
    if let Some(edge) = check_twin_symmetry(&mesh.edges) {
        let twin = mesh.edges[edge as usize].twin.unwrap_or(edge);
        return Err(TopologyError::TwinInconsistency { edge, twin });
    }

    let loops = detect_holes(mesh)?;
    check_shared_vertices(mesh, &loops)?;

    let mut summary = HoleRepairSummary::default();

    for hole in &loops {
        if let Some(max) = params.max_hole_edges {
            if hole.edge_count() > max {
                warn!(
                    "Skipping hole with {} edges (max: {})",
                    hole.edge_count(),
                    max
                );
                summary.skipped.push(hole.edge_count());
                continue;
            }
        }

        let faces_before = mesh.faces.len();
        fill_hole(mesh, hole, params.twin_matching)?;
        summary.holes_filled += 1;
        summary.vertices_added += 1;
        summary.faces_added += mesh.faces.len() - faces_before;
    }

    info!(
        "Filled {} holes ({} faces added), skipped {}",
        summary.holes_filled,
        summary.faces_added,
        summary.skipped.len()
    );

    Ok(summary)
}

fn check_shared_vertices(mesh: &DirectedEdgeMesh, loops: &[BoundaryLoop]) -> TopologyResult<()> {
    let mut ends_boundary = vec![false; mesh.vertices.len()];
    for &e in loops.iter().flat_map(|l| &l.edges) {
        let v = mesh.head(e);
        if std::mem::replace(&mut ends_boundary[v as usize], true) {
            return Err(TopologyError::SharedBoundaryVertex { vertex: v });
        }
    }
    Ok(())
}

/// Patch one hole: centroid vertex, one face per loop edge, local pairing.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
// Truncation: ids are u32
fn fill_hole(
    mesh: &mut DirectedEdgeMesh,
    hole: &BoundaryLoop,
    matching: TwinMatching,
) -> TopologyResult<()> {
    let sum: Vector3<f64> = hole
        .edges
        .iter()
        .map(|&e| mesh.vertices[mesh.head(e) as usize].position.coords)
        .sum();
    let centroid = Point3::from(sum / hole.edges.len() as f64);

    let c = mesh.vertices.len() as VertexId;
    mesh.vertices.push(Vertex::new(c, centroid));

    let first_new = mesh.edges.len() as EdgeId;
    for &h in &hole.edges {
        let face = Face::new(
            mesh.faces.len() as FaceId,
            [mesh.tail(h), c, mesh.head(h)],
        );
        for (id, v) in face.edges().into_iter().zip(face.vertices) {
            mesh.edges.push(DirectedEdge::new(id, v));
            mesh.vertices[v as usize].degree += 1;
        }
        mesh.faces.push(face);
    }
    let end = mesh.edges.len() as EdgeId;

    let candidates: Vec<EdgeId> = hole.edges.iter().copied().chain(first_new..end).collect();
    pair_twins(&mut mesh.edges, &candidates, matching);

    let spoke = (first_new..end).find(|&e| mesh.tail(e) == c);
    mesh.vertices[c as usize].first_directed_edge = spoke;

    // Not reachable for loops that passed the symmetry and shared-vertex
    // checks: each loop edge t -> h meets the fan edge h -> t of its own face,
    // and each spoke c -> h meets the spoke h -> c of the one loop edge leaving
    // h. Kept so that a broken pairing surfaces as an error.
    if let Some(&edge) = candidates.iter().find(|&&e| mesh.edges[e as usize].is_boundary()) {
        return Err(TopologyError::IncompleteRepair { edge });
    }

    debug!(
        "Filled hole of {} edges with centroid vertex {} at {:?}",
        hole.edge_count(),
        c,
        centroid
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_mesh, validate_mesh, BuildParams};
    use approx::assert_relative_eq;
    use diredge_types::IndexedMesh;

    const CUBE_POSITIONS: [[f64; 3]; 8] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ];

    const CUBE_SIDES: [[u32; 3]; 8] = [
        [0, 1, 5],
        [0, 5, 4],
        [1, 2, 6],
        [1, 6, 5],
        [2, 3, 7],
        [2, 7, 6],
        [3, 0, 4],
        [3, 4, 7],
    ];

    fn open_box() -> DirectedEdgeMesh {
        let mut faces = vec![[0, 2, 1], [0, 3, 2]];
        faces.extend(CUBE_SIDES);
        build_mesh(
            &IndexedMesh::from_raw(&CUBE_POSITIONS, &faces),
            &BuildParams::default(),
        )
        .unwrap()
    }

    fn tube() -> DirectedEdgeMesh {
        build_mesh(
            &IndexedMesh::from_raw(&CUBE_POSITIONS, &CUBE_SIDES),
            &BuildParams::default(),
        )
        .unwrap()
    }

    #[test]
    fn open_box_has_one_square_hole() {
        let de = open_box();
        let holes = detect_holes(&de).unwrap();
        assert_eq!(holes.len(), 1);
        assert_eq!(holes[0].edge_count(), 4);

        // Each edge ends where the previous one starts.
        let edges = &holes[0].edges;
        for pair in edges.windows(2) {
            assert_eq!(de.head(pair[1]), de.tail(pair[0]));
        }
        let mut heads: Vec<_> = edges.iter().map(|&e| de.head(e)).collect();
        heads.sort_unstable();
        assert_eq!(heads, vec![4, 5, 6, 7]);
    }

    #[test]
    fn closed_mesh_has_no_holes() {
        let mut faces = vec![[0, 2, 1], [0, 3, 2], [4, 5, 6], [4, 6, 7]];
        faces.extend(CUBE_SIDES);
        let de = build_mesh(
            &IndexedMesh::from_raw(&CUBE_POSITIONS, &faces),
            &BuildParams::default(),
        )
        .unwrap();
        assert!(detect_holes(&de).unwrap().is_empty());
    }

    #[test]
    fn filling_open_box_closes_it() {
        let mut de = open_box();
        let summary = fill_holes(&mut de, &RepairParams::default()).unwrap();

        assert_eq!(summary.holes_filled, 1);
        assert_eq!(summary.vertices_added, 1);
        assert_eq!(summary.faces_added, 4);
        assert_eq!(de.vertices.len(), 9);
        assert_eq!(de.faces.len(), 14);
        assert_eq!(de.edges.len(), 42);
        assert!(de.is_closed());

        let centroid = &de.vertices[8];
        assert_relative_eq!(centroid.position, Point3::new(0.5, 0.5, 1.0));
        assert_eq!(centroid.degree, 4);
        let fde = centroid.first_directed_edge.unwrap();
        assert_eq!(de.tail(fde), 8);
        for face in &de.faces[10..] {
            assert_eq!(face.vertices[1], 8);
            for (e, v) in face.edges().into_iter().zip(face.vertices) {
                assert_eq!(de.edges[e as usize].id, e);
                assert_eq!(de.head(e), v);
            }
        }
        // Three side faces plus two fan faces each.
        for v in 4..8 {
            assert_eq!(de.vertices[v].degree, 5);
        }

        let report = validate_mesh(&de);
        assert!(report.is_manifold(), "{report}");
        assert_eq!(report.genus, Some(0));
    }

    #[test]
    fn filling_tube_patches_both_ends() {
        let mut de = tube();
        assert_eq!(detect_holes(&de).unwrap().len(), 2);

        let summary = fill_holes(&mut de, &RepairParams::default()).unwrap();
        assert_eq!(summary.holes_filled, 2);
        assert_eq!(de.vertices.len(), 10);
        assert_eq!(de.faces.len(), 16);

        let report = validate_mesh(&de);
        assert!(report.is_manifold());
        assert_eq!(report.genus, Some(0));
    }

    #[test]
    fn scan_matching_gives_same_repair() {
        let mut indexed = open_box();
        let mut scan = open_box();
        fill_holes(&mut indexed, &RepairParams::default()).unwrap();
        fill_holes(
            &mut scan,
            &RepairParams::default().with_twin_matching(TwinMatching::Scan),
        )
        .unwrap();
        assert_eq!(indexed, scan);
    }

    #[test]
    fn single_triangle_becomes_closed() {
        let mut de = build_mesh(
            &IndexedMesh::from_raw(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], &[[0, 1, 2]]),
            &BuildParams::default(),
        )
        .unwrap();
        fill_holes(&mut de, &RepairParams::default()).unwrap();
        assert_eq!(de.faces.len(), 4);
        let report = validate_mesh(&de);
        assert!(report.is_manifold());
        assert_eq!(report.genus, Some(0));
    }

    #[test]
    fn large_holes_are_skipped() {
        let mut de = open_box();
        let before = de.clone();
        let summary =
            fill_holes(&mut de, &RepairParams::default().with_max_hole_edges(3)).unwrap();
        assert_eq!(summary.holes_filled, 0);
        assert_eq!(summary.skipped, vec![4]);
        assert_eq!(de, before);
    }

    #[test]
    fn shared_boundary_vertex_fails_without_changes() {
        // Two triangles touching only at vertex 0.
        let mut de = build_mesh(
            &IndexedMesh::from_raw(&[[0.0; 3]; 5], &[[0, 1, 2], [0, 3, 4]]),
            &BuildParams::default(),
        )
        .unwrap();
        let before = de.clone();
        assert_eq!(
            fill_holes(&mut de, &RepairParams::default()).unwrap_err(),
            TopologyError::SharedBoundaryVertex { vertex: 0 }
        );
        assert_eq!(de, before);
    }

    #[test]
    fn asymmetric_input_is_rejected() {
        let mut de = open_box();
        let twin = de.edges.iter().find_map(|e| e.twin).unwrap();
        de.edges[twin as usize].twin = None;
        assert!(matches!(
            fill_holes(&mut de, &RepairParams::default()),
            Err(TopologyError::TwinInconsistency { .. })
        ));
    }

    #[test]
    fn closed_mesh_is_left_alone() {
        let mut faces = vec![[0, 2, 1], [0, 3, 2], [4, 5, 6], [4, 6, 7]];
        faces.extend(CUBE_SIDES);
        let mut de = build_mesh(
            &IndexedMesh::from_raw(&CUBE_POSITIONS, &faces),
            &BuildParams::default(),
        )
        .unwrap();
        let summary = fill_holes(&mut de, &RepairParams::default()).unwrap();
        assert_eq!(summary, HoleRepairSummary::default());
        assert_eq!(de.faces.len(), 12);
    }
}
