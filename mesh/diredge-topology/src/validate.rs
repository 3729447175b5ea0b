//! Manifold validation.
//!
//! Checks run in a fixed order and the first failure short-circuits:
//!
//! 1. record counts (an error, see [`validate_records`])
//! 2. boundary: every edge has a twin
//! 3. twin symmetry: `twin(twin(e)) == e`
//! 4. pinch points: every vertex's one-ring closes with `degree` faces
//!
//! Manifold failures are results, not errors: they come back inside a
//! [`ManifoldReport`].

use std::fmt;

use diredge_types::{DirectedEdge, DirectedEdgeMesh, DirectedEdgeRecords, EdgeId, VertexId};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::construct::from_records;
use crate::error::TopologyResult;
use crate::genus::{connected_components, total_genus};
use crate::navigate::{one_ring, RingWalk};

/// Why a mesh is not a closed manifold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ManifoldFailure {
    /// An edge has no twin; the mesh is open.
    BoundaryFound {
        /// First boundary edge in id order.
        edge: EdgeId,
    },
    /// An edge's twin does not point back at it.
    TwinInconsistency {
        /// First asymmetric edge in id order.
        edge: EdgeId,
    },
    /// A vertex's one-ring does not account for all of its faces.
    PinchPoint {
        /// First offending vertex in id order.
        vertex: VertexId,
    },
}

impl fmt::Display for ManifoldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundaryFound { edge } => write!(f, "<BOUNDARY TEST FAILED> on Edge: {edge}"),
            Self::TwinInconsistency { edge } => write!(f, "<TWIN TEST FAILED> on Edge: {edge}"),
            Self::PinchPoint { vertex } => write!(f, "<PINCH TEST FAILED> on Vertex: {vertex}"),
        }
    }
}

/// Outcome of validating one mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ManifoldReport {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of faces.
    pub face_count: usize,
    /// Number of directed edges.
    pub edge_count: usize,
    /// The first failed check, `None` for a closed manifold.
    pub failure: Option<ManifoldFailure>,
    /// Total genus summed over components.
    ///
    /// Computed whenever the boundary and twin checks pass, so a pinch-point
    /// report may still carry a value; only trust it when
    /// [`is_manifold`](Self::is_manifold) holds. `None` if not computed or not
    /// integral.
    pub genus: Option<i64>,
    /// Number of connected components found by the genus walk.
    pub components: usize,
}

impl ManifoldReport {
    /// Whether every check passed.
    #[must_use]
    pub const fn is_manifold(&self) -> bool {
        self.failure.is_none()
    }
}

impl fmt::Display for ManifoldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.failure, self.genus) {
            (None, Some(genus)) => write!(f, "Manifold: YES\nGenus: {genus}"),
            (None, None) => write!(f, "Manifold: YES"),
            (Some(failure), _) => write!(f, "Manifold: NO\n{failure}"),
        }
    }
}

/// Options for [`validate_mesh_with_options`].
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Run the component walk and compute genus.
    ///
    /// Default: true
    pub compute_genus: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            compute_genus: true,
        }
    }
}

impl ValidationOptions {
    /// Only run the manifold checks.
    #[must_use]
    pub const fn checks_only() -> Self {
        Self {
            compute_genus: false,
        }
    }

    /// Set whether genus is computed.
    #[must_use]
    pub const fn with_compute_genus(mut self, compute: bool) -> Self {
        self.compute_genus = compute;
        self
    }
}

/// First edge whose twin does not name it back.
///
/// Boundary edges are skipped. A twin outside the edge array counts as
/// asymmetric.
#[must_use]
pub fn check_twin_symmetry(edges: &[DirectedEdge]) -> Option<EdgeId> {
    edges.iter().find_map(|edge| {
        let twin = edge.twin?;
        let back = edges.get(twin as usize).and_then(|t| t.twin);
        (back != Some(edge.id)).then_some(edge.id)
    })
}

/// Validate a linked mesh with default options.
///
/// # Example
///
/// ```
/// use diredge_types::IndexedMesh;
/// use diredge_topology::{build_mesh, validate_mesh, BuildParams};
///
/// let tet = IndexedMesh::from_raw(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
///     &[[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]],
/// );
/// let report = validate_mesh(&build_mesh(&tet, &BuildParams::default()).unwrap());
///
/// assert!(report.is_manifold());
/// assert_eq!(report.genus, Some(0));
/// ```
#[must_use]
pub fn validate_mesh(mesh: &DirectedEdgeMesh) -> ManifoldReport {
    validate_mesh_with_options(mesh, &ValidationOptions::default())
}

/// Validate a linked mesh.
#[must_use]
pub fn validate_mesh_with_options(
    mesh: &DirectedEdgeMesh,
    options: &ValidationOptions,
) -> ManifoldReport {
    let mut report = ManifoldReport {
        vertex_count: mesh.vertices.len(),
        face_count: mesh.faces.len(),
        edge_count: mesh.edges.len(),
        failure: None,
        genus: None,
        components: 0,
    };

    if let Some(edge) = mesh.boundary_edges().next() {
        report.failure = Some(ManifoldFailure::BoundaryFound { edge });
        debug!("Boundary edge {} found", edge);
        return report;
    }

    if let Some(edge) = check_twin_symmetry(&mesh.edges) {
        report.failure = Some(ManifoldFailure::TwinInconsistency { edge });
        debug!("Asymmetric twin at edge {}", edge);
        return report;
    }

    report.failure = find_pinch_point(mesh).map(|vertex| ManifoldFailure::PinchPoint { vertex });

    if options.compute_genus {
        let components = connected_components(mesh);
        report.components = components.len();
        report.genus = total_genus(&components);
    }

    debug!(
        "Validated {} vertices, {} faces: manifold={}, genus={:?}",
        report.vertex_count,
        report.face_count,
        report.is_manifold(),
        report.genus
    );

    report
}

/// First vertex whose ring walk does not close with exactly `degree` faces.
fn find_pinch_point(mesh: &DirectedEdgeMesh) -> Option<VertexId> {
    mesh.vertices.iter().find_map(|v| {
        let closes = v.first_directed_edge.is_some_and(|start| {
            one_ring(&mesh.edges, start) == RingWalk::Closed {
                degree: v.degree as usize,
            }
        });
        (!closes).then_some(v.id)
    })
}

/// Link `.diredge` records and validate them.
///
/// # Errors
///
/// Returns [`CountMismatch`](crate::TopologyError::CountMismatch) when the twin or first-edge list
/// disagrees with the mesh, and the other construction errors of
/// [`from_records`](crate::from_records).
pub fn validate_records(records: &DirectedEdgeRecords) -> TopologyResult<ManifoldReport> {
    validate_records_with_options(records, &ValidationOptions::default())
}

/// [`validate_records`] with explicit options.
///
/// # Errors
///
/// See [`validate_records`].
pub fn validate_records_with_options(
    records: &DirectedEdgeRecords,
    options: &ValidationOptions,
) -> TopologyResult<ManifoldReport> {
    let mesh = from_records(records)?;
    Ok(validate_mesh_with_options(&mesh, options))
}
