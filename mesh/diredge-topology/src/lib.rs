//! Directed-edge topology for triangle meshes.
//!
//! This crate provides:
//! - Directed-edge construction, with twins derived from scratch or taken
//!   from explicit records
//! - Navigation over the edge arrays (one-ring walks, boundary steps)
//! - Manifold validation (boundary, twin symmetry and pinch-point checks)
//! - Genus via connected components and Euler's formula
//! - Hole detection and centroid-fan filling
//!
//! All algorithms work on the packed edge layout of
//! [`diredge_types::DirectedEdgeMesh`]; traversal state lives in local
//! bitmaps, never on the records.
//!
//! # Example
//!
//! ```
//! use diredge_types::IndexedMesh;
//! use diredge_topology::{build_mesh, fill_holes, validate_mesh, BuildParams, ManifoldFailure, RepairParams};
//!
//! // Tetrahedron with one face missing.
//! let mesh = IndexedMesh::from_raw(
//!     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
//!     &[[0, 2, 1], [0, 1, 3], [1, 2, 3]],
//! );
//! let mut de = build_mesh(&mesh, &BuildParams::default()).unwrap();
//!
//! let report = validate_mesh(&de);
//! assert!(matches!(report.failure, Some(ManifoldFailure::BoundaryFound { .. })));
//!
//! fill_holes(&mut de, &RepairParams::default()).unwrap();
//! let report = validate_mesh(&de);
//! assert!(report.is_manifold());
//! assert_eq!(report.genus, Some(0));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod construct;
mod error;
pub mod genus;
pub mod holes;
pub mod navigate;
mod validate;

pub use construct::{
    assign_degrees, assign_first_directed_edges, assign_twins, build_mesh, directed_edges,
    from_records, pair_all_twins, pair_twins, BuildParams, TwinMatching,
};
pub use error::{CountKind, TopologyError, TopologyResult};
pub use validate::{
    check_twin_symmetry, validate_mesh, validate_mesh_with_options, validate_records,
    validate_records_with_options, ManifoldFailure, ManifoldReport, ValidationOptions,
};

pub use diredge_types::{face_of, next, prev};
pub use genus::{connected_components, total_genus, ComponentTopology};
pub use holes::{detect_holes, fill_holes, BoundaryLoop, HoleRepairSummary, RepairParams};
pub use navigate::{one_boundary_step, one_ring, RingWalk};
