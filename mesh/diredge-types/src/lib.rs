//! Mesh records for directed-edge topology.
//!
//! This crate provides the plain data types shared by the rest of the
//! workspace:
//!
//! - [`Vertex`], [`Face`], [`DirectedEdge`] - records with dense, zero-based ids
//! - [`IndexedMesh`] - vertices plus faces (a `.face` file)
//! - [`DirectedEdgeRecords`] - vertices, faces and the raw first-edge / twin
//!   lists of a `.diredge` file
//! - [`DirectedEdgeMesh`] - the linked structure the topology algorithms run on
//! - [`TriangleSoup`] - unindexed triangles (a `.tri` file)
//!
//! # Edge layout
//!
//! The directed edges of face `f` are always `3f`, `3f + 1`, `3f + 2`, in the
//! order of the face's vertices, and edge `3f + k` points to
//! `faces[f].vertices[k]`. Navigation is pure arithmetic:
//!
//! ```
//! use diredge_types::{face_of, next, prev};
//!
//! assert_eq!(face_of(7), 2);
//! assert_eq!(next(8), 6);
//! assert_eq!(prev(6), 8);
//! ```
//!
//! # Coordinate System
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//! Positions are `f64` and unit-agnostic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod edge;
mod face;
mod mesh;
mod soup;
mod traits;
mod vertex;

/// Vertex identifier.
pub type VertexId = u32;

/// Face identifier.
pub type FaceId = u32;

/// Directed edge identifier.
pub type EdgeId = u32;

pub use edge::{face_of, next, prev, DirectedEdge, EDGES_PER_FACE};
pub use face::Face;
pub use mesh::{DirectedEdgeMesh, DirectedEdgeRecords, IndexedMesh};
pub use soup::TriangleSoup;
pub use traits::MeshTopology;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
