//! Directed-edge construction and twin pairing.
//!
//! Every face contributes three directed edges in a fixed layout (see
//! [`diredge_types::next`]). Twins are either supplied explicitly (a
//! `.diredge` file already carries them) or derived from scratch by matching
//! edges that join the same two vertices in opposite directions.

use diredge_types::{
    prev, DirectedEdge, DirectedEdgeMesh, DirectedEdgeRecords, EdgeId, Face, IndexedMesh, Vertex,
    VertexId,
};
use hashbrown::HashMap;
use tracing::debug;

use crate::error::{CountKind, TopologyError, TopologyResult};

/// Strategy for finding twins among unpaired edges.
///
/// Both strategies produce the same pairing: each unpaired edge, in the
/// order given, takes the first still-unpaired edge running the opposite way
/// between the same two vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TwinMatching {
    /// Pairwise scan over the candidate edges.
    ///
    /// O(n²) in the number of candidates. This is the scaling bottleneck of
    /// construction once meshes grow past a few thousand faces.
    Scan,

    /// Hash the candidates by `(tail, head)` and look up the reverse key.
    ///
    /// O(n) expected.
    #[default]
    Indexed,
}

/// Configuration for building a directed-edge mesh from faces.
///
/// # Example
///
/// ```
/// use diredge_topology::{BuildParams, TwinMatching};
///
/// let params = BuildParams::default().with_twin_matching(TwinMatching::Scan);
/// assert_eq!(params.twin_matching, TwinMatching::Scan);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildParams {
    /// How twins are matched.
    ///
    /// Default: [`TwinMatching::Indexed`]
    pub twin_matching: TwinMatching,
}

impl BuildParams {
    /// Set the twin matching strategy.
    #[must_use]
    pub fn with_twin_matching(mut self, matching: TwinMatching) -> Self {
        self.twin_matching = matching;
        self
    }
}

/// Lay out three unpaired directed edges per face.
///
/// Edge `3f + k` points to `faces[f].vertices[k]`.
///
/// # Errors
///
/// Returns [`TopologyError::MalformedTopology`] if a face references a vertex
/// id `>= vertex_count`.
///
/// # Example
///
/// ```
/// use diredge_types::Face;
/// use diredge_topology::directed_edges;
///
/// let edges = directed_edges(&[Face::new(0, [4, 5, 6])], 7).unwrap();
/// assert_eq!(edges.len(), 3);
/// assert_eq!(edges[1].vertex, 5);
/// assert!(edges.iter().all(|e| e.twin.is_none()));
/// ```
#[allow(clippy::cast_possible_truncation)]
// Truncation: edge ids are u32, meshes with more than ~1.4B faces are unsupported
pub fn directed_edges(faces: &[Face], vertex_count: usize) -> TopologyResult<Vec<DirectedEdge>> {
    let mut edges = Vec::with_capacity(faces.len() * 3);

    for (f, face) in faces.iter().enumerate() {
        for &v in &face.vertices {
            if v as usize >= vertex_count {
                return Err(TopologyError::MalformedTopology {
                    face: f as u32,
                    vertex: v,
                    vertex_count,
                });
            }
            let id = edges.len() as EdgeId;
            edges.push(DirectedEdge::new(id, v));
        }
    }

    Ok(edges)
}

/// Tail vertex of `e` within a full edge array.
#[inline]
fn tail(edges: &[DirectedEdge], e: EdgeId) -> VertexId {
    edges[prev(e) as usize].vertex
}

/// Pair twins among `candidates` using the given strategy.
///
/// Already paired candidates are skipped. Candidates that find no partner
/// stay on the boundary. Returns the number of pairs created.
///
/// `edges` must be the complete edge array (`edges[i].id == i`), since tails
/// are read from each candidate's predecessor.
pub fn pair_twins(
    edges: &mut [DirectedEdge],
    candidates: &[EdgeId],
    matching: TwinMatching,
) -> usize {
    let pairs = match matching {
        TwinMatching::Scan => pair_by_scan(edges, candidates),
        TwinMatching::Indexed => pair_by_index(edges, candidates),
    };
    debug!(
        "Paired {} twins among {} candidate edges ({:?})",
        pairs,
        candidates.len(),
        matching
    );
    pairs
}

/// Pair every unpaired edge of the array.
pub fn pair_all_twins(edges: &mut [DirectedEdge], matching: TwinMatching) -> usize {
    let candidates: Vec<EdgeId> = edges
        .iter()
        .filter(|e| e.is_boundary())
        .map(|e| e.id)
        .collect();
    pair_twins(edges, &candidates, matching)
}

fn pair_by_scan(edges: &mut [DirectedEdge], candidates: &[EdgeId]) -> usize {
    let mut pairs = 0;

    for &d1 in candidates {
        if edges[d1 as usize].twin.is_some() {
            continue;
        }
        let (from, to) = (tail(edges, d1), edges[d1 as usize].vertex);

        for &d2 in candidates {
            if d2 == d1 || edges[d2 as usize].twin.is_some() {
                continue;
            }
            if edges[d2 as usize].vertex == from && tail(edges, d2) == to {
                edges[d1 as usize].twin = Some(d2);
                edges[d2 as usize].twin = Some(d1);
                pairs += 1;
                break;
            }
        }
    }

    pairs
}

fn pair_by_index(edges: &mut [DirectedEdge], candidates: &[EdgeId]) -> usize {
    let mut by_endpoints: HashMap<(VertexId, VertexId), Vec<EdgeId>> = HashMap::new();
    for &e in candidates {
        if edges[e as usize].twin.is_none() {
            by_endpoints
                .entry((tail(edges, e), edges[e as usize].vertex))
                .or_default()
                .push(e);
        }
    }

    let mut pairs = 0;

    for &d1 in candidates {
        if edges[d1 as usize].twin.is_some() {
            continue;
        }
        let reverse = (edges[d1 as usize].vertex, tail(edges, d1));
        let Some(opposite) = by_endpoints.get(&reverse) else {
            continue;
        };
        let partner = opposite
            .iter()
            .copied()
            .find(|&d2| d2 != d1 && edges[d2 as usize].twin.is_none());

        if let Some(d2) = partner {
            edges[d1 as usize].twin = Some(d2);
            edges[d2 as usize].twin = Some(d1);
            pairs += 1;
        }
    }

    pairs
}

/// Assign twins from an explicit list, one entry per edge.
///
/// Symmetry of the supplied pairing is not checked here; see
/// [`crate::check_twin_symmetry`].
///
/// # Errors
///
/// - [`TopologyError::CountMismatch`] if `twins.len() != edges.len()`
/// - [`TopologyError::EdgeOutOfRange`] if an entry names a missing edge
pub fn assign_twins(edges: &mut [DirectedEdge], twins: &[Option<EdgeId>]) -> TopologyResult<()> {
    if twins.len() != edges.len() {
        return Err(TopologyError::CountMismatch {
            kind: CountKind::Twins,
            expected: edges.len(),
            actual: twins.len(),
        });
    }

    let edge_count = edges.len();
    for (index, (edge, &twin)) in edges.iter_mut().zip(twins).enumerate() {
        if let Some(t) = twin {
            if t as usize >= edge_count {
                return Err(TopologyError::EdgeOutOfRange {
                    kind: CountKind::Twins,
                    index,
                    edge: t,
                    edge_count,
                });
            }
        }
        edge.twin = twin;
    }

    Ok(())
}

/// Count face references per vertex into `Vertex::degree`.
pub fn assign_degrees(vertices: &mut [Vertex], faces: &[Face]) {
    for v in vertices.iter_mut() {
        v.degree = 0;
    }
    for face in faces {
        for &v in &face.vertices {
            if let Some(vertex) = vertices.get_mut(v as usize) {
                vertex.degree += 1;
            }
        }
    }
}

/// Give every vertex its lowest-id outgoing edge as first directed edge.
///
/// Vertices that no face references keep `None`.
pub fn assign_first_directed_edges(mesh: &mut DirectedEdgeMesh) {
    for v in &mut mesh.vertices {
        v.first_directed_edge = None;
    }
    for e in 0..mesh.edges.len() {
        #[allow(clippy::cast_possible_truncation)]
        let e = e as EdgeId;
        let from = mesh.tail(e) as usize;
        if let Some(vertex) = mesh.vertices.get_mut(from) {
            vertex.first_directed_edge.get_or_insert(e);
        }
    }
}

/// Build a directed-edge mesh from scratch: edges, twins, degrees and first
/// directed edges.
///
/// # Errors
///
/// Returns [`TopologyError::MalformedTopology`] if a face references a
/// missing vertex.
///
/// # Example
///
/// ```
/// use diredge_types::IndexedMesh;
/// use diredge_topology::{build_mesh, BuildParams};
///
/// let mesh = IndexedMesh::from_raw(
///     &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
///     &[[0, 1, 2], [1, 3, 2]],
/// );
/// let de = build_mesh(&mesh, &BuildParams::default()).unwrap();
///
/// // The shared edge 1-2 is paired; the other four are boundary.
/// assert_eq!(de.boundary_edge_count(), 4);
/// // Edge 2 runs 1 -> 2, edge 3 runs 2 -> 1.
/// assert_eq!(de.twin(2), Some(3));
/// assert_eq!(de.twin(3), Some(2));
/// ```
pub fn build_mesh(mesh: &IndexedMesh, params: &BuildParams) -> TopologyResult<DirectedEdgeMesh> {
    let edges = directed_edges(&mesh.faces, mesh.vertices.len())?;

    let mut de = DirectedEdgeMesh {
        vertices: mesh.vertices.clone(),
        faces: mesh.faces.clone(),
        edges,
    };

    let pairs = pair_all_twins(&mut de.edges, params.twin_matching);
    assign_degrees(&mut de.vertices, &de.faces);
    assign_first_directed_edges(&mut de);

    debug!(
        "Built {} directed edges for {} faces, {} twin pairs, {} boundary edges",
        de.edges.len(),
        de.faces.len(),
        pairs,
        de.boundary_edge_count()
    );

    Ok(de)
}

/// Link a directed-edge mesh from explicit `.diredge` records.
///
/// Twins and first directed edges are taken as given; degrees are recounted
/// from the faces.
///
/// # Errors
///
/// - [`TopologyError::MalformedTopology`] if a face references a missing vertex
/// - [`TopologyError::CountMismatch`] if the twin list length differs from the
///   edge count, or the first-directed-edge list length from the vertex count
/// - [`TopologyError::EdgeOutOfRange`] if any entry names a missing edge
pub fn from_records(records: &DirectedEdgeRecords) -> TopologyResult<DirectedEdgeMesh> {
    let mesh = &records.mesh;
    let mut edges = directed_edges(&mesh.faces, mesh.vertices.len())?;
    assign_twins(&mut edges, &records.twins)?;

    let edge_count = edges.len();
    let mut vertices = mesh.vertices.clone();
    if records.first_directed_edges.len() != vertices.len() {
        return Err(TopologyError::CountMismatch {
            kind: CountKind::FirstDirectedEdges,
            expected: vertices.len(),
            actual: records.first_directed_edges.len(),
        });
    }
    for (index, (vertex, &fde)) in vertices
        .iter_mut()
        .zip(&records.first_directed_edges)
        .enumerate()
    {
        if let Some(e) = fde {
            if e as usize >= edge_count {
                return Err(TopologyError::EdgeOutOfRange {
                    kind: CountKind::FirstDirectedEdges,
                    index,
                    edge: e,
                    edge_count,
                });
            }
        }
        vertex.first_directed_edge = fde;
    }
    assign_degrees(&mut vertices, &mesh.faces);

    Ok(DirectedEdgeMesh {
        vertices,
        faces: mesh.faces.clone(),
        edges,
    })
}
