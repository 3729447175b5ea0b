//! Connected components and genus via Euler's formula.

use std::collections::VecDeque;

use diredge_types::{face_of, prev, DirectedEdgeMesh, VertexId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertex and face counts of one connected component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentTopology {
    /// Vertices reached by the component walk.
    pub vertices: usize,
    /// Faces reached by the component walk.
    pub faces: usize,
}

impl ComponentTopology {
    /// Euler characteristic `V - E + F` with `E = 3F/2`.
    ///
    /// `None` if the face count is odd, which no closed triangulated surface
    /// has.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn euler_characteristic(&self) -> Option<i64> {
        if self.faces % 2 != 0 {
            return None;
        }
        let v = self.vertices as i64;
        let f = self.faces as i64;
        Some(v - 3 * f / 2 + f)
    }

    /// Genus contribution `1 - χ/2`, i.e. `(4 - 2V + F) / 4`.
    ///
    /// `None` when the contribution is not an integer.
    ///
    /// ```
    /// use diredge_topology::ComponentTopology;
    ///
    /// let tetrahedron = ComponentTopology { vertices: 4, faces: 4 };
    /// assert_eq!(tetrahedron.genus(), Some(0));
    ///
    /// let torus = ComponentTopology { vertices: 9, faces: 18 };
    /// assert_eq!(torus.genus(), Some(1));
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn genus(&self) -> Option<i64> {
        let numerator = 4 - 2 * self.vertices as i64 + self.faces as i64;
        (numerator % 4 == 0).then_some(numerator / 4)
    }
}

/// Sum of the genus contributions of all components.
///
/// `None` if any component has no integral genus.
#[must_use]
pub fn total_genus(components: &[ComponentTopology]) -> Option<i64> {
    components.iter().map(ComponentTopology::genus).sum()
}

/// Partition the mesh into connected components by breadth-first search
/// over vertex one-rings.
///
/// Each dequeued vertex walks its ring from its first directed edge, marking
/// the faces it passes and enqueuing the vertices those edges point to.
/// Vertices without a first directed edge belong to no component. Walks stop
/// early at boundary edges, so on open meshes the counts cover only what the
/// rings reach; the counts are meant for closed meshes with symmetric twins.
#[must_use]
pub fn connected_components(mesh: &DirectedEdgeMesh) -> Vec<ComponentTopology> {
    let edge_count = mesh.edges.len();
    let mut vertex_seen = vec![false; mesh.vertices.len()];
    let mut face_seen = vec![false; mesh.faces.len()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for seed in &mesh.vertices {
        if vertex_seen[seed.id as usize] || seed.first_directed_edge.is_none() {
            continue;
        }

        let mut component = ComponentTopology::default();
        vertex_seen[seed.id as usize] = true;
        queue.push_back(seed.id);

        while let Some(v) = queue.pop_front() {
            component.vertices += 1;

            let Some(start) = mesh.vertices[v as usize].first_directed_edge else {
                continue;
            };
            if start as usize >= edge_count {
                continue;
            }

            let mut current = start;
            for _ in 0..edge_count {
                let incoming = prev(current);
                let face = face_of(incoming) as usize;
                if !face_seen[face] {
                    face_seen[face] = true;
                    component.faces += 1;
                }

                match mesh.edges[incoming as usize].twin {
                    Some(t) if (t as usize) < edge_count => current = t,
                    _ => break,
                }

                let neighbour: VertexId = mesh.edges[current as usize].vertex;
                if !vertex_seen[neighbour as usize] {
                    vertex_seen[neighbour as usize] = true;
                    queue.push_back(neighbour);
                }

                if current == start {
                    break;
                }
            }
        }

        components.push(component);
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_mesh, BuildParams};
    use diredge_types::IndexedMesh;

    fn tetrahedron_faces(offset: u32) -> Vec<[u32; 3]> {
        [[0, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]]
            .iter()
            .map(|f| f.map(|v| v + offset))
            .collect()
    }

    fn torus_3x3() -> IndexedMesh {
        let mut positions = Vec::new();
        for i in 0..3 {
            for j in 0..3 {
                positions.push([f64::from(i), f64::from(j), 0.0]);
            }
        }
        let id = |i: u32, j: u32| (i % 3) * 3 + (j % 3);
        let mut faces = Vec::new();
        for i in 0..3 {
            for j in 0..3 {
                let (a, b, c, d) = (id(i, j), id(i + 1, j), id(i + 1, j + 1), id(i, j + 1));
                faces.push([a, b, c]);
                faces.push([a, c, d]);
            }
        }
        IndexedMesh::from_raw(&positions, &faces)
    }

    #[test]
    fn tetrahedron_is_one_sphere() {
        let mesh = IndexedMesh::from_raw(&[[0.0; 3]; 4], &tetrahedron_faces(0));
        let de = build_mesh(&mesh, &BuildParams::default()).unwrap();
        let components = connected_components(&de);
        assert_eq!(
            components,
            vec![ComponentTopology {
                vertices: 4,
                faces: 4
            }]
        );
        assert_eq!(components[0].euler_characteristic(), Some(2));
        assert_eq!(total_genus(&components), Some(0));
    }

    #[test]
    fn torus_has_genus_one() {
        let de = build_mesh(&torus_3x3(), &BuildParams::default()).unwrap();
        assert!(de.is_closed());
        let components = connected_components(&de);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].euler_characteristic(), Some(0));
        assert_eq!(total_genus(&components), Some(1));
    }

    #[test]
    fn disjoint_components_are_summed() {
        let mut faces = tetrahedron_faces(0);
        faces.extend(tetrahedron_faces(4));
        let mesh = IndexedMesh::from_raw(&[[0.0; 3]; 8], &faces);
        let de = build_mesh(&mesh, &BuildParams::default()).unwrap();
        let components = connected_components(&de);
        assert_eq!(components.len(), 2);
        assert_eq!(total_genus(&components), Some(0));

        let mut torus = torus_3x3();
        let base = u32::try_from(torus.vertices.len()).unwrap();
        let second = torus_3x3();
        for v in &second.vertices {
            torus.push_vertex(v.position);
        }
        for f in &second.faces {
            torus.push_face(f.vertices.map(|v| v + base));
        }
        let de = build_mesh(&torus, &BuildParams::default()).unwrap();
        assert_eq!(total_genus(&connected_components(&de)), Some(2));
    }

    #[test]
    fn unreferenced_vertices_are_ignored() {
        let mut mesh = IndexedMesh::from_raw(&[[0.0; 3]; 4], &tetrahedron_faces(0));
        mesh.push_vertex([9.0, 9.0, 9.0].into());
        let de = build_mesh(&mesh, &BuildParams::default()).unwrap();
        assert_eq!(connected_components(&de).len(), 1);
    }

    #[test]
    fn non_integral_genus_is_none() {
        let odd = ComponentTopology {
            vertices: 3,
            faces: 4,
        };
        assert_eq!(odd.genus(), None);
        assert_eq!(
            total_genus(&[
                ComponentTopology {
                    vertices: 4,
                    faces: 4
                },
                odd
            ]),
            None
        );
        assert_eq!(
            ComponentTopology {
                vertices: 3,
                faces: 1
            }
            .euler_characteristic(),
            None
        );
    }

    #[test]
    fn empty_mesh_has_no_components() {
        let de = DirectedEdgeMesh::new();
        assert!(connected_components(&de).is_empty());
        assert_eq!(total_genus(&[]), Some(0));
    }
}
