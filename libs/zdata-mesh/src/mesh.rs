//! # Mesh Data Structure
//!
//! Surface mesh representation with vertices and polygon faces, plus vertex
//! normals derived from the face windings.

use crate::face::Face;
use config::constants::approx_zero;
use glam::DVec3;

/// A polygon mesh of triangles and quads.
///
/// Edges are never stored; they are implied by the faces.
///
/// # Example
///
/// ```rust
/// use zdata_mesh::{Face, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(Face::Quad([0, 1, 2, 3]));
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Faces in the order they were linked
    faces: Vec<Face>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    pub fn extend_faces(&mut self, faces: impl IntoIterator<Item = Face>) {
        self.faces.extend(faces);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Returns the explicit edge list, which is always empty.
    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &[]
    }

    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    #[inline]
    pub fn face(&self, index: usize) -> Face {
        self.faces[index]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - No face repeats a vertex
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.faces.iter().all(|face| {
            let indices = face.indices();
            indices.iter().all(|&index| index < vertex_count)
                && indices
                    .iter()
                    .enumerate()
                    .all(|(i, index)| !indices[i + 1..].contains(index))
        })
    }
}

/// Computes area-weighted vertex normals from face windings.
///
/// Quads use Newell's method so slightly non-planar samples still get a
/// stable normal. Vertices that no face touches keep a zero normal.
pub fn vertex_normals(vertices: &[DVec3], faces: &[Face]) -> Vec<DVec3> {
    let mut normals = vec![DVec3::ZERO; vertices.len()];

    for face in faces {
        let indices = face.indices();
        let mut normal = DVec3::ZERO;
        for (i, &current) in indices.iter().enumerate() {
            let next = indices[(i + 1) % indices.len()];
            let a = vertices[current as usize];
            let b = vertices[next as usize];
            normal += DVec3::new(
                (a.y - b.y) * (a.z + b.z),
                (a.z - b.z) * (a.x + b.x),
                (a.x - b.x) * (a.y + b.y),
            );
        }

        for &index in indices {
            normals[index as usize] += normal;
        }
    }

    // Normalize
    for normal in &mut normals {
        let len = normal.length();
        if !approx_zero(len) {
            *normal /= len;
        }
    }

    normals
}
