//! # OBJ Scene Host
//!
//! Writes each created object as a Wavefront OBJ file. Quads stay quads,
//! every vertex gets a `vn` normal from the face windings and explicit edges,
//! if any, become `l` elements.

use glam::DVec3;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use zdata_mesh::{vertex_normals, Face, MeshError, SceneHost};

/// Handle of an object written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjObject {
    pub name: String,
    pub path: PathBuf,
    pub vertex_count: usize,
    pub face_count: usize,
}

/// A scene host whose scene is a single OBJ file.
#[derive(Debug, Clone)]
pub struct ObjSceneHost {
    path: PathBuf,
}

impl ObjSceneHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SceneHost for ObjSceneHost {
    type Handle = ObjObject;

    fn create_mesh_object(
        &mut self,
        vertices: &[DVec3],
        edges: &[[u32; 2]],
        faces: &[Face],
        name: &str,
    ) -> Result<ObjObject, MeshError> {
        // Reject bad indices before the file is created
        check_indices(vertices.len(), edges, faces)?;
        let normals = vertex_normals(vertices, faces);

        let write_error =
            |e: io::Error| MeshError::host(format!("cannot write '{}': {}", self.path.display(), e));

        let file = File::create(&self.path).map_err(write_error)?;
        let mut w = BufWriter::new(file);
        write_obj(&mut w, vertices, &normals, edges, faces, name)
            .and_then(|_| w.flush())
            .map_err(write_error)?;

        Ok(ObjObject {
            name: name.to_string(),
            path: self.path.clone(),
            vertex_count: vertices.len(),
            face_count: faces.len(),
        })
    }
}

/// Writes one object in OBJ syntax (1-based indices).
///
/// `normals` is either empty or holds one normal per vertex; faces then
/// reference the normal of the same index.
pub fn write_obj<W: Write>(
    w: &mut W,
    vertices: &[DVec3],
    normals: &[DVec3],
    edges: &[[u32; 2]],
    faces: &[Face],
    name: &str,
) -> io::Result<()> {
    writeln!(w, "# z(x,y) surface")?;
    writeln!(w, "o {}", name)?;

    for v in vertices {
        writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
    }

    for n in normals {
        writeln!(w, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    for [a, b] in edges {
        writeln!(w, "l {} {}", a + 1, b + 1)?;
    }

    for face in faces {
        write!(w, "f")?;
        for index in face.indices() {
            if normals.is_empty() {
                write!(w, " {}", index + 1)?;
            } else {
                write!(w, " {0}//{0}", index + 1)?;
            }
        }
        writeln!(w)?;
    }

    Ok(())
}

fn check_indices(vertex_count: usize, edges: &[[u32; 2]], faces: &[Face]) -> Result<(), MeshError> {
    let out_of_range = |index: &u32| *index as usize >= vertex_count;

    if let Some(edge) = edges.iter().position(|edge| edge.iter().any(out_of_range)) {
        return Err(MeshError::host(format!(
            "edge {}: index out of bounds (vertices = {})",
            edge, vertex_count
        )));
    }
    if let Some(face) = faces.iter().position(|face| face.indices().iter().any(out_of_range)) {
        return Err(MeshError::host(format!(
            "face {}: index out of bounds (vertices = {})",
            face, vertex_count
        )));
    }
    Ok(())
}
