//! # Grid Mesh Builder
//!
//! Lays out one vertex per sample and links consecutive lines of vertices.
//!
//! ## Line Orientation
//!
//! Without transpose each data row (fixed y) is a line, so vertices run along
//! x and loop closure closes the surface in the x direction. With transpose
//! each column (fixed x) is a line and x and y swap places:
//!
//! ```text
//! transpose = false:  line v = (x[0], y[v], z), (x[1], y[v], z), ...
//! transpose = true:   line u = (y[0], x[u], z), (y[1], x[u], z), ...
//! ```
//!
//! Each new line is linked as the first row against the line before it. For
//! ascending axes this winds every unflipped face counter-clockwise seen from
//! above, so normals point to +z in both modes.

use crate::error::MeshError;
use crate::link::link_rows;
use crate::mesh::Mesh;
use crate::options::GridOptions;
use config::constants::MAX_VERTICES;
use glam::DVec3;
use tracing::debug;
use zdata_table::{SampleGrid, TableError};

/// Builds surface meshes from sample grids.
#[derive(Debug, Clone, Copy)]
pub struct GridMeshBuilder {
    options: GridOptions,
    max_vertices: usize,
}

impl Default for GridMeshBuilder {
    fn default() -> Self {
        Self::new(GridOptions::default())
    }
}

impl GridMeshBuilder {
    pub fn new(options: GridOptions) -> Self {
        Self {
            options,
            max_vertices: MAX_VERTICES,
        }
    }

    /// Replaces the `MAX_VERTICES` limit.
    pub fn with_vertex_limit(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Builds the surface mesh for a grid.
    ///
    /// # Errors
    ///
    /// - [`MeshError::EmptyResult`] if the grid has no samples
    /// - [`MeshError::TooManyVertices`] if the grid exceeds the vertex limit
    pub fn build(&self, grid: &SampleGrid) -> Result<Mesh, MeshError> {
        let GridOptions {
            closed,
            flip,
            transpose,
        } = self.options;

        let vertex_count = grid.u_count().saturating_mul(grid.v_count());
        if vertex_count == 0 {
            return Err(MeshError::empty_result(format!(
                "grid of {} columns and {} rows has no samples",
                grid.u_count(),
                grid.v_count()
            )));
        }
        if vertex_count > self.max_vertices {
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
                max: self.max_vertices,
            });
        }

        let (line_count, line_len) = if transpose {
            (grid.u_count(), grid.v_count())
        } else {
            (grid.v_count(), grid.u_count())
        };
        let faces_per_pair = if closed { line_len } else { line_len - 1 };
        let mut mesh = Mesh::with_capacity(vertex_count, (line_count - 1) * faces_per_pair);

        let mut previous: Option<Vec<u32>> = None;
        for line in 0..line_count {
            let mut current = Vec::with_capacity(line_len);
            for step in 0..line_len {
                let (u, v) = if transpose { (line, step) } else { (step, line) };
                let position = grid
                    .position(u, v, transpose)
                    .ok_or_else(|| TableError::ragged(format!("no sample at u = {}, v = {}", u, v)))?;
                current.push(mesh.add_vertex(DVec3::from_array(position)));
            }

            if let Some(previous) = &previous {
                mesh.extend_faces(link_rows(&current, previous, closed, flip)?);
            }
            previous = Some(current);
        }
        debug_assert!(mesh.validate());

        debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            closed,
            flip,
            transpose,
            "built surface mesh"
        );
        Ok(mesh)
    }
}
