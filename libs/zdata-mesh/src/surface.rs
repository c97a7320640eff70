//! # Surface Orchestration
//!
//! Runs one surface build from configuration to scene object:
//!
//! ```text
//! SurfaceConfig → TableLoader → GridMeshBuilder → SceneHost::create_mesh_object
//! ```
//!
//! The host is called at most once, and only with a finished mesh. Any error
//! before that point leaves the scene untouched.

use crate::builder::GridMeshBuilder;
use crate::error::MeshError;
use crate::face::Face;
use crate::mesh::Mesh;
use crate::options::SurfaceConfig;
use glam::DVec3;
use tracing::info;
use zdata_table::TableLoader;

/// A 3D host that turns vertex and face lists into scene objects.
pub trait SceneHost {
    /// Addressable handle of a created object.
    type Handle;

    /// Creates and registers a mesh object.
    ///
    /// Faces list 3 or 4 vertex indices in winding order. The host may
    /// triangulate them.
    fn create_mesh_object(
        &mut self,
        vertices: &[DVec3],
        edges: &[[u32; 2]],
        faces: &[Face],
        name: &str,
    ) -> Result<Self::Handle, MeshError>;
}

/// Loads the configured table and builds its surface mesh.
///
/// # Errors
///
/// - [`MeshError::InvalidConfig`] if the configuration is rejected
/// - [`MeshError::Table`] if the table cannot be loaded
/// - [`MeshError::EmptyResult`] if the table holds no samples
pub fn build_surface(config: &SurfaceConfig) -> Result<Mesh, MeshError> {
    config.validate()?;

    let grid = TableLoader::load(&config.file_path)?;
    if grid.is_empty() {
        return Err(MeshError::empty_result(format!(
            "no usable data in '{}'",
            config.file_path.display()
        )));
    }
    if !grid.has_samples() {
        return Err(MeshError::empty_result(format!(
            "'{}' has an x axis but no data rows",
            config.file_path.display()
        )));
    }

    GridMeshBuilder::new(config.grid_options()).build(&grid)
}

/// Builds the configured surface and hands it to a scene host.
///
/// # Example
///
/// ```rust,ignore
/// let handle = add_surface(&SurfaceConfig::new("terrain.txt"), &mut host)?;
/// ```
pub fn add_surface<H: SceneHost>(config: &SurfaceConfig, host: &mut H) -> Result<H::Handle, MeshError> {
    let mesh = build_surface(config)?;

    let (min, max) = mesh.bounding_box();
    info!(
        name = %config.name,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        min = ?min,
        max = ?max,
        "creating surface object"
    );
    host.create_mesh_object(mesh.vertices(), mesh.edges(), mesh.faces(), &config.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Records every object it is asked to create.
    #[derive(Default)]
    struct RecordingHost {
        created: Vec<(usize, usize, usize, String)>,
    }

    impl SceneHost for RecordingHost {
        type Handle = usize;

        fn create_mesh_object(
            &mut self,
            vertices: &[DVec3],
            edges: &[[u32; 2]],
            faces: &[Face],
            name: &str,
        ) -> Result<usize, MeshError> {
            self.created
                .push((vertices.len(), edges.len(), faces.len(), name.to_string()));
            Ok(self.created.len() - 1)
        }
    }

    fn table_file(text: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_add_surface_example() {
        let file = table_file("1 2 3\n10 100 101 102\n20 200 201 202\n");
        let mut host = RecordingHost::default();

        let handle = add_surface(&SurfaceConfig::new(file.path()), &mut host).unwrap();
        assert_eq!(handle, 0);
        assert_eq!(host.created, vec![(6, 0, 2, "ZDataSurface".to_string())]);
    }

    #[test]
    fn test_add_surface_closed() {
        let file = table_file("1 2 3\n10 100 101 102\n20 200 201 202\n");
        let config = SurfaceConfig {
            closed: true,
            name: "Ring".to_string(),
            ..SurfaceConfig::new(file.path())
        };
        let mut host = RecordingHost::default();

        add_surface(&config, &mut host).unwrap();
        assert_eq!(host.created, vec![(6, 0, 3, "Ring".to_string())]);
    }

    #[test]
    fn test_add_surface_header_only_skips_host() {
        let file = table_file("1 2 3\n");
        let mut host = RecordingHost::default();

        let error = add_surface(&SurfaceConfig::new(file.path()), &mut host).unwrap_err();
        assert!(error.is_empty_result());
        assert!(host.created.is_empty());
    }

    #[test]
    fn test_add_surface_empty_file_skips_host() {
        let file = table_file("\n\n");
        let mut host = RecordingHost::default();

        let error = add_surface(&SurfaceConfig::new(file.path()), &mut host).unwrap_err();
        assert!(error.is_empty_result());
        assert!(host.created.is_empty());
    }

    #[test]
    fn test_add_surface_bad_table_skips_host() {
        let file = table_file("1 2 3\n10 100 101 102\n20 200 201\n");
        let mut host = RecordingHost::default();

        let error = add_surface(&SurfaceConfig::new(file.path()), &mut host).unwrap_err();
        assert!(matches!(error, MeshError::Table(ref e) if e.is_data_format()));
        assert!(host.created.is_empty());
    }

    #[test]
    fn test_add_surface_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut host = RecordingHost::default();

        let config = SurfaceConfig::new(dir.path().join("absent.txt"));
        let error = add_surface(&config, &mut host).unwrap_err();
        assert!(matches!(error, MeshError::Table(zdata_table::TableError::FileAccess { .. })));
        assert!(host.created.is_empty());
    }

    #[test]
    fn test_build_surface_invalid_config() {
        let error = build_surface(&SurfaceConfig::default()).unwrap_err();
        assert!(matches!(error, MeshError::InvalidConfig { .. }));
    }
}
