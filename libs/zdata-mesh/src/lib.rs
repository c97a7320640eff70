//! # Z-Data Mesh
//!
//! Turns a [`SampleGrid`](zdata_table::SampleGrid) into a quad mesh.
//!
//! ## Architecture
//!
//! ```text
//! zdata-table (SampleGrid) → GridMeshBuilder → Mesh → SceneHost
//!                                  │
//!                                  └── link_rows (per pair of lines)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use zdata_mesh::{GridMeshBuilder, GridOptions};
//! use zdata_table::TableLoader;
//!
//! let grid = TableLoader::parse_str("1 2 3\n10 100 101 102\n20 200 201 202\n").unwrap();
//! let mesh = GridMeshBuilder::new(GridOptions::default()).build(&grid).unwrap();
//! assert_eq!(mesh.vertex_count(), 6);
//! assert_eq!(mesh.face_count(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod face;
pub mod link;
pub mod mesh;
pub mod options;
pub mod surface;

pub use builder::GridMeshBuilder;
pub use error::MeshError;
pub use face::Face;
pub use link::link_rows;
pub use mesh::{vertex_normals, Mesh};
pub use options::{GridOptions, SurfaceConfig};
pub use surface::{add_surface, build_surface, SceneHost};
