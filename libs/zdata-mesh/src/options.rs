//! # Surface Options
//!
//! The settings of one surface build: where the table lives, how lines are
//! linked and what the scene object is called.

use crate::error::MeshError;
use config::constants::{DEFAULT_FLIP, DEFAULT_LOOP, DEFAULT_OBJECT_NAME, DEFAULT_TRANSPOSE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Flags controlling vertex layout and face linking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// Join the last segment of each line pair back to the first
    pub closed: bool,
    /// Reverse every face winding
    pub flip: bool,
    /// Walk columns instead of rows and swap x with y
    pub transpose: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            closed: DEFAULT_LOOP,
            flip: DEFAULT_FLIP,
            transpose: DEFAULT_TRANSPOSE,
        }
    }
}

/// Full configuration of a surface build.
///
/// Deserializes from the same keys the surface operator exposes; anything
/// missing takes its default.
///
/// # Example
///
/// ```rust
/// use zdata_mesh::SurfaceConfig;
///
/// let config = SurfaceConfig::new("terrain.csv");
/// assert_eq!(config.name, "ZDataSurface");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Path of the z(x,y) table
    pub file_path: PathBuf,
    /// Loop closure
    #[serde(rename = "loop")]
    pub closed: bool,
    pub flip: bool,
    pub transpose: bool,
    /// Name of the scene object
    pub name: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::new(),
            closed: DEFAULT_LOOP,
            flip: DEFAULT_FLIP,
            transpose: DEFAULT_TRANSPOSE,
            name: DEFAULT_OBJECT_NAME.to_string(),
        }
    }
}

impl SurfaceConfig {
    /// Creates a default configuration for a table file.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Self::default()
        }
    }

    /// Checks the configuration before any file is touched.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.file_path.as_os_str().is_empty() {
            return Err(MeshError::invalid_config("no data file given"));
        }
        if self.name.trim().is_empty() {
            return Err(MeshError::invalid_config("object name must not be blank"));
        }
        Ok(())
    }

    /// Returns the layout and linking flags.
    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            closed: self.closed,
            flip: self.flip,
            transpose: self.transpose,
        }
    }
}
