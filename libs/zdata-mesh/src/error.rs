//! # Mesh Errors
//!
//! Error types for surface mesh generation.

use thiserror::Error;
use zdata_table::TableError;

/// Errors that can occur while building or handing off a surface mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The sample table could not be loaded
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Two vertex lines cannot be linked
    #[error("Unsupported grid shape: cannot link a line of {first} vertices to a line of {second}")]
    UnsupportedGridShape { first: usize, second: usize },

    /// There is nothing to build; not a corruption
    #[error("Nothing to build: {message}")]
    EmptyResult { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Configuration rejected before any work started
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The scene host refused the mesh
    #[error("Scene host failed: {message}")]
    Host { message: String },
}

impl MeshError {
    /// Creates an unsupported grid shape error.
    pub fn unsupported_shape(first: usize, second: usize) -> Self {
        Self::UnsupportedGridShape { first, second }
    }

    /// Creates an empty result error.
    pub fn empty_result(message: impl Into<String>) -> Self {
        Self::EmptyResult {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates a scene host error.
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }

    /// Returns true if the error only means there was nothing to build.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult { .. })
    }
}
