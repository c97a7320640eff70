//! # Z-Data Table Loader
//!
//! Reads a plain-text table of samples `z = f(x, y)` into a [`SampleGrid`].
//!
//! ## Format
//!
//! ```text
//! 1   2   3          <- x axis
//! 10  100 101 102    <- y value, then one z per x
//! 20  200 201 202
//! ```
//!
//! Fields are separated by any run of characters that cannot be part of a
//! number, so whitespace, commas, semicolons and stray labels all work.
//!
//! ## Pipeline Integration
//!
//! ```text
//! zdata-table (SampleGrid) → zdata-mesh (Mesh) → scene host
//! ```
//!
//! ## Example
//!
//! ```rust
//! use zdata_table::TableLoader;
//!
//! let grid = TableLoader::parse_str("1 2 3\n10 100 101 102\n").unwrap();
//! assert_eq!(grid.u_count(), 3);
//! assert_eq!(grid.v_count(), 1);
//! assert_eq!(grid.z_matrix(), &[vec![100.0, 101.0, 102.0]]);
//! ```

pub mod error;
pub mod grid;
pub mod loader;
pub mod tokenizer;

// Re-export public API
pub use error::TableError;
pub use grid::SampleGrid;
pub use loader::TableLoader;
pub use tokenizer::tokenize;

use std::path::Path;

/// Loads a sample table from disk.
///
/// Shorthand for [`TableLoader::load`].
pub fn load(path: impl AsRef<Path>) -> Result<SampleGrid, TableError> {
    TableLoader::load(path)
}
