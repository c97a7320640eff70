//! # Configuration Constants
//!
//! Centralized constants for the z-data surface pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Surface Defaults**: Default operator settings (loop, flip, transpose, name)
//! - **Limits**: Maximum values for safety bounds
//! - **Output**: Export and logging defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// SURFACE DEFAULTS
// =============================================================================

/// Name given to the scene object when none is configured.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_OBJECT_NAME;
///
/// let user_name: Option<&str> = None;
/// assert_eq!(user_name.unwrap_or(DEFAULT_OBJECT_NAME), "ZDataSurface");
/// ```
pub const DEFAULT_OBJECT_NAME: &str = "ZDataSurface";

/// Whether the last segment of each line pair is joined back to the first.
pub const DEFAULT_LOOP: bool = false;

/// Whether face winding is reversed, flipping every normal.
pub const DEFAULT_FLIP: bool = false;

/// Whether x and y are swapped when placing vertices.
pub const DEFAULT_TRANSPOSE: bool = false;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single surface mesh.
///
/// Checked before any vertex is allocated so that a huge table fails fast
/// instead of exhausting memory.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let (columns, rows) = (1000, 1000);
/// assert!(columns * rows < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum size of a data table file (in bytes).
///
/// 100 MB default.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// File extension used for exported surfaces.
pub const OBJ_EXTENSION: &str = "obj";

/// Log level used by the command line tool when none is given.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
