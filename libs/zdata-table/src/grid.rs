//! # Sample Grid
//!
//! The parsed form of a z(x,y) table.

use crate::error::TableError;

/// A rectangular table of samples `z[v][u] = f(x[u], y[v])`.
///
/// `u` indexes columns (x samples) and `v` indexes rows (y samples). Every
/// row of the z matrix holds exactly `u_count()` values. A grid may have an x
/// axis and no rows, which is what a header-only file produces.
///
/// # Example
///
/// ```rust
/// use zdata_table::SampleGrid;
///
/// let grid = SampleGrid::new(
///     vec![1.0, 2.0],
///     vec![10.0],
///     vec![vec![100.0, 101.0]],
/// ).unwrap();
/// assert_eq!(grid.sample(1, 0), Some(101.0));
/// assert_eq!(grid.position(1, 0, false), Some([2.0, 10.0, 101.0]));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleGrid {
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
    z_matrix: Vec<Vec<f64>>,
}

impl SampleGrid {
    /// Builds a grid, checking that the matrix matches both axes.
    pub fn new(
        x_axis: Vec<f64>,
        y_axis: Vec<f64>,
        z_matrix: Vec<Vec<f64>>,
    ) -> Result<Self, TableError> {
        if y_axis.len() != z_matrix.len() {
            return Err(TableError::ragged(format!(
                "{} y values but {} z rows",
                y_axis.len(),
                z_matrix.len()
            )));
        }

        if let Some((v, row)) = z_matrix
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != x_axis.len())
        {
            return Err(TableError::ragged(format!(
                "z row {} has {} samples, expected {}",
                v,
                row.len(),
                x_axis.len()
            )));
        }

        Ok(Self::from_parts(x_axis, y_axis, z_matrix))
    }

    /// Creates the grid with no axes and no samples.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assembles a grid whose shape the caller has already checked.
    pub(crate) fn from_parts(x_axis: Vec<f64>, y_axis: Vec<f64>, z_matrix: Vec<Vec<f64>>) -> Self {
        Self {
            x_axis,
            y_axis,
            z_matrix,
        }
    }

    /// Number of columns (x samples).
    #[inline]
    pub fn u_count(&self) -> usize {
        self.x_axis.len()
    }

    /// Number of rows (y samples).
    #[inline]
    pub fn v_count(&self) -> usize {
        self.y_axis.len()
    }

    /// Returns true if the table had no usable header line.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_axis.is_empty()
    }

    /// Returns true if the grid holds at least one sample.
    #[inline]
    pub fn has_samples(&self) -> bool {
        self.u_count() > 0 && self.v_count() > 0
    }

    #[inline]
    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    #[inline]
    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }

    #[inline]
    pub fn z_matrix(&self) -> &[Vec<f64>] {
        &self.z_matrix
    }

    /// Returns the x value of column `u`.
    pub fn x(&self, u: usize) -> Option<f64> {
        self.x_axis.get(u).copied()
    }

    /// Returns the y value of row `v`.
    pub fn y(&self, v: usize) -> Option<f64> {
        self.y_axis.get(v).copied()
    }

    /// Returns the sample at column `u`, row `v`.
    pub fn sample(&self, u: usize, v: usize) -> Option<f64> {
        self.z_matrix.get(v).and_then(|row| row.get(u)).copied()
    }

    /// Returns the 3D position of the sample at `(u, v)`.
    ///
    /// The position is `(x, y, z)`, or `(y, x, z)` when `transpose` is set.
    pub fn position(&self, u: usize, v: usize, transpose: bool) -> Option<[f64; 3]> {
        let x = self.x(u)?;
        let y = self.y(v)?;
        let z = self.sample(u, v)?;
        Some(if transpose { [y, x, z] } else { [x, y, z] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> SampleGrid {
        SampleGrid::new(
            vec![1.0, 2.0, 3.0],
            vec![10.0, 20.0],
            vec![vec![100.0, 101.0, 102.0], vec![200.0, 201.0, 202.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_grid_counts() {
        let grid = sample_grid();
        assert_eq!(grid.u_count(), 3);
        assert_eq!(grid.v_count(), 2);
        assert!(grid.has_samples());
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_grid_sample_lookup() {
        let grid = sample_grid();
        assert_eq!(grid.sample(0, 0), Some(100.0));
        assert_eq!(grid.sample(2, 1), Some(202.0));
        assert_eq!(grid.sample(3, 0), None);
        assert_eq!(grid.sample(0, 2), None);
    }

    #[test]
    fn test_grid_position_transpose() {
        let grid = sample_grid();
        assert_eq!(grid.position(2, 1, false), Some([3.0, 20.0, 202.0]));
        assert_eq!(grid.position(2, 1, true), Some([20.0, 3.0, 202.0]));
    }

    #[test]
    fn test_grid_rejects_short_row() {
        let result = SampleGrid::new(vec![1.0, 2.0], vec![10.0], vec![vec![100.0]]);
        assert!(matches!(result, Err(TableError::RaggedGrid { .. })));
    }

    #[test]
    fn test_grid_rejects_missing_y() {
        let result = SampleGrid::new(vec![1.0], vec![], vec![vec![100.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_grid_header_only() {
        let grid = SampleGrid::new(vec![1.0, 2.0], vec![], vec![]).unwrap();
        assert_eq!(grid.u_count(), 2);
        assert_eq!(grid.v_count(), 0);
        assert!(!grid.has_samples());
    }

    #[test]
    fn test_grid_empty() {
        let grid = SampleGrid::empty();
        assert!(grid.is_empty());
        assert!(!grid.has_samples());
        assert_eq!(grid.position(0, 0, false), None);
    }
}
