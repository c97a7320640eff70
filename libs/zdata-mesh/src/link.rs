//! # Line Linking
//!
//! Connects two parallel lines of vertex indices with a strip of faces.
//!
//! ```text
//! row1:  a0 ── a1 ── a2          fan:        a0
//!        │     │     │                     ╱  │  ╲
//! row2:  b0 ── b1 ── b2                  b0 ─ b1 ─ b2
//! ```
//!
//! Equal-length lines give one quad per segment. A first line of a single
//! vertex gives a fan of triangles around that apex. With `closed` set, one
//! more face joins the last segment back to the first, making a ring.

use crate::error::MeshError;
use crate::face::Face;

/// Links two lines of vertex indices into faces.
///
/// # Arguments
///
/// * `row1` - The first line (a single vertex selects fan mode)
/// * `row2` - The second line
/// * `closed` - Add a face joining the ends of both lines
/// * `flip` - Reverse the winding of every face
///
/// # Returns
///
/// `n - 1` faces for lines of `n` vertices, or `n` when `closed`. The closing
/// face comes first. An empty line, or two lines of fewer than two vertices,
/// give no faces.
///
/// # Errors
///
/// [`MeshError::UnsupportedGridShape`] if the lengths differ and `row1` is not
/// a single vertex.
///
/// # Example
///
/// ```rust
/// use zdata_mesh::{link_rows, Face};
///
/// let faces = link_rows(&[0, 1, 2], &[3, 4, 5], false, false).unwrap();
/// assert_eq!(faces, vec![Face::Quad([0, 3, 4, 1]), Face::Quad([1, 4, 5, 2])]);
/// ```
pub fn link_rows(row1: &[u32], row2: &[u32], closed: bool, flip: bool) -> Result<Vec<Face>, MeshError> {
    if row1.is_empty() || row2.is_empty() {
        return Ok(Vec::new());
    }

    if row1.len() < 2 && row2.len() < 2 {
        return Ok(Vec::new());
    }

    let fan = row1.len() != row2.len();
    if fan && row1.len() != 1 {
        return Err(MeshError::unsupported_shape(row1.len(), row2.len()));
    }

    let n = row2.len();
    let last = n - 1;
    let apex = row1[0];
    let mut faces = Vec::with_capacity(if closed { n } else { last });

    if closed {
        let face = match (fan, flip) {
            (false, false) => Face::Quad([row2[0], row1[0], row1[last], row2[last]]),
            (false, true) => Face::Quad([row1[0], row2[0], row2[last], row1[last]]),
            (true, false) => Face::Triangle([row2[0], apex, row2[last]]),
            (true, true) => Face::Triangle([apex, row2[0], row2[last]]),
        };
        faces.push(face);
    }

    for i in 0..last {
        let face = match (fan, flip) {
            (false, false) => Face::Quad([row1[i], row2[i], row2[i + 1], row1[i + 1]]),
            (false, true) => Face::Quad([row2[i], row1[i], row1[i + 1], row2[i + 1]]),
            (true, false) => Face::Triangle([apex, row2[i], row2[i + 1]]),
            (true, true) => Face::Triangle([row2[i], apex, row2[i + 1]]),
        };
        faces.push(face);
    }

    Ok(faces)
}
