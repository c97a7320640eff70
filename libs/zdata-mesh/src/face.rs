//! # Faces
//!
//! Triangles and quads of vertex indices. The listed order is the winding:
//! the normal follows the right-hand rule over it.

/// A mesh face of three or four vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Three vertices, produced where a line collapses to a single apex
    Triangle([u32; 3]),
    /// Four vertices spanning two segments of two lines
    Quad([u32; 4]),
}

impl Face {
    /// Returns the vertex indices in winding order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        match self {
            Face::Triangle(indices) => indices.as_slice(),
            Face::Quad(indices) => indices.as_slice(),
        }
    }

    /// Returns the number of vertices (3 or 4).
    #[inline]
    pub fn len(&self) -> usize {
        self.indices().len()
    }

    /// Always false; a face has at least three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn is_quad(&self) -> bool {
        matches!(self, Face::Quad(_))
    }

    /// Returns the same face with the opposite winding.
    pub fn reversed(&self) -> Face {
        match *self {
            Face::Triangle([a, b, c]) => Face::Triangle([c, b, a]),
            Face::Quad([a, b, c, d]) => Face::Quad([d, c, b, a]),
        }
    }
}

impl From<[u32; 3]> for Face {
    fn from(indices: [u32; 3]) -> Self {
        Face::Triangle(indices)
    }
}

impl From<[u32; 4]> for Face {
    fn from(indices: [u32; 4]) -> Self {
        Face::Quad(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_len() {
        assert_eq!(Face::from([0, 1, 2]).len(), 3);
        assert_eq!(Face::from([0, 1, 2, 3]).len(), 4);
        assert!(Face::from([0, 1, 2, 3]).is_quad());
    }

    #[test]
    fn test_face_reversed() {
        assert_eq!(Face::from([0, 1, 2]).reversed(), Face::from([2, 1, 0]));
        assert_eq!(Face::from([0, 1, 2, 3]).reversed().indices(), &[3, 2, 1, 0]);
    }
}
