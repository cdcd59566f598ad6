//! Face corner addressing
//!
//! A face corner does not own a vertex. It selects one entry from each of the
//! three attribute arrays of a [`Mesh`](crate::Mesh), so a cube can share eight
//! positions across 24 corners while still giving every side its own normal.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use std::ops::{Deref, DerefMut};

/// One face corner: an index into each attribute array
///
/// Ordering is lexicographic on (position, uv, normal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct IndexTriple {
    /// Index into `Mesh::positions`
    pub position: usize,
    /// Index into `Mesh::uvs`
    pub uv: usize,
    /// Index into `Mesh::normals`
    pub normal: usize,
}

impl IndexTriple {
    /// Create a triple from its three components
    pub const fn new(position: usize, uv: usize, normal: usize) -> Self {
        Self {
            position,
            uv,
            normal,
        }
    }

    /// Triple whose three components are all `index`
    pub const fn uniform(index: usize) -> Self {
        Self::new(index, index, index)
    }

    /// Shift every component by the matching component of `by`
    pub const fn offset(self, by: IndexTriple) -> Self {
        Self::new(
            self.position + by.position,
            self.uv + by.uv,
            self.normal + by.normal,
        )
    }
}

/// A face: an ordered ring of at least three corners
///
/// Order defines winding; edge `i` runs from corner `i` to corner `(i + 1) % len`.
/// Triangles and quads are stored inline.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Loop(SmallVec<[IndexTriple; 4]>);

impl Loop {
    /// Build a face from corners in winding order
    pub fn new(corners: impl IntoIterator<Item = IndexTriple>) -> Self {
        let corners: SmallVec<[IndexTriple; 4]> = corners.into_iter().collect();
        debug_assert!(
            corners.len() >= 3,
            "face needs at least 3 corners, got {}",
            corners.len()
        );
        Self(corners)
    }

    /// Build a triangle
    pub fn triangle(a: IndexTriple, b: IndexTriple, c: IndexTriple) -> Self {
        Self(smallvec![a, b, c])
    }

    /// Build a quadrilateral
    pub fn quad(a: IndexTriple, b: IndexTriple, c: IndexTriple, d: IndexTriple) -> Self {
        Self(smallvec![a, b, c, d])
    }

    /// Corners in winding order
    pub fn corners(&self) -> &[IndexTriple] {
        &self.0
    }

    /// Directed edges `(corner_i, corner_{i+1})` in winding order, wrapping at the end
    pub fn edges(&self) -> impl Iterator<Item = (IndexTriple, IndexTriple)> + '_ {
        let len = self.0.len();
        (0..len).map(move |i| (self.0[i], self.0[(i + 1) % len]))
    }

    /// Whether this face has exactly three corners
    pub fn is_triangle(&self) -> bool {
        self.0.len() == 3
    }

    /// Flip the winding in place
    pub fn reverse(&mut self) {
        self.0.reverse();
    }
}

impl Deref for Loop {
    type Target = [IndexTriple];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Loop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<IndexTriple> for Loop {
    fn from_iter<I: IntoIterator<Item = IndexTriple>>(iter: I) -> Self {
        Self::new(iter)
    }
}
