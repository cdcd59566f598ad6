//! Face refinement
//!
//! Three ways to split a face, each appending new attribute entries and
//! replacing the face with several smaller ones in the same winding:
//!
//! - **Fan**: one centroid, a triangle per edge `(center, c[j], c[j+1])`
//! - **Center**: centroid plus edge midpoints, a quad per edge
//!   `(center, mid[j], c[j+1], mid[j+1])`
//! - **Inscribe**: edge midpoints only, a corner triangle per edge
//!   `(mid[j], c[j+1], mid[j+1])` plus one face through all midpoints
//!
//! New entries are never shared between faces. Midpoints are computed as
//! `(a + b) * 0.5`, which is symmetric in its operands, so the two faces on
//! either side of an edge produce identical values and `clean` merges them.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::index::{IndexTriple, Loop};
use crate::mesh::Mesh;

/// Face refinement strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subdivision {
    /// Triangle fan around the centroid
    Fan,
    /// Quads between the centroid and edge midpoints
    Center,
    /// Corner triangles around an inner face of edge midpoints
    Inscribe,
}

type Corners = SmallVec<[IndexTriple; 8]>;

impl Mesh {
    /// Replace face `face` with its refinement, keeping it at the same position
    /// in the face list
    ///
    /// # Panics
    /// If `face` is not a valid face index.
    pub fn subdivide_face(&mut self, face: usize, method: Subdivision) {
        let replacement = self.refine(face, method);
        self.loops.splice(face..=face, replacement);
    }

    /// Fan-split one face around its centroid
    pub fn subdivide_fan(&mut self, face: usize) {
        self.subdivide_face(face, Subdivision::Fan);
    }

    /// Quad-split one face through its centroid and edge midpoints
    pub fn subdivide_center(&mut self, face: usize) {
        self.subdivide_face(face, Subdivision::Center);
    }

    /// Split one face into corner triangles and an inscribed midpoint face
    pub fn subdivide_inscribe(&mut self, face: usize) {
        self.subdivide_face(face, Subdivision::Inscribe);
    }

    /// Refine every face, `iterations` times
    ///
    /// Each pass refines every face that existed when the pass started exactly
    /// once, then swaps in the new face list.
    pub fn subdivide(&mut self, method: Subdivision, iterations: u32) {
        for _ in 0..iterations {
            let face_count = self.loops.len();
            let mut refined = Vec::with_capacity(face_count * 4);
            for face in 0..face_count {
                refined.extend(self.refine(face, method));
            }
            self.loops = refined;
        }

        debug!(
            "subdivide {:?} x{}: {} faces, {} positions",
            method,
            iterations,
            self.loops.len(),
            self.positions.len()
        );
    }

    /// Append the new entries for one face and return its replacement faces
    fn refine(&mut self, face: usize, method: Subdivision) -> SmallVec<[Loop; 8]> {
        let corners: Corners = self.loops[face].iter().copied().collect();
        let len = corners.len();

        match method {
            Subdivision::Fan => {
                let center = self.push_centroid(&corners);
                (0..len)
                    .map(|j| Loop::triangle(center, corners[j], corners[(j + 1) % len]))
                    .collect()
            }
            Subdivision::Center => {
                let center = self.push_centroid(&corners);
                let mids = self.push_midpoints(&corners);
                (0..len)
                    .map(|j| {
                        let next = (j + 1) % len;
                        Loop::quad(center, mids[j], corners[next], mids[next])
                    })
                    .collect()
            }
            Subdivision::Inscribe => {
                let mids = self.push_midpoints(&corners);
                let mut faces: SmallVec<[Loop; 8]> = (0..len)
                    .map(|j| {
                        let next = (j + 1) % len;
                        Loop::triangle(mids[j], corners[next], mids[next])
                    })
                    .collect();
                faces.push(Loop::new(mids));
                faces
            }
        }
    }

    /// Append the mean position, uv and normal of a face
    fn push_centroid(&mut self, corners: &[IndexTriple]) -> IndexTriple {
        let (position, uv, normal) = corners.iter().fold(
            (Vec3::ZERO, Vec2::ZERO, Vec3::ZERO),
            |(p, t, n), &c| (p + self.position(c), t + self.uv(c), n + self.normal(c)),
        );
        let inv = 1.0 / corners.len() as f32;
        self.push_corner(position * inv, uv * inv, normal.normalize_or_zero())
    }

    /// Append one midpoint per edge, `mids[j]` lying between `corners[j]` and `corners[j + 1]`
    fn push_midpoints(&mut self, corners: &[IndexTriple]) -> Corners {
        let len = corners.len();
        (0..len)
            .map(|j| {
                let (a, b) = (corners[j], corners[(j + 1) % len]);
                let position = (self.position(a) + self.position(b)) * 0.5;
                let uv = (self.uv(a) + self.uv(b)) * 0.5;
                let normal = (self.normal(a) + self.normal(b)).normalize_or_zero();
                self.push_corner(position, uv, normal)
            })
            .collect()
    }
}
