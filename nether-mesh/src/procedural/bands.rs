//! Ring stitching shared by the parametric generators
//!
//! A parametric surface is a stack of rings. Positions and normals of a full
//! ring hold `samples` entries and wrap modulo `samples`; its texture
//! coordinates hold `samples + 1` entries because the seam column repeats
//! with U = 1.0. A pole is a single position and normal with `samples`
//! texture coordinates, one per adjacent triangle.

use glam::Vec3;
use std::f32::consts::TAU;

use crate::index::{IndexTriple, Loop};

use super::types::PolyType;

/// Cached sines and cosines of evenly spaced angles around a full turn
pub(super) struct AngleTable {
    pub sin: Vec<f32>,
    pub cos: Vec<f32>,
}

impl AngleTable {
    pub fn new(samples: usize) -> Self {
        let (sin, cos) = (0..samples)
            .map(|j| (j as f32 / samples as f32 * TAU).sin_cos())
            .unzip();
        Self { sin, cos }
    }

    /// U coordinate of seam-inclusive column `j` (0..=samples)
    pub fn u(&self, j: usize) -> f32 {
        j as f32 / self.sin.len() as f32
    }

    /// U coordinate of the pole texture coordinate under column `j`
    pub fn pole_u(&self, j: usize) -> f32 {
        (j as f32 + 0.5) / self.sin.len() as f32
    }

    /// Unit directions around the Y axis at the polar angle with this sine and cosine
    pub fn ring(&self, sin_phi: f32, cos_phi: f32) -> impl Iterator<Item = Vec3> + '_ {
        let columns = self.cos.iter().zip(&self.sin);
        columns.map(move |(c, s)| Vec3::new(sin_phi * c, cos_phi, -sin_phi * s))
    }
}

/// Where one ring's entries start in each attribute array
#[derive(Debug, Clone, Copy)]
pub(super) struct Ring {
    position: usize,
    uv: usize,
    normal: usize,
    pole: bool,
}

impl Ring {
    pub fn full(position: usize, uv: usize, normal: usize) -> Self {
        Self {
            position,
            uv,
            normal,
            pole: false,
        }
    }

    pub fn pole(position: usize, uv: usize, normal: usize) -> Self {
        Self {
            position,
            uv,
            normal,
            pole: true,
        }
    }

    /// Corner at column `j`; `j == samples` is the seam for texture coordinates
    fn corner(&self, j: usize, samples: usize) -> IndexTriple {
        if self.pole {
            IndexTriple::new(self.position, self.uv + j, self.normal)
        } else {
            let wrapped = j % samples;
            IndexTriple::new(self.position + wrapped, self.uv + j, self.normal + wrapped)
        }
    }
}

/// Emit the band of faces between two rings, `upper` first in winding
///
/// A cell is `(u[j], l[j], l[j+1], u[j+1])`; triangulated cells split along
/// `u[j]`-`l[j+1]`. Next to a pole the cell degenerates to a triangle.
pub(super) fn stitch(
    loops: &mut Vec<Loop>,
    upper: Ring,
    lower: Ring,
    samples: usize,
    poly: PolyType,
) {
    for j in 0..samples {
        let u0 = upper.corner(j, samples);
        let l0 = lower.corner(j, samples);

        if upper.pole {
            loops.push(Loop::triangle(u0, l0, lower.corner(j + 1, samples)));
        } else if lower.pole {
            loops.push(Loop::triangle(u0, l0, upper.corner(j + 1, samples)));
        } else {
            let l1 = lower.corner(j + 1, samples);
            let u1 = upper.corner(j + 1, samples);
            match poly {
                PolyType::Quads => loops.push(Loop::quad(u0, l0, l1, u1)),
                PolyType::Tris => {
                    loops.push(Loop::triangle(u0, l0, l1));
                    loops.push(Loop::triangle(u0, l1, u1));
                }
            }
        }
    }
}

/// Stitch every consecutive pair of rings, top to bottom
pub(super) fn stitch_all(loops: &mut Vec<Loop>, rings: &[Ring], samples: usize, poly: PolyType) {
    for pair in rings.windows(2) {
        stitch(loops, pair[0], pair[1], samples, poly);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_ring_wraps_positions_but_not_uvs() {
        let ring = Ring::full(10, 20, 30);
        assert_eq!(ring.corner(4, 4), IndexTriple::new(10, 24, 30));
        assert_eq!(ring.corner(1, 4), IndexTriple::new(11, 21, 31));
    }

    #[test]
    fn test_pole_shares_position_and_normal() {
        let pole = Ring::pole(0, 5, 7);
        assert_eq!(pole.corner(3, 4), IndexTriple::new(0, 8, 7));
    }

    #[test]
    fn test_stitch_counts() {
        let (top, bottom) = (Ring::full(0, 0, 0), Ring::full(6, 7, 6));
        let mut loops = Vec::new();
        stitch(&mut loops, top, bottom, 6, PolyType::Quads);
        assert_eq!(loops.len(), 6);
        assert!(loops.iter().all(|face| face.len() == 4));

        loops.clear();
        stitch(&mut loops, top, bottom, 6, PolyType::Tris);
        assert_eq!(loops.len(), 12);

        loops.clear();
        stitch(&mut loops, Ring::pole(0, 0, 0), bottom, 6, PolyType::Quads);
        assert_eq!(loops.len(), 6);
        assert!(loops.iter().all(Loop::is_triangle));
    }

    #[test]
    fn test_tris_share_quad_corners() {
        let (top, bottom) = (Ring::full(0, 0, 0), Ring::full(3, 4, 3));
        let mut quads = Vec::new();
        let mut tris = Vec::new();
        stitch(&mut quads, top, bottom, 3, PolyType::Quads);
        stitch(&mut tris, top, bottom, 3, PolyType::Tris);

        let quad = &quads[0];
        assert_eq!(tris[0].corners(), &[quad[0], quad[1], quad[2]]);
        assert_eq!(tris[1].corners(), &[quad[0], quad[2], quad[3]]);
    }

    #[test]
    fn test_angle_table() {
        let table = AngleTable::new(4);
        assert!((table.cos[1]).abs() < 1e-6);
        assert!((table.sin[1] - 1.0).abs() < 1e-6);
        assert_eq!(table.u(4), 1.0);
        assert_eq!(table.pole_u(0), 0.125);
    }

    #[test]
    fn test_ring_directions_are_unit_and_start_on_x() {
        let table = AngleTable::new(8);
        let ring: Vec<Vec3> = table.ring(1.0, 0.0).collect();
        assert_eq!(ring.len(), 8);
        assert!((ring[0] - Vec3::X).length() < 1e-6);
        assert!((ring[2] - Vec3::NEG_Z).length() < 1e-6);
        for direction in table.ring(0.6, 0.8) {
            assert!((direction.length() - 1.0).abs() < 1e-6);
        }
    }
}
