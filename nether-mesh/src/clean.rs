//! Welding: drop unreferenced attribute entries and merge near-equal ones
//!
//! Values are compared after quantization to a fixed number of fractional
//! bits. Two entries merge only when they round to the same quantized value,
//! so corners that share a position but differ in normal (hard edges) stay apart.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::index::{IndexTriple, Loop};
use crate::mesh::Mesh;

/// Upper bound on `CleanOptions::precision_bits`
pub const MAX_PRECISION_BITS: u32 = 40;

/// Weld tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Fractional bits kept before comparing (16 = steps of 1/65536), clamped to 0..=40
    pub precision_bits: u32,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self { precision_bits: 16 }
    }
}

impl CleanOptions {
    /// Multiplier applied to each component before rounding
    pub fn scale(&self) -> f64 {
        (1u64 << self.precision_bits.min(MAX_PRECISION_BITS)) as f64
    }
}

/// Fixed-point image of an N-component vector, totally ordered
///
/// Equality and ordering both act on the rounded integers, so a sorted
/// `Vec<Quantized<N>>` supports binary search with the same notion of
/// "equal" used to merge entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantized<const N: usize>(pub [i64; N]);

impl<const N: usize> Quantized<N> {
    /// Round each component to the nearest multiple of `1 / scale`
    ///
    /// NaN components take the largest key, so a NaN never merges with a
    /// finite value that rounds into range.
    pub fn new(components: [f32; N], scale: f64) -> Self {
        Self(components.map(|c| quantize(c, scale)))
    }
}

fn quantize(c: f32, scale: f64) -> i64 {
    if c.is_nan() {
        i64::MAX
    } else {
        (c as f64 * scale).round() as i64
    }
}

impl Quantized<2> {
    /// Quantize a texture coordinate
    pub fn from_vec2(v: Vec2, scale: f64) -> Self {
        Self::new(v.to_array(), scale)
    }
}

impl Quantized<3> {
    /// Quantize a position or normal
    pub fn from_vec3(v: Vec3, scale: f64) -> Self {
        Self::new(v.to_array(), scale)
    }
}

/// Sorted distinct values of one attribute array, keyed by quantized value
struct WeldTable<const N: usize, V> {
    keys: Vec<Quantized<N>>,
    values: Vec<V>,
}

impl<const N: usize, V> WeldTable<N, V> {
    /// Collect distinct keys; the first value seen for a key represents it
    fn build(entries: impl Iterator<Item = (Quantized<N>, V)>) -> Self {
        let mut set = BTreeMap::new();
        for (key, value) in entries {
            set.entry(key).or_insert(value);
        }
        let (keys, values) = set.into_iter().unzip();
        Self { keys, values }
    }

    fn index_of(&self, key: &Quantized<N>) -> usize {
        self.keys
            .binary_search(key)
            .expect("weld table is built from every referenced value")
    }
}

fn corners(loops: &[Loop]) -> impl Iterator<Item = IndexTriple> + '_ {
    loops.iter().flat_map(|face| face.iter().copied())
}

impl Mesh {
    /// Weld with the default tolerance
    pub fn clean(&mut self) {
        self.clean_with(&CleanOptions::default());
    }

    /// Remove unreferenced attribute entries, merge quantize-equal ones and
    /// sort the faces into a canonical order
    ///
    /// Output arrays are sorted by quantized value. Faces are sorted by their
    /// remapped corners, which orders them by the quantized position of their
    /// first corner, so the result does not depend on input face order.
    pub fn clean_with(&mut self, options: &CleanOptions) {
        let scale = options.scale();
        let before = (self.positions.len(), self.uvs.len(), self.normals.len());

        let old_positions = std::mem::take(&mut self.positions);
        let old_uvs = std::mem::take(&mut self.uvs);
        let old_normals = std::mem::take(&mut self.normals);

        let position_key = |i: usize| Quantized::from_vec3(old_positions[i], scale);
        let uv_key = |i: usize| Quantized::from_vec2(old_uvs[i], scale);
        let normal_key = |i: usize| Quantized::from_vec3(old_normals[i], scale);

        let positions = WeldTable::build(
            corners(&self.loops).map(|c| (position_key(c.position), old_positions[c.position])),
        );
        let uvs = WeldTable::build(corners(&self.loops).map(|c| (uv_key(c.uv), old_uvs[c.uv])));
        let normals = WeldTable::build(
            corners(&self.loops).map(|c| (normal_key(c.normal), old_normals[c.normal])),
        );

        for face in &mut self.loops {
            for corner in face.iter_mut() {
                *corner = IndexTriple::new(
                    positions.index_of(&position_key(corner.position)),
                    uvs.index_of(&uv_key(corner.uv)),
                    normals.index_of(&normal_key(corner.normal)),
                );
            }
        }
        self.loops.sort();

        self.positions = positions.values;
        self.uvs = uvs.values;
        self.normals = normals.values;

        debug!(
            "clean: positions {} -> {}, uvs {} -> {}, normals {} -> {}",
            before.0,
            self.positions.len(),
            before.1,
            self.uvs.len(),
            before.2,
            self.normals.len()
        );
    }
}
