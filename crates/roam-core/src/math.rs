//! Ground-plane helpers over `glam` vectors.
//!
//! Visitors steer on the horizontal (x/z) plane; the y axis belongs to the
//! physics host (gravity, ragdoll posture).  Every distance, direction, and
//! arrival test in the framework therefore works on flattened vectors, and
//! this module is the single place that flattening lives.

use glam::{Vec2, Vec3};

/// Below this squared length a horizontal vector is treated as zero — no
/// meaningful direction can be extracted from it.
pub const DIR_EPS_SQ: f32 = 1.0e-6;

/// Project `v` onto the ground plane (zero the y component).
#[inline]
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Horizontal length of `v` (ignores y).
#[inline]
pub fn flat_len(v: Vec3) -> f32 {
    (v.x * v.x + v.z * v.z).sqrt()
}

/// Horizontal distance between `a` and `b` (ignores y).
#[inline]
pub fn flat_distance(a: Vec3, b: Vec3) -> f32 {
    flat_len(b - a)
}

/// Flattened, normalized copy of `v`.
///
/// Returns `None` when the horizontal component is too small to define a
/// direction (see [`DIR_EPS_SQ`]).
pub fn flat_normalize(v: Vec3) -> Option<Vec3> {
    let flat = flatten(v);
    if flat.length_squared() < DIR_EPS_SQ {
        None
    } else {
        Some(flat.normalize())
    }
}

/// Horizontal unit vector pointing from `from` to `to`, or `None` when the
/// two points coincide on the ground plane.
#[inline]
pub fn flat_dir(from: Vec3, to: Vec3) -> Option<Vec3> {
    flat_normalize(to - from)
}

/// Collapse a world-space direction into the 2-D (x, z) intent plane.
#[inline]
pub fn to_plane(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Lift a 2-D (x, z) intent back into world space at ground level.
#[inline]
pub fn from_plane(v: Vec2) -> Vec3 {
    Vec3::new(v.x, 0.0, v.y)
}
