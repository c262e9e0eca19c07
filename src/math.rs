//! Vector helpers
//!
//! Thin layer over `glam` that pins down behavior on degenerate input:
//! a zero-length vector normalizes to zero, never NaN.

use glam::{Vec2, Vec3};

/// Unit vector in the direction of `v`, or zero for a zero/non-finite length
#[inline]
pub fn unit(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Lift a planar direction into 3D (z = 0) for cross products
#[inline]
pub fn planar(v: Vec2) -> Vec3 {
    v.extend(0.0)
}

/// Unsigned angle between two directions (radians, in [0, π])
///
/// The dot product is clamped to [-1, 1] before `acos` so rounding on
/// near-parallel unit vectors cannot produce NaN.
#[inline]
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// Component-wise equality within `eps`
#[inline]
pub fn approx_eq(a: Vec2, b: Vec2, eps: f32) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}
