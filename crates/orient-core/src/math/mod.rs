// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Deterministic math helpers covering scalar utilities, linear algebra
//! primitives, quaternions, planes, rays and spheres.
//!
//! All operations round to `f32`.

use std::f32::consts::TAU;

mod mat4;
mod plane;
mod quat;
mod ray;
mod sphere;
mod vec3;

pub use mat4::Mat4;
pub use plane::Plane;
pub use quat::Quat;
pub use ray::Ray;
pub use sphere::Sphere;
pub use vec3::Vec3;

/// Degeneracy threshold for quaternion axes and normalisation.
///
/// Vector and plane normalisation do not use it: only a zero or non-finite
/// length is degenerate there, so directions through large scales survive.
pub const EPSILON: f32 = 1e-6;

/// Determinant magnitude at or below which a matrix is treated as singular.
///
/// Kept far below [`EPSILON`] so that legitimately small scales (a box scaled
/// to a few millimetres on every axis) still invert.
pub const EPSILON_DET: f32 = 1e-12;

/// Clamps `value` to the inclusive `[min, max]` range using float32 rounding.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
