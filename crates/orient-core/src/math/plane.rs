// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec3;

/// Oriented plane `normal · p + constant = 0`.
///
/// The signed distance of a point is positive on the side `normal` points
/// toward. Distances are true Euclidean distances only when `normal` is unit
/// length; constructors that take arbitrary coefficients normalise.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    normal: Vec3,
    constant: f32,
}

impl Plane {
    /// Creates a plane from a normal and constant, taken verbatim.
    pub const fn new(normal: Vec3, constant: f32) -> Self {
        Self { normal, constant }
    }

    /// Plane with the given `normal` passing through `point`.
    ///
    /// `normal` is used as-is; pass a unit vector for metric distances.
    pub fn from_normal_and_coplanar_point(normal: &Vec3, point: &Vec3) -> Self {
        Self::new(*normal, -point.dot(normal))
    }

    /// Plane from raw `ax + by + cz + d` coefficients, normalised.
    pub fn from_components(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self::new(Vec3::new(a, b, c), d).normalize()
    }

    /// Plane normal.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Plane constant (`-normal · p` for any point `p` on the plane).
    pub fn constant(&self) -> f32 {
        self.constant
    }

    /// Same plane with the opposite orientation.
    pub fn negate(&self) -> Self {
        Self::new(self.normal.negate(), -self.constant)
    }

    /// Rescales so the normal has unit length. Zero or non-finite normals are
    /// left untouched.
    pub fn normalize(&self) -> Self {
        let len = self.normal.length();
        if len == 0.0 || !len.is_finite() {
            return *self;
        }
        let inv = 1.0 / len;
        Self::new(self.normal.scale(inv), self.constant * inv)
    }

    /// Signed distance from the plane to `point`.
    pub fn distance_to_point(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coplanar_point_has_zero_distance() {
        let p = Vec3::new(0.0, 2.0, 0.0);
        let plane = Plane::from_normal_and_coplanar_point(&Vec3::UNIT_Y, &p);
        assert_eq!(plane.distance_to_point(&p), 0.0);
        assert_eq!(plane.distance_to_point(&Vec3::new(5.0, 3.0, -1.0)), 1.0);
        assert_eq!(plane.distance_to_point(&Vec3::ZERO), -2.0);
    }

    #[test]
    fn negate_flips_the_sign_of_every_distance() {
        let plane = Plane::from_normal_and_coplanar_point(&Vec3::UNIT_X, &Vec3::new(1.0, 0.0, 0.0));
        let flipped = plane.negate();
        let q = Vec3::new(4.0, 1.0, 1.0);
        assert_eq!(flipped.distance_to_point(&q), -plane.distance_to_point(&q));
    }

    #[test]
    fn from_components_normalizes() {
        let plane = Plane::from_components(0.0, 0.0, 2.0, -4.0);
        assert_eq!(plane.normal().to_array(), [0.0, 0.0, 1.0]);
        assert_eq!(plane.constant(), -2.0);
    }

    #[test]
    fn small_coefficients_still_normalize() {
        let plane = Plane::from_components(3e-9, 0.0, 4e-9, 5e-9);
        let [x, y, z] = plane.normal().to_array();
        assert!((x - 0.6).abs() <= 1e-6 && y == 0.0 && (z - 0.8).abs() <= 1e-6);
        assert!((plane.constant() - 1.0).abs() <= 1e-6);

        let flat = Plane::new(Vec3::ZERO, 1.0);
        assert_eq!(flat.normalize(), flat);
    }
}
