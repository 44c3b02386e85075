// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec3;

/// Sphere given by center and radius.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    /// Center point.
    pub center: Vec3,
    /// Radius, expected to be non-negative.
    pub radius: f32,
}

impl Sphere {
    /// Creates a sphere.
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Returns `true` when `point` is inside or on the sphere.
    pub fn contains_point(&self, point: &Vec3) -> bool {
        point.distance_squared(&self.center) <= self.radius * self.radius
    }
}
