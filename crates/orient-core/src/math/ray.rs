// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Mat4, Vec3};

/// Half-line starting at `origin` and extending along `direction`.
///
/// [`Ray::new`] normalises `direction`, so `t` in [`Ray::at`] is a distance.
/// [`Ray::transformed`] keeps the mapped direction at its mapped length, so
/// a given `t` names the same point in both frames.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// Creates a ray; `direction` is normalised.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Ray origin.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Ray direction; unit length unless produced by [`Ray::transformed`].
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin.add(&self.direction.scale(t))
    }

    /// Maps the ray through an affine matrix.
    ///
    /// The origin is transformed as a point and the direction as a direction
    /// (translation ignored). The direction is not renormalised: under a large
    /// scale it can be far shorter than unit length, and the slab test in
    /// [`Ray::intersect_bounds`] needs only its sign and ratios.
    pub fn transformed(&self, m: &Mat4) -> Self {
        Self {
            origin: m.transform_point(&self.origin),
            direction: m.transform_direction(&self.direction),
        }
    }

    /// First point where the ray meets the axis-aligned region `[min, max]`.
    ///
    /// Slab test. When the origin is inside the region the exit point is
    /// returned; regions entirely behind the origin are misses. Axis-parallel
    /// rays are handled through IEEE infinities.
    ///
    /// # Examples
    /// ```
    /// use orient_core::math::{Ray, Vec3};
    /// let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::UNIT_X);
    /// let hit = ray.intersect_bounds(&Vec3::splat(-1.0), &Vec3::splat(1.0));
    /// assert_eq!(hit.map(|p| p.to_array()), Some([-1.0, 0.0, 0.0]));
    /// ```
    pub fn intersect_bounds(&self, min: &Vec3, max: &Vec3) -> Option<Vec3> {
        let (mut tmin, mut tmax) = self.slab(min, max, 0);
        let (tymin, tymax) = self.slab(min, max, 1);

        if tmin > tymax || tymin > tmax {
            return None;
        }
        if tymin > tmin || tmin.is_nan() {
            tmin = tymin;
        }
        if tymax < tmax || tmax.is_nan() {
            tmax = tymax;
        }

        let (tzmin, tzmax) = self.slab(min, max, 2);
        if tmin > tzmax || tzmin > tmax {
            return None;
        }
        if tzmin > tmin || tmin.is_nan() {
            tmin = tzmin;
        }
        if tzmax < tmax || tmax.is_nan() {
            tmax = tzmax;
        }

        if tmax < 0.0 {
            return None;
        }
        Some(self.at(if tmin >= 0.0 { tmin } else { tmax }))
    }

    /// Returns `true` when [`Ray::intersect_bounds`] finds a hit.
    pub fn intersects_bounds(&self, min: &Vec3, max: &Vec3) -> bool {
        self.intersect_bounds(min, max).is_some()
    }

    // Entry/exit parameters for one axis slab, ordered by travel direction.
    fn slab(&self, min: &Vec3, max: &Vec3, axis: usize) -> (f32, f32) {
        let inv = 1.0 / self.direction.component(axis);
        let o = self.origin.component(axis);
        let near = (min.component(axis) - o) * inv;
        let far = (max.component(axis) - o) * inv;
        if inv >= 0.0 {
            (near, far)
        } else {
            (far, near)
        }
    }
}
