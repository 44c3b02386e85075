// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::error::GeomError;
use orient_core::math::{Mat4, Ray, Sphere, Vec3};

/// Axis-aligned bounding box.
///
/// Used both as the world-space broad-phase bound and as the local-space box
/// of an [`crate::Obb`], so no frame is implied by the type itself.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - All containment and intersection tests are inclusive on faces.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    /// Use [`Aabb::try_new`] for a fallible variant.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        let a = min.to_array();
        let b = max.to_array();
        assert!(
            a[0] <= b[0] && a[1] <= b[1] && a[2] <= b[2],
            "invalid AABB: min > max"
        );
        Self { min, max }
    }

    /// Constructs an AABB, rejecting inverted or NaN bounds.
    pub fn try_new(min: Vec3, max: Vec3) -> Result<Self, GeomError> {
        let a = min.to_array();
        let b = max.to_array();
        if a.iter().zip(b.iter()).all(|(lo, hi)| lo <= hi) {
            Ok(Self { min, max })
        } else {
            Err(GeomError::InvalidBounds { min: a, max: b })
        }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.min.lerp(&self.max, 0.5)
    }

    /// Half of the box size along each axis.
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        self.max.sub(&self.min).scale(0.5)
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy, hz`.
    ///
    /// # Panics
    /// Panics if any half-extent is negative.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3::new(hx, hy, hz);
        Self::new(center.sub(&he), center.add(&he))
    }

    /// The eight corners, enumerating `{min, max}` per axis with Z varying
    /// fastest.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        [
            Vec3::new(minx, miny, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(minx, maxy, maxz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(maxx, maxy, maxz),
        ]
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: &Vec3) -> bool {
        let p = point.to_array();
        let lo = self.min.to_array();
        let hi = self.max.to_array();
        (0..3).all(|i| lo[i] <= p[i] && p[i] <= hi[i])
    }

    /// Nearest point on or inside the box.
    #[must_use]
    pub fn clamp_point(&self, point: &Vec3) -> Vec3 {
        point.clamp(&self.min, &self.max)
    }

    /// Distance from `point` to the box; zero inside.
    #[must_use]
    pub fn distance_to_point(&self, point: &Vec3) -> f32 {
        self.clamp_point(point).distance(point)
    }

    /// Returns `true` if `sphere` touches or overlaps the box.
    #[must_use]
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        let nearest = self.clamp_point(&sphere.center);
        nearest.distance_squared(&sphere.center) <= sphere.radius * sphere.radius
    }

    /// First point where `ray` meets the box (exit point when the origin is
    /// inside), or `None`.
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Vec3> {
        ray.intersect_bounds(&self.min, &self.max)
    }

    /// Returns `true` if `ray` meets the box.
    #[must_use]
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        ray.intersects_bounds(&self.min, &self.max)
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        (0..3).all(|i| a_max[i] >= b_min[i] && a_min[i] <= b_max[i])
    }

    /// Returns the union of two AABBs.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    #[must_use]
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec3::splat(m);
        Self {
            min: self.min.sub(&delta),
            max: self.max.add(&delta),
        }
    }

    /// Computes the AABB that bounds this box after transformation by `mat`.
    #[must_use]
    pub fn transformed(&self, mat: &Mat4) -> Self {
        Self::from_points(&self.corners().map(|c| mat.transform_point(&c)))
    }

    /// Builds the minimal AABB that contains all `points`.
    ///
    /// # Panics
    /// Panics if `points` is empty.
    #[must_use]
    pub fn from_points(points: &[Vec3]) -> Self {
        assert!(!points.is_empty(), "from_points requires at least one point");
        let (min, max) = points[1..]
            .iter()
            .fold((points[0], points[0]), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Self { min, max }
    }
}
