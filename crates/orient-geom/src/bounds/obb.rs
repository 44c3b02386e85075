// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use orient_core::math::{Mat4, Plane, Ray, Sphere, Vec3};
use tracing::{instrument, trace, warn};

use crate::bounds::frustum::Frustum;
use crate::bounds::hull::{hulls_overlap, ConvexHull};
use crate::error::GeomError;
use crate::types::aabb::Aabb;
use crate::types::transform::Transform;

/// Oriented bounding box: an axis-aligned `local_box` placed in the world by
/// an arbitrary affine `transform`.
///
/// Derived state (the inverse transform, the eight world-space corners and
/// the six inward-facing world-space planes) is cached and rebuilt by
/// [`Obb::update`].
///
/// Cache contract:
/// - Constructors run `update`, so a new box is always ready for queries.
/// - [`Obb::set_local_box`] and [`Obb::set_transform`] mutate and re-derive
///   in one step.
/// - [`Obb::local_box_mut`] and [`Obb::transform_mut`] hand out raw access;
///   the caller must call [`Obb::update`] before the next query. Nothing
///   detects a skipped update; queries then answer for the old pose.
///
/// Point and sphere queries clamp in local space. Under non-uniform scale the
/// clamped point is nearest in the scaled local metric, not in world-space
/// Euclidean distance.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ObbParts", into = "ObbParts")
)]
pub struct Obb {
    local_box: Aabb,
    transform: Mat4,
    inverse_transform: Mat4,
    points: [Vec3; 8],
    planes: [Plane; 6],
}

impl Obb {
    /// Builds an oriented box from a local box and a local-to-world matrix.
    ///
    /// Fails with [`GeomError::SingularTransform`] when `transform` has no
    /// inverse.
    ///
    /// # Examples
    /// ```
    /// use orient_core::math::{Mat4, Vec3};
    /// use orient_geom::{Aabb, Obb};
    /// let local = Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0);
    /// let obb = Obb::new(local, Mat4::translation(10.0, 0.0, 0.0)).unwrap();
    /// assert!(obb.contains_point(&Vec3::new(10.5, 0.0, 0.0)));
    /// assert!(!obb.contains_point(&Vec3::ZERO));
    /// ```
    pub fn new(local_box: Aabb, transform: Mat4) -> Result<Self, GeomError> {
        let mut obb = Self {
            local_box,
            transform,
            inverse_transform: Mat4::identity(),
            points: [Vec3::ZERO; 8],
            planes: [Plane::new(Vec3::ZERO, 0.0); 6],
        };
        obb.update()?;
        Ok(obb)
    }

    /// Builds an oriented box placed by a translation/rotation/scale transform.
    pub fn from_transform(local_box: Aabb, transform: &Transform) -> Result<Self, GeomError> {
        Self::new(local_box, transform.to_mat4())
    }

    /// Wraps an axis-aligned box with the identity transform.
    #[must_use]
    pub fn from_aabb(aabb: Aabb) -> Self {
        let points = aabb.corners();
        let planes = Self::derive_planes(&aabb, &Mat4::identity());
        Self {
            local_box: aabb,
            transform: Mat4::identity(),
            inverse_transform: Mat4::identity(),
            points,
            planes,
        }
    }

    /// Box in local space.
    #[must_use]
    pub fn local_box(&self) -> &Aabb {
        &self.local_box
    }

    /// Local-to-world matrix.
    #[must_use]
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// World-to-local matrix as of the last successful [`Obb::update`].
    #[must_use]
    pub fn inverse_transform(&self) -> &Mat4 {
        &self.inverse_transform
    }

    /// Mutable access to the local box. Call [`Obb::update`] afterwards.
    pub fn local_box_mut(&mut self) -> &mut Aabb {
        &mut self.local_box
    }

    /// Mutable access to the transform. Call [`Obb::update`] afterwards.
    pub fn transform_mut(&mut self) -> &mut Mat4 {
        &mut self.transform
    }

    /// Replaces the local box and re-derives the cache.
    pub fn set_local_box(&mut self, local_box: Aabb) -> Result<(), GeomError> {
        let previous = core::mem::replace(&mut self.local_box, local_box);
        self.update().inspect_err(|_| self.local_box = previous)
    }

    /// Replaces the transform and re-derives the cache.
    ///
    /// On failure the previous transform is restored, so the box keeps
    /// answering queries for its last valid pose.
    pub fn set_transform(&mut self, transform: Mat4) -> Result<(), GeomError> {
        let previous = core::mem::replace(&mut self.transform, transform);
        self.update().inspect_err(|_| self.transform = previous)
    }

    /// Copies `source`'s box and transform into `self` and re-derives.
    pub fn copy_from(&mut self, source: &Self) -> Result<(), GeomError> {
        self.local_box = source.local_box;
        self.transform = source.transform;
        self.update()
    }

    /// Recomputes the inverse transform, world corners and world planes.
    ///
    /// Must run after any change made through [`Obb::local_box_mut`] or
    /// [`Obb::transform_mut`]. A singular transform is reported as
    /// [`GeomError::SingularTransform`] and leaves the cached state as it was.
    #[instrument(level = "trace", skip_all)]
    pub fn update(&mut self) -> Result<(), GeomError> {
        let Some(inverse) = self.transform.try_inverse() else {
            let determinant = self.transform.determinant();
            warn!(determinant, "oriented box transform is not invertible");
            return Err(GeomError::SingularTransform { determinant });
        };

        self.inverse_transform = inverse;
        self.points = self
            .local_box
            .corners()
            .map(|c| self.transform.transform_point(&c));
        self.planes = Self::derive_planes(&self.local_box, &self.transform);
        trace!(points = ?self.points, "oriented box derived");
        Ok(())
    }

    // Planes come in per-axis pairs (X, Y, Z). The near plane faces +axis
    // through the world-space min corner; the far plane is the same normal
    // through the max corner, negated so that it also faces inward.
    fn derive_planes(local_box: &Aabb, transform: &Mat4) -> [Plane; 6] {
        let world_min = transform.transform_point(&local_box.min());
        let world_max = transform.transform_point(&local_box.max());
        let axes = [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z];
        core::array::from_fn(|i| {
            let normal = transform.transform_direction(&axes[i / 2]).normalize();
            if i % 2 == 0 {
                Plane::from_normal_and_coplanar_point(&normal, &world_min)
            } else {
                Plane::from_normal_and_coplanar_point(&normal, &world_max).negate()
            }
        })
    }

    /// World-space corners.
    #[must_use]
    pub fn points(&self) -> &[Vec3; 8] {
        &self.points
    }

    /// World-space bounding planes, normals facing inward.
    #[must_use]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// World-space center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.transform.transform_point(&self.local_box.center())
    }

    /// Axis-aligned world bounds of the eight corners, for broad-phase use.
    #[must_use]
    pub fn world_aabb(&self) -> Aabb {
        Aabb::from_points(&self.points)
    }

    /// Clamps `point` onto or into the box.
    ///
    /// Points already inside are returned unchanged.
    #[must_use]
    pub fn clamp_point(&self, point: &Vec3) -> Vec3 {
        let local = self.inverse_transform.transform_point(point);
        if self.local_box.contains_point(&local) {
            return *point;
        }
        self.transform
            .transform_point(&self.local_box.clamp_point(&local))
    }

    /// World-space distance from `point` to the box; exactly zero inside or
    /// on the boundary.
    #[must_use]
    pub fn distance_to_point(&self, point: &Vec3) -> f32 {
        self.clamp_point(point).distance(point)
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: &Vec3) -> bool {
        self.local_box
            .contains_point(&self.inverse_transform.transform_point(point))
    }

    /// Returns `true` if `ray` meets the box.
    #[must_use]
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        self.local_box
            .intersects_ray(&ray.transformed(&self.inverse_transform))
    }

    /// World-space point where `ray` first meets the box surface, or `None`.
    ///
    /// When the ray starts inside the box the exit point is returned.
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Vec3> {
        let local_ray = ray.transformed(&self.inverse_transform);
        self.local_box
            .intersect_ray(&local_ray)
            .map(|hit| self.transform.transform_point(&hit))
    }

    /// Returns `true` if `sphere` touches or overlaps the box.
    #[must_use]
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        let nearest = self.clamp_point(&sphere.center);
        nearest.distance_squared(&sphere.center) <= sphere.radius * sphere.radius
    }

    /// Overlap test against any six-plane convex hull. See [`hulls_overlap`]
    /// for the approximation involved.
    #[must_use]
    pub fn intersects_hull<H: ConvexHull + ?Sized>(&self, hull: &H) -> bool {
        hulls_overlap(hull, self)
    }

    /// Returns `true` if the two oriented boxes overlap, as decided by the
    /// face-normal test in [`hulls_overlap`].
    #[must_use]
    pub fn intersects_obb(&self, other: &Self) -> bool {
        self.intersects_hull(other)
    }

    /// Returns `true` if the box is at least partially inside `frustum`.
    #[must_use]
    pub fn intersects_frustum(&self, frustum: &Frustum) -> bool {
        self.intersects_hull(frustum)
    }
}

impl ConvexHull for Obb {
    fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    fn points(&self) -> &[Vec3; 8] {
        &self.points
    }
}

impl From<Aabb> for Obb {
    fn from(aabb: Aabb) -> Self {
        Self::from_aabb(aabb)
    }
}

/// Serialized form of an [`Obb`]: only the inputs, never the derived cache.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct ObbParts {
    local_box: Aabb,
    transform: Mat4,
}

#[cfg(feature = "serde")]
impl From<Obb> for ObbParts {
    fn from(obb: Obb) -> Self {
        Self {
            local_box: obb.local_box,
            transform: obb.transform,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<ObbParts> for Obb {
    type Error = GeomError;

    fn try_from(parts: ObbParts) -> Result<Self, Self::Error> {
        Self::new(parts.local_box, parts.transform)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    fn unit() -> Aabb {
        Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0)
    }

    #[test]
    fn planes_face_inward() {
        let m = Transform::new(
            Vec3::new(3.0, -2.0, 1.0),
            orient_core::math::Quat::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), 0.8),
            Vec3::new(2.0, 0.5, 1.5),
        );
        let obb = Obb::from_transform(unit(), &m).expect("invertible transform");
        let center = obb.center();
        for plane in obb.planes() {
            assert!(plane.distance_to_point(&center) > 0.0);
        }
        for p in obb.points() {
            for plane in obb.planes() {
                assert!(plane.distance_to_point(p) > -1e-4);
            }
        }
    }

    #[test]
    fn from_aabb_matches_identity_construction() {
        let via_new = Obb::new(unit(), Mat4::identity());
        assert_eq!(via_new, Ok(Obb::from_aabb(unit())));
    }

    #[test]
    fn singular_update_keeps_previous_cache() {
        let mut obb =
            Obb::new(unit(), Mat4::rotation_z(FRAC_PI_2)).expect("rotation is invertible");
        let before = obb;
        *obb.transform_mut() = Mat4::scale(1.0, 0.0, 1.0);
        let err = obb.update();
        assert!(matches!(err, Err(GeomError::SingularTransform { .. })));
        assert_eq!(obb.points(), before.points());
        assert_eq!(obb.planes(), before.planes());
        assert_eq!(obb.inverse_transform(), before.inverse_transform());
    }
}
