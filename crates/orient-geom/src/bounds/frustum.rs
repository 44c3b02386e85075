// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use orient_core::math::{Mat4, Plane, Sphere, Vec3};
use tracing::debug;

use crate::bounds::hull::{hulls_overlap, ConvexHull};
use crate::bounds::obb::Obb;
use crate::error::GeomError;
use crate::types::aabb::Aabb;

/// View frustum as six inward-facing planes plus its eight corners.
///
/// Sharing the [`ConvexHull`] shape with [`Obb`] lets a single overlap test
/// serve both box-vs-box and box-vs-camera queries.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frustum {
    planes: [Plane; 6],
    points: [Vec3; 8],
}

impl Frustum {
    /// Assembles a frustum from precomputed planes and corners.
    ///
    /// Planes must face inward and the corners must be the vertices of the
    /// region they bound; neither is checked.
    #[must_use]
    pub const fn new(planes: [Plane; 6], points: [Vec3; 8]) -> Self {
        Self { planes, points }
    }

    /// Extracts the frustum of a combined `projection * view` matrix.
    ///
    /// Planes are taken from the matrix rows (left, right, bottom, top, near,
    /// far) and normalised. Corners are the clip-space cube corners, with
    /// depth in `[-1, 1]`, unprojected through the inverse matrix.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use orient_core::math::{Mat4, Vec3};
    /// use orient_geom::Frustum;
    /// let frustum = Frustum::from_view_projection(&Mat4::perspective(FRAC_PI_2, 1.0, 1.0, 10.0)).unwrap();
    /// assert!(frustum.contains_point(&Vec3::new(0.0, 0.0, -5.0)));
    /// assert!(!frustum.contains_point(&Vec3::new(0.0, 0.0, 5.0)));
    /// ```
    pub fn from_view_projection(view_projection: &Mat4) -> Result<Self, GeomError> {
        let inverse = view_projection.try_inverse().ok_or_else(|| {
            GeomError::SingularProjection {
                determinant: view_projection.determinant(),
            }
        })?;

        let rows = [0, 1, 2, 3].map(|r| view_projection.row(r));
        let w = rows[3];
        let combine = |row: [f32; 4], sign: f32| {
            Plane::from_components(
                w[0] + sign * row[0],
                w[1] + sign * row[1],
                w[2] + sign * row[2],
                w[3] + sign * row[3],
            )
        };
        let planes = [
            combine(rows[0], 1.0),
            combine(rows[0], -1.0),
            combine(rows[1], 1.0),
            combine(rows[1], -1.0),
            combine(rows[2], 1.0),
            combine(rows[2], -1.0),
        ];

        let points = core::array::from_fn(|i| {
            let x = if i & 4 == 0 { -1.0 } else { 1.0 };
            let y = if i & 2 == 0 { -1.0 } else { 1.0 };
            let z = if i & 1 == 0 { -1.0 } else { 1.0 };
            inverse.project_point(&Vec3::new(x, y, z))
        });

        debug!(?points, "frustum extracted from view-projection");
        Ok(Self { planes, points })
    }

    /// Bounding planes, normals facing inward.
    #[must_use]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// Corner points.
    #[must_use]
    pub fn points(&self) -> &[Vec3; 8] {
        &self.points
    }

    /// Returns `true` if `point` is inside or on every plane.
    #[must_use]
    pub fn contains_point(&self, point: &Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Returns `true` unless the sphere lies entirely behind some plane.
    ///
    /// Plane-only test: spheres just outside a frustum corner may be
    /// reported as intersecting.
    #[must_use]
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(&sphere.center) >= -sphere.radius)
    }

    /// Classic culling test for an axis-aligned box: for each plane the box
    /// corner furthest along the plane normal must not be behind it.
    ///
    /// Only the frustum planes are tried, so boxes near frustum edges can be
    /// reported as visible. [`Frustum::intersects_obb`] also tests the box
    /// planes against the frustum corners.
    #[must_use]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        let lo = aabb.min().to_array();
        let hi = aabb.max().to_array();
        self.planes.iter().all(|plane| {
            let n = plane.normal().to_array();
            let farthest = Vec3::new(
                if n[0] > 0.0 { hi[0] } else { lo[0] },
                if n[1] > 0.0 { hi[1] } else { lo[1] },
                if n[2] > 0.0 { hi[2] } else { lo[2] },
            );
            plane.distance_to_point(&farthest) >= 0.0
        })
    }

    /// Two-directional plane/point overlap test with an oriented box.
    #[must_use]
    pub fn intersects_obb(&self, obb: &Obb) -> bool {
        hulls_overlap(self, obb)
    }
}

impl ConvexHull for Frustum {
    fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    fn points(&self) -> &[Vec3; 8] {
        &self.points
    }
}
