// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Bounding volumes for Orient.

This crate provides:
- Axis-aligned bounding boxes (`Aabb`) and translation/rotation/scale
  transforms (`Transform`).
- Oriented bounding boxes (`Obb`) with point, ray, sphere, box and frustum
  queries.
- View frusta (`Frustum`) built from view-projection matrices.
- The `ConvexHull` seam and the two-directional plane/point overlap test
  shared by boxes and frusta.

Design notes:
- Oriented boxes cache their inverse transform, world corners and world
  planes. Constructors and setters keep the cache current; raw `_mut`
  accessors require an explicit `Obb::update` afterwards.
- Queries never fail. Invalid inputs (singular transforms, inverted bounds)
  surface as `GeomError` from constructors and `update`.
- Float32 throughout; containment and overlap are inclusive on faces.
"]

/// Oriented boxes, frusta and the hull overlap test.
pub mod bounds;
/// Error type for geometry construction.
pub mod error;
/// Foundational geometry types.
pub mod types;

pub use bounds::frustum::Frustum;
pub use bounds::hull::{hulls_overlap, planes_reject, ConvexHull};
pub use bounds::obb::Obb;
pub use error::GeomError;
pub use types::aabb::Aabb;
pub use types::transform::Transform;
