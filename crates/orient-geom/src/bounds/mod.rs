// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Bounding volumes and the overlap test they share.
//!
//! Both [`obb::Obb`] and [`frustum::Frustum`] expose six inward planes and
//! eight corners through [`hull::ConvexHull`]; [`hull::hulls_overlap`] runs
//! the plane/point rejection test in both directions. Face normals are the
//! only candidate axes (no edge cross products), so the test is
//! conservative: it never misses a real overlap but can report one for
//! shapes separated only along an edge-edge axis.

#[doc = "View frusta extracted from view-projection matrices."]
pub mod frustum;
#[doc = "The six-plane/eight-point hull seam and the overlap test."]
pub mod hull;
#[doc = "Oriented bounding boxes with cached world-space planes and corners."]
pub mod obb;
