// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use orient_core::math::{Plane, Vec3};

/// A closed convex shape described by six inward-facing planes and the eight
/// corners where they meet.
///
/// Oriented boxes and view frusta share this representation, which is all the
/// overlap test in [`hulls_overlap`] needs. Plane and point order carries no
/// meaning.
pub trait ConvexHull {
    /// Bounding planes; normals point into the shape.
    fn planes(&self) -> &[Plane; 6];
    /// Corner points.
    fn points(&self) -> &[Vec3; 8];
}

/// Returns `true` if some plane has every point strictly behind it.
///
/// For each plane the largest signed distance over `points` is taken; a
/// negative maximum proves the point set lies entirely outside that plane's
/// half-space.
pub fn planes_reject(planes: &[Plane; 6], points: &[Vec3; 8]) -> bool {
    planes.iter().any(|plane| {
        let farthest = points
            .iter()
            .map(|p| plane.distance_to_point(p))
            .fold(f32::NEG_INFINITY, f32::max);
        farthest < 0.0
    })
}

/// Face-normal overlap test between two convex hulls.
///
/// Runs [`planes_reject`] in both directions: `a`'s planes against `b`'s
/// corners, then `b`'s planes against `a`'s corners. The second pass removes
/// the false positives that a one-directional (culling-style) test reports
/// for rotated boxes.
///
/// Limitation: only face normals are tried as separating axes. Two hulls
/// separated solely along an edge-edge cross product are still reported as
/// overlapping. Callers needing exact collision must run a full SAT on top.
///
/// The result is symmetric: `hulls_overlap(a, b) == hulls_overlap(b, a)`.
pub fn hulls_overlap<A, B>(a: &A, b: &B) -> bool
where
    A: ConvexHull + ?Sized,
    B: ConvexHull + ?Sized,
{
    !planes_reject(a.planes(), b.points()) && !planes_reject(b.planes(), a.points())
}
