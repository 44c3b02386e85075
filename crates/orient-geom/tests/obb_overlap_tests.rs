// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used)]
//! Box-vs-box and box-vs-frustum overlap, including the cases that a
//! one-directional plane test gets wrong.

use core::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use orient_core::math::{Mat4, Quat, Sphere, Vec3};
use orient_geom::{hulls_overlap, planes_reject, Aabb, Frustum, GeomError, Obb, Transform};

const EPS: f32 = 1e-3;

fn cube_at(center: Vec3, h: f32) -> Obb {
    Obb::from_aabb(Aabb::from_center_half_extents(center, h, h, h))
}

fn diamond_at(center: Vec3) -> Obb {
    let t = Transform::new(center, Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_4), Vec3::ONE);
    Obb::from_transform(Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0), &t)
        .expect("rigid transform")
}

fn camera() -> Frustum {
    Frustum::from_view_projection(&Mat4::perspective(FRAC_PI_2, 1.0, 1.0, 10.0))
        .expect("perspective is invertible")
}

#[test]
fn separated_boxes_do_not_overlap() {
    let a = cube_at(Vec3::ZERO, 1.0);
    let b = cube_at(Vec3::new(5.0, 0.0, 0.0), 1.0);
    assert!(!a.intersects_obb(&b));
    assert!(!b.intersects_obb(&a));
}

#[test]
fn touching_faces_overlap() {
    let a = cube_at(Vec3::ZERO, 1.0);
    let b = cube_at(Vec3::new(2.0, 0.0, 0.0), 1.0);
    assert!(a.intersects_obb(&b));
}

#[test]
fn rotated_box_near_corner_needs_both_directions() {
    let a = cube_at(Vec3::ZERO, 1.0);
    let b = diamond_at(Vec3::new(2.0, 2.0, 0.0));

    // World bounds overlap and A's planes alone cannot separate the boxes.
    assert!(a.world_aabb().overlaps(&b.world_aabb()));
    assert!(!planes_reject(a.planes(), b.points()));
    // B's diagonal face separates them.
    assert!(planes_reject(b.planes(), a.points()));

    assert!(!a.intersects_obb(&b));
    assert!(!b.intersects_obb(&a));
}

#[test]
fn rotated_box_over_corner_overlaps() {
    let a = cube_at(Vec3::ZERO, 1.0);
    let b = diamond_at(Vec3::new(1.5, 1.5, 0.0));
    assert!(a.intersects_obb(&b));
    assert!(b.intersects_obb(&a));
}

#[test]
fn thin_boxes_keep_their_face_normals() {
    let sheet = |x: f32| {
        let t = Transform::new(Vec3::new(x, 0.0, 0.0), Quat::identity(), Vec3::new(1e-7, 1e3, 1e3));
        Obb::from_transform(Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0), &t)
            .expect("thin but invertible")
    };
    let a = sheet(0.0);
    let b = sheet(10.0);

    for plane in a.planes() {
        assert!((plane.normal().length() - 1.0).abs() <= EPS, "{plane:?}");
        assert!(plane.distance_to_point(&a.center()) >= 0.0);
    }
    assert!(!a.intersects_obb(&b));
    assert!(!b.intersects_obb(&a));
    assert!(a.intersects_obb(&a));
    assert!(a.intersects_obb(&sheet(1e-7)));
}

#[test]
fn box_overlaps_itself() {
    let b = diamond_at(Vec3::new(-3.0, 7.0, 2.0));
    assert!(b.intersects_obb(&b));
}

#[test]
fn frustum_planes_extracted_from_perspective() {
    let f = camera();
    assert!(f.contains_point(&Vec3::new(0.0, 0.0, -5.0)));
    assert!(f.contains_point(&Vec3::new(4.9, 0.0, -5.0)));
    assert!(!f.contains_point(&Vec3::new(5.1, 0.0, -5.0)));
    assert!(!f.contains_point(&Vec3::new(0.0, 0.0, -0.5)));
    assert!(!f.contains_point(&Vec3::new(0.0, 0.0, -11.0)));
    assert!(!f.contains_point(&Vec3::new(0.0, 0.0, 5.0)));
    for plane in f.planes() {
        assert!((plane.normal().length() - 1.0).abs() <= EPS);
    }
}

#[test]
fn frustum_corners_unproject_the_clip_cube() {
    let f = camera();
    let mut near = 0;
    let mut far = 0;
    for p in f.points() {
        let [x, y, z] = p.to_array();
        if (z + 1.0).abs() <= EPS {
            assert!((x.abs() - 1.0).abs() <= EPS && (y.abs() - 1.0).abs() <= EPS);
            near += 1;
        } else {
            assert!((z + 10.0).abs() <= 1e-2, "{p:?}");
            assert!((x.abs() - 10.0).abs() <= 1e-2 && (y.abs() - 10.0).abs() <= 1e-2);
            far += 1;
        }
    }
    assert_eq!((near, far), (4, 4));
}

#[test]
fn frustum_sphere_test_uses_radius() {
    let f = camera();
    assert!(f.intersects_sphere(&Sphere::new(Vec3::new(0.0, 0.0, -0.5), 0.6)));
    assert!(!f.intersects_sphere(&Sphere::new(Vec3::new(0.0, 0.0, -0.5), 0.4)));
}

#[test]
fn boxes_against_frustum() {
    let f = camera();
    let visible = cube_at(Vec3::new(0.0, 0.0, -5.0), 1.0);
    let behind = cube_at(Vec3::new(0.0, 0.0, 5.0), 1.0);
    let aside = cube_at(Vec3::new(20.0, 0.0, -5.0), 1.0);

    assert!(visible.intersects_frustum(&f));
    assert!(f.intersects_obb(&visible));
    assert!(!behind.intersects_frustum(&f));
    assert!(!aside.intersects_frustum(&f));
    assert!(!f.intersects_aabb(&Aabb::from_center_half_extents(
        Vec3::new(0.0, 0.0, 5.0),
        1.0,
        1.0,
        1.0
    )));
}

#[test]
fn box_planes_cull_what_frustum_planes_miss() {
    let f = camera();
    // Large slab beyond the frustum's widest extent (x <= 10), but with
    // corners on the inner side of every frustum plane.
    let slab = Aabb::from_center_half_extents(Vec3::new(16.0, 0.0, 0.0), 4.0, 20.0, 20.0);
    let obb = Obb::from_aabb(slab);

    assert!(f.intersects_aabb(&slab));
    assert!(!planes_reject(f.planes(), obb.points()));
    assert!(!obb.intersects_frustum(&f));
    assert!(!hulls_overlap(&f, &obb));
}

#[test]
fn frustum_from_camera_view() {
    let view = Mat4::look_at(&Vec3::new(0.0, 0.0, 10.0), &Vec3::ZERO, &Vec3::UNIT_Y);
    let projection = Mat4::perspective(FRAC_PI_2, 1.0, 1.0, 100.0);
    let f = Frustum::from_view_projection(&projection.multiply(&view)).expect("invertible");

    assert!(cube_at(Vec3::ZERO, 1.0).intersects_frustum(&f));
    assert!(!cube_at(Vec3::new(0.0, 0.0, 20.0), 1.0).intersects_frustum(&f));
}

#[test]
fn singular_projection_is_rejected() {
    let err = Frustum::from_view_projection(&Mat4::scale(1.0, 1.0, 0.0));
    assert!(matches!(err, Err(GeomError::SingularProjection { .. })));
}
