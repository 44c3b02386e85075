// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::expect_used)]
//! Point, ray and sphere queries on oriented boxes, plus the cache contract.

use core::f32::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

use orient_core::math::{Mat4, Quat, Ray, Sphere, Vec3};
use orient_geom::{Aabb, GeomError, Obb, Transform};

const EPS: f32 = 1e-4;

fn approx_eq3(a: Vec3, b: [f32; 3]) {
    let a = a.to_array();
    for i in 0..3 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

fn unit() -> Aabb {
    Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 1.0, 1.0)
}

fn diamond() -> Obb {
    Obb::new(unit(), Mat4::rotation_z(FRAC_PI_4)).expect("rotation is invertible")
}

#[test]
fn rotated_translated_box_contains_and_clamps() {
    // Local half-extents (1, 2, 0.5); rotating 90° about Z swaps the X/Y
    // extents in world space.
    let local = Aabb::from_center_half_extents(Vec3::ZERO, 1.0, 2.0, 0.5);
    let t = Transform::new(
        Vec3::new(10.0, 0.0, 0.0),
        Quat::from_axis_angle(Vec3::UNIT_Z, FRAC_PI_2),
        Vec3::ONE,
    );
    let obb = Obb::from_transform(local, &t).expect("rigid transform");

    assert!(obb.contains_point(&Vec3::new(11.5, 0.0, 0.0)));
    assert!(!obb.contains_point(&Vec3::new(10.0, 1.5, 0.0)));

    let clamped = obb.clamp_point(&Vec3::new(10.0, 1.5, 0.0));
    approx_eq3(clamped, [10.0, 1.0, 0.0]);
    assert!((obb.distance_to_point(&Vec3::new(10.0, 1.5, 0.0)) - 0.5).abs() <= EPS);
    assert!((obb.distance_to_point(&Vec3::new(13.0, 0.0, 0.0)) - 1.0).abs() <= EPS);
}

#[test]
fn inside_points_clamp_to_themselves() {
    let obb = diamond();
    let p = Vec3::new(0.3, -0.2, 0.9);
    assert!(obb.contains_point(&p));
    assert_eq!(obb.clamp_point(&p), p);
    assert_eq!(obb.distance_to_point(&p), 0.0);
}

#[test]
fn center_and_world_aabb_follow_rotation() {
    let obb = diamond();
    approx_eq3(obb.center(), [0.0, 0.0, 0.0]);
    let bounds = obb.world_aabb();
    approx_eq3(bounds.min(), [-SQRT_2, -SQRT_2, -1.0]);
    approx_eq3(bounds.max(), [SQRT_2, SQRT_2, 1.0]);
}

#[test]
fn ray_hits_rotated_box_that_axis_aligned_box_misses() {
    let ray = Ray::new(Vec3::new(-5.0, 1.2, 0.0), Vec3::UNIT_X);
    assert!(!unit().intersects_ray(&ray));

    let obb = diamond();
    assert!(obb.intersects_ray(&ray));
    let hit = obb.intersect_ray(&ray).expect("ray crosses the diamond");
    approx_eq3(hit, [-(SQRT_2 - 1.2), 1.2, 0.0]);
    assert!(obb.distance_to_point(&hit) <= EPS);
}

#[test]
fn ray_pointing_away_misses() {
    let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
    let obb = diamond();
    assert!(!obb.intersects_ray(&ray));
    assert_eq!(obb.intersect_ray(&ray), None);
}

#[test]
fn ray_from_inside_reports_exit_point() {
    let ray = Ray::new(Vec3::ZERO, Vec3::UNIT_X);
    let hit = diamond().intersect_ray(&ray).expect("origin is inside");
    approx_eq3(hit, [SQRT_2, 0.0, 0.0]);
}

#[test]
fn sphere_query_respects_orientation() {
    // Near the (1, 1) corner of the axis-aligned cube but well clear of the
    // diagonal face of the rotated one.
    let sphere = Sphere::new(Vec3::new(1.3, 1.3, 0.0), 0.5);
    assert!(unit().intersects_sphere(&sphere));
    assert!(!diamond().intersects_sphere(&sphere));

    assert!(diamond().intersects_sphere(&Sphere::new(Vec3::new(1.6, 0.0, 0.0), 0.5)));
    assert!(diamond().intersects_sphere(&Sphere::new(Vec3::ZERO, 0.0)));
}

#[test]
fn rays_against_very_large_box() {
    let obb = Obb::new(unit(), Mat4::scale(1e7, 1e7, 1e7)).expect("large scale is invertible");
    let inbound = Ray::new(Vec3::new(3e7, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
    let outbound = Ray::new(Vec3::new(-3e7, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));

    assert!(obb.intersects_ray(&inbound));
    let hit = obb.intersect_ray(&inbound).expect("ray points at the box");
    let [x, y, z] = hit.to_array();
    assert!((x - 1e7).abs() <= 10.0, "{hit:?}");
    assert_eq!([y, z], [0.0, 0.0]);

    assert!(!obb.intersects_ray(&outbound));
    assert_eq!(obb.intersect_ray(&outbound), None);
}

#[test]
fn sphere_near_unit_box() {
    let obb = Obb::from_aabb(unit());
    let center = Vec3::new(2.0, 0.0, 0.0);
    assert!(!obb.intersects_sphere(&Sphere::new(center, 0.5)));
    assert!(obb.intersects_sphere(&Sphere::new(center, 1.5)));
}

#[test]
fn non_uniform_scale_stretches_the_box() {
    let t = Transform::identity().with_scale(Vec3::new(2.0, 1.0, 1.0));
    let obb = Obb::from_transform(unit(), &t).expect("positive scale");
    assert!(obb.contains_point(&Vec3::new(1.5, 0.0, 0.0)));
    assert!(!obb.contains_point(&Vec3::new(0.0, 1.5, 0.0)));
}

#[test]
fn singular_transform_is_rejected() {
    let err = Obb::new(unit(), Mat4::scale(1.0, 1.0, 0.0));
    assert!(matches!(err, Err(GeomError::SingularTransform { .. })));
}

#[test]
fn set_transform_rolls_back_on_failure() {
    let mut obb = Obb::from_aabb(unit());
    obb.set_transform(Mat4::translation(5.0, 0.0, 0.0))
        .expect("translation is invertible");
    assert!(obb.contains_point(&Vec3::new(5.5, 0.0, 0.0)));

    let before = obb;
    let err = obb.set_transform(Mat4::scale(0.0, 1.0, 1.0));
    assert!(matches!(err, Err(GeomError::SingularTransform { .. })));
    assert_eq!(obb, before);
}

#[test]
fn set_local_box_rederives() {
    let mut obb = diamond();
    obb.set_local_box(Aabb::from_center_half_extents(Vec3::ZERO, 3.0, 0.1, 0.1))
        .expect("transform unchanged");
    // The long local X axis now points along the world diagonal.
    assert!(obb.contains_point(&Vec3::new(2.0, 2.0, 0.0)));
    assert!(!obb.contains_point(&Vec3::new(2.0, -2.0, 0.0)));
}

#[test]
fn raw_mutation_needs_update() {
    let mut obb = Obb::from_aabb(unit());
    *obb.transform_mut() = Mat4::translation(0.0, 10.0, 0.0);
    // Cache still describes the old pose until update runs.
    assert!(obb.contains_point(&Vec3::ZERO));

    obb.update().expect("translation is invertible");
    assert!(!obb.contains_point(&Vec3::ZERO));
    assert!(obb.contains_point(&Vec3::new(0.0, 10.0, 0.0)));

    *obb.local_box_mut() = Aabb::from_center_half_extents(Vec3::ZERO, 0.1, 0.1, 0.1);
    obb.update().expect("translation is invertible");
    assert!(!obb.contains_point(&Vec3::new(0.5, 10.0, 0.0)));
}

#[test]
fn copy_from_takes_source_pose() {
    let source = diamond();
    let mut target = Obb::from_aabb(Aabb::from_center_half_extents(
        Vec3::new(50.0, 0.0, 0.0),
        1.0,
        1.0,
        1.0,
    ));
    target.copy_from(&source).expect("source is valid");
    assert_eq!(target, source);
}
