// Host-side tests for ray/primitive intersection.

use glam::Vec3;
use pick_core::intersect::*;
use pick_core::*;

fn close(a: Option<f32>, expected: f32, eps: f32) -> bool {
    a.map_or(false, |t| (t - expected).abs() < eps)
}

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z, Vec3::ZERO, 1.0);
    assert!(close(t, 4.0, 1e-5));
}

#[test]
fn ray_sphere_intersection_miss() {
    let t = ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(t.is_none());
}

#[test]
fn ray_sphere_from_inside_reports_exit() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::new(0.0, 0.0, 5.0), 3.0);
    assert!(close(t, 3.0, 1e-5));
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, Vec3::ZERO, 1.0);
    assert!(t.is_none());
}

#[test]
fn box_faces() {
    let t = intersect_local(Shape::Box, Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);
    assert!(close(t, 4.5, 1e-5));
    let t = intersect_local(Shape::Box, Vec3::new(0.2, 5.0, -0.3), -Vec3::Y);
    assert!(close(t, 4.5, 1e-5));
    assert!(intersect_local(Shape::Box, Vec3::new(0.6, 5.0, 0.0), -Vec3::Y).is_none());
}

#[test]
fn cylinder_side_and_caps() {
    let t = intersect_local(Shape::Cylinder, Vec3::new(5.0, 0.5, 0.0), -Vec3::X);
    assert!(close(t, 4.0, 1e-5));
    let t = intersect_local(Shape::Cylinder, Vec3::new(0.3, 5.0, 0.0), -Vec3::Y);
    assert!(close(t, 4.0, 1e-5));
    let t = intersect_local(Shape::Cylinder, Vec3::new(0.0, -5.0, 0.0), Vec3::Y);
    assert!(close(t, 4.0, 1e-5));
    // passes above the top cap
    assert!(intersect_local(Shape::Cylinder, Vec3::new(5.0, 1.5, 0.0), -Vec3::X).is_none());
}

#[test]
fn cone_apex_side_and_base() {
    let t = intersect_local(Shape::Cone, Vec3::new(0.0, 5.0, 0.0), -Vec3::Y);
    assert!(close(t, 4.0, 1e-4));
    // radius is 0.5 half way up
    let t = intersect_local(Shape::Cone, Vec3::new(5.0, 0.0, 0.0), -Vec3::X);
    assert!(close(t, 4.5, 1e-4));
    let t = intersect_local(Shape::Cone, Vec3::new(0.0, -5.0, 0.0), Vec3::Y);
    assert!(close(t, 4.0, 1e-4));
    // above the apex: the mirrored nappe must not count
    assert!(intersect_local(Shape::Cone, Vec3::new(5.0, 2.0, 0.0), -Vec3::X).is_none());
}

#[test]
fn torus_tube_and_hole() {
    let t = intersect_local(Shape::Torus, Vec3::new(1.0, 0.0, 5.0), -Vec3::Z);
    assert!(close(t, 4.6, 1e-3));
    let t = intersect_local(Shape::Torus, Vec3::new(5.0, 0.0, 0.0), -Vec3::X);
    assert!(close(t, 3.6, 1e-3));
    // straight through the hole
    assert!(intersect_local(Shape::Torus, Vec3::new(0.0, 0.0, 5.0), -Vec3::Z).is_none());
}

#[test]
fn placed_objects_respect_position_and_scale() {
    let ray = Ray::new(Vec3::new(0.0, 1.0, 10.0), -Vec3::Z);
    let t = intersect_object(&ray, Shape::Sphere, Vec3::new(0.0, 1.0, 0.0), Vec3::splat(2.0));
    assert!(close(t, 8.0, 1e-4));
    let t = intersect_object(&ray, Shape::Box, Vec3::new(0.0, 1.0, 0.0), Vec3::splat(1.1));
    assert!(close(t, 10.0 - 0.55, 1e-4));
    let t = intersect_object(&ray, Shape::Sphere, Vec3::new(3.0, 1.0, 0.0), Vec3::ONE);
    assert!(t.is_none());
}

#[test]
fn scene_hits_are_ordered_nearest_first() {
    let mut rng = make_rng(Some(1));
    let scene = Scene::demo(&mut rng, Rgb::WHITE);
    let ray = Ray::new(Vec3::new(-20.0, 1.0, 0.0), Vec3::X);
    let hits = scene.intersect(&ray);
    let order: Vec<usize> = hits.iter().map(|h| h.object.0).collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
    assert!(close(Some(hits[0].distance), 13.5, 1e-4));
    assert!(close(Some(hits[1].distance), 16.0, 1e-4));
    assert!(close(Some(hits[2].distance), 19.5, 1e-3));
    assert!(close(Some(hits[3].distance), 22.0, 1e-4));
    assert!(close(Some(hits[4].distance), 24.6, 1e-3));
    for pair in hits.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
}

#[test]
fn equal_distances_keep_collection_order() {
    let mut scene = Scene::empty(Rgb::WHITE);
    let m = Material::Outline { color: Rgb::WHITE };
    let a = scene.add_object(Shape::Sphere, Vec3::new(0.0, 0.0, 0.0), m);
    let b = scene.add_object(Shape::Sphere, Vec3::new(0.0, 0.0, 0.0), m);
    let hits = scene.intersect(&Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].object, a);
    assert_eq!(hits[1].object, b);
}
