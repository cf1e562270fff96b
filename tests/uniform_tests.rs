// Host-side tests for the GPU uniform layouts.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod uniforms {
    include!("../src/render/uniforms.rs");
}

use glam::{Mat4, Vec3, Vec4};
use pick_core::*;
use uniforms::*;

#[test]
fn layouts_match_wgsl_sizes() {
    // mat4x4 + five vec4
    assert_eq!(std::mem::size_of::<Globals>(), 144);
    // mat4x4 + three vec4
    assert_eq!(std::mem::size_of::<ObjectUniforms>(), 112);
    assert_eq!(std::mem::size_of::<PointInstance>(), 32);
    // fits one 256-byte dynamic-offset slot
    assert!(std::mem::size_of::<ObjectUniforms>() <= 256);
}

#[test]
fn globals_follow_the_camera() {
    let camera = Camera::default();
    let g = Globals::from_camera(&camera);
    assert_eq!(g.camera_pos, [0.0, 15.0, 25.0, 1.0]);
    assert_eq!(Mat4::from_cols_array_2d(&g.view_proj), camera.view_projection());
    let light = Vec3::new(g.light_dir[0], g.light_dir[1], g.light_dir[2]);
    assert!((light - Vec3::splat(1.0 / 3f32.sqrt())).length() < 1e-5);
    assert_eq!(g.light_dir[3], 1.0);
    assert!((g.ambient[0] - 0.5).abs() < 1e-4);
    // billboard axes are orthonormal and perpendicular to the view direction
    let right = Vec3::new(g.cam_right[0], g.cam_right[1], g.cam_right[2]);
    let up = Vec3::new(g.cam_up[0], g.cam_up[1], g.cam_up[2]);
    let forward = (camera.target - camera.eye).normalize();
    assert!((right.length() - 1.0).abs() < 1e-5);
    assert!((up.length() - 1.0).abs() < 1e-5);
    assert!(right.dot(up).abs() < 1e-5);
    assert!(right.dot(forward).abs() < 1e-5);
    assert!(up.y > 0.0);
}

#[test]
fn object_uniforms_carry_transform_and_material() {
    let mut rng = make_rng(Some(9));
    let scene = Scene::demo(&mut rng, Rgb::from_hex(0xffaa00));
    let mut object = scene.objects()[4].clone();
    object.scale = Vec3::splat(1.1);
    object.emissive = Rgb::from_hex(0x888888);
    let material = *scene.material(object.material).unwrap();

    let u = ObjectUniforms::for_object(&object, &material);
    let model = Mat4::from_cols_array_2d(&u.model);
    let p = model * Vec4::new(1.0, 0.0, 0.0, 1.0);
    assert!((p.truncate() - Vec3::new(6.0 + 1.1, 1.0, 0.0)).length() < 1e-5);
    assert_eq!(u.params[0], 0.4);
    assert_eq!(u.params[1], 0.2);
    assert!((u.emissive[0] - Rgb::from_hex(0x888888).to_linear()[0]).abs() < 1e-6);
    assert_eq!(u.color, linear_rgba(material.color()));
}

#[test]
fn outline_material_is_flat() {
    let outline = Material::Outline {
        color: Rgb::from_hex(0xffaa00),
    };
    let u = ObjectUniforms::new(Mat4::IDENTITY, &outline, Rgb::BLACK);
    assert_eq!(u.params[0], 0.0);
    assert_eq!(u.color[3], 1.0);
    assert!((u.color[0] - 1.0).abs() < 1e-4);
    assert_eq!(u.color[2], 0.0);
}

#[test]
fn point_instances_flatten_every_cloud() {
    let a = PointCloud {
        points: vec![Vec3::ZERO, Vec3::X],
        color: Rgb::WHITE,
        size: 0.1,
    };
    let b = PointCloud {
        points: vec![Vec3::Y],
        color: Rgb::BLACK,
        size: 0.2,
    };
    let instances = point_instances([&a, &b]);
    assert_eq!(instances.len(), 3);
    assert_eq!(instances[1].center_size, [1.0, 0.0, 0.0, 0.1]);
    assert_eq!(instances[2].center_size, [0.0, 1.0, 0.0, 0.2]);
    assert_eq!(instances[2].color, [0.0, 0.0, 0.0, 1.0]);
    assert!(point_instances(std::iter::empty::<&PointCloud>()).is_empty());
}
