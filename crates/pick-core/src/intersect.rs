//! Ray/primitive intersection.
//!
//! Objects are translated and scaled (never rotated), so a world ray is
//! mapped into the unscaled local frame by `(p - position) / scale`. The
//! local direction is left unnormalized, which keeps every returned `t` in
//! world-space distance along the original (normalized) ray.

use crate::camera::Ray;
use crate::constants::{TORUS_MARCH_EPSILON, TORUS_MARCH_STEPS};
use crate::geometry::{
    Shape, CONE_HEIGHT, CONE_RADIUS, CYLINDER_HEIGHT, CYLINDER_RADIUS, SPHERE_RADIUS, TORUS_RADIUS,
    TORUS_TUBE,
};
use glam::{Vec2, Vec3};

/// Nearest non-negative distance at which `ray` meets the placed shape.
pub fn intersect_object(ray: &Ray, shape: Shape, position: Vec3, scale: Vec3) -> Option<f32> {
    if scale.min_element() <= 0.0 {
        return None;
    }
    let bound = shape.bounding_radius() * scale.max_element();
    ray_sphere(ray.origin, ray.dir, position, bound)?;
    let origin = (ray.origin - position) / scale;
    let dir = ray.dir / scale;
    intersect_local(shape, origin, dir)
}

pub fn intersect_local(shape: Shape, origin: Vec3, dir: Vec3) -> Option<f32> {
    match shape {
        Shape::Box => ray_box(origin, dir, Vec3::splat(0.5)),
        Shape::Sphere => ray_sphere(origin, dir, Vec3::ZERO, SPHERE_RADIUS),
        Shape::Cylinder => ray_cylinder(origin, dir, CYLINDER_RADIUS, CYLINDER_HEIGHT / 2.0),
        Shape::Cone => ray_cone(origin, dir, CONE_RADIUS, CONE_HEIGHT),
        Shape::Torus => ray_torus(origin, dir, TORUS_RADIUS, TORUS_TUBE),
    }
}

/// Ray/sphere test; a ray starting inside the sphere reports its exit point.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let (near, far) = solve_quadratic(
        ray_dir.length_squared(),
        oc.dot(ray_dir),
        oc.length_squared() - radius * radius,
    )?;
    first_non_negative([near, far])
}

/// Slab test against the box `[-half, half]`.
pub fn ray_box(origin: Vec3, dir: Vec3, half: Vec3) -> Option<f32> {
    let inv = dir.recip();
    let t0 = (-half - origin) * inv;
    let t1 = (half - origin) * inv;
    let near = t0.min(t1).max_element();
    let far = t0.max(t1).min_element();
    if near > far || far < 0.0 {
        return None;
    }
    Some(if near >= 0.0 { near } else { far })
}

/// Capped cylinder around Y spanning `[-half_height, half_height]`.
pub fn ray_cylinder(origin: Vec3, dir: Vec3, radius: f32, half_height: f32) -> Option<f32> {
    let mut best: Option<f32> = None;
    let flat_o = Vec2::new(origin.x, origin.z);
    let flat_d = Vec2::new(dir.x, dir.z);
    if let Some((t0, t1)) = solve_quadratic(
        flat_d.length_squared(),
        flat_o.dot(flat_d),
        flat_o.length_squared() - radius * radius,
    ) {
        for t in [t0, t1] {
            let y = origin.y + t * dir.y;
            if y.abs() <= half_height {
                keep_nearest(&mut best, t);
            }
        }
    }
    for cap_y in [half_height, -half_height] {
        if let Some(t) = ray_disc(origin, dir, cap_y, radius) {
            keep_nearest(&mut best, t);
        }
    }
    best
}

/// Cone around Y with base `radius` at `-height/2` and apex at `+height/2`.
pub fn ray_cone(origin: Vec3, dir: Vec3, radius: f32, height: f32) -> Option<f32> {
    let half = height / 2.0;
    let k = radius / height;
    let k2 = k * k;
    // distance below the apex along -Y
    let q = half - origin.y;
    let dq = -dir.y;
    let a = dir.x * dir.x + dir.z * dir.z - k2 * dq * dq;
    let b = origin.x * dir.x + origin.z * dir.z - k2 * q * dq;
    let c = origin.x * origin.x + origin.z * origin.z - k2 * q * q;

    let mut best: Option<f32> = None;
    let mut side = |t: f32| {
        let y = origin.y + t * dir.y;
        if (-half..=half).contains(&y) {
            keep_nearest(&mut best, t);
        }
    };
    if a.abs() < 1e-8 {
        if b.abs() > 1e-8 {
            side(-c / (2.0 * b));
        }
    } else if let Some((t0, t1)) = solve_quadratic(a, b, c) {
        side(t0);
        side(t1);
    }
    if let Some(t) = ray_disc(origin, dir, -half, radius) {
        keep_nearest(&mut best, t);
    }
    best
}

/// Torus in the XY plane, found by sphere tracing its signed distance.
pub fn ray_torus(origin: Vec3, dir: Vec3, radius: f32, tube: f32) -> Option<f32> {
    let scale = dir.length();
    if scale == 0.0 {
        return None;
    }
    let unit = dir / scale;
    let bound = radius + tube;
    let oc = origin;
    let (enter, exit) = solve_quadratic(1.0, oc.dot(unit), oc.length_squared() - bound * bound)?;
    if exit < 0.0 {
        return None;
    }
    let mut t = enter.max(0.0);
    for _ in 0..TORUS_MARCH_STEPS {
        let d = torus_distance(origin + unit * t, radius, tube);
        if d < TORUS_MARCH_EPSILON {
            return Some(t / scale);
        }
        t += d;
        if t > exit {
            return None;
        }
    }
    None
}

#[inline]
pub fn torus_distance(p: Vec3, radius: f32, tube: f32) -> f32 {
    Vec2::new(Vec2::new(p.x, p.y).length() - radius, p.z).length() - tube
}

fn ray_disc(origin: Vec3, dir: Vec3, y: f32, radius: f32) -> Option<f32> {
    if dir.y.abs() < 1e-8 {
        return None;
    }
    let t = (y - origin.y) / dir.y;
    if t < 0.0 {
        return None;
    }
    let p = origin + dir * t;
    (p.x * p.x + p.z * p.z <= radius * radius).then_some(t)
}

/// Roots of `a t^2 + 2 b t + c = 0`, smaller first.
#[inline]
fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    if a.abs() < f32::EPSILON {
        return None;
    }
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let t0 = (-b - root) / a;
    let t1 = (-b + root) / a;
    Some(if t0 <= t1 { (t0, t1) } else { (t1, t0) })
}

#[inline]
fn first_non_negative(ts: [f32; 2]) -> Option<f32> {
    ts.into_iter().find(|t| *t >= 0.0)
}

#[inline]
fn keep_nearest(best: &mut Option<f32>, t: f32) {
    if t >= 0.0 && best.map_or(true, |b| t < b) {
        *best = Some(t);
    }
}
