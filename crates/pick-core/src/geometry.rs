//! Indexed triangle meshes for the scene primitives.
//!
//! Dimensions follow the usual primitive defaults: unit box, unit sphere,
//! cone/cylinder of radius 1 and height 2 centred on the origin (cone apex
//! at +Y), torus of radius 1 and tube 0.4 lying in the XY plane.

use crate::constants::OBJECT_COUNT;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Box,
    Sphere,
    Cone,
    Cylinder,
    Torus,
}

impl Shape {
    /// Shapes in scene order, left to right.
    pub const ALL: [Shape; OBJECT_COUNT] = [
        Shape::Box,
        Shape::Sphere,
        Shape::Cone,
        Shape::Cylinder,
        Shape::Torus,
    ];

    pub fn mesh(self) -> MeshData {
        match self {
            Shape::Box => cuboid(1.0, 1.0, 1.0),
            Shape::Sphere => sphere(SPHERE_RADIUS, 32, 32),
            Shape::Cone => frustum(0.0, CONE_RADIUS, CONE_HEIGHT, 32),
            Shape::Cylinder => frustum(CYLINDER_RADIUS, CYLINDER_RADIUS, CYLINDER_HEIGHT, 32),
            Shape::Torus => torus(TORUS_RADIUS, TORUS_TUBE, 32, 100),
        }
    }

    /// Radius of a sphere around the local origin enclosing the unscaled shape.
    pub fn bounding_radius(self) -> f32 {
        match self {
            Shape::Box => 0.75_f32.sqrt(),
            Shape::Sphere => SPHERE_RADIUS,
            Shape::Cone => (CONE_RADIUS * CONE_RADIUS + 1.0).sqrt(),
            Shape::Cylinder => (CYLINDER_RADIUS * CYLINDER_RADIUS + 1.0).sqrt(),
            Shape::Torus => TORUS_RADIUS + TORUS_TUBE,
        }
    }
}

pub const SPHERE_RADIUS: f32 = 1.0;
pub const CONE_RADIUS: f32 = 1.0;
pub const CONE_HEIGHT: f32 = 2.0;
pub const CYLINDER_RADIUS: f32 = 1.0;
pub const CYLINDER_HEIGHT: f32 = 2.0;
pub const TORUS_RADIUS: f32 = 1.0;
pub const TORUS_TUBE: f32 = 0.4;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push(&mut self, position: [f32; 3], normal: [f32; 3]) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex { position, normal });
        index
    }

    fn quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }
}

pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let (hx, hy, hz) = (width / 2.0, height / 2.0, depth / 2.0);
    // (normal, u axis, v axis); corners are normal ± u ± v, wound counter-clockwise.
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let corner = |su: f32, sv: f32| {
            [
                (n[0] + u[0] * su + v[0] * sv) * hx,
                (n[1] + u[1] * su + v[1] * sv) * hy,
                (n[2] + u[2] * su + v[2] * sv) * hz,
            ]
        };
        let a = mesh.push(corner(-1.0, -1.0), n);
        let b = mesh.push(corner(1.0, -1.0), n);
        let c = mesh.push(corner(1.0, 1.0), n);
        let d = mesh.push(corner(-1.0, 1.0), n);
        mesh.quad(a, b, c, d);
    }
    mesh
}

pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let row = width_segments + 1;
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let polar = v * PI;
        for ix in 0..=width_segments {
            let u = ix as f32 / width_segments as f32;
            let azimuth = u * TAU;
            let n = [
                -azimuth.cos() * polar.sin(),
                polar.cos(),
                azimuth.sin() * polar.sin(),
            ];
            mesh.push([n[0] * radius, n[1] * radius, n[2] * radius], n);
        }
    }
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Capped frustum along Y; a zero top radius gives a cone (no top cap).
pub fn frustum(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height / 2.0;
    let slope = (radius_bottom - radius_top) / height;
    let row = radial_segments + 1;

    for iy in 0..=1u32 {
        let (y, radius) = if iy == 0 {
            (half, radius_top)
        } else {
            (-half, radius_bottom)
        };
        for ix in 0..=radial_segments {
            let theta = ix as f32 / radial_segments as f32 * TAU;
            let (s, c) = theta.sin_cos();
            let len = (1.0 + slope * slope).sqrt();
            mesh.push([radius * s, y, radius * c], [s / len, slope / len, c / len]);
        }
    }
    for ix in 0..radial_segments {
        let a = ix;
        let b = row + ix;
        let c = row + ix + 1;
        let d = ix + 1;
        mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    if radius_top > 0.0 {
        cap(&mut mesh, radius_top, half, 1.0, radial_segments);
    }
    if radius_bottom > 0.0 {
        cap(&mut mesh, radius_bottom, -half, -1.0, radial_segments);
    }
    mesh
}

fn cap(mesh: &mut MeshData, radius: f32, y: f32, sign: f32, radial_segments: u32) {
    let normal = [0.0, sign, 0.0];
    let centre = mesh.push([0.0, y, 0.0], normal);
    let first = mesh.vertices.len() as u32;
    for ix in 0..=radial_segments {
        let theta = ix as f32 / radial_segments as f32 * TAU;
        mesh.push([radius * theta.sin(), y, radius * theta.cos()], normal);
    }
    for ix in 0..radial_segments {
        let (a, b) = (first + ix, first + ix + 1);
        if sign > 0.0 {
            mesh.indices.extend_from_slice(&[a, b, centre]);
        } else {
            mesh.indices.extend_from_slice(&[b, a, centre]);
        }
    }
}

pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * TAU;
            let (su, cu) = u.sin_cos();
            let position = [
                (radius + tube * v.cos()) * cu,
                (radius + tube * v.cos()) * su,
                tube * v.sin(),
            ];
            let centre = [radius * cu, radius * su, 0.0];
            let n = [
                (position[0] - centre[0]) / tube,
                (position[1] - centre[1]) / tube,
                (position[2] - centre[2]) / tube,
            ];
            mesh.push(position, n);
        }
    }
    let row = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Square ground plane in XZ facing +Y.
pub fn ground_plane(size: f32) -> MeshData {
    let h = size / 2.0;
    let n = [0.0, 1.0, 0.0];
    let mut mesh = MeshData::default();
    let a = mesh.push([-h, 0.0, h], n);
    let b = mesh.push([h, 0.0, h], n);
    let c = mesh.push([h, 0.0, -h], n);
    let d = mesh.push([-h, 0.0, -h], n);
    mesh.quad(a, b, c, d);
    mesh
}
