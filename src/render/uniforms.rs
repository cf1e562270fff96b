// CPU-side layouts for the WGSL uniform and instance structs.
// Field order and padding must match `shaders/scene.wgsl` and
// `shaders/points.wgsl`.

use glam::{Mat4, Vec3};
use pick_core::constants::{AMBIENT_INTENSITY, DIRECTIONAL_INTENSITY, DIRECTIONAL_POSITION};
use pick_core::{Camera, Material, PickableObject, PointCloud, Rgb};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Globals {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    /// xyz towards the light, w intensity
    pub light_dir: [f32; 4],
    pub ambient: [f32; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
}

impl Globals {
    pub fn from_camera(camera: &Camera) -> Self {
        let (right, up) = camera.billboard_axes();
        let light = Vec3::from(DIRECTIONAL_POSITION).normalize();
        let ambient = Rgb::WHITE.to_linear().map(|c| c * AMBIENT_INTENSITY);
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            light_dir: light.extend(DIRECTIONAL_INTENSITY).to_array(),
            ambient: [ambient[0], ambient[1], ambient[2], 1.0],
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub emissive: [f32; 4],
    /// x metalness, y roughness
    pub params: [f32; 4],
}

impl ObjectUniforms {
    pub fn new(model: Mat4, material: &Material, emissive: Rgb) -> Self {
        let (metalness, roughness) = match *material {
            Material::Standard {
                metalness,
                roughness,
                ..
            } => (metalness, roughness),
            Material::Outline { .. } => (0.0, 1.0),
        };
        Self {
            model: model.to_cols_array_2d(),
            color: linear_rgba(material.color()),
            emissive: linear_rgba(emissive),
            params: [metalness, roughness, 0.0, 0.0],
        }
    }

    /// Uniforms for a pickable object drawn with `material` (its current one).
    pub fn for_object(object: &PickableObject, material: &Material) -> Self {
        Self::new(object_model(object), material, object.emissive)
    }
}

#[inline]
pub fn object_model(object: &PickableObject) -> Mat4 {
    Mat4::from_translation(object.position) * Mat4::from_scale(object.scale)
}

/// One camera-facing quad per burst point.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointInstance {
    pub center_size: [f32; 4],
    pub color: [f32; 4],
}

pub fn point_instances<'a>(clouds: impl IntoIterator<Item = &'a PointCloud>) -> Vec<PointInstance> {
    let mut out = Vec::new();
    for cloud in clouds {
        let color = linear_rgba(cloud.color);
        out.extend(cloud.points.iter().map(|p| PointInstance {
            center_size: p.extend(cloud.size).to_array(),
            color,
        }));
    }
    out
}

#[inline]
pub fn linear_rgba(color: Rgb) -> [f32; 4] {
    let [r, g, b] = color.to_linear();
    [r, g, b, 1.0]
}
