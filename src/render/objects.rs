use super::helpers;
use super::meshes;
use super::uniforms::{Globals, ObjectUniforms};
use crate::constants::OBJECT_UNIFORM_STRIDE;

/// Globals, per-object uniforms and the two mesh pipelines.
///
/// Object slots live in one buffer at `OBJECT_UNIFORM_STRIDE` intervals and
/// are selected per draw with a dynamic offset.
pub(crate) struct ObjectResources {
    pub(crate) globals_bgl: wgpu::BindGroupLayout,
    pub(crate) globals_buffer: wgpu::Buffer,
    pub(crate) globals_bg: wgpu::BindGroup,
    pub(crate) object_buffer: wgpu::Buffer,
    pub(crate) object_bg: wgpu::BindGroup,
    pub(crate) slots: u64,
    /// Standard material: lit, back faces culled.
    pub(crate) lit_pipeline: wgpu::RenderPipeline,
    /// Outline material: flat colour, front faces culled so only the back shell shows.
    pub(crate) outline_pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_object_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    slots: u64,
) -> ObjectResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(pick_core::SCENE_WGSL.into()),
    });
    let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("globals_bgl"),
        entries: &[helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX_FRAGMENT,
            None,
        )],
    });
    let object_size = std::mem::size_of::<ObjectUniforms>() as u64;
    let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("object_bgl"),
        entries: &[helpers::uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX_FRAGMENT,
            Some(object_size),
        )],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&globals_bgl, &object_bgl],
        push_constant_ranges: &[],
    });

    let buffers = [meshes::vertex_layout()];
    let lit_pipeline = helpers::make_depth_pipeline(
        device,
        "lit_pipeline",
        &layout,
        &shader,
        "vs_main",
        "fs_lit",
        &buffers,
        color_format,
        Some(wgpu::Face::Back),
    );
    let outline_pipeline = helpers::make_depth_pipeline(
        device,
        "outline_pipeline",
        &layout,
        &shader,
        "vs_main",
        "fs_unlit",
        &buffers,
        color_format,
        Some(wgpu::Face::Front),
    );

    let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("globals"),
        size: std::mem::size_of::<Globals>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("globals_bg"),
        layout: &globals_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: globals_buffer.as_entire_binding(),
        }],
    });

    let slots = slots.max(1);
    let object_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("object_uniforms"),
        size: OBJECT_UNIFORM_STRIDE * slots,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let object_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("object_bg"),
        layout: &object_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &object_buffer,
                offset: 0,
                size: wgpu::BufferSize::new(object_size),
            }),
        }],
    });

    ObjectResources {
        globals_bgl,
        globals_buffer,
        globals_bg,
        object_buffer,
        object_bg,
        slots,
        lit_pipeline,
        outline_pipeline,
    }
}

impl ObjectResources {
    #[inline]
    pub(crate) fn slot_offset(slot: u64) -> u32 {
        (slot * OBJECT_UNIFORM_STRIDE) as u32
    }

    pub(crate) fn write_slot(&self, queue: &wgpu::Queue, slot: u64, uniforms: &ObjectUniforms) {
        if slot >= self.slots {
            log::warn!("[gpu] object slot {} out of range ({})", slot, self.slots);
            return;
        }
        queue.write_buffer(
            &self.object_buffer,
            slot * OBJECT_UNIFORM_STRIDE,
            bytemuck::bytes_of(uniforms),
        );
    }
}
