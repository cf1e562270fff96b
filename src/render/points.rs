use super::helpers;
use super::uniforms::PointInstance;
use crate::constants::POINT_INSTANCE_CAPACITY;

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

/// Billboard pipeline for particle bursts; one instance per point.
pub(crate) struct PointResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) instance_buffer: wgpu::Buffer,
    capacity: usize,
    pub(crate) count: u32,
}

fn instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("point_instances"),
        size: (capacity * std::mem::size_of::<PointInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) fn create_point_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    globals_bgl: &wgpu::BindGroupLayout,
) -> PointResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(pick_core::POINTS_WGSL.into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[globals_bgl],
        push_constant_ranges: &[],
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<PointInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    }];
    let pipeline = helpers::make_depth_pipeline(
        device,
        "points_pipeline",
        &layout,
        &shader,
        "vs_points",
        "fs_points",
        &buffers,
        color_format,
        None,
    );
    PointResources {
        pipeline,
        instance_buffer: instance_buffer(device, POINT_INSTANCE_CAPACITY),
        capacity: POINT_INSTANCE_CAPACITY,
        count: 0,
    }
}

impl PointResources {
    /// Upload this frame's instances, growing the buffer when needed.
    pub(crate) fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[PointInstance],
    ) {
        if instances.len() > self.capacity {
            self.capacity = instances.len().next_power_of_two();
            self.instance_buffer = instance_buffer(device, self.capacity);
            log::debug!("[gpu] point buffer grown to {}", self.capacity);
        }
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
        }
        self.count = instances.len() as u32;
    }
}
