use pick_core::constants::GROUND_SIZE;
use pick_core::geometry::ground_plane;
use pick_core::{MeshData, Shape, Vertex};
use wgpu::util::DeviceExt;

pub(crate) const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

pub(crate) fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    pub(crate) fn draw<'p>(&self, rpass: &mut wgpu::RenderPass<'p>) {
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// One uploaded mesh per primitive shape plus the ground plane.
pub(crate) struct MeshSet {
    shapes: Vec<(Shape, GpuMesh)>,
    pub(crate) ground: GpuMesh,
}

impl MeshSet {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let shapes = Shape::ALL
            .iter()
            .map(|&shape| {
                let label = format!("mesh_{:?}", shape);
                (shape, GpuMesh::upload(device, &label, &shape.mesh()))
            })
            .collect();
        let ground = GpuMesh::upload(device, "mesh_ground", &ground_plane(GROUND_SIZE));
        Self { shapes, ground }
    }

    pub(crate) fn get(&self, shape: Shape) -> Option<&GpuMesh> {
        self.shapes
            .iter()
            .find(|(s, _)| *s == shape)
            .map(|(_, mesh)| mesh)
    }
}
