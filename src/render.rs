use pick_core::constants::BACKGROUND_COLOR;
use pick_core::{Rgb, Scene, SceneEngine};
use web_sys as web;

mod helpers;
mod meshes;
mod objects;
mod points;
mod targets;
pub mod uniforms;

use meshes::MeshSet;
use objects::{create_object_resources, ObjectResources};
use points::{create_point_resources, PointResources};
use targets::DepthTarget;
use uniforms::{point_instances, Globals, ObjectUniforms};

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    objects: ObjectResources,
    points: PointResources,
    meshes: MeshSet,
    depth: DepthTarget,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    /// Acquire an adapter and device for `canvas` and build every pipeline
    /// needed to draw `scene`.
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &Scene) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        // objects + ground
        let slots = scene.objects().len() as u64 + 1;
        let objects = create_object_resources(&device, format, slots);
        let points = create_point_resources(&device, format, &objects.globals_bgl);
        let meshes = MeshSet::new(&device);
        let depth = DepthTarget::new(&device, width, height);

        let [r, g, b] = Rgb::from_hex(BACKGROUND_COLOR).to_linear();
        Ok(Self {
            surface,
            device,
            queue,
            config,
            objects,
            points,
            meshes,
            depth,
            width,
            height,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw the ground, every pickable object with its current material and
    /// any live particle bursts.
    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        let (w, h) = scene.viewport();
        self.resize_if_needed(w, h);

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.objects.globals_buffer,
            0,
            bytemuck::bytes_of(&Globals::from_camera(scene.camera())),
        );

        // slot per object, ground in the last slot
        let mut draws = Vec::with_capacity(scene.objects().len());
        for (slot, object) in scene.objects().iter().enumerate() {
            let Some(material) = scene.material(object.material) else {
                continue;
            };
            let slot = slot as u64;
            self.objects.write_slot(
                &self.queue,
                slot,
                &ObjectUniforms::for_object(object, material),
            );
            draws.push((slot, object.shape, material.is_outline()));
        }
        let ground_slot = scene.objects().len() as u64;
        let ground = scene.material(scene.ground_material()).map(|m| {
            ObjectUniforms::new(glam::Mat4::IDENTITY, m, Rgb::BLACK)
        });
        if let Some(uniforms) = &ground {
            self.objects.write_slot(&self.queue, ground_slot, uniforms);
        }

        let instances = point_instances(scene.point_clouds().map(|(_, cloud)| cloud));
        self.points.upload(&self.device, &self.queue, &instances);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.objects.globals_bg, &[]);

            if ground.is_some() {
                rpass.set_pipeline(&self.objects.lit_pipeline);
                rpass.set_bind_group(
                    1,
                    &self.objects.object_bg,
                    &[ObjectResources::slot_offset(ground_slot)],
                );
                self.meshes.ground.draw(&mut rpass);
            }

            for (slot, shape, outline) in draws {
                let Some(mesh) = self.meshes.get(shape) else {
                    continue;
                };
                rpass.set_pipeline(if outline {
                    &self.objects.outline_pipeline
                } else {
                    &self.objects.lit_pipeline
                });
                rpass.set_bind_group(
                    1,
                    &self.objects.object_bg,
                    &[ObjectResources::slot_offset(slot)],
                );
                mesh.draw(&mut rpass);
            }

            if self.points.count > 0 {
                rpass.set_pipeline(&self.points.pipeline);
                rpass.set_vertex_buffer(0, self.points.instance_buffer.slice(..));
                rpass.draw(0..6, 0..self.points.count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
