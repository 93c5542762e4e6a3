//! Forward renderer for the scene.
//!
//! One pipeline, one pass per frame. All visible nodes are collected from
//! the scene graph, their 256-byte uniform blocks written into a single
//! dynamic-offset buffer, and each draw binds the same bind group at a
//! different offset over the shared sphere geometry's three attribute
//! blocks. Texture bind groups (group 1) are created once at startup per
//! loaded image; untextured pivot nodes bind a 1x1 white fallback.

pub mod context;
pub mod settings;
pub mod texture;
pub mod uniforms;

use slotmap::SecondaryMap;
use wgpu::util::DeviceExt;

use crate::assets::{AssetServer, GeometryHandle, TextureHandle};
use crate::errors::{AstrofallError, Result};
use crate::scene::{Camera, NodeHandle, SceneGraph};

use self::context::WgpuContext;
use self::settings::RenderSettings;
use self::uniforms::{DrawUniforms, DRAW_UNIFORMS_SIZE};

/// Shared geometry uploaded as one packed buffer with three attribute
/// blocks, bound as three vertex-buffer slots.
struct GpuGeometry {
    buffer: wgpu::Buffer,
    vertex_count: u32,
    normals_offset: u64,
    uvs_offset: u64,
}

pub struct Renderer {
    pub context: WgpuContext,

    pipeline: wgpu::RenderPipeline,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,

    // Group 0: one uniform buffer, rebound per draw at a dynamic offset.
    draw_layout: wgpu::BindGroupLayout,
    draw_buffer: wgpu::Buffer,
    draw_bind_group: wgpu::BindGroup,
    draw_capacity: usize,

    geometries: SecondaryMap<GeometryHandle, GpuGeometry>,
    textures: SecondaryMap<TextureHandle, wgpu::BindGroup>,
    fallback_bind_group: wgpu::BindGroup,
}

impl Renderer {
    /// Builds the pipeline and uploads every asset. Shader validation
    /// failures are fatal and reported with the source path.
    pub fn new(context: WgpuContext, settings: &RenderSettings, assets: &AssetServer) -> Result<Self> {
        let device = &context.device;

        let source = std::fs::read_to_string(&settings.shader_path)?;

        // Scoped validation so a broken shader surfaces as an error instead
        // of a panic deep inside the first draw. The scope stays open until
        // the guard is popped, after module creation.
        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });
        if let Some(error) = pollster::block_on(scope.pop()) {
            return Err(AstrofallError::ShaderError {
                path: settings.shader_path.clone(),
                message: error.to_string(),
            });
        }

        let draw_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Draw BindGroup Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(DRAW_UNIFORMS_SIZE),
                },
                count: None,
            }],
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Texture BindGroup Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&draw_layout, &texture_layout],
            immediate_size: 0,
        });

        // Three planar attribute blocks out of one packed buffer.
        let vertex_buffers = [
            wgpu::VertexBufferLayout {
                array_stride: 12,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3],
            },
            wgpu::VertexBufferLayout {
                array_stride: 12,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![1 => Float32x3],
            },
            wgpu::VertexBufferLayout {
                array_stride: 8,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![2 => Float32x2],
            },
        ];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &vertex_buffers,
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.color_format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // The starfield sphere is viewed from the inside, so
                // backfaces must stay.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: context.depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Scene Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let draw_capacity = 64;
        let (draw_buffer, draw_bind_group) =
            Self::create_draw_buffer(device, &draw_layout, draw_capacity);

        let white_view = texture::white_fallback(device, &context.queue);
        let fallback_bind_group =
            Self::texture_bind_group(device, &texture_layout, &sampler, &white_view);

        let mut renderer = Self {
            context,
            pipeline,
            texture_layout,
            sampler,
            draw_layout,
            draw_buffer,
            draw_bind_group,
            draw_capacity,
            geometries: SecondaryMap::new(),
            textures: SecondaryMap::new(),
            fallback_bind_group,
        };

        renderer.upload_assets(assets);
        Ok(renderer)
    }

    /// Uploads every geometry and image the asset server holds.
    fn upload_assets(&mut self, assets: &AssetServer) {
        for (handle, geometry) in assets.iter_geometries() {
            let (_, normals_offset, uvs_offset) = geometry.block_offsets();
            let buffer = self
                .context
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Geometry Buffer"),
                    contents: &geometry.packed_bytes(),
                    usage: wgpu::BufferUsages::VERTEX,
                });
            self.geometries.insert(
                handle,
                GpuGeometry {
                    buffer,
                    vertex_count: geometry.vertex_count(),
                    normals_offset,
                    uvs_offset,
                },
            );
        }

        for (handle, image) in assets.iter_images() {
            let view = texture::upload_image(&self.context.device, &self.context.queue, image);
            let bind_group = Self::texture_bind_group(
                &self.context.device,
                &self.texture_layout,
                &self.sampler,
                &view,
            );
            self.textures.insert(handle, bind_group);
        }

        log::info!(
            "Uploaded {} geometries, {} textures",
            self.geometries.len(),
            self.textures.len()
        );
    }

    fn texture_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        view: &wgpu::TextureView,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Texture BindGroup"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    fn create_draw_buffer(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        capacity: usize,
    ) -> (wgpu::Buffer, wgpu::BindGroup) {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Draw Uniforms"),
            size: capacity as u64 * DRAW_UNIFORMS_SIZE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Draw BindGroup"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(DRAW_UNIFORMS_SIZE),
                }),
            }],
        });
        (buffer, bind_group)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    /// Draws one frame: the subtrees rooted at `roots`, in order.
    ///
    /// An empty root set still clears and presents — the post-impact
    /// blackout frames are content, not skipped work.
    pub fn render(&mut self, scene: &SceneGraph, roots: &[NodeHandle], camera: &Camera) {
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => {
                let (width, height) = self.context.size();
                self.resize(width, height);
                return;
            }
            Err(e) => {
                log::error!("Dropped frame: {e:?}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let draws = scene.collect_draws(roots, camera);

        if draws.len() > self.draw_capacity {
            self.draw_capacity = draws.len().next_power_of_two();
            log::info!("Growing draw uniform buffer to {} slots", self.draw_capacity);
            let (buffer, bind_group) = Self::create_draw_buffer(
                &self.context.device,
                &self.draw_layout,
                self.draw_capacity,
            );
            self.draw_buffer = buffer;
            self.draw_bind_group = bind_group;
        }

        for (i, call) in draws.iter().enumerate() {
            let uniforms = DrawUniforms::from_draw(call, camera);
            self.context.queue.write_buffer(
                &self.draw_buffer,
                i as u64 * DRAW_UNIFORMS_SIZE,
                bytemuck::bytes_of(&uniforms),
            );
        }

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.context.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.context.depth_texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_pipeline(&self.pipeline);

            for (i, call) in draws.iter().enumerate() {
                let Some(geometry) = self.geometries.get(call.geometry) else {
                    continue;
                };

                let offset = i as u32 * DRAW_UNIFORMS_SIZE as u32;
                pass.set_bind_group(0, &self.draw_bind_group, &[offset]);

                let texture_bind_group = call
                    .texture
                    .and_then(|handle| self.textures.get(handle))
                    .unwrap_or(&self.fallback_bind_group);
                pass.set_bind_group(1, texture_bind_group, &[]);

                pass.set_vertex_buffer(0, geometry.buffer.slice(..geometry.normals_offset));
                pass.set_vertex_buffer(
                    1,
                    geometry.buffer.slice(geometry.normals_offset..geometry.uvs_offset),
                );
                pass.set_vertex_buffer(2, geometry.buffer.slice(geometry.uvs_offset..));
                pass.draw(0..geometry.vertex_count, 0..1);
            }
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}
