//! Render pipelines for the projected tesseract
//!
//! Two pipelines share one shader module and one uniform bind group. They
//! differ only in primitive assembly: triangles for the faces, lines for the
//! wireframe. Depth is tested but never written, so translucent faces do not
//! hide each other.

use wgpu::util::DeviceExt;

use super::types::{vertex_buffer_layout, DrawCall, Primitive, SceneUniforms};

/// Depth buffer format shared by both pipelines
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Offscreen attachments sized to the surface
struct RenderTargets {
    depth: wgpu::TextureView,
    /// Multisampled color target, resolved into the surface (None at 1x)
    msaa: Option<wgpu::TextureView>,
    size: (u32, u32),
}

/// Face and wireframe pipelines plus the resources they share
pub struct HypercubePipeline {
    face_pipeline: wgpu::RenderPipeline,
    mesh_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    surface_format: wgpu::TextureFormat,
    sample_count: u32,
    targets: Option<RenderTargets>,
}

impl HypercubePipeline {
    /// Create both pipelines for the given surface format and MSAA sample count
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        sample_count: u32,
        draws: &[DrawCall; 2],
    ) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Hypercube Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Hypercube Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Hypercube Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/hypercube.wgsl").into()),
        });

        let build = |call: &DrawCall, label: &str| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[vertex_buffer_layout()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(call.blend.state()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: call.primitive.topology(),
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    // Both windings of every face are visible through the others
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DEPTH_FORMAT,
                    depth_write_enabled: false,
                    depth_compare: wgpu::CompareFunction::LessEqual,
                    stencil: wgpu::StencilState::default(),
                    bias: wgpu::DepthBiasState::default(),
                }),
                multisample: wgpu::MultisampleState {
                    count: sample_count,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        let face_pipeline = build(&draws[0], "Hypercube Face Pipeline");
        let mesh_pipeline = build(&draws[1], "Hypercube Mesh Pipeline");

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Hypercube Uniform Buffer"),
            contents: bytemuck::bytes_of(&SceneUniforms::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Hypercube Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            face_pipeline,
            mesh_pipeline,
            uniform_buffer,
            bind_group,
            surface_format,
            sample_count,
            targets: None,
        }
    }

    /// Pipeline matching a draw's primitive assembly
    pub fn pipeline_for(&self, call: &DrawCall) -> &wgpu::RenderPipeline {
        match call.primitive {
            Primitive::TriangleList => &self.face_pipeline,
            Primitive::LineList => &self.mesh_pipeline,
        }
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }

    /// Upload new scene matrices
    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &SceneUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Ensure depth and multisample targets exist and match the surface size
    pub fn ensure_targets(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let size = (width.max(1), height.max(1));
        if self.targets.as_ref().is_some_and(|t| t.size == size) {
            return;
        }

        let extent = wgpu::Extent3d {
            width: size.0,
            height: size.1,
            depth_or_array_layers: 1,
        };

        let depth = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Hypercube Depth Texture"),
            size: extent,
            mip_level_count: 1,
            sample_count: self.sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        let msaa = (self.sample_count > 1).then(|| {
            device
                .create_texture(&wgpu::TextureDescriptor {
                    label: Some("Hypercube MSAA Texture"),
                    size: extent,
                    mip_level_count: 1,
                    sample_count: self.sample_count,
                    dimension: wgpu::TextureDimension::D2,
                    format: self.surface_format,
                    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                    view_formats: &[],
                })
                .create_view(&wgpu::TextureViewDescriptor::default())
        });

        log::debug!("Render targets resized to {}x{} ({}x MSAA)", size.0, size.1, self.sample_count);

        self.targets = Some(RenderTargets {
            depth: depth.create_view(&wgpu::TextureViewDescriptor::default()),
            msaa,
            size,
        });
    }

    /// Begin the single pass that clears the frame and receives both draws
    ///
    /// Returns None until [`Self::ensure_targets`] has been called.
    pub fn begin_pass<'e>(
        &self,
        encoder: &'e mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
        clear_color: wgpu::Color,
    ) -> Option<wgpu::RenderPass<'e>> {
        let targets = self.targets.as_ref()?;

        let (view, resolve_target) = match &targets.msaa {
            Some(msaa) => (msaa, Some(surface_view)),
            None => (surface_view, None),
        };

        Some(encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Hypercube Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &targets.depth,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        }))
    }
}
