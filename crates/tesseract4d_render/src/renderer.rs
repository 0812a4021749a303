//! Render coordinator for the hypercube
//!
//! Owns the GPU copies of both vertex streams, the scene matrices and the
//! draw plan. The host feeds it new streams and zoom factors during the
//! update phase; `prepare` flushes whatever changed and `render` records the
//! clear plus the two draws.

use bitflags::bitflags;
use tesseract4d_core::{ColorVertex, RenderStreams, Topology, VERTEX_COUNT};
use wgpu::util::DeviceExt;

use crate::pipeline::{draw_calls, DrawCall, HypercubePipeline, Stream};
use crate::scene_matrices::SceneMatrices;
use crate::viewport::Viewport;

/// Cornflower blue
pub const DEFAULT_CLEAR_COLOR: [f32; 4] = [0.392, 0.584, 0.929, 1.0];

bitflags! {
    /// GPU state that is out of date with the CPU side
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct RenderDirty: u8 {
        /// Nothing to upload
        const NONE = 0;
        /// Vertex streams changed and must be re-uploaded
        const GEOMETRY = 1 << 0;
        /// World or projection matrix changed
        const UNIFORMS = 1 << 1;
        /// Everything must be uploaded
        const ALL = Self::GEOMETRY.bits() | Self::UNIFORMS.bits();
    }
}

/// Vertex and index buffers for one stream
struct StreamBuffers {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
}

impl StreamBuffers {
    fn new(device: &wgpu::Device, label: &str, vertices: &[ColorVertex], indices: &[u16]) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", label)),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", label)),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self { vertices, indices }
    }
}

/// Draws the projected tesseract into a surface
pub struct HypercubeRenderer {
    pipeline: HypercubePipeline,
    faces: StreamBuffers,
    mesh: StreamBuffers,
    streams: RenderStreams,
    matrices: SceneMatrices,
    draws: [DrawCall; 2],
    clear_color: wgpu::Color,
    dirty: RenderDirty,
}

impl HypercubeRenderer {
    /// Create buffers and pipelines for the given topology and initial streams
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        sample_count: u32,
        topology: &Topology,
        streams: RenderStreams,
        matrices: SceneMatrices,
        clear_color: [f32; 4],
    ) -> Self {
        let draws = draw_calls(topology);
        let pipeline = HypercubePipeline::new(device, surface_format, sample_count, &draws);

        let faces = StreamBuffers::new(device, "Face", &streams.faces, topology.faces());
        let mesh = StreamBuffers::new(device, "Mesh", &streams.mesh, topology.edges());

        log::debug!(
            "Hypercube renderer ready: {} triangles, {} lines",
            draws[0].primitive_count(),
            draws[1].primitive_count()
        );

        Self {
            pipeline,
            faces,
            mesh,
            streams,
            matrices,
            draws,
            clear_color: wgpu::Color {
                r: clear_color[0] as f64,
                g: clear_color[1] as f64,
                b: clear_color[2] as f64,
                a: clear_color[3] as f64,
            },
            // Uniform buffer starts as identity matrices
            dirty: RenderDirty::UNIFORMS,
        }
    }

    /// Replace both vertex streams; uploaded on the next `prepare`
    pub fn set_streams(&mut self, streams: &RenderStreams) {
        self.streams.clone_from(streams);
        self.dirty |= RenderDirty::GEOMETRY;
    }

    /// Fold a zoom step into the world matrix
    pub fn scale_world(&mut self, factor: f32) {
        self.matrices.scale_world(factor);
        self.dirty |= RenderDirty::UNIFORMS;
    }

    /// Bring GPU state up to date for the next frame
    ///
    /// Recomputes the projection from the viewport's current aspect ratio
    /// and uploads whatever is dirty.
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, viewport: &impl Viewport) {
        let (width, height) = viewport.viewport_size();
        self.pipeline.ensure_targets(device, width, height);

        if self.matrices.update_from(viewport) {
            self.dirty |= RenderDirty::UNIFORMS;
        }

        if self.dirty.contains(RenderDirty::GEOMETRY) {
            upload_stream(queue, &self.faces, &self.streams.faces);
            upload_stream(queue, &self.mesh, &self.streams.mesh);
            log::debug!("Uploaded {} vertices per stream", VERTEX_COUNT);
        }

        if self.dirty.contains(RenderDirty::UNIFORMS) {
            self.pipeline.update_uniforms(queue, &self.matrices.uniforms());
        }

        self.dirty = RenderDirty::NONE;
    }

    /// Record the clear and both draws into `encoder`
    pub fn render(&self, encoder: &mut wgpu::CommandEncoder, surface_view: &wgpu::TextureView) {
        let Some(mut pass) = self.pipeline.begin_pass(encoder, surface_view, self.clear_color) else {
            log::warn!("Render targets missing; call prepare before render");
            return;
        };

        pass.set_bind_group(0, self.pipeline.bind_group(), &[]);

        for call in &self.draws {
            let buffers = match call.stream {
                Stream::Faces => &self.faces,
                Stream::Mesh => &self.mesh,
            };
            pass.set_pipeline(self.pipeline.pipeline_for(call));
            pass.set_vertex_buffer(0, buffers.vertices.slice(..));
            pass.set_index_buffer(buffers.indices.slice(..), wgpu::IndexFormat::Uint16);
            pass.draw_indexed(0..call.index_count, 0, 0..1);
        }
    }
}

fn upload_stream(queue: &wgpu::Queue, buffers: &StreamBuffers, vertices: &[ColorVertex]) {
    queue.write_buffer(&buffers.vertices, 0, bytemuck::cast_slice(vertices));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirty_flags() {
        let mut dirty = RenderDirty::NONE;
        assert!(dirty.is_empty());

        dirty |= RenderDirty::GEOMETRY;
        assert!(dirty.contains(RenderDirty::GEOMETRY));
        assert!(!dirty.contains(RenderDirty::UNIFORMS));

        dirty |= RenderDirty::UNIFORMS;
        assert_eq!(dirty, RenderDirty::ALL);
    }

    #[test]
    fn test_default_clear_color_is_cornflower_blue() {
        assert_eq!(DEFAULT_CLEAR_COLOR, [0.392, 0.584, 0.929, 1.0]);
    }

    #[test]
    fn test_stream_upload_is_copy_aligned() {
        // queue.write_buffer requires a multiple of COPY_BUFFER_ALIGNMENT
        let bytes = std::mem::size_of::<ColorVertex>() * VERTEX_COUNT;
        assert_eq!(bytes as u64 % wgpu::COPY_BUFFER_ALIGNMENT, 0);
    }
}
