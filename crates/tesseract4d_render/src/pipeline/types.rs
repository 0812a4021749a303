//! GPU-compatible data types and the per-frame draw plan
//!
//! Uniform and vertex layouts match `hypercube.wgsl` exactly.

use bytemuck::{Pod, Zeroable};
use tesseract4d_core::{ColorVertex, Topology};
use tesseract4d_math::mat4::{self, Mat4};

/// Scene matrices as the vertex shader sees them
/// Layout: 192 bytes total (must match hypercube.wgsl SceneUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Model scale (64 bytes)
    pub world: Mat4,
    /// Camera view (64 bytes)
    pub view: Mat4,
    /// Perspective projection (64 bytes)
    pub projection: Mat4,
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self {
            world: mat4::IDENTITY,
            view: mat4::IDENTITY,
            projection: mat4::IDENTITY,
        }
    }
}

/// Vertex buffer layout for [`ColorVertex`]
pub fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ColorVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32>
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // color: vec4<f32>
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x4,
                offset: 12,
                shader_location: 1,
            },
        ],
    }
}

/// Which of the two vertex/index stream pairs a draw reads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    /// Shaded cell faces
    Faces,
    /// Wireframe edges
    Mesh,
}

/// Primitive assembly for a draw
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    TriangleList,
    LineList,
}

impl Primitive {
    /// Indices consumed by one primitive
    pub const fn indices_per_primitive(self) -> u32 {
        match self {
            Primitive::TriangleList => 3,
            Primitive::LineList => 2,
        }
    }

    pub fn topology(self) -> wgpu::PrimitiveTopology {
        match self {
            Primitive::TriangleList => wgpu::PrimitiveTopology::TriangleList,
            Primitive::LineList => wgpu::PrimitiveTopology::LineList,
        }
    }
}

/// How a pass combines its output with what is already drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    /// Source-over with premultiplied alpha: source color is added at full
    /// strength and the destination is kept at `1 - alpha`
    ///
    /// Vertex colors are not premultiplied, so bright faces saturate toward
    /// white where they overlap.
    PremultipliedAlpha,
}

impl Blend {
    pub fn state(self) -> wgpu::BlendState {
        match self {
            Blend::PremultipliedAlpha => wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        }
    }
}

/// One indexed draw of a stream
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawCall {
    pub stream: Stream,
    pub primitive: Primitive,
    pub blend: Blend,
    /// Number of indices read from the stream's index buffer
    pub index_count: u32,
}

impl DrawCall {
    /// Number of triangles or lines this draw emits
    pub fn primitive_count(&self) -> u32 {
        self.index_count / self.primitive.indices_per_primitive()
    }
}

/// Draws issued every frame, in order: translucent faces, then the wireframe
pub fn draw_calls(topology: &Topology) -> [DrawCall; 2] {
    [
        DrawCall {
            stream: Stream::Faces,
            primitive: Primitive::TriangleList,
            blend: Blend::PremultipliedAlpha,
            index_count: topology.faces().len() as u32,
        },
        DrawCall {
            stream: Stream::Mesh,
            primitive: Primitive::LineList,
            blend: Blend::PremultipliedAlpha,
            index_count: topology.edges().len() as u32,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_scene_uniforms_size() {
        assert_eq!(size_of::<SceneUniforms>(), 192);
        // Uniform buffers must be a multiple of 16 bytes
        assert_eq!(size_of::<SceneUniforms>() % 16, 0);
    }

    #[test]
    fn test_vertex_buffer_layout_stride() {
        let layout = vertex_buffer_layout();
        assert_eq!(layout.array_stride, size_of::<ColorVertex>() as u64);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 12);
    }

    #[test]
    fn test_draw_plan_order_and_counts() {
        let calls = draw_calls(&Topology::new());

        assert_eq!(calls[0].stream, Stream::Faces);
        assert_eq!(calls[0].primitive, Primitive::TriangleList);
        assert_eq!(calls[0].index_count, 144);
        assert_eq!(calls[0].primitive_count(), 48);

        assert_eq!(calls[1].stream, Stream::Mesh);
        assert_eq!(calls[1].primitive, Primitive::LineList);
        assert_eq!(calls[1].index_count, 64);
        assert_eq!(calls[1].primitive_count(), 32);
    }

    #[test]
    fn test_both_passes_premultiplied_blend() {
        for call in draw_calls(&Topology::new()) {
            assert_eq!(call.blend, Blend::PremultipliedAlpha);
            assert_eq!(call.blend.state(), wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING);
        }
    }

    #[test]
    fn test_premultiplied_factors() {
        // One * src + (1 - src_alpha) * dst
        let color = Blend::PremultipliedAlpha.state().color;
        assert_eq!(color.src_factor, wgpu::BlendFactor::One);
        assert_eq!(color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
        assert_eq!(color.operation, wgpu::BlendOperation::Add);
    }

    #[test]
    fn test_primitive_topology() {
        assert_eq!(Primitive::TriangleList.topology(), wgpu::PrimitiveTopology::TriangleList);
        assert_eq!(Primitive::LineList.topology(), wgpu::PrimitiveTopology::LineList);
    }
}
