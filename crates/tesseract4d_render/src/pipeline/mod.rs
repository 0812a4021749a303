//! Render pipeline components
//!
//! GPU data layouts, the per-frame draw plan, and the wgpu pipelines that
//! execute it.

pub mod types;
pub mod hypercube_pipeline;

pub use types::{
    draw_calls, vertex_buffer_layout, Blend, DrawCall, Primitive, SceneUniforms, Stream,
};
pub use hypercube_pipeline::{HypercubePipeline, DEPTH_FORMAT};
