//! Tesseract Rendering Library
//!
//! This crate draws the projected tesseract with wgpu: a translucent,
//! depth-shaded face pass followed by a wireframe pass.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`scene_matrices::SceneMatrices`] - fixed camera, world scale and projection
//! - [`pipeline::HypercubePipeline`] - face and wireframe pipelines
//! - [`renderer::HypercubeRenderer`] - owns the buffers and issues the draws

pub mod context;
pub mod pipeline;
pub mod renderer;
pub mod scene_matrices;
pub mod viewport;

pub use context::{ContextError, RenderContext};
pub use pipeline::{draw_calls, DrawCall, Primitive, SceneUniforms, Stream};
pub use renderer::{HypercubeRenderer, RenderDirty, DEFAULT_CLEAR_COLOR};
pub use scene_matrices::{CameraSettings, SceneMatrices};
pub use viewport::Viewport;
