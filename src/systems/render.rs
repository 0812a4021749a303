//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The hypercube renderer and its buffers
//! - Frame submission and surface error mapping

use std::sync::Arc;
use winit::window::Window;
use tesseract4d_core::{RenderStreams, Topology};
use tesseract4d_render::{ContextError, HypercubeRenderer, RenderContext, SceneMatrices};
use crate::config::AppConfig;
use super::SimulationResult;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            other => RenderError::Other(format!("{:?}", other)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    renderer: HypercubeRenderer,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        config: &AppConfig,
        streams: &RenderStreams,
    ) -> Result<Self, ContextError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, config.window.vsync))?;

        let matrices = SceneMatrices::new(
            config.camera.to_camera_settings(),
            config.hypercube.scale(),
        );

        let renderer = HypercubeRenderer::new(
            &context.device,
            context.config.format,
            config.rendering.sample_count(),
            &Topology::new(),
            streams.clone(),
            matrices,
            config.rendering.background_color,
        );

        Ok(Self { context, renderer })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Recreate the swapchain after it was lost
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Hand the outcome of a simulation frame to the renderer
    pub fn apply(&mut self, result: &SimulationResult, streams: &RenderStreams) {
        if let Some(factor) = result.world_scale {
            self.renderer.scale_world(factor);
        }
        if result.geometry_dirty {
            self.renderer.set_streams(streams);
        }
    }

    /// Render a single frame
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        self.renderer
            .prepare(&self.context.device, &self.context.queue, &self.context);

        let output = self.context.surface.get_current_texture()?;

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view);

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}
