//! Window management system
//!
//! Handles window creation, fullscreen toggle, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    shown_scale: Option<f32>,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        log::info!(
            "Created window {}x{}{}",
            config.width,
            config.height,
            if config.fullscreen { " (fullscreen)" } else { "" }
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
            shown_scale: None,
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.is_fullscreen() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        log::info!("Fullscreen: {}", if new_fullscreen.is_some() { "ON" } else { "OFF" });
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Return to windowed mode
    pub fn leave_fullscreen(&self) {
        if self.is_fullscreen() {
            log::info!("Fullscreen: OFF");
            self.window.set_fullscreen(None);
        }
    }

    /// Show the current scale factor in the title bar
    pub fn update_title(&mut self, scale: f32) {
        if self.shown_scale == Some(scale) {
            return;
        }
        self.window.set_title(&format_title(&self.base_title, scale));
        self.shown_scale = Some(scale);
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Title text for a given scale factor
pub fn format_title(base: &str, scale: f32) -> String {
    format!("{} - Scale: {:.2} [drag: rotate, wheel: zoom, F11: fullscreen]", base, scale)
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
