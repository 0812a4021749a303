//! Pointer controller for drag-to-rotate input
//!
//! Controls:
//! - Left-click + drag: 3D rotation (XZ / YZ planes)
//! - Right-click + drag: W rotation (XW / YW planes)
//! - Scroll wheel: zoom in / out
//!
//! Cursor movement is measured between successive `CursorMoved` positions,
//! the same way absolute mouse state is diffed frame to frame.

use tesseract4d_core::{FrameInput, PointerButton, ScrollDirection};
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Accumulates pointer events between frames
#[derive(Debug, Default)]
pub struct PointerController {
    // Button state
    primary_pressed: bool,
    secondary_pressed: bool,

    // Last known cursor position in window pixels
    last_cursor: Option<(f64, f64)>,

    // Movement and scroll accumulated since the last frame
    pending_x: f64,
    pending_y: f64,
    pending_scroll: f32,
}

impl PointerController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Left => self.primary_pressed = pressed,
            MouseButton::Right => self.secondary_pressed = pressed,
            _ => {}
        }
    }

    /// Process a cursor position in window coordinates (y grows downward)
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        if let Some((last_x, last_y)) = self.last_cursor {
            self.pending_x += x - last_x;
            self.pending_y += y - last_y;
        }
        self.last_cursor = Some((x, y));
    }

    /// Forget the cursor position so re-entering the window does not jump
    pub fn process_cursor_left(&mut self) {
        self.last_cursor = None;
    }

    /// Process scroll wheel input
    pub fn process_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        self.pending_scroll += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
    }

    /// Button that currently selects the rotation planes; left wins over right
    pub fn button(&self) -> PointerButton {
        if self.primary_pressed {
            PointerButton::Primary
        } else if self.secondary_pressed {
            PointerButton::Secondary
        } else {
            PointerButton::None
        }
    }

    /// Hand over everything accumulated since the last call and reset
    ///
    /// Screen y is flipped so that dragging upward gives a positive `drag_y`.
    pub fn take_frame_input(&mut self) -> FrameInput {
        let input = FrameInput {
            drag_x: self.pending_x as f32,
            drag_y: -self.pending_y as f32,
            button: self.button(),
            scroll: ScrollDirection::from_delta(self.pending_scroll),
        };

        self.pending_x = 0.0;
        self.pending_y = 0.0;
        self.pending_scroll = 0.0;

        input
    }
}
