//! Abstract per-frame input
//!
//! The host polls the real devices and hands the core one [`FrameInput`]
//! per frame. Nothing in here knows about winit.

/// Zoom multiplier for one scroll notch
pub const ZOOM_STEP: f32 = 1.1;

/// Which pointer button is held while dragging
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    None,
    /// Rotates in the XZ and YZ planes
    Primary,
    /// Rotates in the XW and YW planes
    Secondary,
}

/// Sign of the scroll wheel movement during a frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    None,
    Up,
    Down,
}

impl ScrollDirection {
    /// Classify a raw wheel delta by its sign
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            ScrollDirection::Up
        } else if delta < 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::None
        }
    }

    /// Scale multiplier for this direction: 1.1 up, 1/1.1 down, 1 otherwise
    pub fn scale_factor(self) -> f32 {
        match self {
            ScrollDirection::Up => ZOOM_STEP,
            ScrollDirection::Down => 1.0 / ZOOM_STEP,
            ScrollDirection::None => 1.0,
        }
    }
}

/// Everything the core needs from the input devices for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Horizontal pointer movement in pixels, positive to the right
    pub drag_x: f32,
    /// Vertical pointer movement in pixels, positive upward
    pub drag_y: f32,
    pub button: PointerButton,
    pub scroll: ScrollDirection,
}

impl FrameInput {
    /// True when applying this input cannot change anything
    pub fn is_idle(&self) -> bool {
        self.scroll == ScrollDirection::None
            && (self.button == PointerButton::None || (self.drag_x == 0.0 && self.drag_y == 0.0))
    }
}
