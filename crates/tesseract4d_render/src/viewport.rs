//! Output size capability queried by the renderer

/// Something that knows the pixel size of the image being drawn
pub trait Viewport {
    /// Current output size in pixels (width, height)
    fn viewport_size(&self) -> (u32, u32);

    /// Width over height; a zero height is treated as one pixel
    fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.viewport_size();
        width as f32 / height.max(1) as f32
    }
}

impl Viewport for (u32, u32) {
    fn viewport_size(&self) -> (u32, u32) {
        *self
    }
}
