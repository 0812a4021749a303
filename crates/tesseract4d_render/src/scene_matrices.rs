//! World, view and projection matrices for the 3D scene
//!
//! The camera never moves: it sits on the +Z axis looking at the origin.
//! Zoom is expressed as an accumulated uniform scale on the world matrix,
//! while the 4D vertices carry the same scale so rotation speed follows it.

use tesseract4d_math::mat4::{self, Mat4};

use crate::pipeline::SceneUniforms;
use crate::viewport::Viewport;

/// Fixed camera parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    /// Distance from the origin along +Z
    pub distance: f32,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            distance: 10.0,
            fov_y_degrees: 45.0,
            near: 1.0,
            far: 200.0,
        }
    }
}

/// The three matrices fed to the vertex shader
#[derive(Clone, Debug)]
pub struct SceneMatrices {
    settings: CameraSettings,
    world: Mat4,
    view: Mat4,
    projection: Mat4,
    aspect: f32,
}

impl SceneMatrices {
    /// Matrices for a 1:1 viewport with the world pre-scaled by `initial_scale`
    pub fn new(settings: CameraSettings, initial_scale: f32) -> Self {
        let view = mat4::look_at([0.0, 0.0, settings.distance], [0.0; 3], [0.0, 1.0, 0.0]);
        let mut matrices = Self {
            settings,
            world: mat4::scale(initial_scale),
            view,
            projection: mat4::IDENTITY,
            aspect: 1.0,
        };
        matrices.rebuild_projection();
        matrices
    }

    pub fn world(&self) -> Mat4 {
        self.world
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Multiply the world matrix by a uniform scale
    pub fn scale_world(&mut self, factor: f32) {
        self.world = mat4::mul(self.world, mat4::scale(factor));
    }

    /// Recompute the projection for a new output size
    ///
    /// Returns true when the aspect ratio actually changed.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        self.update_from(&(width, height))
    }

    /// Recompute the projection from anything that reports an output size
    pub fn update_from(&mut self, viewport: &impl Viewport) -> bool {
        let aspect = viewport.aspect_ratio();
        if aspect == self.aspect {
            return false;
        }
        self.aspect = aspect;
        self.rebuild_projection();
        true
    }

    /// GPU layout of the current matrices
    pub fn uniforms(&self) -> SceneUniforms {
        SceneUniforms {
            world: self.world,
            view: self.view,
            projection: self.projection,
        }
    }

    fn rebuild_projection(&mut self) {
        self.projection = mat4::perspective(
            self.settings.fov_y_degrees.to_radians(),
            self.aspect,
            self.settings.near,
            self.settings.far,
        );
    }
}
