//! Projection and shading
//!
//! Turns the 16 4D vertices into two GPU-ready vertex streams that share
//! vertex identities with the source array:
//!
//! - faces: gray level from depth, alpha 0.1
//! - mesh: constant black, alpha 0.2
//!
//! Projection to 3D drops W outright; there is no 4D perspective divide.

use bytemuck::{Pod, Zeroable};
use tesseract4d_math::{smoothstep, Vec4};

use crate::geometry::VERTEX_COUNT;

/// Alpha of the shaded face stream
pub const FACE_ALPHA: f32 = 0.1;

/// Color of every wireframe vertex
pub const MESH_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.2];

/// Normalized depth at which faces start to brighten
pub const SHADE_EDGE_LOW: f32 = 0.1;

/// Normalized depth at which faces reach full brightness
pub const SHADE_EDGE_HIGH: f32 = 0.15;

/// A vertex in the 3D scene with its color
///
/// Layout matches the shader's vertex input: position at offset 0,
/// color at offset 12.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    /// Position in 3D space (x, y, z)
    pub position: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
}

impl ColorVertex {
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Smallest and largest Z over a vertex set
pub fn depth_range(vertices: &[Vec4]) -> (f32, f32) {
    vertices.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v.z), hi.max(v.z))
    })
}

/// Position of `z` within `[min, max]` as a value in [0, 1]
///
/// An empty range (all Z equal) maps everything to 0.
pub fn normalized_depth(z: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if span > 0.0 {
        ((z - min) / span).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Face brightness for a normalized depth
pub fn depth_shade(t: f32) -> f32 {
    smoothstep(SHADE_EDGE_LOW, SHADE_EDGE_HIGH, t)
}

/// The two vertex streams uploaded every time the geometry changes
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStreams {
    /// Shaded cell faces
    pub faces: [ColorVertex; VERTEX_COUNT],
    /// Wireframe edges
    pub mesh: [ColorVertex; VERTEX_COUNT],
}

impl RenderStreams {
    /// Streams for the given vertices
    pub fn new(vertices: &[Vec4; VERTEX_COUNT]) -> Self {
        let mut streams = Self {
            faces: [ColorVertex::default(); VERTEX_COUNT],
            mesh: [ColorVertex::new([0.0; 3], MESH_COLOR); VERTEX_COUNT],
        };
        streams.update_from(vertices);
        streams
    }

    /// Recompute positions and colors in place
    pub fn update_from(&mut self, vertices: &[Vec4; VERTEX_COUNT]) {
        let (min, max) = depth_range(vertices);

        for (i, v) in vertices.iter().enumerate() {
            let position = v.xyz();
            let f = depth_shade(normalized_depth(v.z, min, max));

            self.faces[i] = ColorVertex::new(position, [f, f, f, FACE_ALPHA]);
            self.mesh[i] = ColorVertex::new(position, MESH_COLOR);
        }
    }
}

/// Project and shade a vertex set into fresh render streams
pub fn recompute(vertices: &[Vec4; VERTEX_COUNT]) -> RenderStreams {
    RenderStreams::new(vertices)
}
