//! Core types for the Tesseract4D viewer
//!
//! This crate is the CPU side of the viewer and knows nothing about windows
//! or GPUs:
//!
//! - [`geometry`] - the 16 canonical vertices and the face/edge index tables
//! - [`HypercubeState`] - the mutable 4D vertex set, scale factor and accumulated orientation
//! - [`FrameInput`] - per-frame pointer/scroll deltas handed over by the host
//! - [`projection`] - 4D -> 3D projection and depth shading into [`RenderStreams`]
//!
//! Frame flow: `FrameInput` -> [`HypercubeState::apply_input`] -> [`RenderStreams::update_from`].

pub mod geometry;
mod hypercube;
mod input;
pub mod projection;

pub use geometry::{Topology, TopologyError, CANONICAL_VERTICES, EDGE_INDICES, FACE_INDICES, VERTEX_COUNT};
pub use hypercube::{
    FrameUpdate, HypercubeState, DEFAULT_SCALE, DRAG_SENSITIVITY, MAX_ZOOM_LEVEL, RENORMALIZE_INTERVAL,
};
pub use input::{FrameInput, PointerButton, ScrollDirection, ZOOM_STEP};
pub use projection::{recompute, ColorVertex, RenderStreams};

// Re-export commonly used math types for convenience
pub use tesseract4d_math::{Mat4, RotationPlane, Vec4};
