//! 4D Mathematics Library
//!
//! Vector, matrix and interpolation helpers for the Tesseract4D viewer.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Mat4`] - 4x4 column-major matrix used both for 4D rotations and 3D camera transforms
//! - [`RotationPlane`] - One of the 6 planes a 4D rotation can happen in
//!
//! ## Functions
//!
//! - [`mat4`] - plane rotations, products, look-at and perspective matrices
//! - [`smoothstep`] - cubic Hermite edge interpolation

mod vec4;
mod plane;
mod interp;
pub mod mat4;

pub use vec4::Vec4;
pub use plane::RotationPlane;
pub use interp::smoothstep;
pub use mat4::Mat4;
