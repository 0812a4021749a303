//! Tesseract4D - interactive 4D hypercube viewer
//!
//! Host-side pieces of the viewer: configuration, key mapping, and the
//! window, simulation and render systems driven by the event loop in `main`.

pub mod config;
pub mod input;
pub mod systems;
