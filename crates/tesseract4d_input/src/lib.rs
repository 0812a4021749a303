//! Pointer input handling
//!
//! This crate turns raw winit pointer events into the per-frame
//! [`FrameInput`](tesseract4d_core::FrameInput) the core consumes:
//!
//! - Left drag: rotate in the XZ / YZ planes
//! - Right drag: rotate in the XW / YW planes
//! - Scroll wheel: zoom

mod pointer_controller;

pub use pointer_controller::PointerController;
