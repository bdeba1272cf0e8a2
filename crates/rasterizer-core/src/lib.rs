//! Rasterizer core crate.
//!
//! This crate owns the presentation side of the software rasterizer: the pixel
//! store, the display surface it is blitted to, and the loop that keeps both alive.

pub mod framebuffer;
pub mod logging;
pub mod paint;
pub mod platform;
pub mod runtime;
pub mod surface;
pub mod time;
