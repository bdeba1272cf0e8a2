//! CPU-side pixel store and its mapping onto the native bitmap primitive.
//!
//! - `Framebuffer`: fixed-size, top-down, row-major `Argb` pixels
//! - `PresentationDescriptor`: bit-exact bitmap-info header for the presenter
//! - `blit`: unscaled copy of a framebuffer into a native scanout buffer

mod blit;
mod buffer;
mod descriptor;

pub use blit::{blit, BlitError};
pub use buffer::Framebuffer;
pub use descriptor::{Compression, PresentationDescriptor};
