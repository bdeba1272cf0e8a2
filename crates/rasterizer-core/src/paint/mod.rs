//! Pixel values.
//!
//! The framebuffer stores packed 32-bit words; `Argb` is the typed view of one.

mod color;

pub use color::Argb;
