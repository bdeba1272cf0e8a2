//! Platform display surfaces and the single point that picks one.
//!
//! - `native`: a real window driven by winit, presented through softbuffer
//! - `headless`: in-memory surface for tests and window-less builds
//!
//! Which one `create` returns is decided here, at build-configuration time,
//! and nowhere else.

pub mod headless;
#[cfg(feature = "native")]
pub mod native;

pub use headless::HeadlessSurface;
#[cfg(feature = "native")]
pub use native::NativeSurface;

use crate::surface::{CreationError, DisplaySurface, SurfaceConfig};

/// The display surface variant compiled into this build.
#[cfg(feature = "native")]
pub type PlatformSurface = NativeSurface;

/// The display surface variant compiled into this build.
#[cfg(not(feature = "native"))]
pub type PlatformSurface = HeadlessSurface;

/// Creates an open, visible display surface.
pub fn create(config: &SurfaceConfig) -> Result<Box<dyn DisplaySurface>, CreationError> {
    let surface = PlatformSurface::new(config)?;
    log::info!(
        "created {}x{} surface '{}'",
        surface.width(),
        surface.height(),
        surface.title()
    );
    Ok(Box::new(surface))
}
