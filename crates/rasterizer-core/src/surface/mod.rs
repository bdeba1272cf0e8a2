//! Display surface capability.
//!
//! The renderer and the application depend on `DisplaySurface` only. Platform
//! variants live in `crate::platform` and are picked in one place there.

mod config;
mod error;
mod event;
mod state;
mod surface;

pub use config::SurfaceConfig;
pub use error::CreationError;
pub use event::SurfaceEvent;
pub use state::SurfaceState;
pub use surface::DisplaySurface;
