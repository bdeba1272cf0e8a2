use thiserror::Error;

/// Why a display surface could not be created.
#[derive(Debug, Error)]
pub enum CreationError {
    #[error("invalid surface size {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[cfg(feature = "native")]
    #[error("failed to create the platform event loop")]
    EventLoop(#[source] winit::error::EventLoopError),

    #[cfg(feature = "native")]
    #[error("failed to create the native window")]
    Window(#[source] winit::error::OsError),

    #[cfg(feature = "native")]
    #[error("failed to set up the software presenter")]
    Presenter(#[source] softbuffer::SoftBufferError),

    #[cfg(feature = "native")]
    #[error("event loop exited with code {0} before the window opened")]
    EventLoopExited(i32),

    #[cfg(feature = "native")]
    #[error("the platform never delivered a window")]
    WindowUnavailable,
}
