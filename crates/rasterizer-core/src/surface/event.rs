/// Platform-agnostic events a display surface reacts to.
///
/// Native variants translate their window messages into these; everything
/// else stays with the platform's default handling.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceEvent {
    /// The user asked to close the window. The window itself stays alive
    /// until the surface is dropped.
    CloseRequested,

    /// The native window was destroyed; escalated to a quit.
    Destroyed,

    /// Process-level quit notification.
    Quit,

    /// The client area changed size.
    Resized { width: u32, height: u32 },

    Focused(bool),
}

impl SurfaceEvent {
    /// Whether this event ends the surface's open state.
    pub fn closes(self) -> bool {
        matches!(self, Self::CloseRequested | Self::Destroyed | Self::Quit)
    }
}
