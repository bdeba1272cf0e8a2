use raw_window_handle::RawWindowHandle;

use crate::framebuffer::Framebuffer;

/// Operations every platform display surface provides.
///
/// Must be driven from the thread that created it. Per frame the caller runs
/// `poll_events`, checks `is_open`, writes into `framebuffer_mut`, then calls
/// `present`, in that order.
pub trait DisplaySurface {
    /// Drains pending platform events without blocking.
    fn poll_events(&mut self);

    /// `true` from successful creation until a close or quit signal is observed.
    fn is_open(&self) -> bool;

    fn title(&self) -> &str;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Platform window handle, `None` when the variant has no native window.
    fn native_handle(&self) -> Option<RawWindowHandle>;

    fn framebuffer(&self) -> &Framebuffer;

    /// Scoped write access for the renderer. Do not hold across `present`.
    fn framebuffer_mut(&mut self) -> &mut Framebuffer;

    /// Copies the whole framebuffer to the visible surface.
    ///
    /// Failures are logged and the frame is skipped. Never mutates the framebuffer.
    fn present(&mut self);
}
