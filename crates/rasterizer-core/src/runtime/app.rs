use crate::framebuffer::Framebuffer;
use crate::time::FrameTime;

/// Control directive returned by renderers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Per-frame context handed to a renderer.
///
/// The framebuffer borrow ends with the callback, so a renderer cannot keep
/// it across `present`.
pub struct FrameCtx<'a> {
    pub framebuffer: &'a mut Framebuffer,
    pub time: FrameTime,
}

/// Anything that fills the framebuffer before presentation.
pub trait FrameRenderer {
    /// Called once per frame, between `poll_events` and `present`.
    fn render(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}

impl<F> FrameRenderer for F
where
    F: FnMut(&mut FrameCtx<'_>) -> AppControl,
{
    fn render(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self(ctx)
    }
}
