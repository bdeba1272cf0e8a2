use rasterizer_core::paint::Argb;
use rasterizer_core::runtime::{AppControl, FrameCtx, FrameRenderer};

/// Placeholder renderer until the rasterizer lands.
///
/// Floods the whole framebuffer with one color per frame; the red channel
/// follows a sine of the accumulated time.
#[derive(Debug, Clone)]
pub struct Pulse {
    time: f32,
    speed: f32,
}

impl Pulse {
    /// `speed` is in radians per second.
    pub fn new(speed: f32) -> Self {
        Self { time: 0.0, speed }
    }

    /// Color shown at `time` seconds.
    pub fn color_at(time: f32) -> Argb {
        let wave = time.sin() * 0.5 + 0.5;
        let red = (wave * 255.0).round().clamp(0.0, 255.0) as u8;
        Argb::opaque(red, 0, 0)
    }
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl FrameRenderer for Pulse {
    fn render(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self.time += ctx.time.dt * self.speed;
        ctx.framebuffer.fill(Self::color_at(self.time));
        AppControl::Continue
    }
}
