use std::time::{Duration, Instant};

use crate::surface::DisplaySurface;
use crate::time::{FpsCounter, FrameClock};

use super::{AppControl, FrameCtx, FrameRenderer};

/// Loop configuration.
#[derive(Debug, Clone)]
pub struct LoopOptions {
    /// Stop after this many presented frames.
    pub max_frames: Option<u64>,

    /// FPS sampling window.
    pub fps_window: Duration,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_frames: None,
            fps_window: Duration::from_secs(1),
        }
    }
}

/// What a finished loop did.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LoopSummary {
    pub frames: u64,
    pub elapsed: Duration,
    pub last_fps: Option<f32>,
}

/// Drives `surface` until it closes, the renderer exits, or `max_frames` is hit.
///
/// Each iteration polls events exactly once, lets the renderer write the
/// framebuffer, then presents exactly once.
pub fn run_frames(
    surface: &mut dyn DisplaySurface,
    renderer: &mut dyn FrameRenderer,
    options: &LoopOptions,
) -> LoopSummary {
    let started = Instant::now();
    let mut clock = FrameClock::new();
    let mut fps = FpsCounter::new(options.fps_window);
    let mut frames = 0u64;

    loop {
        surface.poll_events();
        if !surface.is_open() {
            log::debug!("surface closed, leaving loop");
            break;
        }

        let time = clock.tick();
        let control = {
            let mut ctx = FrameCtx {
                framebuffer: surface.framebuffer_mut(),
                time,
            };
            renderer.render(&mut ctx)
        };

        surface.present();
        frames += 1;

        if let Some(rate) = fps.record(time.raw_dt) {
            log::info!("{rate:.1} fps ({:.2} ms/frame)", 1000.0 / rate);
        }

        if control == AppControl::Exit {
            log::debug!("renderer requested exit");
            break;
        }
        if options.max_frames.is_some_and(|max| frames >= max) {
            break;
        }
    }

    LoopSummary {
        frames,
        elapsed: started.elapsed(),
        last_fps: fps.fps(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::paint::Argb;
    use crate::platform::HeadlessSurface;
    use crate::surface::{SurfaceConfig, SurfaceEvent};

    fn headless(width: u32, height: u32) -> HeadlessSurface {
        HeadlessSurface::new(&SurfaceConfig::new("loop", width, height)).unwrap()
    }

    #[test]
    fn stops_when_surface_closes() {
        let mut surface = headless(4, 4).close_after(3);
        let mut renderer = |_: &mut FrameCtx<'_>| AppControl::Continue;

        let summary = run_frames(&mut surface, &mut renderer, &LoopOptions::default());

        assert_eq!(summary.frames, 3);
        assert_eq!(surface.presents(), 3);
        assert!(!surface.is_open());
    }

    #[test]
    fn closed_surface_renders_nothing() {
        let mut surface = headless(4, 4);
        surface.post_event(SurfaceEvent::Destroyed);
        let mut calls = 0;
        let mut renderer = |_: &mut FrameCtx<'_>| {
            calls += 1;
            AppControl::Continue
        };

        let summary = run_frames(&mut surface, &mut renderer, &LoopOptions::default());

        assert_eq!(summary.frames, 0);
        assert_eq!(calls, 0);
        assert_eq!(surface.presents(), 0);
    }

    #[test]
    fn renderer_output_is_presented() {
        let mut surface = headless(3, 3);
        let color = Argb::opaque(0x10, 0x20, 0x30);
        let mut renderer = |ctx: &mut FrameCtx<'_>| {
            ctx.framebuffer.fill(color);
            AppControl::Exit
        };

        let summary = run_frames(&mut surface, &mut renderer, &LoopOptions::default());

        assert_eq!(summary.frames, 1);
        assert!(surface.is_open());
        assert!(surface.scanout().iter().all(|&w| w == color.without_alpha()));
    }

    #[test]
    fn frames_are_numbered_in_order() {
        let mut surface = headless(2, 2);
        let mut seen = Vec::new();
        let mut renderer = |ctx: &mut FrameCtx<'_>| {
            seen.push(ctx.time.frame_index);
            AppControl::Continue
        };
        let options = LoopOptions {
            max_frames: Some(5),
            ..LoopOptions::default()
        };

        let summary = run_frames(&mut surface, &mut renderer, &options);

        assert_eq!(summary.frames, 5);
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn fps_counts_slow_frames_at_their_real_length() {
        let mut surface = headless(2, 2);
        // Each frame is longer than the clock's dt clamp.
        let mut renderer = |_: &mut FrameCtx<'_>| {
            std::thread::sleep(Duration::from_millis(300));
            AppControl::Continue
        };
        let options = LoopOptions {
            max_frames: Some(5),
            ..LoopOptions::default()
        };

        let summary = run_frames(&mut surface, &mut renderer, &options);

        // Five frames over four 300 ms gaps: at most 5 / 1.2 s. Clamped deltas
        // would close the window at 1.0 s and claim 5 fps.
        let rate = summary.last_fps.unwrap();
        assert!(rate < 4.5, "rate = {rate}");
    }

    #[test]
    fn renderer_sees_sentinel_on_first_frame() {
        let mut surface = headless(2, 2);
        let mut first: Option<Framebuffer> = None;
        let mut renderer = |ctx: &mut FrameCtx<'_>| {
            first.get_or_insert_with(|| ctx.framebuffer.clone());
            AppControl::Exit
        };

        run_frames(&mut surface, &mut renderer, &LoopOptions::default());

        let first = first.unwrap();
        assert!(first.pixels().iter().all(|&p| p == Argb::SENTINEL));
    }
}
