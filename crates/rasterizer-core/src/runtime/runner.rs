use anyhow::{Context, Result};

use crate::platform;
use crate::surface::SurfaceConfig;

use super::{run_frames, FrameRenderer, LoopOptions, LoopSummary};

/// Entry point for applications: open the platform surface and drive it.
pub struct Runtime;

impl Runtime {
    pub fn run<R>(
        config: SurfaceConfig,
        options: LoopOptions,
        mut renderer: R,
    ) -> Result<LoopSummary>
    where
        R: FrameRenderer,
    {
        let mut surface = platform::create(&config)
            .with_context(|| format!("failed to create display surface '{}'", config.title))?;

        let summary = run_frames(surface.as_mut(), &mut renderer, &options);

        log::info!(
            "presented {} frames in {:.2}s",
            summary.frames,
            summary.elapsed.as_secs_f32()
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{AppControl, FrameCtx};

    #[test]
    fn invalid_config_is_reported_with_context() {
        let renderer = |_: &mut FrameCtx<'_>| AppControl::Exit;
        let config = SurfaceConfig::new("broken", 0, 0);
        let err = Runtime::run(config, LoopOptions::default(), renderer).unwrap_err();

        assert!(err.to_string().contains("broken"));
        assert!(format!("{err:#}").contains("invalid surface size 0x0"));
    }

    #[cfg(not(feature = "native"))]
    #[test]
    fn headless_build_runs_bounded_loop() {
        let renderer = |_: &mut FrameCtx<'_>| AppControl::Continue;
        let options = LoopOptions {
            max_frames: Some(4),
            ..LoopOptions::default()
        };

        let summary = Runtime::run(SurfaceConfig::default(), options, renderer).unwrap();
        assert_eq!(summary.frames, 4);
    }
}
