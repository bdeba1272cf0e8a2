mod pulse;

use anyhow::Result;

use rasterizer_core::logging::{init_logging, LoggingConfig};
use rasterizer_core::runtime::{LoopOptions, Runtime};
use rasterizer_core::surface::SurfaceConfig;

use pulse::Pulse;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = SurfaceConfig::new("Rasterizer", 800, 600);
    let summary = Runtime::run(config, LoopOptions::default(), Pulse::default())?;

    if let Some(fps) = summary.last_fps {
        log::info!("last measured rate: {fps:.1} fps");
    }
    Ok(())
}
