//! Frame timing.
//!
//! Timing belongs to the driving loop, never to the display surface:
//! - one `FrameClock` per loop, `tick()` once per presented frame
//! - one `FpsCounter` per loop, fed with each frame's delta

mod fps;
mod frame_clock;

pub use fps::FpsCounter;
pub use frame_clock::{FrameClock, FrameTime};
