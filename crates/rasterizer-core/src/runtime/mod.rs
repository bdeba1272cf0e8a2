//! Event/present loop.
//!
//! The surface never drives itself: the application owns the loop. This
//! module is the reusable form of that loop and the contract a renderer
//! implements to take part in it.

mod app;
mod frame_loop;
mod runner;

pub use app::{AppControl, FrameCtx, FrameRenderer};
pub use frame_loop::{run_frames, LoopOptions, LoopSummary};
pub use runner::Runtime;
