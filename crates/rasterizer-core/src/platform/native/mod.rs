//! Native display surface.
//!
//! A winit window presented through softbuffer. Events are pumped with a zero
//! timeout, so `poll_events` never blocks; the event loop is cached per thread
//! and handed to the next surface once this one is dropped.

mod handler;
mod translate;

pub use translate::translate_window_event;

use std::cell::RefCell;
use std::num::NonZeroU32;
use std::time::Duration;

use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

use crate::framebuffer::{blit, Framebuffer};
use crate::surface::{CreationError, DisplaySurface, SurfaceConfig, SurfaceEvent, SurfaceState};

use handler::NativeHandler;

/// Upper bound on pumps while waiting for the platform to hand us a window.
const CREATION_PUMPS: usize = 16;

thread_local! {
    static EVENT_LOOP: RefCell<Option<EventLoop<()>>> = const { RefCell::new(None) };
}

/// Takes the cached event loop or creates the thread's first one.
fn acquire_event_loop() -> Result<EventLoop<()>, CreationError> {
    if let Some(event_loop) = EVENT_LOOP.with(|slot| slot.borrow_mut().take()) {
        log::debug!("reusing cached event loop");
        return Ok(event_loop);
    }

    EventLoop::new().map_err(CreationError::EventLoop)
}

fn release_event_loop(event_loop: EventLoop<()>) {
    EVENT_LOOP.with(|slot| *slot.borrow_mut() = Some(event_loop));
}

/// Display surface backed by a native window.
///
/// `!Send`: it must stay on the thread that created it.
pub struct NativeSurface {
    state: SurfaceState,
    handler: NativeHandler,
    event_loop: Option<EventLoop<()>>,
    exited: bool,
}

impl NativeSurface {
    /// Opens a visible `config.width x config.height` window.
    pub fn new(config: &SurfaceConfig) -> Result<Self, CreationError> {
        let mut state = SurfaceState::new(config)?;
        let size = nonzero_size(config)?;

        let mut event_loop = acquire_event_loop()?;
        let mut handler = NativeHandler::new(config, size);

        for _ in 0..CREATION_PUMPS {
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(Duration::ZERO), &mut handler)
            {
                handler.failure.get_or_insert(CreationError::EventLoopExited(code));
            }
            if handler.is_ready() || handler.failure.is_some() {
                break;
            }
        }

        let failure = match handler.failure.take() {
            Some(err) => Some(err),
            None if !handler.is_ready() => Some(CreationError::WindowUnavailable),
            None => None,
        };
        if let Some(err) = failure {
            handler.release();
            release_event_loop(event_loop);
            return Err(err);
        }

        state.mark_open();

        Ok(Self {
            state,
            handler,
            event_loop: Some(event_loop),
            exited: false,
        })
    }
}

fn nonzero_size(config: &SurfaceConfig) -> Result<(NonZeroU32, NonZeroU32), CreationError> {
    let invalid = || CreationError::InvalidDimensions {
        width: config.width,
        height: config.height,
    };
    Ok((
        NonZeroU32::new(config.width).ok_or_else(invalid)?,
        NonZeroU32::new(config.height).ok_or_else(invalid)?,
    ))
}

impl DisplaySurface for NativeSurface {
    fn poll_events(&mut self) {
        if !self.exited {
            if let Some(event_loop) = self.event_loop.as_mut() {
                if let PumpStatus::Exit(code) =
                    event_loop.pump_app_events(Some(Duration::ZERO), &mut self.handler)
                {
                    log::debug!("event loop exited with code {code}");
                    self.exited = true;
                    self.handler.events.push(SurfaceEvent::Quit);
                }
            }
        }

        for event in self.handler.events.drain(..) {
            self.state.apply(event);
        }
    }

    fn is_open(&self) -> bool {
        self.state.is_open()
    }

    fn title(&self) -> &str {
        self.state.title()
    }

    fn width(&self) -> u32 {
        self.state.width()
    }

    fn height(&self) -> u32 {
        self.state.height()
    }

    fn native_handle(&self) -> Option<RawWindowHandle> {
        let window = self.handler.window.as_ref()?;
        window.window_handle().ok().map(|handle| handle.as_raw())
    }

    fn framebuffer(&self) -> &Framebuffer {
        self.state.framebuffer()
    }

    fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        self.state.framebuffer_mut()
    }

    fn present(&mut self) {
        let (Some(window), Some(presenter)) =
            (self.handler.window.as_ref(), self.handler.presenter.as_mut())
        else {
            log::warn!("skipping present: no native window");
            return;
        };

        // Scoped drawing target; released when `target` is presented or dropped.
        let mut target = match presenter.buffer_mut() {
            Ok(target) => target,
            Err(err) => {
                log::warn!("skipping present: drawing target unavailable: {err}");
                return;
            }
        };

        if let Err(err) = blit(self.state.descriptor(), self.state.framebuffer(), &mut target) {
            log::warn!("skipping present: {err}");
            return;
        }

        window.pre_present_notify();
        if let Err(err) = target.present() {
            log::warn!("present failed: {err}");
        }
    }
}

impl Drop for NativeSurface {
    fn drop(&mut self) {
        self.handler.release();
        if let Some(event_loop) = self.event_loop.take() {
            release_event_loop(event_loop);
        }
    }
}
