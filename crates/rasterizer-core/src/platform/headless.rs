//! In-memory display surface.
//!
//! Same state machine as the native surface, with the platform replaced by an
//! event queue the caller fills and a scanout buffer `present` blits into.

use std::collections::VecDeque;

use raw_window_handle::RawWindowHandle;

use crate::framebuffer::{blit, Framebuffer};
use crate::surface::{CreationError, DisplaySurface, SurfaceConfig, SurfaceEvent, SurfaceState};

pub struct HeadlessSurface {
    state: SurfaceState,
    pending: VecDeque<SurfaceEvent>,
    scanout: Box<[u32]>,
    presents: u64,
    close_after: Option<u64>,
}

impl HeadlessSurface {
    pub fn new(config: &SurfaceConfig) -> Result<Self, CreationError> {
        let mut state = SurfaceState::new(config)?;
        let scanout = vec![0u32; state.framebuffer().len()].into_boxed_slice();
        state.mark_open();

        log::debug!("headless surface '{}' ready", state.title());

        Ok(Self {
            state,
            pending: VecDeque::new(),
            scanout,
            presents: 0,
            close_after: None,
        })
    }

    /// Queues an event for the next `poll_events`.
    pub fn post_event(&mut self, event: SurfaceEvent) {
        self.pending.push_back(event);
    }

    /// Simulates the user closing the window.
    pub fn post_close(&mut self) {
        self.post_event(SurfaceEvent::CloseRequested);
    }

    /// Posts a quit once `frames` presents have happened.
    pub fn close_after(mut self, frames: u64) -> Self {
        self.close_after = Some(frames);
        self
    }

    /// What the last successful `present` put on "screen" (`0x00RRGGBB`).
    pub fn scanout(&self) -> &[u32] {
        &self.scanout
    }

    /// Number of successful presents.
    pub fn presents(&self) -> u64 {
        self.presents
    }
}

impl DisplaySurface for HeadlessSurface {
    fn poll_events(&mut self) {
        while let Some(event) = self.pending.pop_front() {
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
        None
    }

    fn framebuffer(&self) -> &Framebuffer {
        self.state.framebuffer()
    }

    fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        self.state.framebuffer_mut()
    }

    fn present(&mut self) {
        let result = blit(
            self.state.descriptor(),
            self.state.framebuffer(),
            &mut self.scanout,
        );
        if let Err(err) = result {
            log::warn!("skipping present: {err}");
            return;
        }

        self.presents += 1;
        log::trace!("headless present #{}", self.presents);

        if self.close_after == Some(self.presents) {
            self.post_event(SurfaceEvent::Quit);
        }
    }
}
