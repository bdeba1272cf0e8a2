use crate::framebuffer::{Framebuffer, PresentationDescriptor};
use crate::paint::Argb;

use super::{CreationError, SurfaceConfig, SurfaceEvent};

/// Platform-independent part of a display surface.
///
/// Every variant embeds one: it owns the framebuffer and the descriptor and
/// tracks the open flag. The open flag only ever goes from `true` to `false`.
#[derive(Debug)]
pub struct SurfaceState {
    title: String,
    open: bool,
    framebuffer: Framebuffer,
    descriptor: PresentationDescriptor,
}

impl SurfaceState {
    /// Allocates the sentinel-filled framebuffer and computes the descriptor.
    ///
    /// The surface starts closed; variants call `mark_open` once the platform
    /// side is ready.
    pub fn new(config: &SurfaceConfig) -> Result<Self, CreationError> {
        config.validate()?;
        let descriptor = PresentationDescriptor::top_down(config.width, config.height).ok_or(
            CreationError::InvalidDimensions {
                width: config.width,
                height: config.height,
            },
        )?;

        Ok(Self {
            title: config.title.clone(),
            open: false,
            framebuffer: Framebuffer::new(config.width, config.height, Argb::SENTINEL),
            descriptor,
        })
    }

    pub(crate) fn mark_open(&mut self) {
        self.open = true;
    }

    /// Marks the surface closed. Idempotent.
    pub fn close(&mut self) {
        if self.open {
            log::info!("surface '{}' closed", self.title);
        }
        self.open = false;
    }

    /// Applies one translated platform event.
    pub fn apply(&mut self, event: SurfaceEvent) {
        match event {
            event if event.closes() => {
                log::debug!("{event:?}");
                self.close();
            }
            SurfaceEvent::Resized { width, height } => {
                if (width, height) != (self.width(), self.height()) {
                    log::debug!(
                        "window is {width}x{height}, framebuffer stays {}x{}",
                        self.width(),
                        self.height()
                    );
                }
            }
            SurfaceEvent::Focused(focused) => log::trace!("focused: {focused}"),
            _ => {}
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    #[inline]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    #[inline]
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    #[inline]
    pub fn descriptor(&self) -> &PresentationDescriptor {
        &self.descriptor
    }
}
