use std::num::NonZeroU32;
use std::rc::Rc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::surface::{CreationError, SurfaceConfig, SurfaceEvent};

use super::translate_window_event;

pub(super) type Presenter = softbuffer::Surface<Rc<Window>, Rc<Window>>;

/// winit callback target for one native surface.
///
/// Creates the window when the loop first resumes and buffers translated
/// events; the surface applies them after the pump returns.
///
/// Field order is drop order: the presenter goes before its context, both go
/// before the window.
pub(super) struct NativeHandler {
    pub(super) presenter: Option<Presenter>,
    context: Option<softbuffer::Context<Rc<Window>>>,
    pub(super) window: Option<Rc<Window>>,

    attributes: Option<WindowAttributes>,
    size: (NonZeroU32, NonZeroU32),

    pub(super) events: Vec<SurfaceEvent>,
    pub(super) failure: Option<CreationError>,
}

impl NativeHandler {
    pub(super) fn new(config: &SurfaceConfig, size: (NonZeroU32, NonZeroU32)) -> Self {
        let attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(config.resizable)
            .with_visible(true);

        Self {
            presenter: None,
            context: None,
            window: None,
            attributes: Some(attributes),
            size,
            events: Vec::new(),
            failure: None,
        }
    }

    pub(super) fn is_ready(&self) -> bool {
        self.presenter.is_some()
    }

    /// Drops presenter, context and window, in that order.
    pub(super) fn release(&mut self) {
        self.presenter = None;
        self.context = None;
        if self.window.take().is_some() {
            log::debug!("native window released");
        }
    }

    /// Hands out the window request once; later calls get `None`.
    fn take_pending(&mut self) -> Option<WindowAttributes> {
        self.attributes.take()
    }

    fn open_pending(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.take_pending() else {
            return;
        };

        if let Err(err) = self.open_window(event_loop, attributes) {
            log::error!("failed to open native window: {err}");
            self.release();
            self.failure = Some(err);
        }
    }

    fn open_window(
        &mut self,
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
    ) -> Result<(), CreationError> {
        let window = Rc::new(
            event_loop
                .create_window(attributes)
                .map_err(CreationError::Window)?,
        );

        let context =
            softbuffer::Context::new(window.clone()).map_err(CreationError::Presenter)?;
        let mut presenter =
            softbuffer::Surface::new(&context, window.clone()).map_err(CreationError::Presenter)?;

        let (width, height) = self.size;
        presenter
            .resize(width, height)
            .map_err(CreationError::Presenter)?;

        log::debug!("native window {:?} opened at {width}x{height}", window.id());

        self.presenter = Some(presenter);
        self.context = Some(context);
        self.window = Some(window);
        Ok(())
    }
}

impl ApplicationHandler for NativeHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.open_pending(event_loop);
    }

    // A cached loop that is still running never resumes again, so the
    // window of a later surface is opened on the first wakeup instead.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.open_pending(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        let Some(event) = translate_window_event(&event) else {
            return;
        };

        if event == SurfaceEvent::Destroyed {
            // Quit notification: the pump reports the exit on its next return.
            event_loop.exit();
        }

        self.events.push(event);
    }
}
