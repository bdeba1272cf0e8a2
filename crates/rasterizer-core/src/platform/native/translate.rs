use winit::event::WindowEvent;

use crate::surface::SurfaceEvent;

/// Translates a winit `WindowEvent` into a `SurfaceEvent`.
///
/// Returns `None` for events the surface does not react to; winit and the
/// OS keep their default handling for those.
pub fn translate_window_event(event: &WindowEvent) -> Option<SurfaceEvent> {
    match event {
        WindowEvent::CloseRequested => Some(SurfaceEvent::CloseRequested),
        WindowEvent::Destroyed => Some(SurfaceEvent::Destroyed),
        WindowEvent::Resized(size) => Some(SurfaceEvent::Resized {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::Focused(focused) => Some(SurfaceEvent::Focused(*focused)),
        _ => None,
    }
}
