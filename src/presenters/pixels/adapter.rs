use std::sync::{Mutex, PoisonError};

use log::debug;
use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::{
    events::render::RenderEvent, ports::presenter::InteractiveControllerPresenterPort,
};
use crate::input::gui::app::events::gui::GuiEvent;

/// Single-slot mailbox between the controller and the pixels presenter.
///
/// A newer event replaces one that has not been drawn yet.
pub struct PixelsAdapter {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl InteractiveControllerPresenterPort for PixelsAdapter {
    fn present(&self, event: RenderEvent) {
        *self
            .render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(event);

        if self.event_loop_proxy.send_event(GuiEvent::Wake).is_err() {
            debug!("event loop closed before frame could be shown");
        }
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            render_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_render_event(&self) -> Option<RenderEvent> {
        self.render_event
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}
