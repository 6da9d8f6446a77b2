use winit::{event_loop::EventLoopProxy, window::Window};

use crate::core::data::resolution::Resolution;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        resolution: Resolution,
    ) -> Result<PixelsPresenter, GuiError> {
        Ok(PixelsPresenter::new(window, event_loop_proxy, resolution)?)
    }
}
