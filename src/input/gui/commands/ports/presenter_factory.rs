use winit::{event_loop::EventLoopProxy, window::Window};

use crate::core::data::resolution::Resolution;
use crate::input::gui::app::{events::gui::GuiEvent, ports::presenter::GuiPresenterPort};
use crate::input::gui::errors::GuiError;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        resolution: Resolution,
    ) -> Result<T, GuiError>;
}
