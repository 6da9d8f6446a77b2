use std::marker::PhantomData;

use log::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveController;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::app::{
    events::gui::GuiEvent, gui_app::GuiApp, ports::presenter::GuiPresenterPort,
};
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::GuiError;

pub(crate) const WINDOW_TITLE: &str = "Mandelbrot Explorer";
const MIN_WINDOW_SIDE: f64 = 200.0;

/// Opens the explorer window and blocks until it is closed.
pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: MandelbrotConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: MandelbrotConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();
        let side = f64::from(self.config.resolution.size());

        // Leaked so pixels can borrow it for the rest of the process.
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(side, side))
                .with_min_inner_size(LogicalSize::new(MIN_WINDOW_SIDE, MIN_WINDOW_SIDE))
                .build(&event_loop)?,
        ));

        let presenter: P =
            self.presenter_factory
                .build(window, event_loop_proxy, self.config.resolution)?;
        let controller = InteractiveController::new(&self.config, presenter.share_adapter());

        info!(
            "starting explorer: {0}x{0} grid, {1} iterations, zoom factor {2}",
            self.config.resolution.size(),
            self.config.max_iterations.get(),
            self.config.zoom_factor
        );

        GuiApp::new(window, presenter, controller).run(event_loop)
    }
}
