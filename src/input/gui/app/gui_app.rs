use log::{debug, error};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::Window,
};

use crate::controllers::interactive::{CommandQueue, InteractiveController};
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::navigation_input::NavigationInput;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    controller: InteractiveController,
    commands: CommandQueue,
    input: NavigationInput,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(window: &'static Window, presenter: T, controller: InteractiveController) -> Self {
        Self {
            window,
            presenter,
            controller,
            commands: CommandQueue::new(),
            input: NavigationInput::default(),
        }
    }

    /// Draws the startup view, then runs until the window closes.
    ///
    /// Input only enqueues commands. One command is dispatched each time the
    /// loop runs dry, so every render gets its own redraw.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), GuiError> {
        let mut failure: Option<GuiError> = None;

        self.controller.render();
        event_loop.set_control_flow(ControlFlow::Wait);

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        if let Err(err) = self.presenter.render() {
                            error!("render error: {err}");
                            failure = Some(err.into());
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = self.presenter.resize(size.width, size.height) {
                            error!("resize error: {err}");
                            failure = Some(err.into());
                            elwt.exit();
                            return;
                        }

                        self.window.request_redraw();
                    }
                    WindowEvent::CursorMoved { position, .. } => self.input.cursor_moved(position),
                    WindowEvent::CursorLeft { .. } => self.input.cursor_left(),
                    WindowEvent::MouseWheel { delta, .. } => {
                        let presenter = &self.presenter;

                        if let Some(command) = self
                            .input
                            .handle_scroll(delta, |position| presenter.window_to_grid(position))
                        {
                            self.commands.push(command);
                        }
                    }
                    WindowEvent::KeyboardInput { event, .. } => {
                        if let Some(command) = self.input.handle_key(&event.logical_key, event.state)
                        {
                            self.commands.push(command);
                        }
                    }
                    _ => {}
                }
            }
            Event::UserEvent(GuiEvent::Wake) => self.window.request_redraw(),
            Event::AboutToWait => {
                if !self.commands.is_empty() {
                    debug!("{} navigation command(s) pending", self.commands.len());
                }

                if self.controller.dispatch_next(&mut self.commands).is_some() {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })?;

        failure.map_or(Ok(()), Err)
    }
}
