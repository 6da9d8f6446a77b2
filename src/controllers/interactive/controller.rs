use std::sync::Arc;
use std::time::Instant;

use log::{debug, error, info};

use crate::controllers::interactive::command_queue::CommandQueue;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::navigation_command::{
    NavigationCommand, ZoomDirection,
};
use crate::controllers::interactive::data::viewport_state::ViewportState;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::complex::Complex;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_bounds::ViewBounds;
use crate::core::fractals::mandelbrot::colour_maps::hot_gradient::HotGradient;
use crate::core::fractals::mandelbrot::colour_maps::power_norm::PowerNormalization;
use crate::core::fractals::mandelbrot::engine::{compute, compute_parallel};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::pixel_to_data_coords::pixel_to_data_coords;

/// Turns navigation commands into new views and renders each one.
///
/// Every render runs to completion on the calling thread before the next
/// command is looked at, so frames reach the presenter in command order.
pub struct InteractiveController {
    viewport: ViewportState,
    max_iterations: IterationCap,
    gamma: f64,
    parallel: bool,
    generation: u64,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

impl InteractiveController {
    pub fn new(
        config: &MandelbrotConfig,
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    ) -> Self {
        Self {
            viewport: ViewportState::new(config.region, config.zoom_factor, config.resolution),
            max_iterations: config.max_iterations,
            gamma: config.gamma,
            parallel: config.parallel,
            generation: 0,
            presenter_port,
        }
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Generation of the most recent render, `0` before the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies `command` and renders if the view changed.
    ///
    /// Returns the generation of the render, or `None` for a no-op.
    pub fn handle_command(&mut self, command: NavigationCommand) -> Option<u64> {
        debug!("handling {:?}", command);

        let changed = match command {
            NavigationCommand::Zoom { target, direction } => self.zoom(target, direction),
            NavigationCommand::ZoomAtPixel {
                position,
                direction,
            } => {
                match pixel_to_data_coords(
                    position,
                    self.viewport.resolution(),
                    self.viewport.current(),
                ) {
                    Ok(target) => self.zoom(target, direction),
                    Err(err) => {
                        debug!("ignoring zoom: {err}");
                        false
                    }
                }
            }
            NavigationCommand::Reset => {
                self.viewport.reset();
                true
            }
        };

        changed.then(|| self.render())
    }

    /// Pulls commands until one of them renders or the queue runs dry.
    pub fn dispatch_next(&mut self, queue: &mut CommandQueue) -> Option<u64> {
        while let Some(command) = queue.pop() {
            if let Some(generation) = self.handle_command(command) {
                return Some(generation);
            }
        }

        None
    }

    /// Drains the queue, returning how many renders it caused.
    pub fn dispatch_all(&mut self, queue: &mut CommandQueue) -> usize {
        let mut renders = 0;

        while self.dispatch_next(queue).is_some() {
            renders += 1;
        }

        renders
    }

    /// Renders the current view and hands the outcome to the presenter.
    pub fn render(&mut self) -> u64 {
        self.generation += 1;

        let generation = self.generation;
        let bounds = self.viewport.current();

        let start = Instant::now();
        let result = self.render_bounds(bounds);
        let render_duration = start.elapsed();

        match result {
            Ok(pixel_buffer) => {
                info!(
                    "render {generation}: x [{}, {}], y [{}, {}] in {render_duration:?}",
                    bounds.xmin(),
                    bounds.xmax(),
                    bounds.ymin(),
                    bounds.ymax()
                );

                self.presenter_port.present(RenderEvent::Frame(FrameData {
                    generation,
                    bounds,
                    pixel_buffer,
                    render_duration,
                }));
            }
            Err(err) => {
                error!("render {generation} failed: {err}");

                self.presenter_port
                    .present(RenderEvent::Error(RenderError {
                        generation,
                        message: err.to_string(),
                    }));
            }
        }

        generation
    }

    fn zoom(&mut self, target: Complex, direction: ZoomDirection) -> bool {
        if self.viewport.zoom_at(target, direction).is_none() {
            debug!(
                "ignoring zoom at ({}, {}) outside the current view",
                target.real, target.imag
            );
            return false;
        }

        true
    }

    fn render_bounds(&self, bounds: ViewBounds) -> Result<PixelBuffer, GeneratePixelBufferError> {
        let resolution = self.viewport.resolution();

        let grid = if self.parallel {
            compute_parallel(bounds, resolution, self.max_iterations)
        } else {
            compute(bounds, resolution, self.max_iterations)
        };

        let colour_map = HotGradient::new(PowerNormalization::autoscale(&grid, self.gamma));

        generate_pixel_buffer(&grid, &colour_map)
    }
}
