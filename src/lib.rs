mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::adapters::pixel_format::{PixelFormatError, copy_rgb_to_rgba};
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::data::viewport_state::ViewportState;
pub use crate::controllers::interactive::errors::render::RenderError;
pub use crate::controllers::interactive::{
    CommandQueue, InteractiveController, InteractiveControllerPresenterPort, NavigationCommand,
    RenderEvent, ZoomDirection,
};
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_grid::{EscapeGrid, EscapeGridError};
pub use crate::core::data::iteration_cap::{IterationCap, IterationCapError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::resolution::{Resolution, ResolutionError};
pub use crate::core::data::view_bounds::{ViewBounds, ViewBoundsError};
pub use crate::core::fractals::mandelbrot::colour_maps::hot_gradient::HotGradient;
pub use crate::core::fractals::mandelbrot::colour_maps::power_norm::PowerNormalization;
pub use crate::core::fractals::mandelbrot::engine::{compute, compute_parallel};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::util::pixel_to_data_coords::{PixelToDataCoordsError, pixel_to_data_coords};

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
