//! Interactive controller for exploring the Mandelbrot set.
//!
//! Follows the ports & adapters pattern:
//! - **Input**: `NavigationCommand`s pulled from a `CommandQueue`
//! - **Output**: the `InteractiveControllerPresenterPort` trait, which receives
//!   each rendered frame
//! - **Core**: escape-time computation and colour mapping from `core/`

pub mod command_queue;
mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use command_queue::CommandQueue;
pub use controller::InteractiveController;
pub use data::navigation_command::{NavigationCommand, ZoomDirection};
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
