use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// A navigation request waiting in the [`CommandQueue`](crate::controllers::interactive::command_queue::CommandQueue).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NavigationCommand {
    /// Zoom centred on a point of the complex plane.
    Zoom {
        target: Complex,
        direction: ZoomDirection,
    },
    /// Zoom centred on a grid position, mapped against the bounds that are
    /// current when the command is handled.
    ZoomAtPixel {
        position: Point,
        direction: ZoomDirection,
    },
    Reset,
}
