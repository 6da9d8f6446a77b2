use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::Key;

use crate::controllers::interactive::data::navigation_command::{
    NavigationCommand, ZoomDirection,
};
use crate::core::data::point::Point;

/// Translates raw window input into navigation commands.
///
/// Cursor motion is only tracked so a later scroll knows where to zoom.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct NavigationInput {
    cursor: Option<PhysicalPosition<f64>>,
}

impl NavigationInput {
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(position);
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Wheel up zooms in and wheel down zooms out, at the grid position under
    /// the cursor. Scrolls away from the image produce nothing.
    pub fn handle_scroll<F>(
        &self,
        delta: MouseScrollDelta,
        window_to_grid: F,
    ) -> Option<NavigationCommand>
    where
        F: Fn(PhysicalPosition<f64>) -> Option<Point>,
    {
        let direction = scroll_direction(delta)?;
        let position = window_to_grid(self.cursor?)?;

        Some(NavigationCommand::ZoomAtPixel {
            position,
            direction,
        })
    }

    pub fn handle_key(&self, key: &Key, state: ElementState) -> Option<NavigationCommand> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            Key::Character(text) if text.as_str() == "r" => Some(NavigationCommand::Reset),
            _ => None,
        }
    }
}

fn scroll_direction(delta: MouseScrollDelta) -> Option<ZoomDirection> {
    let vertical = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if vertical > 0.0 {
        Some(ZoomDirection::In)
    } else if vertical < 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}
