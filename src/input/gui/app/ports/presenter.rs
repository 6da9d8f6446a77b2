use std::sync::Arc;

use winit::dpi::PhysicalPosition;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::point::Point;

/// Display side of the GUI: owns the window surface and shows frames that
/// arrive through its shared adapter.
pub trait GuiPresenterPort {
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    fn render(&mut self) -> Result<(), pixels::Error>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;

    /// Grid position under a window position, or `None` outside the image.
    fn window_to_grid(&self, position: PhysicalPosition<f64>) -> Option<Point>;
}
