use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_bounds::ViewBounds;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub bounds: ViewBounds,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}

impl FrameData {
    /// Short summary for window titles, e.g. `render 3 in 41.20 ms`.
    pub fn status_line(&self) -> String {
        format!(
            "render {} in {:.2} ms",
            self.generation,
            self.render_duration.as_secs_f64() * 1000.0
        )
    }
}
