use std::sync::Arc;

use log::{debug, warn};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::PhysicalPosition;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::copy_rgb_to_rgba;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::input::gui::app::events::gui::GuiEvent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::run_gui::WINDOW_TITLE;
use crate::presenters::pixels::adapter::PixelsAdapter;

/// Shows frames in a fixed `size x size` framebuffer, scaled to the window.
pub struct PixelsPresenter {
    window: &'static Window,
    pixels: Pixels<'static>,
    adapter: Arc<PixelsAdapter>,
    resolution: Resolution,
    width: u32,
    height: u32,
    has_frame: bool,
    last_presented_generation: u64,
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn render(&mut self) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.maybe_draw_frame();

        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render()
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    fn window_to_grid(&self, position: PhysicalPosition<f64>) -> Option<Point> {
        let (col, row) = self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .ok()?;

        Some(Point {
            x: col as f64,
            y: row as f64,
        })
    }
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        resolution: Resolution,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(resolution.size(), resolution.size(), surface_texture)?;

        Ok(Self {
            window,
            pixels,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            resolution,
            width: size.width,
            height: size.height,
            has_frame: false,
            last_presented_generation: 0,
        })
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    fn maybe_draw_frame(&mut self) {
        let Some(event) = self.adapter.take_render_event() else {
            return;
        };

        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation > self.last_presented_generation
                    && frame.pixel_buffer.resolution() == self.resolution
                {
                    self.copy_frame(&frame);
                }
            }
            RenderEvent::Error(error) => {
                warn!("render {} failed: {}", error.generation, error.message);
            }
        }
    }

    fn copy_frame(&mut self, frame: &FrameData) {
        match copy_rgb_to_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut()) {
            Ok(()) => {
                self.has_frame = true;
                self.last_presented_generation = frame.generation;

                let status = frame.status_line();
                debug!("presented {status}");
                self.window.set_title(&format!("{WINDOW_TITLE} | {status}"));
            }
            Err(err) => warn!("dropping frame {}: {err}", frame.generation),
        }
    }
}
