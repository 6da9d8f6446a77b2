use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_maps::power_norm::PowerNormalization;

/// Entries in the quantised lookup table, as in matplotlib's default colormaps.
const LUT_SIZE: usize = 256;

// (position, intensity) control points of the "hot" palette.
const RED: &[(f64, f64)] = &[(0.0, 0.0416), (0.365079, 1.0), (1.0, 1.0)];
const GREEN: &[(f64, f64)] = &[(0.0, 0.0), (0.365079, 0.0), (0.746032, 1.0), (1.0, 1.0)];
const BLUE: &[(f64, f64)] = &[(0.0, 0.0), (0.746032, 0.0), (1.0, 1.0)];

fn interpolate(segments: &[(f64, f64)], x: f64) -> f64 {
    for pair in segments.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];

        if x <= x1 {
            return y0 + (x - x0) / (x1 - x0) * (y1 - y0);
        }
    }

    segments.last().map_or(0.0, |&(_, y)| y)
}

fn channel(segments: &[(f64, f64)], x: f64) -> u8 {
    (interpolate(segments, x) * 255.0) as u8
}

/// Black through red, orange and yellow to white, applied after power-law
/// normalisation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HotGradient {
    normalization: PowerNormalization,
}

impl HotGradient {
    #[must_use]
    pub fn new(normalization: PowerNormalization) -> Self {
        Self { normalization }
    }

    fn colour_at(&self, t: f64) -> Colour {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let index = ((t * LUT_SIZE as f64) as usize).min(LUT_SIZE - 1);
        let x = index as f64 / (LUT_SIZE - 1) as f64;

        Colour {
            r: channel(RED, x),
            g: channel(GREEN, x),
            b: channel(BLUE, x),
        }
    }
}

impl ColourMap<u32> for HotGradient {
    fn map(&self, value: u32) -> Colour {
        self.colour_at(self.normalization.normalize(f64::from(value)))
    }
}
