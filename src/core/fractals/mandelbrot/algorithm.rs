use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_cap::IterationCap;

/// Escape-time recurrence `z = z*z + c`, started from `z = c`.
///
/// Returns the last 1-based iteration index at which `|z| < 2` still held,
/// or `0` when the sample starts outside the escape radius.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: IterationCap,
}

const ESCAPE_RADIUS: f64 = 2.0;

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(max_iterations: IterationCap) -> Self {
        Self { max_iterations }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, c: Complex) -> Self::Success {
        let mut z = c;
        let mut last_inside = 0;

        for iteration in 1..self.max_iterations.get() {
            // NaN and infinity both fail this comparison, so diverged
            // samples stop here.
            if z.norm() < ESCAPE_RADIUS {
                last_inside = iteration;
            } else {
                break;
            }

            z = z.square() + c;
        }

        last_inside
    }
}
