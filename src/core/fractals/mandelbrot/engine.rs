use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_bounds::ViewBounds;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// Computes the escape grid for `bounds`, one row after another.
#[must_use]
pub fn compute(
    bounds: ViewBounds,
    resolution: Resolution,
    max_iterations: IterationCap,
) -> EscapeGrid {
    let algorithm = MandelbrotAlgorithm::new(max_iterations);
    let cells = generate_fractal(bounds, resolution, &algorithm);

    finish(resolution, max_iterations, cells)
}

/// Same grid as [`compute`], with rows spread over the rayon pool.
#[must_use]
pub fn compute_parallel(
    bounds: ViewBounds,
    resolution: Resolution,
    max_iterations: IterationCap,
) -> EscapeGrid {
    let algorithm = MandelbrotAlgorithm::new(max_iterations);
    let cells = generate_fractal_rayon(bounds, resolution, &algorithm);

    finish(resolution, max_iterations, cells)
}

// Samples that never escaped hold the last index; they share the 0 sentinel
// with samples that escaped immediately.
fn finish(
    resolution: Resolution,
    max_iterations: IterationCap,
    mut cells: Vec<u32>,
) -> EscapeGrid {
    let last_index = max_iterations.last_index();

    for cell in cells.iter_mut().filter(|cell| **cell == last_index) {
        *cell = 0;
    }

    EscapeGrid::from_generated(resolution, cells)
}
