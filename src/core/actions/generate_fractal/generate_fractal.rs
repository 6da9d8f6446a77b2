use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_bounds::ViewBounds;
use crate::core::util::linspace::linspace;

/// Column samples over `[xmin, xmax]` and row samples over `[ymin, ymax]`.
pub(crate) fn sample_axes(bounds: ViewBounds, resolution: Resolution) -> (Vec<f64>, Vec<f64>) {
    let count = resolution.size() as usize;

    (
        linspace(bounds.xmin(), bounds.xmax(), count),
        linspace(bounds.ymin(), bounds.ymax(), count),
    )
}

/// Evaluates `algorithm` at every sample, row by row, returning the results
/// in row-major order.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    bounds: ViewBounds,
    resolution: Resolution,
    algorithm: &Alg,
) -> Vec<Alg::Success> {
    let (xs, ys) = sample_axes(bounds, resolution);

    ys.iter()
        .flat_map(|&imag| xs.iter().map(move |&real| Complex { real, imag }))
        .map(|point| algorithm.compute(point))
        .collect()
}
