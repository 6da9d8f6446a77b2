use rayon::prelude::*;

use crate::core::actions::generate_fractal::generate_fractal::sample_axes;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_bounds::ViewBounds;

/// Generates fractal data with rows spread over rayon's work-stealing pool.
///
/// Blocks until every row is done. Rows are reassembled in order, so the
/// output is identical to [`generate_fractal`](super::generate_fractal::generate_fractal).
pub fn generate_fractal_rayon<Alg>(
    bounds: ViewBounds,
    resolution: Resolution,
    algorithm: &Alg,
) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let (xs, ys) = sample_axes(bounds, resolution);

    let rows: Vec<Vec<Alg::Success>> = ys
        .into_par_iter()
        .map(|imag| {
            xs.iter()
                .map(|&real| algorithm.compute(Complex { real, imag }))
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u64;

        fn compute(&self, point: Complex) -> Self::Success {
            (point.real * 1000.0 + point.imag * 10.0).to_bits()
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let bounds = ViewBounds::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let resolution = Resolution::new(37).unwrap();
        let algorithm = StubAlgorithm {};

        let sequential_results = generate_fractal(bounds, resolution, &algorithm);
        let rayon_results = generate_fractal_rayon(bounds, resolution, &algorithm);

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_with_single_sample() {
        let bounds = ViewBounds::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let resolution = Resolution::new(1).unwrap();
        let algorithm = StubAlgorithm {};

        let sequential_results = generate_fractal(bounds, resolution, &algorithm);
        let rayon_results = generate_fractal_rayon(bounds, resolution, &algorithm);

        assert_eq!(rayon_results.len(), 1);
        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_with_large_grid() {
        let bounds = ViewBounds::new(-2.0, 1.0, -1.0, 1.0).unwrap();
        let resolution = Resolution::new(256).unwrap();
        let algorithm = StubAlgorithm {};

        let sequential_results = generate_fractal(bounds, resolution, &algorithm);
        let rayon_results = generate_fractal_rayon(bounds, resolution, &algorithm);

        assert_eq!(rayon_results.len(), 256 * 256);
        assert_eq!(rayon_results, sequential_results);
    }
}
