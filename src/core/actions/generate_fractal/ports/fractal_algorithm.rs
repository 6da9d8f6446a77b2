use crate::core::data::complex::Complex;

/// Per-sample kernel evaluated at every point of the grid.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, point: Complex) -> Self::Success;
}
