use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_bounds::ViewBounds;

const DEFAULT_RESOLUTION: u32 = 800;
const DEFAULT_MAX_ITERATIONS: u32 = 150;
const DEFAULT_ZOOM_FACTOR: f64 = 1.1;
const DEFAULT_GAMMA: f64 = 0.2;

pub(crate) fn default_region() -> ViewBounds {
    ViewBounds::new(-1.5, 0.5, -1.0, 1.0).expect("default fractal region is valid")
}

/// Startup settings of the explorer.
///
/// `zoom_factor` is deliberately unchecked: values at or below zero, or
/// exactly one, give degenerate views rather than errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub region: ViewBounds,
    pub resolution: Resolution,
    pub max_iterations: IterationCap,
    pub zoom_factor: f64,
    /// Exponent of the power-law colour normalisation.
    pub gamma: f64,
    /// Spread grid rows over the rayon pool.
    pub parallel: bool,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            resolution: Resolution::new(DEFAULT_RESOLUTION).expect("default resolution is valid"),
            max_iterations: IterationCap::new(DEFAULT_MAX_ITERATIONS)
                .expect("default iteration cap is valid"),
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            gamma: DEFAULT_GAMMA,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_startup_view() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.region, ViewBounds::new(-1.5, 0.5, -1.0, 1.0).unwrap());
        assert_eq!(config.resolution.size(), 800);
        assert_eq!(config.max_iterations.get(), 150);
        assert_eq!(config.zoom_factor, 1.1);
        assert_eq!(config.gamma, 0.2);
        assert!(config.parallel);
    }
}
