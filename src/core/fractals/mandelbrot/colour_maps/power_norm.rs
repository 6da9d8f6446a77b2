use crate::core::data::escape_grid::EscapeGrid;

/// Power-law intensity normalisation, `v -> ((v - vmin) / (vmax - vmin))^gamma`.
///
/// Evaluated as `(v - vmin)^gamma / (vmax - vmin)^gamma`. Values below
/// `vmin` clamp to `0`, and an empty range maps everything to `0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PowerNormalization {
    vmin: f64,
    vmax: f64,
    gamma: f64,
}

impl PowerNormalization {
    #[must_use]
    pub fn new(vmin: f64, vmax: f64, gamma: f64) -> Self {
        Self { vmin, vmax, gamma }
    }

    /// Range taken from the smallest and largest cell of `grid`.
    #[must_use]
    pub fn autoscale(grid: &EscapeGrid, gamma: f64) -> Self {
        let (lo, hi) = grid.value_range();

        Self::new(f64::from(lo), f64::from(hi), gamma)
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn normalize(&self, value: f64) -> f64 {
        if self.vmin == self.vmax {
            return 0.0;
        }

        let shifted = (value - self.vmin).max(0.0);

        shifted.powf(self.gamma) / (self.vmax - self.vmin).powf(self.gamma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    #[test]
    fn test_normalize_endpoints() {
        let norm = PowerNormalization::new(0.0, 100.0, 0.2);

        assert_eq!(norm.normalize(0.0), 0.0);
        assert_eq!(norm.normalize(100.0), 1.0);
    }

    #[test]
    fn test_normalize_lifts_low_values() {
        let norm = PowerNormalization::new(0.0, 100.0, 0.2);
        let half = norm.normalize(50.0);

        assert!((half - 0.5_f64.powf(0.2)).abs() < 1e-12);
        assert!(half > 0.85);
    }

    #[test]
    fn test_normalize_clamps_below_minimum() {
        let norm = PowerNormalization::new(10.0, 20.0, 0.2);

        assert_eq!(norm.normalize(3.0), 0.0);
    }

    #[test]
    fn test_normalize_flat_range_is_zero() {
        let norm = PowerNormalization::new(5.0, 5.0, 0.2);

        assert_eq!(norm.normalize(5.0), 0.0);
    }

    #[test]
    fn test_autoscale_uses_grid_range() {
        let grid =
            EscapeGrid::from_cells(Resolution::new(2).unwrap(), vec![4, 0, 120, 9]).unwrap();

        let norm = PowerNormalization::autoscale(&grid, 0.2);

        assert_eq!(norm, PowerNormalization::new(0.0, 120.0, 0.2));
        assert_eq!(norm.gamma(), 0.2);
    }
}
