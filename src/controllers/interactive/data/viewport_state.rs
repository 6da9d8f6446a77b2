use crate::controllers::interactive::data::navigation_command::ZoomDirection;
use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_bounds::ViewBounds;

/// Current and startup view of the explorer.
///
/// Created once from the startup bounds and mutated in place by every
/// navigation command. The zoom factor is not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    current: ViewBounds,
    default: ViewBounds,
    zoom_factor: f64,
    resolution: Resolution,
}

impl ViewportState {
    #[must_use]
    pub fn new(initial: ViewBounds, zoom_factor: f64, resolution: Resolution) -> Self {
        Self {
            current: initial,
            default: initial,
            zoom_factor,
            resolution,
        }
    }

    pub fn current(&self) -> ViewBounds {
        self.current
    }

    pub fn default_bounds(&self) -> ViewBounds {
        self.default
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Rescales the view by the zoom factor and centres it on `target`.
    ///
    /// Returns `None` and leaves the view untouched when `target` lies
    /// outside the current bounds.
    pub fn zoom_at(&mut self, target: Complex, direction: ZoomDirection) -> Option<ViewBounds> {
        if !self.current.contains_point(target) {
            return None;
        }

        let (width, height) = match direction {
            ZoomDirection::In => (
                self.current.width() / self.zoom_factor,
                self.current.height() / self.zoom_factor,
            ),
            ZoomDirection::Out => (
                self.current.width() * self.zoom_factor,
                self.current.height() * self.zoom_factor,
            ),
        };

        self.current = ViewBounds::centred_on(target, width, height);

        Some(self.current)
    }

    pub fn reset(&mut self) -> ViewBounds {
        self.current = self.default;

        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn startup_bounds() -> ViewBounds {
        ViewBounds::new(-1.5, 0.5, -1.0, 1.0).unwrap()
    }

    fn state(zoom_factor: f64) -> ViewportState {
        ViewportState::new(startup_bounds(), zoom_factor, Resolution::new(800).unwrap())
    }

    fn assert_close(actual: f64, expected: f64) {
        let scale = expected.abs().max(1.0);

        assert!(
            (actual - expected).abs() <= 1e-9 * scale,
            "{} is not within tolerance of {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_new_starts_at_default() {
        let viewport = state(1.1);

        assert_eq!(viewport.current(), startup_bounds());
        assert_eq!(viewport.default_bounds(), startup_bounds());
        assert_eq!(viewport.zoom_factor(), 1.1);
        assert_eq!(viewport.resolution().size(), 800);
    }

    #[test]
    fn test_zoom_in_shrinks_and_recentres() {
        let mut viewport = state(2.0);

        let bounds = viewport
            .zoom_at(Complex::new(0.0, 0.5), ZoomDirection::In)
            .unwrap();

        assert_eq!(bounds.xmin(), -0.5);
        assert_eq!(bounds.xmax(), 0.5);
        assert_eq!(bounds.ymin(), 0.0);
        assert_eq!(bounds.ymax(), 1.0);
        assert_eq!(viewport.current(), bounds);
    }

    #[test]
    fn test_zoom_out_grows_and_recentres() {
        let mut viewport = state(2.0);

        let bounds = viewport
            .zoom_at(Complex::new(-0.5, 0.0), ZoomDirection::Out)
            .unwrap();

        assert_eq!(bounds.xmin(), -2.5);
        assert_eq!(bounds.xmax(), 1.5);
        assert_eq!(bounds.ymin(), -2.0);
        assert_eq!(bounds.ymax(), 2.0);
    }

    #[test]
    fn test_zoom_round_trip_at_centre_restores_bounds() {
        let mut viewport = state(1.1);
        let before = viewport.current();
        let centre = before.centre();

        viewport.zoom_at(centre, ZoomDirection::In).unwrap();
        let after = viewport.zoom_at(centre, ZoomDirection::Out).unwrap();

        assert_close(after.xmin(), before.xmin());
        assert_close(after.xmax(), before.xmax());
        assert_close(after.ymin(), before.ymin());
        assert_close(after.ymax(), before.ymax());
    }

    #[test]
    fn test_zoom_round_trip_anywhere_restores_size() {
        let mut viewport = state(1.1);
        let target = Complex::new(-0.3, 0.4);

        viewport.zoom_at(target, ZoomDirection::In).unwrap();
        viewport.zoom_at(target, ZoomDirection::In).unwrap();
        viewport.zoom_at(target, ZoomDirection::Out).unwrap();
        let after = viewport.zoom_at(target, ZoomDirection::Out).unwrap();

        assert_close(after.width(), 2.0);
        assert_close(after.height(), 2.0);
        assert_close(after.centre().real, target.real);
        assert_close(after.centre().imag, target.imag);
    }

    #[test]
    fn test_zoom_outside_current_bounds_is_noop() {
        let mut viewport = state(1.1);

        let result = viewport.zoom_at(Complex::new(0.6, 0.0), ZoomDirection::In);

        assert_eq!(result, None);
        assert_eq!(viewport.current(), startup_bounds());
    }

    #[test]
    fn test_zoom_on_edge_is_accepted() {
        let mut viewport = state(1.1);

        let result = viewport.zoom_at(Complex::new(0.5, 1.0), ZoomDirection::In);

        assert!(result.is_some());
    }

    #[test]
    fn test_reset_restores_startup_bounds_exactly() {
        let mut viewport = state(1.1);

        viewport.zoom_at(Complex::new(-0.7, 0.2), ZoomDirection::In);
        viewport.zoom_at(Complex::new(-0.71, 0.21), ZoomDirection::In);
        viewport.zoom_at(Complex::new(-0.7, 0.2), ZoomDirection::Out);

        assert_eq!(viewport.reset(), startup_bounds());
        assert_eq!(viewport.current(), startup_bounds());
    }

    #[test]
    fn test_zoom_factor_one_only_recentres() {
        let mut viewport = state(1.0);

        let bounds = viewport
            .zoom_at(Complex::new(0.0, 0.0), ZoomDirection::In)
            .unwrap();

        assert_eq!(bounds.width(), 2.0);
        assert_eq!(bounds.centre(), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_degenerate_zoom_factors_do_not_panic() {
        let mut zero = state(0.0);
        let bounds = zero.zoom_at(Complex::new(0.0, 0.0), ZoomDirection::In).unwrap();
        assert!(bounds.width().is_infinite());

        let mut negative = state(-2.0);
        let bounds = negative
            .zoom_at(Complex::new(0.0, 0.0), ZoomDirection::Out)
            .unwrap();
        assert!(bounds.width() < 0.0);

        // Inverted bounds contain nothing, so further zooms are no-ops.
        assert_eq!(
            negative.zoom_at(Complex::new(0.0, 0.0), ZoomDirection::In),
            None
        );
        assert_eq!(negative.reset(), startup_bounds());
    }
}
