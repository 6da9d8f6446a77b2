use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::view_bounds::ViewBounds;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum PixelToDataCoordsError {
    #[error("point (x: {}, y: {}) is outside the {size}x{size} grid", .point.x, .point.y)]
    PointOutsideGrid { point: Point, size: u32 },
}

/// Maps a grid position into the data coordinates of `bounds`.
///
/// Linear over `[0, size)` on both axes; anything outside that range is
/// rejected.
pub fn pixel_to_data_coords(
    position: Point,
    resolution: Resolution,
    bounds: ViewBounds,
) -> Result<Complex, PixelToDataCoordsError> {
    let size = f64::from(resolution.size());

    let inside = |value: f64| (0.0..size).contains(&value);

    if !inside(position.x) || !inside(position.y) {
        return Err(PixelToDataCoordsError::PointOutsideGrid {
            point: position,
            size: resolution.size(),
        });
    }

    let real = position.x * bounds.width() / size + bounds.xmin();
    let imag = position.y * bounds.height() / size + bounds.ymin();

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> ViewBounds {
        ViewBounds::new(-1.5, 0.5, -1.0, 1.0).unwrap()
    }

    fn resolution() -> Resolution {
        Resolution::new(800).unwrap()
    }

    #[test]
    fn test_origin_maps_to_minimum_corner() {
        let result = pixel_to_data_coords(Point { x: 0.0, y: 0.0 }, resolution(), bounds());

        assert_eq!(result, Ok(Complex::new(-1.5, -1.0)));
    }

    #[test]
    fn test_centre_maps_to_view_centre() {
        let result = pixel_to_data_coords(Point { x: 400.0, y: 400.0 }, resolution(), bounds());

        assert_eq!(result, Ok(Complex::new(-0.5, 0.0)));
    }

    #[test]
    fn test_rows_grow_towards_ymax() {
        let top = pixel_to_data_coords(Point { x: 0.0, y: 10.0 }, resolution(), bounds()).unwrap();
        let bottom =
            pixel_to_data_coords(Point { x: 0.0, y: 790.0 }, resolution(), bounds()).unwrap();

        assert!(top.imag < bottom.imag);
    }

    #[test]
    fn test_points_outside_grid_fail() {
        let outside = [
            Point { x: -0.5, y: 10.0 },
            Point { x: 10.0, y: -1.0 },
            Point { x: 800.0, y: 10.0 },
            Point { x: 10.0, y: 800.0 },
            Point { x: f64::NAN, y: 10.0 },
        ];

        for point in outside {
            let result = pixel_to_data_coords(point, resolution(), bounds());

            assert!(
                matches!(result, Err(PixelToDataCoordsError::PointOutsideGrid { size: 800, .. })),
                "expected {:?} to be rejected",
                point
            );
        }
    }

    #[test]
    fn test_last_pixel_is_inside() {
        let result = pixel_to_data_coords(Point { x: 799.9, y: 799.9 }, resolution(), bounds());

        assert!(result.is_ok());
    }
}
