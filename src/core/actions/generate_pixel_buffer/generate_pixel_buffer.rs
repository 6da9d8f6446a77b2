use thiserror::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratePixelBufferError {
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Colours every grid cell with `mapper`, producing a packed RGB image with
/// the same resolution and row order as the grid.
pub fn generate_pixel_buffer<CMap: ColourMap<u32>>(
    grid: &EscapeGrid,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(grid.cells().len() * 3);

    for &value in grid.cells() {
        let Colour { r, g, b } = mapper.map(value);

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(grid.resolution(), buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap<u32> for StubColourMap {
        fn map(&self, value: u32) -> Colour {
            let v = value as u8;
            Colour { r: v, g: v, b: v }
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let resolution = Resolution::new(2).unwrap();
        let grid = EscapeGrid::from_cells(resolution, vec![1, 2, 3, 4]).unwrap();

        let result = generate_pixel_buffer(&grid, &StubColourMap {}).unwrap();

        assert_eq!(result.resolution(), resolution);
        assert_eq!(
            result.buffer(),
            &vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]
        );
    }

    #[test]
    fn test_single_cell_grid() {
        let resolution = Resolution::new(1).unwrap();
        let grid = EscapeGrid::from_cells(resolution, vec![9]).unwrap();

        let result = generate_pixel_buffer(&grid, &StubColourMap {}).unwrap();

        assert_eq!(result.buffer_size(), 3);
    }
}
