use thiserror::Error;

use crate::core::data::resolution::Resolution;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeGridError {
    #[error("escape grid of {expected} cells cannot hold {actual} values")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Row-major `size x size` matrix of escape iteration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeGrid {
    resolution: Resolution,
    cells: Vec<u32>,
}

impl EscapeGrid {
    pub fn from_cells(resolution: Resolution, cells: Vec<u32>) -> Result<Self, EscapeGridError> {
        let expected = resolution.sample_count();

        if cells.len() != expected {
            return Err(EscapeGridError::SizeMismatch {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self { resolution, cells })
    }

    /// For generators that already produce exactly one value per sample.
    pub(crate) fn from_generated(resolution: Resolution, cells: Vec<u32>) -> Self {
        debug_assert_eq!(cells.len(), resolution.sample_count());

        Self { resolution, cells }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if !self.resolution.contains_index(row, col) {
            return None;
        }

        Some(self.cells[row * self.resolution.size() as usize + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.resolution.size() as usize)
    }

    /// Smallest and largest cell values; used to autoscale colour
    /// normalisation.
    pub fn value_range(&self) -> (u32, u32) {
        self.cells
            .iter()
            .fold((u32::MAX, u32::MIN), |(lo, hi), &value| {
                (lo.min(value), hi.max(value))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolution(size: u32) -> Resolution {
        Resolution::new(size).unwrap()
    }

    #[test]
    fn test_from_cells_checks_length() {
        let result = EscapeGrid::from_cells(resolution(2), vec![1, 2, 3]);

        assert_eq!(
            result,
            Err(EscapeGridError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_get_is_row_major() {
        let grid = EscapeGrid::from_cells(resolution(2), vec![1, 2, 3, 4]).unwrap();

        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(0, 1), Some(2));
        assert_eq!(grid.get(1, 0), Some(3));
        assert_eq!(grid.get(1, 1), Some(4));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_rows() {
        let grid = EscapeGrid::from_cells(resolution(3), (0..9).collect()).unwrap();
        let rows: Vec<&[u32]> = grid.rows().collect();

        assert_eq!(rows, vec![&[0, 1, 2][..], &[3, 4, 5][..], &[6, 7, 8][..]]);
    }

    #[test]
    fn test_value_range() {
        let grid = EscapeGrid::from_cells(resolution(2), vec![7, 0, 149, 3]).unwrap();

        assert_eq!(grid.value_range(), (0, 149));
    }
}
