use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("resolution must be at least one sample per side")]
    Zero,
}

/// Side length of the square sample grid, one pixel per sample.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Resolution(u32);

impl Resolution {
    pub fn new(size: u32) -> Result<Self, ResolutionError> {
        if size == 0 {
            return Err(ResolutionError::Zero);
        }

        Ok(Self(size))
    }

    pub fn size(self) -> u32 {
        self.0
    }

    /// Total number of samples, `size * size`.
    pub fn sample_count(self) -> usize {
        let side = self.0 as usize;
        side * side
    }

    pub fn contains_index(self, row: usize, col: usize) -> bool {
        let side = self.0 as usize;
        row < side && col < side
    }
}
