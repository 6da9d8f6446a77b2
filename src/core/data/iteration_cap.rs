use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum IterationCapError {
    #[error("iteration cap must be greater than one, got {0}")]
    TooSmall(u32),
}

/// Upper bound on recurrence steps evaluated per sample.
///
/// Iteration indices run from 1 to `get() - 1`, so a cap of 1 would evaluate
/// nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IterationCap(u32);

impl IterationCap {
    pub fn new(iters: u32) -> Result<Self, IterationCapError> {
        if iters < 2 {
            return Err(IterationCapError::TooSmall(iters));
        }

        Ok(Self(iters))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Highest iteration index a sample can record. Cells left at this value
    /// after the sweep are folded into the `0` sentinel.
    pub fn last_index(self) -> u32 {
        self.0 - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_cap_rejects_zero_and_one() {
        assert_eq!(IterationCap::new(0), Err(IterationCapError::TooSmall(0)));
        assert_eq!(IterationCap::new(1), Err(IterationCapError::TooSmall(1)));
    }

    #[test]
    fn test_iteration_cap_last_index() {
        let cap = IterationCap::new(150).unwrap();

        assert_eq!(cap.get(), 150);
        assert_eq!(cap.last_index(), 149);
    }
}
