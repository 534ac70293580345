use crate::core::data::sample_grid::SampleGrid;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeValuesError {
    #[error("grid size {grid_size} needs {expected} escape values, got {actual}")]
    LengthMismatch {
        grid_size: u32,
        expected: usize,
        actual: usize,
    },
}

/// Normalised escape speeds, one per sample, in [`SampleGrid`] order.
///
/// `0` marks a sample that never escaped (or escaped before the first step).
///
/// [`SampleGrid`]: crate::core::data::sample_grid::SampleGrid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeValues {
    grid_size: u32,
    values: Vec<u8>,
}

impl EscapeValues {
    pub fn from_data(grid_size: u32, values: Vec<u8>) -> Result<Self, EscapeValuesError> {
        let expected = grid_size as usize * grid_size as usize;

        if values.len() != expected {
            return Err(EscapeValuesError::LengthMismatch {
                grid_size,
                expected,
                actual: values.len(),
            });
        }

        Ok(Self { grid_size, values })
    }

    /// Pairs values computed from `grid` with its size. The caller produces
    /// exactly one value per sample.
    pub(crate) fn for_grid(grid: &SampleGrid, values: Vec<u8>) -> Self {
        debug_assert_eq!(values.len(), grid.len());

        Self {
            grid_size: grid.grid_size(),
            values,
        }
    }

    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value for column `x`, row `y`.
    #[must_use]
    pub fn at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.grid_size || y >= self.grid_size {
            return None;
        }

        self.values
            .get(x as usize * self.grid_size as usize + y as usize)
            .copied()
    }
}
