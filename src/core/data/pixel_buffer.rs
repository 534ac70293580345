use crate::core::data::colour::Rgb;
use thiserror::Error;

pub const CHANNELS: usize = 3;

fn grid_size_to_buffer_size(grid_size: u32) -> usize {
    grid_size as usize * grid_size as usize * CHANNELS
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at row:{row}, col:{col} outside of {grid_size}x{grid_size} buffer")]
    PixelOutsideBounds { row: u32, col: u32, grid_size: u32 },
    #[error("grid size {grid_size} needs {expected} bytes, buffer has {actual}")]
    BoundsMismatch {
        grid_size: u32,
        expected: usize,
        actual: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// A square RGB image, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    grid_size: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// An all-black buffer.
    #[must_use]
    pub fn new(grid_size: u32) -> Self {
        Self {
            grid_size,
            buffer: vec![0; grid_size_to_buffer_size(grid_size)],
        }
    }

    pub fn from_data(grid_size: u32, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = grid_size_to_buffer_size(grid_size);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                grid_size,
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { grid_size, buffer })
    }

    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn into_bytes(self) -> PixelBufferData {
        self.buffer
    }

    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.grid_size as usize * CHANNELS
    }

    fn index_of(&self, row: u32, col: u32) -> Option<usize> {
        if row >= self.grid_size || col >= self.grid_size {
            return None;
        }

        Some(row as usize * self.row_stride() + col as usize * CHANNELS)
    }

    #[must_use]
    pub fn pixel(&self, row: u32, col: u32) -> Option<Rgb> {
        let index = self.index_of(row, col)?;

        Some(Rgb {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, row: u32, col: u32, colour: Rgb) -> Result<(), PixelBufferError> {
        let index = self
            .index_of(row, col)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                row,
                col,
                grid_size: self.grid_size,
            })?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    /// Raw bytes of each row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.buffer.chunks_exact(self.row_stride())
    }

    /// The buffer as a `[row][col]` grid.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Rgb>> {
        self.rows()
            .map(|row| {
                row.chunks_exact(CHANNELS)
                    .map(|px| Rgb::new(px[0], px[1], px[2]))
                    .collect()
            })
            .collect()
    }
}
