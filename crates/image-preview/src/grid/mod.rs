//! Square pixel grid produced by the decoder.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

mod error;

pub use error::GridError;

use crate::image_string::MAX_INTENSITY;

/// Square grid of cell intensities.
///
/// Cells are stored row-major and always hold values in `0..=9`: `new`
/// starts every cell at zero, `set` clamps, and `from_rows` rejects
/// anything above nine.
///
/// Serializes as nested arrays, one inner array per row, and
/// deserializing revalidates the shape through [`PixelGrid::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: usize,
    cells: Vec<u8>,
}

impl PixelGrid {
    /// Creates an all-zero grid with side length `size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Builds a grid from nested rows.
    ///
    /// Examples:
    /// - `[[0, 9], [9, 0]] -> 2x2 grid`
    /// - `[[0, 9], [9]] -> GridError::NotSquare`
    /// - `[[12]] -> GridError::IntensityRange`
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value > MAX_INTENSITY {
                    return Err(GridError::IntensityRange { value, row, col });
                }
                cells.push(value);
            }
        }
        Ok(Self { size, cells })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Intensity at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Sets the intensity at `(row, col)`, clamping the value to nine.
    ///
    /// Writes outside the grid are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = value.min(MAX_INTENSITY);
        }
    }

    /// One row as a slice, or `None` outside the grid.
    pub fn row(&self, index: usize) -> Option<&[u8]> {
        if index < self.size {
            let start = index * self.size;
            Some(&self.cells[start..start + self.size])
        } else {
            None
        }
    }

    /// Iterates over the rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // chunk size must be nonzero even when the grid has no cells
        self.cells.chunks(self.size.max(1))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// True when every cell is zero.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&cell| cell == 0)
    }

    /// Number of cells with a nonzero intensity.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell > 0).count()
    }
}

impl Serialize for PixelGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.rows())
    }
}

impl<'de> Deserialize<'de> for PixelGrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<Vec<u8>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
