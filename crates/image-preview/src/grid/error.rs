//! Grid construction error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("invalid grid: intensity {value} at row {row}, column {col} is above 9")]
    IntensityRange { value: u8, row: usize, col: usize },
}
