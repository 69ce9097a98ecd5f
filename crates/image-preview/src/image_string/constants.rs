//! Image string format constants.

/// Separator between the row segments of an encoded image string.
pub const ROW_DELIMITER: char = ':';

/// Side length used when a grid is decoded without an explicit size.
pub const DEFAULT_SIZE: usize = 5;

/// Largest intensity a cell can hold.
pub const MAX_INTENSITY: u8 = 9;
