//! Image string decoder.

use log::{debug, trace};

use super::constants::{DEFAULT_SIZE, ROW_DELIMITER};
use crate::grid::PixelGrid;

/// Decodes an image string into the default five by five grid.
///
/// # Example
///
/// ```
/// use image_preview::decode;
///
/// let heart = decode("09090:99999:99999:09990:00900");
/// assert_eq!(heart.row(0), Some(&[0, 9, 0, 9, 0][..]));
/// assert_eq!(heart.lit_count(), 16);
/// ```
pub fn decode(image_string: &str) -> PixelGrid {
    decode_with_size(image_string, DEFAULT_SIZE)
}

/// Decodes an image string into a `size` by `size` grid.
///
/// The input is split on `:` into row segments with one character per
/// cell: `0` to `9` is that cell's intensity and a space counts as `0`.
/// Any other character is read as an unlit cell rather than an error.
/// Short rows and missing rows are zero-filled, extra characters and
/// extra rows are dropped, so the result is always exactly `size` by
/// `size` for any input. A `size` of zero yields the empty grid.
///
/// Examples:
/// - `decode_with_size("1:22", 3) -> [[1, 0, 0], [2, 2, 0], [0, 0, 0]]`
/// - `decode_with_size("", 2) -> [[0, 0], [0, 0]]`
pub fn decode_with_size(image_string: &str, size: usize) -> PixelGrid {
    let mut grid = PixelGrid::new(size);
    for (row, segment) in image_string.split(ROW_DELIMITER).take(size).enumerate() {
        for (col, ch) in segment.chars().take(size).enumerate() {
            grid.set(row, col, intensity_of(ch, row, col));
        }
    }
    trace!("decoded a {size}x{size} grid with {} lit cells", grid.lit_count());
    grid
}

fn intensity_of(ch: char, row: usize, col: usize) -> u8 {
    match ch {
        ' ' | '0' => 0,
        _ => match ch.to_digit(10) {
            Some(digit) => digit as u8,
            None => {
                debug!("treating {ch:?} at row {row}, column {col} as an unlit cell");
                0
            }
        },
    }
}
