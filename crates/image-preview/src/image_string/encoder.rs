//! Canonical image string encoder.

use std::fmt;

use super::constants::ROW_DELIMITER;
use crate::grid::PixelGrid;

/// Encodes a grid in canonical form.
///
/// One digit per cell with rows joined by `:`. Unlit cells encode as `0`,
/// never as a space, so decoding the output at the same size reproduces
/// the grid exactly.
///
/// # Example
///
/// ```
/// use image_preview::{decode_with_size, encode};
///
/// let grid = decode_with_size("1:22", 3);
/// assert_eq!(encode(&grid), "100:220:000");
/// ```
pub fn encode(grid: &PixelGrid) -> String {
    let size = grid.size();
    let mut out = String::with_capacity(size * (size + 1));
    for (index, row) in grid.rows().enumerate() {
        if index > 0 {
            out.push(ROW_DELIMITER);
        }
        for &cell in row {
            out.push(char::from(b'0' + cell));
        }
    }
    out
}

impl fmt::Display for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_string::decode;

    #[test]
    fn encode_heart_is_identity() {
        let heart = "09090:99999:99999:09990:00900";
        assert_eq!(encode(&decode(heart)), heart);
    }

    #[test]
    fn encode_zero_fills() {
        assert_eq!(encode(&decode("9")), "90000:00000:00000:00000:00000");
    }

    #[test]
    fn encode_empty_grid() {
        assert_eq!(encode(&PixelGrid::new(0)), "");
    }

    #[test]
    fn display_is_canonical_form() {
        let grid = decode("  9  :99:a");
        assert_eq!(grid.to_string(), encode(&grid));
    }
}
