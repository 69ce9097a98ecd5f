//! Image string codec.
//!
//! An image string encodes a small square picture as text. Rows are
//! separated by `:` and every character is one cell: digits `0` to `9`
//! carry the cell intensity, a space is the same as `0`, and anything
//! else is read as an unlit cell. No input fails to decode.

mod constants;
mod decoder;
mod encoder;

pub use constants::{DEFAULT_SIZE, MAX_INTENSITY, ROW_DELIMITER};
pub use decoder::{decode, decode_with_size};
pub use encoder::encode;
