//! Decoder and preview renderers for pixel art image strings.
//!
//! An image string encodes a small square picture as text: rows are
//! separated by `:` and every character is one cell, with digits `0` to
//! `9` carrying the cell intensity and a space standing for `0`. The
//! decoder never fails; malformed characters become unlit cells and the
//! result is always exactly `size` by `size`.
//!
//! # Overview
//!
//! - [`decode`] / [`decode_with_size`] - image string to [`PixelGrid`]
//! - [`encode`] - [`PixelGrid`] back to its canonical image string
//! - [`icons`] - the built-in 5x5 gallery
//! - [`render`] - SVG and terminal preview backends
//!
//! # Example
//!
//! ```
//! use image_preview::{decode, encode};
//!
//! let heart = decode("09090:99999:99999:09990:00900");
//! assert_eq!(heart.size(), 5);
//! assert_eq!(heart.row(4), Some(&[0, 0, 9, 0, 0][..]));
//! assert_eq!(encode(&heart), "09090:99999:99999:09990:00900");
//! ```

pub mod grid;
pub mod icons;
pub mod image_string;
pub mod render;

pub use grid::{GridError, PixelGrid};
pub use image_string::{
    decode, decode_with_size, encode, DEFAULT_SIZE, MAX_INTENSITY, ROW_DELIMITER,
};
