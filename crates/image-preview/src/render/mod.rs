//! Grid preview renderers.
//!
//! Both backends share the preview's visual rule: a cell with intensity
//! above zero is filled, a zero cell is transparent.

mod color;
mod options;
mod svg;
mod terminal;

pub use color::{ColorParseError, Rgb, DEFAULT_FILL};
pub use options::{RenderOptions, DEFAULT_CELL_SIZE};
pub use svg::SvgRenderer;
pub use terminal::TerminalRenderer;
