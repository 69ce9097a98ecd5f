//! Terminal preview renderer.

use super::options::RenderOptions;
use crate::grid::PixelGrid;

const LIT: &str = "\u{2588}\u{2588}";
const UNLIT: &str = "  ";
const RESET: &str = "\x1b[0m";

/// Renders a grid as text for a terminal.
///
/// Cells are two columns wide so the output stays close to square: full
/// blocks for lit cells and spaces for unlit ones. With `color` set, the
/// fill and background from the options are applied per row as 24-bit
/// ANSI sequences.
pub struct TerminalRenderer {
    pub options: RenderOptions,
    pub color: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl TerminalRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            color: false,
        }
    }

    pub fn render(&self, grid: &PixelGrid) -> String {
        let prefix = if self.color {
            Some(self.row_prefix())
        } else {
            None
        };
        let mut out = String::new();
        for cells in grid.rows() {
            if let Some(prefix) = &prefix {
                out.push_str(prefix);
            }
            for &value in cells {
                out.push_str(if value > 0 { LIT } else { UNLIT });
            }
            if prefix.is_some() {
                out.push_str(RESET);
            }
            out.push('\n');
        }
        out
    }

    fn row_prefix(&self) -> String {
        let fill = self.options.fill;
        let mut prefix = format!("\x1b[38;2;{};{};{}m", fill.r, fill.g, fill.b);
        if let Some(background) = self.options.background {
            prefix.push_str(&format!(
                "\x1b[48;2;{};{};{}m",
                background.r, background.g, background.b
            ));
        }
        prefix
    }
}
