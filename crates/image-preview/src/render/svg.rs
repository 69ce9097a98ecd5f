//! SVG preview renderer.

use log::trace;

use super::options::RenderOptions;
use crate::grid::PixelGrid;
use crate::image_string::encode;

/// Renders a grid as a standalone SVG document.
///
/// One `<rect>` per lit cell and nothing for unlit cells, so whatever is
/// behind the image shows through unless a background is configured. The
/// canonical encoded string rides along as the image title and label.
pub struct SvgRenderer {
    pub options: RenderOptions,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl SvgRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, grid: &PixelGrid) -> String {
        let cell = u64::from(self.options.cell_size);
        let edge = grid.size() as u64 * cell;
        // encoded strings are digits and colons, safe to embed unescaped
        let encoded = encode(grid);
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{edge}\" height=\"{edge}\" \
             viewBox=\"0 0 {edge} {edge}\" role=\"img\" aria-label=\"Pixel art image: {encoded}\">\n"
        ));
        out.push_str(&format!("  <title>{encoded}</title>\n"));
        if let Some(background) = self.options.background {
            out.push_str(&format!(
                "  <rect width=\"100%\" height=\"100%\" fill=\"{background}\"/>\n"
            ));
        }
        for (row, cells) in grid.rows().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let x = col as u64 * cell;
                let y = row as u64 * cell;
                out.push_str(&format!(
                    "  <rect x=\"{x}\" y=\"{y}\" width=\"{cell}\" height=\"{cell}\" fill=\"{fill}\"/>\n",
                    fill = self.options.fill
                ));
            }
        }
        out.push_str("</svg>\n");
        trace!(
            "rendered {} of {} cells as svg",
            grid.lit_count(),
            grid.cells().len()
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_string::decode;

    fn cell_rects(svg: &str) -> usize {
        svg.matches("<rect x=").count()
    }

    #[test]
    fn one_rect_per_lit_cell() {
        let svg = SvgRenderer::default().render(&decode("09090:99999:99999:09990:00900"));
        assert_eq!(cell_rects(&svg), 16);
    }

    #[test]
    fn blank_grid_renders_no_cells() {
        let svg = SvgRenderer::default().render(&decode(""));
        assert_eq!(cell_rects(&svg), 0);
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn viewport_scales_with_cell_size() {
        let options = RenderOptions {
            cell_size: 10,
            ..RenderOptions::default()
        };
        let svg = SvgRenderer::new(options).render(&decode("9"));
        assert!(svg.contains("width=\"50\" height=\"50\""));
        assert!(svg.contains("x=\"0\" y=\"0\" width=\"10\" height=\"10\""));
    }

    #[test]
    fn title_is_the_canonical_encoding() {
        let svg = SvgRenderer::default().render(&decode("9:a"));
        assert!(svg.contains("<title>90000:00000:00000:00000:00000</title>"));
    }

    #[test]
    fn background_rect_only_when_configured() {
        let plain = SvgRenderer::default().render(&decode("9"));
        assert!(!plain.contains("width=\"100%\""));

        let options = RenderOptions {
            background: Some("#ffffff".parse().unwrap()),
            ..RenderOptions::default()
        };
        let svg = SvgRenderer::new(options).render(&decode("9"));
        assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>"));
    }
}
