//! Renderer behavior matrix.

use image_preview::icons::{self, Icon};
use image_preview::render::{RenderOptions, Rgb, SvgRenderer, TerminalRenderer, DEFAULT_FILL};
use image_preview::{decode, decode_with_size};

// ---------------------------------------------------------------------------
// svg
// ---------------------------------------------------------------------------

#[test]
fn svg_draws_exactly_the_lit_cells() {
    let grid = decode("09090:99999:99999:09990:00900");
    let svg = SvgRenderer::default().render(&grid);
    assert_eq!(svg.matches("<rect x=").count(), grid.lit_count());
    assert!(svg.contains("fill=\"#393a35\""));
}

#[test]
fn svg_default_viewport_is_25_pixels() {
    let svg = SvgRenderer::default().render(&decode("9"));
    assert!(svg.contains("viewBox=\"0 0 25 25\""));
}

#[test]
fn svg_positions_cells_on_the_grid() {
    let svg = SvgRenderer::default().render(&decode_with_size("09:90", 2));
    assert!(svg.contains("x=\"5\" y=\"0\""));
    assert!(svg.contains("x=\"0\" y=\"5\""));
}

#[test]
fn svg_carries_the_canonical_label() {
    let svg = SvgRenderer::default().render(&decode_with_size("1:22", 3));
    assert!(svg.contains("aria-label=\"Pixel art image: 100:220:000\""));
    assert!(svg.contains("<title>100:220:000</title>"));
}

#[test]
fn svg_respects_custom_options() {
    let options = RenderOptions {
        cell_size: 8,
        fill: Rgb::new(255, 0, 0),
        background: Some(Rgb::new(255, 255, 255)),
    };
    let svg = SvgRenderer::new(options).render(&decode_with_size("9", 1));
    assert!(svg.contains("width=\"8\" height=\"8\""));
    assert!(svg.contains("fill=\"#ff0000\""));
    assert!(svg.contains("<rect width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>"));
}

#[test]
fn svg_of_the_empty_grid_is_a_valid_document() {
    let svg = SvgRenderer::default().render(&decode_with_size("", 0));
    assert!(svg.contains("width=\"0\" height=\"0\""));
    assert_eq!(svg.matches("<rect x=").count(), 0);
    assert!(svg.ends_with("</svg>\n"));
}

// ---------------------------------------------------------------------------
// terminal
// ---------------------------------------------------------------------------

#[test]
fn terminal_output_has_one_line_per_row() {
    let text = TerminalRenderer::default().render(&decode("09090:99999"));
    assert_eq!(text.lines().count(), 5);
}

#[test]
fn terminal_blocks_mirror_the_grid() {
    let text = TerminalRenderer::default().render(&decode_with_size("90:09", 2));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "\u{2588}\u{2588}  ");
    assert_eq!(lines[1], "  \u{2588}\u{2588}");
}

#[test]
fn terminal_is_plain_unless_color_is_requested() {
    let plain = TerminalRenderer::default().render(&decode("9"));
    assert!(!plain.contains('\x1b'));

    let colored = TerminalRenderer {
        options: RenderOptions::default(),
        color: true,
    }
    .render(&decode_with_size("9", 1));
    assert!(colored.starts_with("\x1b[38;2;57;58;53m"));
    assert!(colored.ends_with("\x1b[0m\n"));
}

// ---------------------------------------------------------------------------
// icons through the renderers
// ---------------------------------------------------------------------------

#[test]
fn every_icon_renders_in_both_backends() {
    let svg = SvgRenderer::default();
    let terminal = TerminalRenderer::default();
    for icon in icons::all() {
        let grid = icon.grid();
        assert_eq!(svg.render(&grid).matches("<rect x=").count(), grid.lit_count());
        assert_eq!(terminal.render(&grid).lines().count(), 5);
    }
}

#[test]
fn heart_icon_renders_sixteen_cells() {
    let svg = SvgRenderer::default().render(&Icon::Heart.grid());
    assert_eq!(svg.matches("<rect x=").count(), 16);
}

// ---------------------------------------------------------------------------
// option defaults
// ---------------------------------------------------------------------------

#[test]
fn default_fill_matches_the_preview_stylesheet() {
    assert_eq!(DEFAULT_FILL, Rgb::new(0x39, 0x3a, 0x35));
    assert_eq!(RenderOptions::default().fill, DEFAULT_FILL);
}
