//! Renderer appearance settings.

use serde::{Deserialize, Serialize};

use super::color::{Rgb, DEFAULT_FILL};

/// Cell edge length used when no options are given, in pixels.
pub const DEFAULT_CELL_SIZE: u32 = 5;

/// Appearance settings shared by the renderers.
///
/// Every field is optional when deserializing, so a partial options file
/// only overrides what it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Edge length of one cell, in pixels.
    pub cell_size: u32,
    /// Fill for lit cells.
    pub fill: Rgb,
    /// Background behind unlit cells; transparent when absent.
    pub background: Option<Rgb>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            fill: DEFAULT_FILL,
            background: None,
        }
    }
}
