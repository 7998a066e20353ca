//! Embedded bitmap font data.
//!
//! A single 5x7 ASCII face (codes 32..=126), stored column-wise with bit 0
//! at the top, and five named sizes derived from it by padding, emboldening
//! and scaling.

use crate::error::{DrawError, Result};

/// First character code present in the font.
pub const FIRST_CHAR: u8 = 32;
/// Last character code present in the font.
pub const LAST_CHAR: u8 = 126;

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;

#[rustfmt::skip]
static FONT_5X7: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], [0x00, 0x00, 0x5f, 0x00, 0x00],
    [0x00, 0x07, 0x00, 0x07, 0x00], [0x14, 0x7f, 0x14, 0x7f, 0x14],
    [0x24, 0x2a, 0x7f, 0x2a, 0x12], [0x23, 0x13, 0x08, 0x64, 0x62],
    [0x36, 0x49, 0x56, 0x20, 0x50], [0x00, 0x05, 0x03, 0x00, 0x00],
    [0x00, 0x1c, 0x22, 0x41, 0x00], [0x00, 0x41, 0x22, 0x1c, 0x00],
    [0x14, 0x08, 0x3e, 0x08, 0x14], [0x08, 0x08, 0x3e, 0x08, 0x08],
    [0x00, 0x50, 0x30, 0x00, 0x00], [0x08, 0x08, 0x08, 0x08, 0x08],
    [0x00, 0x60, 0x60, 0x00, 0x00], [0x20, 0x10, 0x08, 0x04, 0x02],
    [0x3e, 0x51, 0x49, 0x45, 0x3e], [0x00, 0x42, 0x7f, 0x40, 0x00],
    [0x42, 0x61, 0x51, 0x49, 0x46], [0x21, 0x41, 0x45, 0x4b, 0x31],
    [0x18, 0x14, 0x12, 0x7f, 0x10], [0x27, 0x45, 0x45, 0x45, 0x39],
    [0x3c, 0x4a, 0x49, 0x49, 0x30], [0x01, 0x71, 0x09, 0x05, 0x03],
    [0x36, 0x49, 0x49, 0x49, 0x36], [0x06, 0x49, 0x49, 0x29, 0x1e],
    [0x00, 0x36, 0x36, 0x00, 0x00], [0x00, 0x56, 0x36, 0x00, 0x00],
    [0x08, 0x14, 0x22, 0x41, 0x00], [0x14, 0x14, 0x14, 0x14, 0x14],
    [0x00, 0x41, 0x22, 0x14, 0x08], [0x02, 0x01, 0x51, 0x09, 0x06],
    [0x32, 0x49, 0x79, 0x41, 0x3e], [0x7e, 0x11, 0x11, 0x11, 0x7e],
    [0x7f, 0x49, 0x49, 0x49, 0x36], [0x3e, 0x41, 0x41, 0x41, 0x22],
    [0x7f, 0x41, 0x41, 0x22, 0x1c], [0x7f, 0x49, 0x49, 0x49, 0x41],
    [0x7f, 0x09, 0x09, 0x09, 0x01], [0x3e, 0x41, 0x49, 0x49, 0x7a],
    [0x7f, 0x08, 0x08, 0x08, 0x7f], [0x00, 0x41, 0x7f, 0x41, 0x00],
    [0x20, 0x40, 0x41, 0x3f, 0x01], [0x7f, 0x08, 0x14, 0x22, 0x41],
    [0x7f, 0x40, 0x40, 0x40, 0x40], [0x7f, 0x02, 0x0c, 0x02, 0x7f],
    [0x7f, 0x04, 0x08, 0x10, 0x7f], [0x3e, 0x41, 0x41, 0x41, 0x3e],
    [0x7f, 0x09, 0x09, 0x09, 0x06], [0x3e, 0x41, 0x51, 0x21, 0x5e],
    [0x7f, 0x09, 0x19, 0x29, 0x46], [0x46, 0x49, 0x49, 0x49, 0x31],
    [0x01, 0x01, 0x7f, 0x01, 0x01], [0x3f, 0x40, 0x40, 0x40, 0x3f],
    [0x1f, 0x20, 0x40, 0x20, 0x1f], [0x3f, 0x40, 0x38, 0x40, 0x3f],
    [0x63, 0x14, 0x08, 0x14, 0x63], [0x07, 0x08, 0x70, 0x08, 0x07],
    [0x61, 0x51, 0x49, 0x45, 0x43], [0x00, 0x7f, 0x41, 0x41, 0x00],
    [0x02, 0x04, 0x08, 0x10, 0x20], [0x00, 0x41, 0x41, 0x7f, 0x00],
    [0x04, 0x02, 0x01, 0x02, 0x04], [0x40, 0x40, 0x40, 0x40, 0x40],
    [0x00, 0x01, 0x02, 0x04, 0x00], [0x20, 0x54, 0x54, 0x54, 0x78],
    [0x7f, 0x48, 0x44, 0x44, 0x38], [0x38, 0x44, 0x44, 0x44, 0x20],
    [0x38, 0x44, 0x44, 0x48, 0x7f], [0x38, 0x54, 0x54, 0x54, 0x18],
    [0x08, 0x7e, 0x09, 0x01, 0x02], [0x0c, 0x52, 0x52, 0x52, 0x3e],
    [0x7f, 0x08, 0x04, 0x04, 0x78], [0x00, 0x44, 0x7d, 0x40, 0x00],
    [0x20, 0x40, 0x44, 0x3d, 0x00], [0x7f, 0x10, 0x28, 0x44, 0x00],
    [0x00, 0x41, 0x7f, 0x40, 0x00], [0x7c, 0x04, 0x18, 0x04, 0x78],
    [0x7c, 0x08, 0x04, 0x04, 0x78], [0x38, 0x44, 0x44, 0x44, 0x38],
    [0x7c, 0x14, 0x14, 0x14, 0x08], [0x08, 0x14, 0x14, 0x18, 0x7c],
    [0x7c, 0x08, 0x04, 0x04, 0x08], [0x48, 0x54, 0x54, 0x54, 0x20],
    [0x04, 0x3f, 0x44, 0x40, 0x20], [0x3c, 0x40, 0x40, 0x20, 0x7c],
    [0x1c, 0x20, 0x40, 0x20, 0x1c], [0x3c, 0x40, 0x30, 0x40, 0x3c],
    [0x44, 0x28, 0x10, 0x28, 0x44], [0x0c, 0x50, 0x50, 0x50, 0x3c],
    [0x44, 0x64, 0x54, 0x4c, 0x44], [0x00, 0x08, 0x36, 0x41, 0x00],
    [0x00, 0x00, 0x7f, 0x00, 0x00], [0x00, 0x41, 0x36, 0x08, 0x00],
    [0x10, 0x08, 0x08, 0x10, 0x08],
];

// ============================================================================
// FontTable
// ============================================================================

/// A fixed-cell bitmap font.
pub trait FontTable {
    /// Cell width and height in pixels; every glyph advances by the width.
    fn cell_size(&self) -> (u32, u32);

    /// True if pixel `(col, row)` of the cell for `ch` is set. Characters
    /// without a glyph render as blank cells.
    fn glyph_pixel(&self, ch: u8, col: u32, row: u32) -> bool;
}

/// Named font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Tiny,
    #[default]
    Small,
    Medium,
    Large,
    Giant,
}

impl core::str::FromStr for FontSize {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tiny" => Ok(FontSize::Tiny),
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            "giant" => Ok(FontSize::Giant),
            other => Err(DrawError::InvalidStyle {
                kind: "font",
                value: other.to_string(),
            }),
        }
    }
}

/// Placement of the 5x7 face inside a cell.
#[derive(Debug, Clone, Copy)]
struct CellLayout {
    cell: (u32, u32),
    offset: (u32, u32),
    scale: (u32, u32),
    bold: bool,
}

impl FontSize {
    fn layout(self) -> CellLayout {
        let (cell, offset, scale, bold) = match self {
            FontSize::Tiny => ((6, 8), (0, 0), (1, 1), false),
            FontSize::Small => ((6, 13), (0, 3), (1, 1), false),
            FontSize::Medium => ((7, 13), (0, 3), (1, 1), true),
            FontSize::Large => ((8, 16), (1, 1), (1, 2), false),
            FontSize::Giant => ((12, 16), (1, 1), (2, 2), false),
        };
        CellLayout {
            cell,
            offset,
            scale,
            bold,
        }
    }
}

/// The built-in face at one of the named sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedFont {
    size: FontSize,
}

impl EmbeddedFont {
    pub fn new(size: FontSize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> FontSize {
        self.size
    }
}

#[inline]
fn face_pixel(ch: u8, col: u32, row: u32) -> bool {
    if !(FIRST_CHAR..=LAST_CHAR).contains(&ch) || col >= GLYPH_W || row >= GLYPH_H {
        return false;
    }
    FONT_5X7[(ch - FIRST_CHAR) as usize][col as usize] & (1 << row) != 0
}

impl FontTable for EmbeddedFont {
    fn cell_size(&self) -> (u32, u32) {
        self.size.layout().cell
    }

    fn glyph_pixel(&self, ch: u8, col: u32, row: u32) -> bool {
        let l = self.size.layout();
        if col < l.offset.0 || row < l.offset.1 {
            return false;
        }
        let gx = (col - l.offset.0) / l.scale.0;
        let gy = (row - l.offset.1) / l.scale.1;
        face_pixel(ch, gx, gy) || (l.bold && gx > 0 && face_pixel(ch, gx - 1, gy))
    }
}
