//! Binary raster glyph generator.
//!
//! Extracts 1-bit glyph bitmaps row by row from a [`FontTable`].

use crate::embedded_raster_fonts::FontTable;

// ============================================================================
// GlyphRect
// ============================================================================

/// Bounding box and advance of a raster glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphRect {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
    pub dx: i64,
}

// ============================================================================
// GlyphRasterBin
// ============================================================================

/// Binary raster glyph generator.
///
/// `prepare` positions a glyph with its cell's top-left corner at (x, y);
/// `span` then returns one row of set/unset pixels.
pub struct GlyphRasterBin<'a> {
    font: &'a dyn FontTable,
    span: Vec<bool>,
    glyph: u8,
}

impl<'a> GlyphRasterBin<'a> {
    pub fn new(font: &'a dyn FontTable) -> Self {
        let (w, _) = font.cell_size();
        Self {
            font,
            span: vec![false; w as usize],
            glyph: 0,
        }
    }

    /// Cell height in pixels.
    pub fn height(&self) -> u32 {
        self.font.cell_size().1
    }

    /// Total advance of a string.
    pub fn width(&self, s: &str) -> i64 {
        self.font.cell_size().0 as i64 * s.chars().count() as i64
    }

    /// Prepare `glyph` for rendering with its cell at (x, y).
    pub fn prepare(&mut self, x: i64, y: i64, glyph: u8) -> GlyphRect {
        let (w, h) = self.font.cell_size();
        self.glyph = glyph;
        GlyphRect {
            x1: x,
            y1: y,
            x2: x + w as i64 - 1,
            y2: y + h as i64 - 1,
            dx: w as i64,
        }
    }

    /// Row `i` of the prepared glyph, 0 at the top.
    pub fn span(&mut self, i: u32) -> &[bool] {
        for (col, v) in self.span.iter_mut().enumerate() {
            *v = self.font.glyph_pixel(self.glyph, col as u32, i);
        }
        &self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2x2 cell, 'A' has the top-left and bottom-right pixels set
    struct TestFont;

    impl FontTable for TestFont {
        fn cell_size(&self) -> (u32, u32) {
            (2, 2)
        }

        fn glyph_pixel(&self, ch: u8, col: u32, row: u32) -> bool {
            ch == b'A' && col == row
        }
    }

    #[test]
    fn test_prepare_glyph() {
        let mut glyph = GlyphRasterBin::new(&TestFont);
        let r = glyph.prepare(10, 5, b'A');
        assert_eq!(
            r,
            GlyphRect {
                x1: 10,
                y1: 5,
                x2: 11,
                y2: 6,
                dx: 2
            }
        );
    }

    #[test]
    fn test_span() {
        let mut glyph = GlyphRasterBin::new(&TestFont);
        glyph.prepare(0, 0, b'A');
        assert_eq!(glyph.span(0), &[true, false]);
        assert_eq!(glyph.span(1), &[false, true]);
        glyph.prepare(0, 0, b'B');
        assert_eq!(glyph.span(0), &[false, false]);
    }

    #[test]
    fn test_width_calculation() {
        let glyph = GlyphRasterBin::new(&TestFont);
        assert_eq!(glyph.width("ABC"), 6);
        assert_eq!(glyph.width(""), 0);
        assert_eq!(glyph.height(), 2);
    }
}
