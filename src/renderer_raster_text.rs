//! Raster text renderer for embedded bitmap fonts.
//!
//! Renders text using binary raster glyphs from `GlyphRasterBin`, one
//! horizontal run of set pixels at a time.

use crate::error::{DrawError, Result};
use crate::glyph_raster_bin::GlyphRasterBin;
use crate::renderer_base::RendererBase;

// ============================================================================
// Align
// ============================================================================

/// Horizontal component of a text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical component of a text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Where the anchor point sits on the text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Align {
    pub h: HAlign,
    pub v: VAlign,
}

impl Default for Align {
    fn default() -> Self {
        Align {
            h: HAlign::Left,
            v: VAlign::Top,
        }
    }
}

impl Align {
    /// Offset from the anchor to the top-left corner of a `w` x `h` box.
    pub fn offset(&self, w: i64, h: i64) -> (i64, i64) {
        let dx = match self.h {
            HAlign::Left => 0,
            HAlign::Center => -(w / 2),
            HAlign::Right => -w,
        };
        let dy = match self.v {
            VAlign::Top => 0,
            VAlign::Center => -(h / 2),
            VAlign::Bottom => -h,
        };
        (dx, dy)
    }
}

impl core::str::FromStr for Align {
    type Err = DrawError;

    /// Two-letter codes `lt ct rt lc cc rc lb cb rb`; a lone `l`, `c` or
    /// `r` means vertically centered.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DrawError::InvalidStyle {
            kind: "alignment",
            value: s.to_string(),
        };
        let mut chars = s.chars();
        let h = match chars.next() {
            Some('l') => HAlign::Left,
            Some('c') => HAlign::Center,
            Some('r') => HAlign::Right,
            _ => return Err(invalid()),
        };
        let v = match chars.next() {
            Some('t') => VAlign::Top,
            Some('c') | None => VAlign::Center,
            Some('b') => VAlign::Bottom,
            _ => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(Align { h, v })
    }
}

// ============================================================================
// render_raster_htext_solid
// ============================================================================

/// Render a horizontal text string with its first cell's top-left corner at
/// (x, y). Characters outside ASCII render as blank cells.
pub fn render_raster_htext_solid(
    ren: &mut RendererBase<'_>,
    glyph: &mut GlyphRasterBin<'_>,
    x: i64,
    y: i64,
    text: &str,
    color: u8,
) {
    let mut x = x;
    for ch in text.chars() {
        let code = if ch.is_ascii() { ch as u8 } else { 0 };
        let r = glyph.prepare(x, y, code);
        for i in r.y1..=r.y2 {
            let span = glyph.span((i - r.y1) as u32);
            let mut run_start: Option<i64> = None;
            for (j, &on) in span.iter().enumerate() {
                let px = r.x1 + j as i64;
                match (on, run_start) {
                    (true, None) => run_start = Some(px),
                    (false, Some(s)) => {
                        ren.copy_hline(s, i, px - 1, color);
                        run_start = None;
                    }
                    _ => {}
                }
            }
            if let Some(s) = run_start {
                ren.copy_hline(s, i, r.x2, color);
            }
        }
        x += r.dx;
    }
}
