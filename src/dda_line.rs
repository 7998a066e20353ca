//! Bresenham line interpolation with a closed-form error term.
//!
//! The classic incremental error walk is replaced by an exact evaluation of
//! the minor coordinate at any major-axis position, so a line whose endpoints
//! lie billions of pixels away can be entered directly at the clip box
//! instead of being walked from its first endpoint. The pixels produced are
//! the ones the incremental walk would produce.

use crate::basics::{mul_div_round, RectI};

// ============================================================================
// LineBresenhamInterpolator
// ============================================================================

/// Integer line interpolator.
///
/// Endpoints are ordered so the major axis increases, which makes the pixel
/// set independent of drawing direction. Lines with `|dx| == |dy|` are
/// treated as horizontal-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineBresenhamInterpolator {
    // major/minor start and deltas, major delta >= 0
    major1: i64,
    minor1: i64,
    d_major: i64,
    d_minor: i64,
    ver: bool,
}

impl LineBresenhamInterpolator {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        let ver = (x2 - x1).abs() < (y2 - y1).abs();
        let (a1, b1, a2, b2) = if ver { (y1, x1, y2, x2) } else { (x1, y1, x2, y2) };
        let (a1, b1, a2, b2) = if a1 <= a2 { (a1, b1, a2, b2) } else { (a2, b2, a1, b1) };
        Self {
            major1: a1,
            minor1: b1,
            d_major: a2 - a1,
            d_minor: b2 - b1,
            ver,
        }
    }

    /// True if the line is vertical-major.
    #[inline]
    pub fn is_ver(&self) -> bool {
        self.ver
    }

    /// Number of steps along the major axis.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> i64 {
        self.d_major
    }

    /// First and last major-axis positions.
    #[inline]
    pub fn major_range(&self) -> (i64, i64) {
        (self.major1, self.major1 + self.d_major)
    }

    /// Minor-axis coordinate at major position `m`.
    #[inline]
    pub fn minor_at(&self, m: i64) -> i64 {
        if self.d_major == 0 {
            return self.minor1;
        }
        self.minor1 + mul_div_round(m - self.major1, self.d_minor, self.d_major)
    }

    /// Major-axis positions that fall inside `clip`, or `None`.
    pub fn clipped_major_range(&self, clip: &RectI) -> Option<(i64, i64)> {
        let (lo, hi) = if self.ver {
            (clip.y1, clip.y2)
        } else {
            (clip.x1, clip.x2)
        };
        let (a, b) = self.major_range();
        let (a, b) = (a.max(lo), b.min(hi));
        (a <= b).then_some((a, b))
    }

    /// Span length perpendicular to the major axis for a stroke of
    /// `thickness` pixels: `thickness / cos(angle to the major axis)`,
    /// truncated, at least 1.
    pub fn stroke_span(&self, thickness: u32) -> i64 {
        if thickness <= 1 {
            return 1;
        }
        let angle = (self.d_minor as f64).atan2(self.d_major as f64);
        let ag = angle.cos().abs();
        if ag == 0.0 {
            return thickness as i64;
        }
        ((thickness as f64 / ag) as i64).max(1)
    }
}

// ============================================================================
// Tests
// ============================================================================
