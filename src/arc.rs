//! Elliptical arc sampling.
//!
//! Arcs are sampled once per whole degree. Angle 0 points to 3 o'clock and
//! angles grow clockwise in screen space (y down). Sine and cosine are
//! quantized to 1/1024 so that every vertex is an exact integer function of
//! the angle, the center and the axes.

use crate::basics::{deg2rad, iround, Point};
use crate::error::{DrawError, Result};

/// Fixed-point scale of the sampled sine and cosine.
const TRIG_SCALE: i64 = 1024;

/// How an arc is closed and filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcStyle {
    /// Curved boundary; fills as a pie slice.
    #[default]
    Arc,
    /// Straight chord between the arc ends; fills as the triangle spanned by
    /// the two ends and the center.
    Chord,
}

impl core::str::FromStr for ArcStyle {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "arc" => Ok(ArcStyle::Arc),
            "chord" => Ok(ArcStyle::Chord),
            other => Err(DrawError::InvalidStyle {
                kind: "arc style",
                value: other.to_string(),
            }),
        }
    }
}

/// Normalize an angle range in degrees so that `0 <= start <= end` and
/// `end - start <= 360`. Equal angles (mod 360) mean a full turn.
pub fn normalize_angles(start: i64, end: i64) -> (i64, i64) {
    if start.rem_euclid(360) == end.rem_euclid(360) {
        return (0, 360);
    }
    let s = start.rem_euclid(360);
    let mut e = end.rem_euclid(360);
    while e < s {
        e += 360;
    }
    (s, e)
}

#[inline]
fn trig(deg: i64) -> (i64, i64) {
    let a = deg2rad(deg.rem_euclid(360) as f64);
    (
        iround(a.cos() * TRIG_SCALE as f64),
        iround(a.sin() * TRIG_SCALE as f64),
    )
}

/// Vertex on the ellipse with axes `w` x `h` centered at `center`.
pub fn arc_point(center: Point, w: i64, h: i64, deg: i64) -> Point {
    let (c, s) = trig(deg);
    Point::new(
        center.x + c * w / (2 * TRIG_SCALE),
        center.y + s * h / (2 * TRIG_SCALE),
    )
}

/// One vertex per degree from `start` through `end`, inclusive, after
/// [`normalize_angles`].
pub fn arc_points(center: Point, w: i64, h: i64, start: i64, end: i64) -> Vec<Point> {
    let (s, e) = normalize_angles(start, end);
    (s..=e).map(|deg| arc_point(center, w, h, deg)).collect()
}

// ============================================================================
// Tests
// ============================================================================
