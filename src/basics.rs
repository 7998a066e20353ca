//! Foundation types: points, rectangles, rounding and coordinate limits.
//!
//! Every drawing entry point accepts `i64` coordinates so that callers can
//! pass values far outside the canvas. Coordinates are checked against the
//! 32-bit signed range before any rasterization happens; all products that
//! follow are carried out in `i128` or `f64`.

use crate::config::{MAX_COORD, MIN_COORD};
use crate::error::{DrawError, Result};

// ============================================================================
// Rounding
// ============================================================================

/// Round a double to the nearest integer (round half away from zero).
#[inline]
pub fn iround(v: f64) -> i64 {
    if v < 0.0 {
        (v - 0.5) as i64
    } else {
        (v + 0.5) as i64
    }
}

/// Floor division for `i128` with a positive divisor.
#[inline]
pub(crate) fn floor_div(n: i128, d: i128) -> i128 {
    let q = n / d;
    if (n % d != 0) && ((n < 0) != (d < 0)) {
        q - 1
    } else {
        q
    }
}

/// `a * num / den` rounded to nearest (half toward +infinity), exact for any
/// in-range inputs. `den` must be positive.
#[inline]
pub(crate) fn mul_div_round(a: i64, num: i64, den: i64) -> i64 {
    let n = 2 * (a as i128) * (num as i128) + den as i128;
    floor_div(n, 2 * den as i128) as i64
}

#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * core::f64::consts::PI / 180.0
}

// ============================================================================
// Point
// ============================================================================

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointBase<T: Copy> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> PointBase<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Integer pixel coordinate.
pub type Point = PointBase<i64>;

/// Floating-point coordinate, used for curve control points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointD {
    pub x: f64,
    pub y: f64,
}

impl PointD {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Round to the nearest integer pixel.
    pub fn round(self) -> Point {
        Point::new(iround(self.x), iround(self.y))
    }
}

impl From<Point> for PointD {
    fn from(p: Point) -> Self {
        PointD::new(p.x as f64, p.y as f64)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x as i64, y as i64)
    }
}

impl From<[i64; 2]> for Point {
    fn from([x, y]: [i64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<(f64, f64)> for PointD {
    fn from((x, y): (f64, f64)) -> Self {
        PointD::new(x, y)
    }
}

/// Fail with [`DrawError::Overflow`] if a coordinate does not fit the
/// supported 32-bit signed range.
#[inline]
pub fn check_coord(v: i64) -> Result<i64> {
    if (MIN_COORD..=MAX_COORD).contains(&v) {
        Ok(v)
    } else {
        Err(DrawError::Overflow(v))
    }
}

/// Check both coordinates of every point.
pub fn check_points(points: &[Point]) -> Result<()> {
    for p in points {
        check_coord(p.x)?;
        check_coord(p.y)?;
    }
    Ok(())
}

/// Floating-point variant of [`check_coord`] for curve control points.
pub fn check_point_d(p: PointD) -> Result<()> {
    for v in [p.x, p.y] {
        if v.is_nan() {
            return Err(DrawError::InvalidArgument(format!("coordinate is NaN in {p:?}")));
        }
        if !(MIN_COORD as f64..=MAX_COORD as f64).contains(&v) {
            return Err(DrawError::Overflow(v.clamp(i64::MIN as f64, i64::MAX as f64) as i64));
        }
    }
    Ok(())
}

/// Fail with [`DrawError::TooFewPoints`] when fewer than `required` points
/// are supplied.
pub fn require_points(points: &[Point], required: usize) -> Result<()> {
    if points.len() < required {
        return Err(DrawError::TooFewPoints {
            required,
            got: points.len(),
        });
    }
    check_points(points)
}

// ============================================================================
// Rect
// ============================================================================

/// A rectangle defined by two inclusive corner points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect<T: Copy> {
    pub x1: T,
    pub y1: T,
    pub x2: T,
    pub y2: T,
}

impl<T: Copy + PartialOrd> Rect<T> {
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Normalize so that x1 <= x2 and y1 <= y2, swapping if needed.
    pub fn normalize(&mut self) -> &Self {
        if self.x1 > self.x2 {
            core::mem::swap(&mut self.x1, &mut self.x2);
        }
        if self.y1 > self.y2 {
            core::mem::swap(&mut self.y1, &mut self.y2);
        }
        self
    }

    /// Clip this rectangle to the intersection with `r`.
    /// Returns `true` if the result is a valid (non-empty) rectangle.
    pub fn clip(&mut self, r: &Self) -> bool {
        if self.x2 > r.x2 {
            self.x2 = r.x2;
        }
        if self.y2 > r.y2 {
            self.y2 = r.y2;
        }
        if self.x1 < r.x1 {
            self.x1 = r.x1;
        }
        if self.y1 < r.y1 {
            self.y1 = r.y1;
        }
        self.is_valid()
    }

    /// Returns `true` if the rectangle is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Returns `true` if the point (x, y) is inside the rectangle.
    pub fn hit_test(&self, x: T, y: T) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

/// Rectangle with `i64` pixel coordinates.
pub type RectI = Rect<i64>;

impl RectI {
    /// Corner pair in the `((x1, y1), (x2, y2))` form used by the canvas API.
    pub fn corners(&self) -> (Point, Point) {
        (Point::new(self.x1, self.y1), Point::new(self.x2, self.y2))
    }
}

// ============================================================================
// Tests
// ============================================================================
