//! Cubic Bezier evaluation and adaptive flattening.
//!
//! `bezier_curve` samples a cubic at evenly spaced parameter values and
//! refines the sample count until no two consecutive integer points are
//! further apart than `max_gap`.

use log::trace;

use crate::basics::{Point, PointD};
use crate::config::MAX_CURVE_SAMPLES;
use crate::error::{DrawError, Result};
use crate::math::calc_distance;

/// Refinement passes before flattening gives up.
pub const MAX_REFINE_ITERATIONS: u32 = 64;

/// Smallest accepted `max_gap`. Rounding to integers can move consecutive
/// points apart by up to one pixel per axis, so smaller gaps may never be
/// reached.
pub const MIN_MAX_GAP: f64 = 2.0;

/// Point on the cubic with endpoints `p1`, `p2` and control points `c1`,
/// `c2` at parameter `t` in `[0, 1]`.
#[inline]
pub fn bezier_point(p1: PointD, p2: PointD, c1: PointD, c2: PointD, t: f64) -> PointD {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * t * mt * mt;
    let c = 3.0 * t * t * mt;
    let d = t * t * t;
    PointD::new(
        a * p1.x + b * c1.x + c * c2.x + d * p2.x,
        a * p1.y + b * c1.y + c * c2.y + d * p2.y,
    )
}

/// `n >= 2` rounded samples, evenly spaced in `t`, both ends included.
/// `None` if the buffer cannot be allocated.
fn sample(p1: PointD, p2: PointD, c1: PointD, c2: PointD, n: usize) -> Option<Vec<Point>> {
    let mut points = Vec::new();
    points.try_reserve_exact(n).ok()?;
    let last = (n - 1) as f64;
    points.extend((0..n).map(|i| bezier_point(p1, p2, c1, c2, i as f64 / last).round()));
    Some(points)
}

fn max_step(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| calc_distance(w[0].into(), w[1].into()))
        .fold(0.0, f64::max)
}

/// Flatten a cubic Bezier from `p1` to `p2` with control points `c1`, `c2`
/// into integer points no more than `max_gap` apart.
///
/// The first estimate uses `|c1 - p1| / (max_gap / 2)` samples. While the
/// largest gap is too big, the sample count grows by the overshoot ratio
/// plus ten percent. Fails with `CurveNotConverged` once the count would
/// pass [`MAX_CURVE_SAMPLES`].
pub fn bezier_curve(p1: PointD, p2: PointD, c1: PointD, c2: PointD, max_gap: f64) -> Result<Vec<Point>> {
    if !max_gap.is_finite() || max_gap < MIN_MAX_GAP {
        return Err(DrawError::InvalidArgument(format!(
            "max_gap must be at least {MIN_MAX_GAP}, got {max_gap}"
        )));
    }
    let estimate = calc_distance(p1, c1) / (max_gap / 2.0);
    let not_converged = |iterations| Err(DrawError::CurveNotConverged { iterations });
    if !estimate.is_finite() || estimate > MAX_CURVE_SAMPLES as f64 {
        return not_converged(0);
    }
    let mut n = (estimate as usize).max(2);

    for iteration in 0..MAX_REFINE_ITERATIONS {
        let Some(points) = sample(p1, p2, c1, c2, n) else {
            return not_converged(iteration);
        };
        let gap = max_step(&points);
        trace!("bezier pass {iteration}: {n} samples, max gap {gap:.3}");
        if gap <= max_gap {
            return Ok(points);
        }
        let grown = (n as f64 * gap / max_gap * 1.1).ceil();
        if !grown.is_finite() || grown > MAX_CURVE_SAMPLES as f64 {
            return not_converged(iteration + 1);
        }
        n = (grown as usize).max(n + 1);
    }
    not_converged(MAX_REFINE_ITERATIONS)
}
