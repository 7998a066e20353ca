//! Geometric math utilities: distances between points and from a point to
//! a segment.

use crate::basics::PointD;

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(a: PointD, b: PointD) -> f64 {
    calc_sq_distance(a, b).sqrt()
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn calc_sq_distance(a: PointD, b: PointD) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Parameter `u` of the projection of `p` onto the line through `a`, `b`.
/// Returns 0 if the segment is degenerate.
#[inline]
fn calc_segment_point_u(a: PointD, b: PointD, p: PointD) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    ((p.x - a.x) * dx + (p.y - a.y) * dy) / (dx * dx + dy * dy)
}

/// Squared distance from `p` to the closest point of segment `a`-`b`.
#[inline]
fn calc_segment_point_sq_distance(a: PointD, b: PointD, p: PointD) -> f64 {
    let u = calc_segment_point_u(a, b, p);
    if u <= 0.0 {
        calc_sq_distance(p, a)
    } else if u >= 1.0 {
        calc_sq_distance(p, b)
    } else {
        calc_sq_distance(p, PointD::new(a.x + u * (b.x - a.x), a.y + u * (b.y - a.y)))
    }
}

/// Distance from `p` to the closest point of segment `a`-`b`.
pub fn segment_distance(a: PointD, b: PointD, p: PointD) -> f64 {
    calc_segment_point_sq_distance(a, b, p).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> PointD {
        PointD::new(x, y)
    }

    #[test]
    fn test_calc_distance() {
        assert_eq!(calc_distance(pt(0.0, 0.0), pt(3.0, 4.0)), 5.0);
        assert_eq!(calc_sq_distance(pt(1.0, 1.0), pt(4.0, 5.0)), 25.0);
    }

    #[test]
    fn test_segment_distance_interior() {
        let d = segment_distance(pt(0.0, 0.0), pt(10.0, 0.0), pt(5.0, 3.0));
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_distance_beyond_ends() {
        let a = pt(0.0, 0.0);
        let b = pt(10.0, 0.0);
        assert!((segment_distance(a, b, pt(-3.0, 4.0)) - 5.0).abs() < 1e-12);
        assert!((segment_distance(a, b, pt(13.0, 4.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_segment() {
        let a = pt(2.0, 2.0);
        assert!((segment_distance(a, a, pt(5.0, 6.0)) - 5.0).abs() < 1e-12);
        assert_eq!(calc_segment_point_u(a, a, pt(9.0, 9.0)), 0.0);
    }
}
