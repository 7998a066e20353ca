//! Smooth closed polygons.
//!
//! Every edge of a vertex loop becomes a cubic Bezier whose control points
//! are derived from the neighbouring vertices, weighted by edge lengths.
//! A smoothness of 0 reproduces the straight polygon; 1 gives the roundest
//! curve that still passes through every vertex.

use crate::basics::{Point, PointD};
use crate::curves::bezier_curve;
use crate::error::{DrawError, Result};
use crate::math::calc_distance;

/// A vertex with the distance to the vertex that follows it.
#[derive(Debug, Clone, Copy)]
struct VertexDist {
    p: PointD,
    dist: f64,
}

#[inline]
fn ratio(a: f64, b: f64) -> f64 {
    if a + b > 0.0 {
        a / (a + b)
    } else {
        0.5
    }
}

/// Control points for the edge `v1 -> v2`, with `v0` before and `v3` after.
fn calculate(v0: VertexDist, v1: VertexDist, v2: VertexDist, v3: VertexDist, smooth: f64) -> (PointD, PointD) {
    let k1 = ratio(v0.dist, v1.dist);
    let k2 = ratio(v1.dist, v2.dist);

    let xm1 = v0.p.x + (v2.p.x - v0.p.x) * k1;
    let ym1 = v0.p.y + (v2.p.y - v0.p.y) * k1;
    let xm2 = v1.p.x + (v3.p.x - v1.p.x) * k2;
    let ym2 = v1.p.y + (v3.p.y - v1.p.y) * k2;

    let s = smooth * 0.5;
    (
        PointD::new(v1.p.x + s * (v2.p.x - xm1), v1.p.y + s * (v2.p.y - ym1)),
        PointD::new(v2.p.x + s * (v1.p.x - xm2), v2.p.y + s * (v1.p.y - ym2)),
    )
}

/// Two control points per edge of the closed loop `points`.
///
/// Entry `k` holds the control points of the edge from `points[k]` to
/// `points[(k + 1) % n]`. `smooth` must lie in `[0, 1]`.
pub fn find_control_points(points: &[PointD], smooth: f64) -> Result<Vec<(PointD, PointD)>> {
    if !(0.0..=1.0).contains(&smooth) {
        return Err(DrawError::InvalidArgument(format!(
            "smoothness must be within [0, 1], got {smooth}"
        )));
    }
    let n = points.len();
    if n < 2 {
        return Err(DrawError::TooFewPoints { required: 2, got: n });
    }
    let verts: Vec<VertexDist> = (0..n)
        .map(|i| VertexDist {
            p: points[i],
            dist: calc_distance(points[i], points[(i + 1) % n]),
        })
        .collect();

    Ok((0..n)
        .map(|k| {
            calculate(
                verts[(k + n - 1) % n],
                verts[k],
                verts[(k + 1) % n],
                verts[(k + 2) % n],
                smooth,
            )
        })
        .collect())
}

/// Flatten every edge of the loop `points` with its control points from
/// `ctrl` and concatenate the results. Shared edge endpoints appear once.
pub fn poly_from_ctrl_points(points: &[PointD], ctrl: &[(PointD, PointD)], max_gap: f64) -> Result<Vec<Point>> {
    if ctrl.len() != points.len() {
        return Err(DrawError::Shape {
            expected: format!("{} control point pairs", points.len()),
            got: ctrl.len().to_string(),
        });
    }
    let n = points.len();
    let mut out: Vec<Point> = Vec::new();
    for (k, &(c1, c2)) in ctrl.iter().enumerate() {
        let seg = bezier_curve(points[k], points[(k + 1) % n], c1, c2, max_gap)?;
        let skip = usize::from(out.last().is_some() && out.last() == seg.first());
        out.extend_from_slice(&seg[skip..]);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<PointD> {
        vec![
            PointD::new(0.0, 0.0),
            PointD::new(100.0, 0.0),
            PointD::new(100.0, 100.0),
            PointD::new(0.0, 100.0),
        ]
    }

    #[test]
    fn test_zero_smoothness_is_straight() {
        let pts = square();
        let ctrl = find_control_points(&pts, 0.0).unwrap();
        for (k, &(c1, c2)) in ctrl.iter().enumerate() {
            assert_eq!(c1, pts[k]);
            assert_eq!(c2, pts[(k + 1) % 4]);
        }
    }

    #[test]
    fn test_square_controls_are_symmetric() {
        let ctrl = find_control_points(&square(), 1.0).unwrap();
        // Edge (0,0)->(100,0): controls bulge outward (negative y) symmetrically
        let (c1, c2) = ctrl[0];
        assert!((c1.x - 25.0).abs() < 1e-9, "{c1:?}");
        assert!((c1.y + 25.0).abs() < 1e-9, "{c1:?}");
        assert!((c2.x - 75.0).abs() < 1e-9, "{c2:?}");
        assert!((c2.y + 25.0).abs() < 1e-9, "{c2:?}");
    }

    #[test]
    fn test_smooth_polygon_passes_through_vertices() {
        let pts = square();
        let ctrl = find_control_points(&pts, 0.5).unwrap();
        let poly = poly_from_ctrl_points(&pts, &ctrl, 5.0).unwrap();
        for p in &pts {
            assert!(poly.contains(&p.round()), "{p:?} missing");
        }
        for w in poly.windows(2) {
            let d = calc_distance(w[0].into(), w[1].into());
            assert!(d <= 5.0);
        }
    }

    #[test]
    fn test_coincident_vertices() {
        let pts = vec![PointD::new(5.0, 5.0); 3];
        let ctrl = find_control_points(&pts, 1.0).unwrap();
        assert!(ctrl.iter().all(|(a, b)| a.x.is_finite() && b.y.is_finite()));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(find_control_points(&square(), 1.5).is_err());
        assert!(find_control_points(&square(), f64::NAN).is_err());
        assert!(matches!(
            find_control_points(&square()[..1], 0.5),
            Err(DrawError::TooFewPoints { .. })
        ));
        let ctrl = find_control_points(&square(), 0.5).unwrap();
        assert!(matches!(
            poly_from_ctrl_points(&square(), &ctrl[..2], 5.0),
            Err(DrawError::Shape { .. })
        ));
    }
}
