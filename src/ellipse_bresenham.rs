//! Bresenham ellipse interpolator.
//!
//! Discrete pixel stepping around one quadrant of an axis-aligned ellipse.
//! Used by `renderer_primitives` for 1-pixel outlines and solid fills.
//! Radii must not exceed [`MAX_STEP_RADIUS`]; larger ellipses are drawn
//! from sampled outlines or per-row spans instead of a pixel walk.

/// Largest radius handled by the pixel walk.
pub const MAX_STEP_RADIUS: i64 = 1 << 15;

// ============================================================================
// EllipseBresenhamInterpolator
// ============================================================================

/// Walks the first quadrant of an ellipse from `(0, -ry)` to `(rx, 0)`,
/// yielding the start offset and then one offset per step. Each step moves
/// one pixel in x, in y, or diagonally, whichever keeps the error function
/// closest to zero. The caller mirrors the offsets into the other three
/// quadrants.
#[derive(Debug, Clone)]
pub struct EllipseBresenhamInterpolator {
    rx2: i64,
    ry2: i64,
    two_rx2: i64,
    two_ry2: i64,
    inc_x: i64,
    inc_y: i64,
    cur_f: i64,
    x: i64,
    y: i64,
    started: bool,
}

impl EllipseBresenhamInterpolator {
    pub fn new(rx: i64, ry: i64) -> Self {
        let rx = rx.clamp(0, MAX_STEP_RADIUS);
        let ry = ry.clamp(0, MAX_STEP_RADIUS);
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        Self {
            rx2,
            ry2,
            two_rx2: rx2 << 1,
            two_ry2: ry2 << 1,
            inc_x: 0,
            inc_y: -ry * (rx2 << 1),
            cur_f: 0,
            x: 0,
            y: -ry,
            started: false,
        }
    }

    /// Advance one pixel; returns the step taken as `(dx, dy)`.
    fn step(&mut self) -> (i64, i64) {
        let fx = self.cur_f + self.inc_x + self.ry2;
        let fy = self.cur_f + self.inc_y + self.rx2;
        let fxy = fx + self.inc_y + self.rx2;

        let mx = fx.abs();
        let my = fy.abs();
        let mxy = fxy.abs();

        if mxy < mx.min(my) {
            self.inc_x += self.two_ry2;
            self.inc_y += self.two_rx2;
            self.cur_f = fxy;
            return (1, 1);
        }
        if mx <= my {
            self.inc_x += self.two_ry2;
            self.cur_f = fx;
            return (1, 0);
        }
        self.inc_y += self.two_rx2;
        self.cur_f = fy;
        (0, 1)
    }
}

impl Iterator for EllipseBresenhamInterpolator {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if !self.started {
            self.started = true;
            return Some((self.x, self.y));
        }
        if self.y >= 0 {
            return None;
        }
        let (dx, dy) = self.step();
        self.x += dx;
        self.y += dy;
        Some((self.x, self.y))
    }
}

// ============================================================================
// Tests
// ============================================================================
