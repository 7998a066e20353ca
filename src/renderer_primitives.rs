//! Basic shape primitives renderer.
//!
//! Draws lines, rectangles, ellipses and polygon outlines as palette indices
//! into a `RendererBase`, without anti-aliasing. Maintains separate fill and
//! line colors, a line width, and a current position for `line_to`.

use crate::arc::arc_points;
use crate::basics::Point;
use crate::dda_line::LineBresenhamInterpolator;
use crate::ellipse_bresenham::{EllipseBresenhamInterpolator, MAX_STEP_RADIUS};
use crate::rasterizer_scanline::{FillingRule, RasterizerScanline};
use crate::renderer_base::RendererBase;

// ============================================================================
// RendererPrimitives
// ============================================================================

pub struct RendererPrimitives<'r, 'a> {
    ren: &'r mut RendererBase<'a>,
    fill_color: u8,
    line_color: u8,
    line_width: u32,
    filling_rule: FillingRule,
    curr: Point,
}

impl<'r, 'a> RendererPrimitives<'r, 'a> {
    pub fn new(ren: &'r mut RendererBase<'a>) -> Self {
        Self {
            ren,
            fill_color: 0,
            line_color: 0,
            line_width: 1,
            filling_rule: FillingRule::EvenOdd,
            curr: Point::default(),
        }
    }

    pub fn set_fill_color(&mut self, c: u8) {
        self.fill_color = c;
    }

    pub fn set_line_color(&mut self, c: u8) {
        self.line_color = c;
    }

    /// Stroke width in pixels; 0 is treated as 1.
    pub fn set_line_width(&mut self, w: u32) {
        self.line_width = w.max(1);
    }

    pub fn set_filling_rule(&mut self, rule: FillingRule) {
        self.filling_rule = rule;
    }

    pub fn fill_color(&self) -> u8 {
        self.fill_color
    }

    pub fn line_color(&self) -> u8 {
        self.line_color
    }

    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    // ------------------------------------------------------------------------
    // Rectangles
    // ------------------------------------------------------------------------

    /// Outline of the rectangle with inclusive corners `(x1, y1)`, `(x2, y2)`.
    ///
    /// The stroke is centered on the rectangle edges: a width of `w` grows
    /// the box by `w / 2` outward and `w - 1 - w / 2` inward.
    pub fn rectangle(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        let (x1, x2) = (x1.min(x2), x1.max(x2));
        let (y1, y2) = (y1.min(y2), y1.max(y2));
        let w = self.line_width as i64;
        let half = w / 2;
        let (ox1, oy1) = (x1 - half, y1 - half);
        let (ox2, oy2) = (x2 + (w - 1 - half), y2 + (w - 1 - half));
        let c = self.line_color;

        if ox2 - ox1 < 2 * w || oy2 - oy1 < 2 * w {
            self.ren.copy_bar(ox1, oy1, ox2, oy2, c);
            return;
        }
        self.ren.copy_bar(ox1, oy1, ox2, oy1 + w - 1, c);
        self.ren.copy_bar(ox1, oy2 - w + 1, ox2, oy2, c);
        self.ren.copy_bar(ox1, oy1 + w, ox1 + w - 1, oy2 - w, c);
        self.ren.copy_bar(ox2 - w + 1, oy1 + w, ox2, oy2 - w, c);
    }

    /// Solid rectangle with inclusive corners, in the fill color.
    pub fn solid_rectangle(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.ren.copy_bar(x1, y1, x2, y2, self.fill_color);
    }

    // ------------------------------------------------------------------------
    // Ellipses
    // ------------------------------------------------------------------------

    /// Outline of the ellipse centered at (x, y) with radii `rx`, `ry`.
    ///
    /// One-pixel outlines of moderate size use the Bresenham walk; wide
    /// strokes and very large ellipses use a per-degree sampled outline.
    pub fn ellipse(&mut self, x: i64, y: i64, rx: i64, ry: i64) {
        if rx <= 0 || ry <= 0 {
            self.line(x - rx.max(0), y - ry.max(0), x + rx.max(0), y + ry.max(0));
            return;
        }
        if self.line_width > 1 || rx > MAX_STEP_RADIUS || ry > MAX_STEP_RADIUS {
            let pts = arc_points(Point::new(x, y), 2 * rx, 2 * ry, 0, 360);
            self.polyline(&pts);
            return;
        }
        let c = self.line_color;
        for (dx, dy) in EllipseBresenhamInterpolator::new(rx, ry) {
            self.ren.copy_pixel(x + dx, y + dy, c);
            self.ren.copy_pixel(x + dx, y - dy, c);
            self.ren.copy_pixel(x - dx, y - dy, c);
            self.ren.copy_pixel(x - dx, y + dy, c);
        }
    }

    /// Solid ellipse centered at (x, y) with radii `rx`, `ry`.
    pub fn solid_ellipse(&mut self, x: i64, y: i64, rx: i64, ry: i64) {
        let c = self.fill_color;
        if rx <= 0 || ry <= 0 {
            self.ren
                .copy_bar(x - rx.max(0), y - ry.max(0), x + rx.max(0), y + ry.max(0), c);
            return;
        }
        if rx > MAX_STEP_RADIUS || ry > MAX_STEP_RADIUS {
            self.solid_ellipse_rows(x, y, rx, ry);
            return;
        }
        let mut prev: Option<(i64, i64)> = None;
        for (dx, dy) in EllipseBresenhamInterpolator::new(rx, ry) {
            if let Some((px, py)) = prev {
                if dy != py {
                    self.ren.copy_hline(x - px, y + py, x + px, c);
                    self.ren.copy_hline(x - px, y - py, x + px, c);
                }
            }
            prev = Some((dx, dy));
        }
        if let Some((px, py)) = prev {
            self.ren.copy_hline(x - px, y + py, x + px, c);
        }
    }

    /// Per-row fill for ellipses too large for the pixel walk. Only rows
    /// inside the clip box are visited.
    fn solid_ellipse_rows(&mut self, x: i64, y: i64, rx: i64, ry: i64) {
        let c = self.fill_color;
        let top = (y - ry).max(self.ren.ymin());
        let bottom = (y + ry).min(self.ren.ymax());
        for row in top..=bottom {
            let t = (row - y) as f64 / ry as f64;
            let dx = (rx as f64 * (1.0 - t * t).max(0.0).sqrt()) as i64;
            self.ren.copy_hline(x - dx, row, x + dx, c);
        }
    }

    // ------------------------------------------------------------------------
    // Lines
    // ------------------------------------------------------------------------

    /// Line from (x1, y1) to (x2, y2), both endpoints included.
    ///
    /// Wider lines set, at every step along the major axis, a span of
    /// [`LineBresenhamInterpolator::stroke_span`] pixels centered on the
    /// line. Only the part of the line inside the clip box is visited.
    pub fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        let c = self.line_color;
        let w = self.line_width as i64;
        let li = LineBresenhamInterpolator::new(x1, y1, x2, y2);

        if li.len() == 0 {
            let half = w / 2;
            self.ren
                .copy_bar(x1 - half, y1 - half, x1 - half + w - 1, y1 - half + w - 1, c);
            return;
        }

        let span = li.stroke_span(self.line_width);
        let half = span / 2;
        let Some((first, last)) = li.clipped_major_range(self.ren.clip_box()) else {
            return;
        };
        for m in first..=last {
            let lo = li.minor_at(m) - half;
            let hi = lo + span - 1;
            if li.is_ver() {
                self.ren.copy_hline(lo, m, hi, c);
            } else {
                self.ren.copy_vline(m, lo, hi, c);
            }
        }
    }

    /// Set the current position for `line_to`.
    pub fn move_to(&mut self, x: i64, y: i64) {
        self.curr = Point::new(x, y);
    }

    /// Draw a line from the current position to (x, y).
    pub fn line_to(&mut self, x: i64, y: i64) {
        self.line(self.curr.x, self.curr.y, x, y);
        self.curr = Point::new(x, y);
    }

    /// Connected segments through `points`, not closed.
    pub fn polyline(&mut self, points: &[Point]) {
        let Some(first) = points.first() else {
            return;
        };
        self.move_to(first.x, first.y);
        if points.len() == 1 {
            self.line_to(first.x, first.y);
        }
        for p in &points[1..] {
            self.line_to(p.x, p.y);
        }
    }

    /// Closed outline through `points`.
    pub fn polygon(&mut self, points: &[Point]) {
        self.polyline(points);
        if let (Some(first), true) = (points.first(), points.len() > 2) {
            self.line_to(first.x, first.y);
        }
    }

    /// Filled polygon in the fill color.
    pub fn solid_polygon(&mut self, points: &[Point]) {
        let mut ras = RasterizerScanline::new();
        ras.filling_rule(self.filling_rule);
        ras.fill(self.ren, points, self.fill_color);
    }
}

// ============================================================================
// Tests
// ============================================================================
