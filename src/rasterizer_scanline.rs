//! Scanline polygon fill.
//!
//! For each pixel row inside the clip box, every polygon edge crossing the
//! row is intersected, the crossings are sorted, and the spans between them
//! are filled according to the filling rule. Intersections are computed with
//! exact 128-bit products, so vertices anywhere in the 32-bit coordinate
//! range give the same pixels as the equivalent small polygon.

use crate::basics::{mul_div_round, Point};
use crate::renderer_base::RendererBase;

/// Which spans between sorted edge crossings are inside the polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillingRule {
    /// Alternate inside/outside at every crossing.
    #[default]
    EvenOdd,
    /// Inside where the winding number is not zero.
    NonZero,
}

/// One edge crossing on a scanline: x position and edge direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Crossing {
    x: i64,
    dir: i32,
}

/// Reusable crossing buffer for filling polygons row by row.
#[derive(Debug, Default)]
pub struct RasterizerScanline {
    crossings: Vec<Crossing>,
    filling_rule: FillingRule,
}

impl RasterizerScanline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filling_rule(&mut self, rule: FillingRule) {
        self.filling_rule = rule;
    }

    /// Fill the closed polygon `points` with index `c`.
    ///
    /// A row `y` takes a crossing from every edge with `y1 <= y < y2`
    /// (endpoints ordered by y). The bottom-most row additionally takes the
    /// lower endpoint of edges ending there, so the last row of a polygon
    /// is not lost. Horizontal edges never cross.
    pub fn fill(&mut self, ren: &mut RendererBase<'_>, points: &[Point], c: u8) {
        if points.is_empty() {
            return;
        }
        let (miny, maxy) = points
            .iter()
            .fold((i64::MAX, i64::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
        let y_start = miny.max(ren.ymin());
        let y_end = maxy.min(ren.ymax());

        for y in y_start..=y_end {
            self.crossings.clear();
            let mut prev = points[points.len() - 1];
            for &cur in points {
                self.add_crossing(prev, cur, y, maxy);
                prev = cur;
            }
            self.crossings.sort_unstable_by_key(|c| c.x);
            self.render_row(ren, y, c);
        }
    }

    fn add_crossing(&mut self, a: Point, b: Point, y: i64, maxy: i64) {
        let (lo, hi, dir) = match a.y.cmp(&b.y) {
            core::cmp::Ordering::Less => (a, b, 1),
            core::cmp::Ordering::Greater => (b, a, -1),
            core::cmp::Ordering::Equal => return,
        };
        if y >= lo.y && y < hi.y {
            let x = lo.x + mul_div_round(y - lo.y, hi.x - lo.x, hi.y - lo.y);
            self.crossings.push(Crossing { x, dir });
        } else if y == maxy && y == hi.y {
            self.crossings.push(Crossing { x: hi.x, dir });
        }
    }

    fn render_row(&self, ren: &mut RendererBase<'_>, y: i64, c: u8) {
        match self.filling_rule {
            FillingRule::EvenOdd => {
                for pair in self.crossings.chunks_exact(2) {
                    ren.copy_hline(pair[0].x, y, pair[1].x, c);
                }
            }
            FillingRule::NonZero => {
                let mut winding = 0;
                let mut span_start = 0;
                for cr in &self.crossings {
                    if winding == 0 {
                        span_start = cr.x;
                    }
                    winding += cr.dir;
                    if winding == 0 {
                        ren.copy_hline(span_start, y, cr.x, c);
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
