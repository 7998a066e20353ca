//! Point markers: round dots and X shapes centered on a point.

use crate::renderer_primitives::RendererPrimitives;

/// Marker shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerType {
    Dot,
    X,
}

/// Draw one marker of `diameter` pixels centered at (x, y).
///
/// Dots use the fill color: diameter 1 is a single pixel, 2 a 2x2 block
/// with (x, y) at its top-left, larger ones a filled circle. Xes are two
/// diagonals reaching `diameter / 2` from the center in the line color and
/// width.
pub fn render_marker(prim: &mut RendererPrimitives<'_, '_>, marker: MarkerType, x: i64, y: i64, diameter: u32) {
    let d = diameter as i64;
    match marker {
        MarkerType::Dot => match d {
            0 | 1 => prim.solid_rectangle(x, y, x, y),
            2 => prim.solid_rectangle(x, y, x + 1, y + 1),
            _ => prim.solid_ellipse(x, y, d / 2, d / 2),
        },
        MarkerType::X => {
            let r = d / 2;
            prim.line(x - r, y - r, x + r, y + r);
            prim.line(x - r, y + r, x + r, y - r);
        }
    }
}
