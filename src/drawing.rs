//! Drawing operations on a [`Canvas`].
//!
//! Each method resolves its colors and validates its geometry before the
//! first pixel is written, so a failed call leaves the canvas untouched.
//! All output is limited to the canvas clip rectangle.

use crate::arc::{arc_points, ArcStyle};
use crate::basics::{check_coord, check_point_d, check_points, require_points, Point, PointD};
use crate::canvas::Canvas;
use crate::color::ColorRef;
use crate::config::DEFAULT_MAX_GAP;
use crate::curves::bezier_curve;
use crate::embedded_raster_fonts::{EmbeddedFont, FontSize};
use crate::error::{DrawError, Result};
use crate::glyph_raster_bin::GlyphRasterBin;
use crate::markers::{render_marker, MarkerType};
use crate::palette::Palette;
use crate::rasterizer_scanline::FillingRule;
use crate::renderer_primitives::RendererPrimitives;
use crate::renderer_raster_text::{render_raster_htext_solid, Align};
use crate::smooth_poly::{find_control_points, poly_from_ctrl_points};

// ============================================================================
// ShapeStyle
// ============================================================================

/// Outline and fill settings for closed shapes.
///
/// Either color may be omitted; a shape with neither is not drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub line_color: Option<ColorRef>,
    pub fill_color: Option<ColorRef>,
    pub line_width: u32,
    pub filling_rule: FillingRule,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            line_color: None,
            fill_color: None,
            line_width: 1,
            filling_rule: FillingRule::EvenOdd,
        }
    }
}

impl ShapeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, color: impl Into<ColorRef>) -> Self {
        self.line_color = Some(color.into());
        self
    }

    pub fn fill(mut self, color: impl Into<ColorRef>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    pub fn width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn filling_rule(mut self, rule: FillingRule) -> Self {
        self.filling_rule = rule;
        self
    }

    fn resolve(&self, palette: &Palette) -> Result<ResolvedStyle> {
        Ok(ResolvedStyle {
            line: self.line_color.as_ref().map(|c| palette.resolve(c)).transpose()?,
            fill: self.fill_color.as_ref().map(|c| palette.resolve(c)).transpose()?,
            width: self.line_width,
            rule: self.filling_rule,
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct ResolvedStyle {
    line: Option<u8>,
    fill: Option<u8>,
    width: u32,
    rule: FillingRule,
}

impl ResolvedStyle {
    fn apply(&self, prim: &mut RendererPrimitives<'_, '_>) {
        prim.set_line_width(self.width);
        prim.set_filling_rule(self.rule);
        if let Some(c) = self.line {
            prim.set_line_color(c);
        }
        if let Some(c) = self.fill {
            prim.set_fill_color(c);
        }
    }
}

// ============================================================================
// MarkerColors
// ============================================================================

/// Colors for a batch of markers: one for all, or one per point.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerColors {
    Single(ColorRef),
    PerPoint(Vec<ColorRef>),
}

impl From<ColorRef> for MarkerColors {
    fn from(c: ColorRef) -> Self {
        MarkerColors::Single(c)
    }
}

impl From<&str> for MarkerColors {
    fn from(name: &str) -> Self {
        MarkerColors::Single(name.into())
    }
}

impl<T: Into<ColorRef>> From<Vec<T>> for MarkerColors {
    fn from(colors: Vec<T>) -> Self {
        MarkerColors::PerPoint(colors.into_iter().map(Into::into).collect())
    }
}

impl MarkerColors {
    /// One palette index per point.
    fn resolve(&self, palette: &Palette, count: usize) -> Result<Vec<u8>> {
        match self {
            MarkerColors::Single(c) => Ok(vec![palette.resolve(c)?; count]),
            MarkerColors::PerPoint(colors) => {
                if colors.len() != count {
                    return Err(DrawError::Shape {
                        expected: format!("{count} colors"),
                        got: colors.len().to_string(),
                    });
                }
                colors.iter().map(|c| palette.resolve(c)).collect()
            }
        }
    }
}

fn check_extent(name: &str, v: i64) -> Result<i64> {
    if v < 0 {
        return Err(DrawError::InvalidArgument(format!("{name} must not be negative, got {v}")));
    }
    check_coord(v)
}

// ============================================================================
// Canvas drawing
// ============================================================================

impl Canvas {
    /// Line from `p1` to `p2`, both endpoints included.
    pub fn draw_line(
        &mut self,
        p1: impl Into<Point>,
        p2: impl Into<Point>,
        color: impl Into<ColorRef>,
        line_width: u32,
    ) -> Result<()> {
        let (p1, p2) = (p1.into(), p2.into());
        check_points(&[p1, p2])?;
        let c = self.palette().resolve(&color.into())?;

        let mut ren = self.renderer();
        let mut prim = RendererPrimitives::new(&mut ren);
        prim.set_line_color(c);
        prim.set_line_width(line_width);
        prim.line(p1.x, p1.y, p2.x, p2.y);
        Ok(())
    }

    /// Connected line segments through at least two points.
    pub fn draw_polyline(&mut self, points: &[Point], color: impl Into<ColorRef>, line_width: u32) -> Result<()> {
        require_points(points, 2)?;
        let c = self.palette().resolve(&color.into())?;

        let mut ren = self.renderer();
        let mut prim = RendererPrimitives::new(&mut ren);
        prim.set_line_color(c);
        prim.set_line_width(line_width);
        prim.polyline(points);
        Ok(())
    }

    /// Closed polygon through at least three points; filled first, then
    /// outlined.
    pub fn draw_polygon(&mut self, points: &[Point], style: &ShapeStyle) -> Result<()> {
        require_points(points, 3)?;
        let st = style.resolve(self.palette())?;
        self.render_polygon(points, st);
        Ok(())
    }

    fn render_polygon(&mut self, points: &[Point], st: ResolvedStyle) {
        let mut ren = self.renderer();
        let mut prim = RendererPrimitives::new(&mut ren);
        st.apply(&mut prim);
        if st.fill.is_some() {
            prim.solid_polygon(points);
        }
        if st.line.is_some() {
            prim.polygon(points);
        }
    }

    /// Axis-aligned rectangle with inclusive corners `p1` and `p2`.
    pub fn draw_rectangle(&mut self, p1: impl Into<Point>, p2: impl Into<Point>, style: &ShapeStyle) -> Result<()> {
        let (p1, p2) = (p1.into(), p2.into());
        check_points(&[p1, p2])?;
        let st = style.resolve(self.palette())?;

        let mut ren = self.renderer();
        let mut prim = RendererPrimitives::new(&mut ren);
        st.apply(&mut prim);
        if st.fill.is_some() {
            prim.solid_rectangle(p1.x, p1.y, p2.x, p2.y);
        }
        if st.line.is_some() {
            prim.rectangle(p1.x, p1.y, p2.x, p2.y);
        }
        Ok(())
    }

    /// Circle of the given diameter centered at `center`.
    pub fn draw_circle(&mut self, center: impl Into<Point>, diameter: i64, style: &ShapeStyle) -> Result<()> {
        self.draw_ellipse(center, diameter, diameter, style)
    }

    /// Axis-aligned ellipse of `width` x `height` centered at `center`.
    pub fn draw_ellipse(
        &mut self,
        center: impl Into<Point>,
        width: i64,
        height: i64,
        style: &ShapeStyle,
    ) -> Result<()> {
        let c = center.into();
        check_points(&[c])?;
        let (w, h) = (check_extent("width", width)?, check_extent("height", height)?);
        let st = style.resolve(self.palette())?;

        let mut ren = self.renderer();
        let mut prim = RendererPrimitives::new(&mut ren);
        st.apply(&mut prim);
        if st.fill.is_some() {
            prim.solid_ellipse(c.x, c.y, w / 2, h / 2);
        }
        if st.line.is_some() {
            prim.ellipse(c.x, c.y, w / 2, h / 2);
        }
        Ok(())
    }

    /// Part of the ellipse `width` x `height` around `center` from `start`
    /// to `end` degrees, clockwise from 3 o'clock.
    ///
    /// `ArcStyle::Arc` outlines the curve and fills the pie slice;
    /// `ArcStyle::Chord` outlines the straight chord and fills the triangle
    /// between the chord and the center. `draw_wedge` adds the two spokes
    /// from the center.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_arc(
        &mut self,
        center: impl Into<Point>,
        width: i64,
        height: i64,
        start: i64,
        end: i64,
        style: &ShapeStyle,
        arc_style: ArcStyle,
        draw_wedge: bool,
    ) -> Result<()> {
        let c = center.into();
        check_points(&[c])?;
        let (w, h) = (check_extent("width", width)?, check_extent("height", height)?);
        let st = style.resolve(self.palette())?;

        let pts = arc_points(c, w, h, start, end);
        let (Some(&first), Some(&last)) = (pts.first(), pts.last()) else {
            return Ok(());
        };

        let mut ren = self.renderer();
        let mut prim = RendererPrimitives::new(&mut ren);
        st.apply(&mut prim);
        if st.fill.is_some() {
            match arc_style {
                ArcStyle::Arc => {
                    let mut pie = Vec::with_capacity(pts.len() + 1);
                    pie.push(c);
                    pie.extend_from_slice(&pts);
                    prim.solid_polygon(&pie);
                }
                ArcStyle::Chord => prim.solid_polygon(&[first, last, c]),
            }
        }
        if st.line.is_some() {
            match arc_style {
                ArcStyle::Arc => prim.polyline(&pts),
                ArcStyle::Chord => prim.line(first.x, first.y, last.x, last.y),
            }
            if draw_wedge {
                prim.line(c.x, c.y, first.x, first.y);
                prim.line(c.x, c.y, last.x, last.y);
            }
        }
        Ok(())
    }

    /// Text anchored at `anchor`, positioned by `align`. A background color
    /// fills the text box before the glyphs are drawn.
    pub fn draw_text(
        &mut self,
        text: &str,
        anchor: impl Into<Point>,
        font: FontSize,
        color: impl Into<ColorRef>,
        align: Align,
        background: Option<ColorRef>,
    ) -> Result<()> {
        let p = anchor.into();
        check_points(&[p])?;
        let fg = self.palette().resolve(&color.into())?;
        let bg = background.map(|c| self.palette().resolve(&c)).transpose()?;

        let face = EmbeddedFont::new(font);
        let mut glyph = GlyphRasterBin::new(&face);
        let (w, h) = (glyph.width(text), glyph.height() as i64);
        let (dx, dy) = align.offset(w, h);
        let (x, y) = (p.x + dx, p.y + dy);

        let mut ren = self.renderer();
        if let Some(bg) = bg {
            if w > 0 {
                ren.copy_bar(x, y, x + w - 1, y + h - 1, bg);
            }
        }
        render_raster_htext_solid(&mut ren, &mut glyph, x, y, text, fg);
        Ok(())
    }

    /// One round dot; see [`Canvas::draw_dots`].
    pub fn draw_dot(&mut self, point: impl Into<Point>, diameter: u32, color: impl Into<ColorRef>) -> Result<()> {
        self.draw_markers(&[point.into()], MarkerType::Dot, diameter, &MarkerColors::Single(color.into()), 1)
    }

    /// A round dot at every point. Diameter 1 is a single pixel.
    pub fn draw_dots(&mut self, points: &[Point], diameter: u32, colors: impl Into<MarkerColors>) -> Result<()> {
        self.draw_markers(points, MarkerType::Dot, diameter, &colors.into(), 1)
    }

    /// An X at every point, drawn with `line_width` strokes.
    pub fn draw_xes(
        &mut self,
        points: &[Point],
        diameter: u32,
        colors: impl Into<MarkerColors>,
        line_width: u32,
    ) -> Result<()> {
        self.draw_markers(points, MarkerType::X, diameter, &colors.into(), line_width)
    }

    fn draw_markers(
        &mut self,
        points: &[Point],
        marker: MarkerType,
        diameter: u32,
        colors: &MarkerColors,
        line_width: u32,
    ) -> Result<()> {
        check_points(points)?;
        let indices = colors.resolve(self.palette(), points.len())?;

        let mut ren = self.renderer();
        let mut prim = RendererPrimitives::new(&mut ren);
        prim.set_line_width(line_width);
        for (p, &c) in points.iter().zip(&indices) {
            prim.set_fill_color(c);
            prim.set_line_color(c);
            render_marker(&mut prim, marker, p.x, p.y, diameter);
        }
        Ok(())
    }

    /// Cubic Bezier from `p1` to `p2` with control points `c1` and `c2`,
    /// flattened so that no segment is longer than `max_gap`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_bezier(
        &mut self,
        p1: PointD,
        p2: PointD,
        c1: PointD,
        c2: PointD,
        color: impl Into<ColorRef>,
        line_width: u32,
        max_gap: Option<f64>,
    ) -> Result<()> {
        for p in [p1, p2, c1, c2] {
            check_point_d(p)?;
        }
        let color = self.palette().resolve(&color.into())?;
        let points = bezier_curve(p1, p2, c1, c2, max_gap.unwrap_or(DEFAULT_MAX_GAP))?;
        check_points(&points)?;

        let mut ren = self.renderer();
        let mut prim = RendererPrimitives::new(&mut ren);
        prim.set_line_color(color);
        prim.set_line_width(line_width);
        prim.polyline(&points);
        Ok(())
    }

    /// Closed polygon whose edges are replaced by Bezier curves through the
    /// vertices. `smooth` in `[0, 1]` sets how round the result is.
    pub fn draw_smooth_polygon(
        &mut self,
        points: &[Point],
        smooth: f64,
        style: &ShapeStyle,
        max_gap: Option<f64>,
    ) -> Result<()> {
        require_points(points, 3)?;
        let st = style.resolve(self.palette())?;
        let verts: Vec<PointD> = points.iter().map(|&p| p.into()).collect();
        let ctrl = find_control_points(&verts, smooth)?;
        let poly = poly_from_ctrl_points(&verts, &ctrl, max_gap.unwrap_or(DEFAULT_MAX_GAP))?;
        check_points(&poly)?;
        self.render_polygon(&poly, st);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Preset;

    fn canvas(w: u32, h: u32) -> Canvas {
        Canvas::new(w, h).unwrap()
    }

    fn count(c: &Canvas, index: u8) -> usize {
        c.pixels().iter().filter(|&&v| v == index).count()
    }

    fn white() -> u8 {
        2
    }

    #[test]
    fn test_line_diagonal() {
        let mut c = canvas(10, 10);
        c.draw_line((0, 0), (9, 9), "white", 1).unwrap();
        for i in 0..10 {
            assert_eq!(c.get_pixel_value((i, i)).unwrap(), white());
        }
        assert_eq!(count(&c, white()), 10);
    }

    #[test]
    fn test_line_overflow_rejected() {
        let mut c = canvas(10, 10);
        let big = 1i64 << 33;
        assert!(matches!(
            c.draw_line((-big, -big), (big, big), "white", 2),
            Err(DrawError::Overflow(_))
        ));
        assert_eq!(count(&c, 0), 100);
    }

    #[test]
    fn test_unknown_color_leaves_canvas() {
        let mut c = canvas(10, 10);
        assert!(matches!(
            c.draw_line((0, 0), (9, 9), "chartreuse", 1),
            Err(DrawError::UnknownColor(_))
        ));
        assert_eq!(count(&c, 0), 100);
    }

    #[test]
    fn test_polyline_needs_two_points() {
        let mut c = canvas(10, 10);
        assert!(matches!(
            c.draw_polyline(&[Point::new(1, 1)], "white", 1),
            Err(DrawError::TooFewPoints { required: 2, got: 1 })
        ));
        c.draw_polyline(&[Point::new(1, 1), Point::new(8, 1)], "white", 1).unwrap();
        assert_eq!(count(&c, white()), 8);
    }

    #[test]
    fn test_polygon_fill_and_outline() {
        let mut c = canvas(10, 10);
        let square = [
            Point::new(2, 2),
            Point::new(7, 2),
            Point::new(7, 7),
            Point::new(2, 7),
        ];
        let style = ShapeStyle::new().fill("red").line("white");
        c.draw_polygon(&square, &style).unwrap();
        assert_eq!(count(&c, white()), 20);
        assert_eq!(count(&c, 5), 16);
        assert!(matches!(
            c.draw_polygon(&square[..2], &style),
            Err(DrawError::TooFewPoints { required: 3, .. })
        ));
    }

    #[test]
    fn test_polygon_without_colors_is_noop() {
        let mut c = canvas(10, 10);
        let tri = [Point::new(0, 0), Point::new(9, 0), Point::new(0, 9)];
        c.draw_polygon(&tri, &ShapeStyle::new()).unwrap();
        assert_eq!(count(&c, 0), 100);
    }

    #[test]
    fn test_rectangle() {
        let mut c = canvas(20, 20);
        c.draw_rectangle((5, 5), (14, 14), &ShapeStyle::new().fill("red").line("white").width(2))
            .unwrap();
        assert_eq!(c.get_pixel_value((4, 4)).unwrap(), white());
        assert_eq!(c.get_pixel_value((10, 10)).unwrap(), 5);
    }

    #[test]
    fn test_circle_fill_center() {
        let mut c = canvas(50, 50);
        c.draw_circle((25, 25), 20, &ShapeStyle::new().fill("blue").line("white")).unwrap();
        assert_eq!(c.get_pixel_value((25, 25)).unwrap(), 13);
        assert_eq!(c.get_pixel_value((35, 25)).unwrap(), white());
        assert_eq!(c.get_pixel_value((25, 15)).unwrap(), white());
        assert_eq!(c.get_pixel_value((0, 0)).unwrap(), 0);
        assert!(c.draw_circle((25, 25), -4, &ShapeStyle::new().fill("blue")).is_err());
    }

    #[test]
    fn test_arc_styles() {
        let mut pie = canvas(100, 100);
        pie.draw_arc((50, 50), 80, 80, 0, 90, &ShapeStyle::new().fill("red"), ArcStyle::Arc, false)
            .unwrap();
        let mut chord = canvas(100, 100);
        chord
            .draw_arc((50, 50), 80, 80, 0, 90, &ShapeStyle::new().fill("red"), ArcStyle::Chord, false)
            .unwrap();
        // Lower-right quadrant only, pie covers more than the triangle
        assert_eq!(pie.get_pixel_value((60, 60)).unwrap(), 5);
        assert_eq!(pie.get_pixel_value((40, 40)).unwrap(), 0);
        assert!(count(&pie, 5) > count(&chord, 5));
        assert_eq!(chord.get_pixel_value((80, 80)).unwrap(), 0);
        assert_eq!(pie.get_pixel_value((75, 75)).unwrap(), 5);
    }

    #[test]
    fn test_arc_wedge_spokes() {
        let mut c = canvas(100, 100);
        c.draw_arc((50, 50), 80, 80, 0, 90, &ShapeStyle::new().line("white"), ArcStyle::Arc, true)
            .unwrap();
        // Spoke along +x and along +y
        assert_eq!(c.get_pixel_value((70, 50)).unwrap(), white());
        assert_eq!(c.get_pixel_value((50, 70)).unwrap(), white());
        let mut open = canvas(100, 100);
        open.draw_arc((50, 50), 80, 80, 0, 90, &ShapeStyle::new().line("white"), ArcStyle::Arc, false)
            .unwrap();
        assert_eq!(open.get_pixel_value((70, 50)).unwrap(), 0);
    }

    #[test]
    fn test_text_alignment_and_background() {
        let mut c = canvas(100, 40);
        c.draw_text("ab", (50, 20), FontSize::Small, "white", "cc".parse().unwrap(), Some("red".into()))
            .unwrap();
        // Box is 12x13 centered on the anchor: x 44..55, y 14..26
        assert_eq!(c.get_pixel_value((44, 14)).unwrap(), 5);
        assert_eq!(c.get_pixel_value((55, 26)).unwrap(), 5);
        assert_eq!(c.get_pixel_value((43, 14)).unwrap(), 0);
        assert_eq!(c.get_pixel_value((56, 26)).unwrap(), 0);
        assert!(count(&c, white()) > 0);
    }

    #[test]
    fn test_dots_shared_and_per_point() {
        let mut c = canvas(20, 20);
        let pts = [Point::new(2, 2), Point::new(10, 10), Point::new(18, 18)];
        c.draw_dots(&pts, 1, "white").unwrap();
        assert_eq!(count(&c, white()), 3);

        let mut c = canvas(20, 20);
        c.draw_dots(&pts, 1, vec!["red", "blue", "lime"]).unwrap();
        assert_eq!(c.get_pixel_value((2, 2)).unwrap(), 5);
        assert_eq!(c.get_pixel_value((10, 10)).unwrap(), 13);
        assert_eq!(c.get_pixel_value((18, 18)).unwrap(), 9);

        let mut c = canvas(20, 20);
        c.draw_dots(&pts, 1, vec![5u8, 6, 7]).unwrap();
        assert_eq!(c.get_pixel_value((18, 18)).unwrap(), 7);
    }

    #[test]
    fn test_dots_color_count_mismatch() {
        let mut c = canvas(20, 20);
        let pts = [Point::new(2, 2), Point::new(10, 10)];
        assert!(matches!(
            c.draw_dots(&pts, 3, vec!["red"]),
            Err(DrawError::Shape { .. })
        ));
        // A bad color in the middle of the list draws nothing
        assert!(c.draw_dots(&pts, 3, vec!["red", "nope"]).is_err());
        assert_eq!(count(&c, 0), 400);
    }

    #[test]
    fn test_xes() {
        let mut c = canvas(20, 20);
        c.draw_xes(&[Point::new(10, 10)], 4, "white", 1).unwrap();
        assert_eq!(count(&c, white()), 9);
    }

    #[test]
    fn test_bezier_endpoints() {
        let mut c = canvas(100, 100);
        c.draw_bezier(
            PointD::new(10.0, 90.0),
            PointD::new(90.0, 90.0),
            PointD::new(10.0, 10.0),
            PointD::new(90.0, 10.0),
            "white",
            1,
            None,
        )
        .unwrap();
        assert_eq!(c.get_pixel_value((10, 90)).unwrap(), white());
        assert_eq!(c.get_pixel_value((90, 90)).unwrap(), white());
        assert_eq!(c.get_pixel_value((50, 90)).unwrap(), 0);
    }

    #[test]
    fn test_smooth_polygon() {
        let mut c = canvas(100, 100);
        let pts = [
            Point::new(20, 20),
            Point::new(80, 20),
            Point::new(80, 80),
            Point::new(20, 80),
        ];
        c.draw_smooth_polygon(&pts, 0.5, &ShapeStyle::new().fill("red"), None).unwrap();
        assert_eq!(c.get_pixel_value((50, 50)).unwrap(), 5);
        assert_eq!(c.get_pixel_value((1, 1)).unwrap(), 0);
        assert!(c.draw_smooth_polygon(&pts, 2.0, &ShapeStyle::new().fill("red"), None).is_err());
    }

    #[test]
    fn test_clip_rect_bounds_drawing() {
        let mut c = Canvas::with_preset(10, 10, Preset::Named("BW")).unwrap();
        c.set_clip_rect((2, 2), (5, 5)).unwrap();
        c.draw_rectangle((0, 0), (9, 9), &ShapeStyle::new().fill("white")).unwrap();
        assert_eq!(count(&c, 2), 16);
    }
}
