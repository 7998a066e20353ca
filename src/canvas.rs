//! Indexed-color canvas.
//!
//! A canvas owns one byte per pixel (a palette index), its palette, and a
//! clip rectangle that bounds every drawing operation. Drawing primitives
//! live in `drawing.rs`; encoding lives in `codec.rs`.

use std::fmt;

use log::debug;

use crate::array::IndexArray;
use crate::basics::{Point, RectI};
use crate::color::{ColorRef, Rgba8};
use crate::config::Limits;
use crate::error::{DrawError, Result};
use crate::palette::{Palette, Preset};
use crate::renderer_base::RendererBase;

// ============================================================================
// Canvas
// ============================================================================

#[derive(Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    // row-major: pixels[y * width + x]
    pixels: Vec<u8>,
    clip: RectI,
    palette: Palette,
}

impl Canvas {
    /// A zero-filled canvas with the default `web` palette.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_preset(width, height, Preset::default())
    }

    /// A zero-filled canvas seeded from `preset`.
    pub fn with_preset(width: u32, height: u32, preset: Preset<'_>) -> Result<Self> {
        Self::with_limits(width, height, preset, Limits::default())
    }

    /// A zero-filled canvas, checked against custom allocation limits.
    pub fn with_limits(width: u32, height: u32, preset: Preset<'_>, limits: Limits) -> Result<Self> {
        let palette = Palette::with_preset(preset)?;
        Self::with_palette(width, height, palette, limits)
    }

    /// A zero-filled canvas that takes ownership of an existing palette.
    pub fn with_palette(width: u32, height: u32, palette: Palette, limits: Limits) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(DrawError::InvalidArgument(format!(
                "canvas dimensions must be positive, got {width}x{height}"
            )));
        }
        let requested = width as u64 * height as u64;
        if requested > limits.max_pixels {
            return Err(DrawError::OutOfMemory {
                requested,
                limit: limits.max_pixels,
            });
        }
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(requested as usize)
            .map_err(|_| DrawError::OutOfMemory {
                requested,
                limit: limits.max_pixels,
            })?;
        pixels.resize(requested as usize, 0);
        debug!("allocated {width}x{height} canvas, {} palette entries", palette.len());
        Ok(Self {
            width,
            height,
            pixels,
            clip: Self::full_rect(width, height),
            palette,
        })
    }

    /// A canvas with the `web` palette whose pixels are copied from `array`.
    pub fn from_array(array: &IndexArray) -> Result<Self> {
        let (w, h) = array.shape();
        let (w, h) = (
            u32::try_from(w).map_err(|_| DrawError::InvalidArgument(format!("width {w}")))?,
            u32::try_from(h).map_err(|_| DrawError::InvalidArgument(format!("height {h}")))?,
        );
        let mut canvas = Self::new(w, h)?;
        canvas.import_array(array)?;
        Ok(canvas)
    }

    fn full_rect(width: u32, height: u32) -> RectI {
        RectI::new(0, 0, width as i64 - 1, height as i64 - 1)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    #[inline]
    fn offset(&self, x: i64, y: i64) -> usize {
        (y as usize) * self.width as usize + x as usize
    }

    // ------------------------------------------------------------------------
    // Palette
    // ------------------------------------------------------------------------

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    /// Add a named color and return its index.
    pub fn add_color(&mut self, name: impl Into<String>, color: impl Into<Rgba8>) -> Result<u8> {
        self.palette.add(name, color)
    }

    /// Add several named colors; nothing is added unless all fit.
    pub fn add_colors<S: AsRef<str>>(&mut self, colors: &[(S, Rgba8)]) -> Result<Vec<u8>> {
        self.palette.add_many(colors)
    }

    /// Palette index for a color name, integer or float.
    pub fn color_index(&self, color: impl Into<ColorRef>) -> Result<u8> {
        self.palette.resolve(&color.into())
    }

    pub fn color_names(&self) -> Vec<&str> {
        self.palette.names()
    }

    // ------------------------------------------------------------------------
    // Pixels
    // ------------------------------------------------------------------------

    /// Set a pixel to a palette color. Points outside the clip rectangle are
    /// ignored.
    pub fn draw_pixel(&mut self, point: impl Into<Point>, color: impl Into<ColorRef>) -> Result<()> {
        let index = self.palette.resolve(&color.into())?;
        self.set_pixel_value(point, index);
        Ok(())
    }

    /// Set a pixel to a raw index without consulting the palette. Points
    /// outside the clip rectangle are ignored.
    pub fn set_pixel_value(&mut self, point: impl Into<Point>, index: u8) {
        let p = point.into();
        self.renderer().copy_pixel(p.x, p.y, index);
    }

    /// Raw index at a point.
    pub fn get_pixel_value(&self, point: impl Into<Point>) -> Result<u8> {
        let p = point.into();
        if !self.contains(p.x, p.y) {
            return Err(DrawError::OutOfBounds { x: p.x, y: p.y });
        }
        Ok(self.pixels[self.offset(p.x, p.y)])
    }

    /// Palette name of the color at a point.
    pub fn get_pixel_color(&self, point: impl Into<Point>) -> Result<&str> {
        let index = self.get_pixel_value(point)?;
        self.palette
            .name_of(index)
            .ok_or(DrawError::IndexOutOfRange(index as i64))
    }

    /// Reset every pixel to index 0.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Reset every pixel to `color`.
    pub fn clear_to(&mut self, color: impl Into<ColorRef>) -> Result<()> {
        let index = self.palette.resolve(&color.into())?;
        self.pixels.fill(index);
        Ok(())
    }

    /// Raw row-major pixel indices.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn renderer(&mut self) -> RendererBase<'_> {
        RendererBase::new(&mut self.pixels, self.width, self.clip)
    }

    // ------------------------------------------------------------------------
    // Clipping
    // ------------------------------------------------------------------------

    /// Current clip rectangle as inclusive corners.
    pub fn clip_rect(&self) -> (Point, Point) {
        self.clip.corners()
    }

    /// Restrict drawing to the inclusive rectangle `p1..=p2`.
    ///
    /// The rectangle is intersected with the canvas. Inverted rectangles and
    /// ones that miss the canvas entirely are rejected.
    pub fn set_clip_rect(&mut self, p1: impl Into<Point>, p2: impl Into<Point>) -> Result<()> {
        let (p1, p2) = (p1.into(), p2.into());
        let mut rc = RectI::new(p1.x, p1.y, p2.x, p2.y);
        let invalid = DrawError::InvalidClipRect {
            x1: p1.x,
            y1: p1.y,
            x2: p2.x,
            y2: p2.y,
        };
        if !rc.is_valid() || !rc.clip(&Self::full_rect(self.width, self.height)) {
            return Err(invalid);
        }
        self.clip = rc;
        Ok(())
    }

    /// Restore the clip rectangle to the full canvas.
    pub fn reset_clip_rect(&mut self) {
        self.clip = Self::full_rect(self.width, self.height);
    }

    // ------------------------------------------------------------------------
    // Bulk transfer
    // ------------------------------------------------------------------------

    /// Overwrite every pixel from an `[x][y]` array of shape `(width, height)`.
    pub fn import_array(&mut self, array: &IndexArray) -> Result<()> {
        let expected = (self.width as usize, self.height as usize);
        if array.shape() != expected {
            return Err(DrawError::Shape {
                expected: format!("{expected:?}"),
                got: format!("{:?}", array.shape()),
            });
        }
        let h = self.height as usize;
        let w = self.width as usize;
        for (x, column) in array.as_slice().chunks(h).enumerate() {
            for (y, &v) in column.iter().enumerate() {
                self.pixels[y * w + x] = v;
            }
        }
        Ok(())
    }

    /// Copy all pixels into an `[x][y]` array of shape `(width, height)`.
    pub fn export_array(&self) -> IndexArray {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut out = IndexArray::zeros(w, h);
        for (x, column) in out.as_mut_slice().chunks_mut(h).enumerate() {
            for (y, v) in column.iter_mut().enumerate() {
                *v = self.pixels[y * w + x];
            }
        }
        out
    }

    /// Blit the whole of `source` to the top-left corner.
    pub fn copy(&mut self, source: &Canvas) {
        self.copy_region(
            source,
            Point::new(0, 0),
            Point::new(0, 0),
            (source.width, source.height),
        );
    }

    /// Blit a `size` region of `source` starting at `src_origin` onto this
    /// canvas at `dst_origin`.
    ///
    /// Source pixels at the source palette's transparent index are skipped.
    /// The destination clip rectangle applies.
    pub fn copy_region(&mut self, source: &Canvas, src_origin: Point, dst_origin: Point, size: (u32, u32)) {
        let transparent = source.palette.transparent();
        // Restrict the region to what exists in the source.
        let sx1 = src_origin.x.max(0);
        let sy1 = src_origin.y.max(0);
        let sx2 = (src_origin.x + size.0 as i64).min(source.width as i64);
        let sy2 = (src_origin.y + size.1 as i64).min(source.height as i64);
        if sx1 >= sx2 || sy1 >= sy2 {
            return;
        }
        let dx = dst_origin.x - src_origin.x;
        let dy = dst_origin.y - src_origin.y;
        let mut ren = self.renderer();
        for sy in sy1..sy2 {
            for sx in sx1..sx2 {
                let v = source.pixels[source.offset(sx, sy)];
                if Some(v) != transparent {
                    ren.copy_pixel(sx + dx, sy + dy, v);
                }
            }
        }
    }

    /// Same dimensions and identical pixel indices. Palettes are not
    /// compared.
    pub fn equals(&self, other: &Canvas) -> bool {
        self.width == other.width && self.height == other.height && self.pixels == other.pixels
    }
}

impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Canvas: width: {}, height: {}", self.width, self.height)
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Canvas(width={}, height={})", self.width, self.height)
    }
}

// ============================================================================
// Tests
// ============================================================================
