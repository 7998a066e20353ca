//! Base renderer with clipping.
//!
//! Wraps a canvas pixel buffer with its clip rectangle so that every write
//! made by the rasterizers is bounded to the visible area. Coordinates are
//! `i64`; anything outside the clip box is dropped.

use crate::basics::RectI;

// ============================================================================
// RendererBase
// ============================================================================

/// Clip-and-write access to one canvas's pixel indices.
pub struct RendererBase<'a> {
    pixels: &'a mut [u8],
    width: i64,
    clip_box: RectI,
}

impl<'a> RendererBase<'a> {
    /// `pixels` is row-major with `width` pixels per row. `clip_box` must
    /// already be intersected with the buffer bounds.
    pub fn new(pixels: &'a mut [u8], width: u32, clip_box: RectI) -> Self {
        Self {
            pixels,
            width: width as i64,
            clip_box,
        }
    }

    pub fn clip_box(&self) -> &RectI {
        &self.clip_box
    }
    pub fn xmin(&self) -> i64 {
        self.clip_box.x1
    }
    pub fn ymin(&self) -> i64 {
        self.clip_box.y1
    }
    pub fn xmax(&self) -> i64 {
        self.clip_box.x2
    }
    pub fn ymax(&self) -> i64 {
        self.clip_box.y2
    }

    #[inline]
    pub fn inbox(&self, x: i64, y: i64) -> bool {
        self.clip_box.hit_test(x, y)
    }

    #[inline]
    fn offset(&self, x: i64, y: i64) -> usize {
        (y * self.width + x) as usize
    }

    /// Set a single pixel (clipped).
    #[inline]
    pub fn copy_pixel(&mut self, x: i64, y: i64, c: u8) {
        if self.inbox(x, y) {
            let i = self.offset(x, y);
            self.pixels[i] = c;
        }
    }

    /// Set a horizontal run (clipped). x1, x2 are inclusive endpoints.
    pub fn copy_hline(&mut self, mut x1: i64, y: i64, mut x2: i64, c: u8) {
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        if y > self.ymax() || y < self.ymin() || x1 > self.xmax() || x2 < self.xmin() {
            return;
        }
        x1 = x1.max(self.xmin());
        x2 = x2.min(self.xmax());
        let start = self.offset(x1, y);
        let end = self.offset(x2, y);
        self.pixels[start..=end].fill(c);
    }

    /// Set a vertical run (clipped). y1, y2 are inclusive endpoints.
    pub fn copy_vline(&mut self, x: i64, mut y1: i64, mut y2: i64, c: u8) {
        if y1 > y2 {
            std::mem::swap(&mut y1, &mut y2);
        }
        if x > self.xmax() || x < self.xmin() || y1 > self.ymax() || y2 < self.ymin() {
            return;
        }
        y1 = y1.max(self.ymin());
        y2 = y2.min(self.ymax());
        for y in y1..=y2 {
            let i = self.offset(x, y);
            self.pixels[i] = c;
        }
    }

    /// Fill a rectangle (clipped). Corners are inclusive, in any order.
    pub fn copy_bar(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, c: u8) {
        let mut rc = RectI::new(x1, y1, x2, y2);
        rc.normalize();
        if rc.clip(&self.clip_box) {
            for y in rc.y1..=rc.y2 {
                let start = self.offset(rc.x1, y);
                let end = self.offset(rc.x2, y);
                self.pixels[start..=end].fill(c);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(w: u32, h: u32) -> Vec<u8> {
        vec![0u8; (w * h) as usize]
    }

    #[test]
    fn test_copy_pixel_clipped() {
        let mut buf = buffer(4, 4);
        let mut rb = RendererBase::new(&mut buf, 4, RectI::new(1, 1, 2, 2));
        rb.copy_pixel(0, 0, 7);
        rb.copy_pixel(1, 1, 7);
        rb.copy_pixel(-5, 1 << 40, 7);
        assert_eq!(buf[0], 0);
        assert_eq!(buf[5], 7);
    }

    #[test]
    fn test_copy_hline_clipped() {
        let mut buf = buffer(10, 3);
        let mut rb = RendererBase::new(&mut buf, 10, RectI::new(0, 0, 9, 2));
        rb.copy_hline(8, 1, -3, 2);
        assert_eq!(&buf[10..20], &[2, 2, 2, 2, 2, 2, 2, 2, 2, 0]);
    }

    #[test]
    fn test_copy_vline_clipped() {
        let mut buf = buffer(3, 5);
        let mut rb = RendererBase::new(&mut buf, 3, RectI::new(0, 1, 2, 3));
        rb.copy_vline(1, -100, 100, 4);
        let column: Vec<u8> = (0..5).map(|y| buf[y * 3 + 1]).collect();
        assert_eq!(column, vec![0, 4, 4, 4, 0]);
    }

    #[test]
    fn test_copy_bar() {
        let mut buf = buffer(5, 5);
        let mut rb = RendererBase::new(&mut buf, 5, RectI::new(0, 0, 4, 4));
        rb.copy_bar(3, 3, 10, 10, 1);
        assert_eq!(buf.iter().filter(|&&v| v == 1).count(), 4);
    }
}
