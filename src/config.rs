//! Limits and defaults.

/// Default ceiling on canvas size: one byte per pixel, 1 GiB total.
pub const DEFAULT_MAX_PIXELS: u64 = 1 << 30;

/// Most palette entries a canvas can hold.
pub const MAX_COLORS: usize = 256;

/// Largest coordinate accepted by drawing operations.
pub const MAX_COORD: i64 = i32::MAX as i64;
/// Smallest coordinate accepted by drawing operations.
pub const MIN_COORD: i64 = i32::MIN as i64;

/// Default frame delay for animations, in 1/100 s.
pub const DEFAULT_FRAME_DELAY: u32 = 50;

/// Default JPEG quality.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Default `max_gap` for bezier flattening, in pixels.
pub const DEFAULT_MAX_GAP: f64 = 10.0;

/// Most points a single flattened bezier curve may hold.
pub const MAX_CURVE_SAMPLES: usize = 1 << 24;

/// Allocation limits applied when a canvas is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_pixels: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

impl Limits {
    pub fn new(max_pixels: u64) -> Self {
        Self { max_pixels }
    }
}

/// Encoder settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    jpeg_quality: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl EncodeOptions {
    /// Set the JPEG quality, clamped to `1..=100`.
    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn quality(&self) -> u8 {
        self.jpeg_quality
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        assert_eq!(Limits::default().max_pixels, 32768 * 32768);
    }

    #[test]
    fn test_jpeg_quality_clamped() {
        assert_eq!(EncodeOptions::default().quality(), 75);
        assert_eq!(EncodeOptions::default().jpeg_quality(0).quality(), 1);
        assert_eq!(EncodeOptions::default().jpeg_quality(200).quality(), 100);
    }
}
