//! Palette color values and color references.
//!
//! `Rgba8` is the value stored in each palette slot. `ColorRef` is how
//! callers name a color when drawing: by palette name, by integer index, or
//! by a float that must round to an index.

// ============================================================================
// Rgba8 (8-bit per channel)
// ============================================================================

/// RGBA color with u8 components. Alpha 255 is opaque, 0 is transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BASE_MASK: u8 = 255;

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn new_opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, Self::BASE_MASK)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == Self::BASE_MASK
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Interpolate between `self` and `c` by parameter `k` (0.0 to 1.0),
    /// truncating each channel.
    pub fn gradient(&self, c: &Rgba8, k: f64) -> Rgba8 {
        let lerp = |p: u8, q: u8| -> u8 {
            let v = p as f64 + (q as f64 - p as f64) * k;
            v.clamp(0.0, 255.0) as u8
        };
        Rgba8 {
            r: lerp(self.r, c.r),
            g: lerp(self.g, c.g),
            b: lerp(self.b, c.b),
            a: lerp(self.a, c.a),
        }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::transparent()
    }
}

impl From<(u8, u8, u8)> for Rgba8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgba8::new_opaque(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba8 {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Rgba8::new(r, g, b, a)
    }
}

impl From<[u8; 3]> for Rgba8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgba8::new_opaque(r, g, b)
    }
}

/// Create an opaque Rgba8 from a packed RGB value (0xRRGGBB).
pub const fn rgb8_packed(v: u32) -> Rgba8 {
    Rgba8::new_opaque(
        ((v >> 16) & 0xFF) as u8,
        ((v >> 8) & 0xFF) as u8,
        (v & 0xFF) as u8,
    )
}

// ============================================================================
// ColorRef
// ============================================================================

/// A reference to a palette entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorRef {
    /// Palette entry name.
    Name(String),
    /// Integer palette index; must be in `0..=255`.
    Index(i64),
    /// Numeric index given as a float; rounded to the nearest integer,
    /// halves to even (`2.5` is index 2, `3.5` is index 4). Color ramps
    /// round the same way.
    Value(f64),
}

impl ColorRef {
    /// Convert a numeric reference into an index in `0..=255`.
    ///
    /// Returns `None` for `Name`, which needs a palette to resolve.
    pub fn numeric_index(&self) -> Option<crate::error::Result<u8>> {
        use crate::error::DrawError;
        match *self {
            ColorRef::Name(_) => None,
            ColorRef::Index(i) => Some(u8::try_from(i).map_err(|_| DrawError::IndexOutOfRange(i))),
            ColorRef::Value(v) => {
                if !v.is_finite() {
                    return Some(Err(DrawError::InvalidColorValue(v)));
                }
                let i = v.round_ties_even();
                Some(if (0.0..=255.0).contains(&i) {
                    Ok(i as u8)
                } else {
                    Err(DrawError::IndexOutOfRange(i as i64))
                })
            }
        }
    }
}

impl From<&str> for ColorRef {
    fn from(s: &str) -> Self {
        ColorRef::Name(s.to_string())
    }
}

impl From<String> for ColorRef {
    fn from(s: String) -> Self {
        ColorRef::Name(s)
    }
}

impl From<&String> for ColorRef {
    fn from(s: &String) -> Self {
        ColorRef::Name(s.clone())
    }
}

impl From<&ColorRef> for ColorRef {
    fn from(c: &ColorRef) -> Self {
        c.clone()
    }
}

macro_rules! color_ref_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ColorRef {
                fn from(i: $t) -> Self {
                    ColorRef::Index(i as i64)
                }
            }
        )*
    };
}

color_ref_from_int!(u8, u16, u32, i32, i64, usize);

impl From<f64> for ColorRef {
    fn from(v: f64) -> Self {
        ColorRef::Value(v)
    }
}

impl From<f32> for ColorRef {
    fn from(v: f32) -> Self {
        ColorRef::Value(v as f64)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrawError;

    #[test]
    fn test_rgba8_new() {
        let c = Rgba8::new_opaque(10, 20, 30);
        assert!(c.is_opaque());
        assert_eq!(c.rgb(), [10, 20, 30]);
        assert!(Rgba8::transparent().is_transparent());
    }

    #[test]
    fn test_rgb8_packed() {
        assert_eq!(rgb8_packed(0x1f77b4), Rgba8::new_opaque(0x1f, 0x77, 0xb4));
    }

    #[test]
    fn test_gradient() {
        let a = Rgba8::new_opaque(0, 0, 0);
        let b = Rgba8::new_opaque(255, 100, 10);
        assert_eq!(a.gradient(&b, 0.0), a);
        assert_eq!(a.gradient(&b, 1.0), b);
        assert_eq!(a.gradient(&b, 0.5), Rgba8::new_opaque(127, 50, 5));
    }

    #[test]
    fn test_numeric_index() {
        assert_eq!(ColorRef::from(3).numeric_index().unwrap().unwrap(), 3);
        assert_eq!(ColorRef::from(2.3).numeric_index().unwrap().unwrap(), 2);
        assert_eq!(ColorRef::from(2.7).numeric_index().unwrap().unwrap(), 3);
        assert_eq!(ColorRef::from(2.5).numeric_index().unwrap().unwrap(), 2);
        assert_eq!(ColorRef::from(3.5).numeric_index().unwrap().unwrap(), 4);
        assert_eq!(ColorRef::from(-0.5).numeric_index().unwrap().unwrap(), 0);
        assert!(matches!(
            ColorRef::from(300).numeric_index().unwrap(),
            Err(DrawError::IndexOutOfRange(300))
        ));
        assert!(matches!(
            ColorRef::from(-1).numeric_index().unwrap(),
            Err(DrawError::IndexOutOfRange(-1))
        ));
        assert!(matches!(
            ColorRef::from(f64::NAN).numeric_index().unwrap(),
            Err(DrawError::InvalidColorValue(_))
        ));
        assert!(ColorRef::from("red").numeric_index().is_none());
    }
}
