//! Color ramps (heat maps).
//!
//! A ramp interpolates a list of colors into a block of `num_colors`
//! palette entries that sit after the colors reserved for ordinary drawing,
//! and maps numeric values onto that block.

use log::warn;

use crate::canvas::Canvas;
use crate::color::Rgba8;
use crate::config::MAX_COLORS;
use crate::error::{DrawError, Result};
use crate::schemes::BuiltinSchemes;

// ============================================================================
// ColorFunction trait
// ============================================================================

/// Indexed access to a table of colors of known size.
pub trait ColorFunction {
    fn size(&self) -> usize;
    fn get(&self, index: usize) -> Rgba8;
}

/// How many palette slots precede the ramp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseColors<'a> {
    /// Reserve this many slots.
    Count(usize),
    /// Reserve as many slots as the named built-in scheme has entries.
    Scheme(&'a str),
}

impl Default for BaseColors<'_> {
    fn default() -> Self {
        BaseColors::Scheme("BW")
    }
}

impl BaseColors<'_> {
    fn count(&self) -> Result<usize> {
        match self {
            BaseColors::Count(n) => Ok(*n),
            BaseColors::Scheme(name) => BuiltinSchemes::get(name)
                .map(<[_]>::len)
                .ok_or_else(|| DrawError::InvalidStyle {
                    kind: "color scheme",
                    value: name.to_string(),
                }),
        }
    }
}

// ============================================================================
// ColorRamp
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    min_value: f64,
    max_value: f64,
    start_index: usize,
    delta: f64,
    lut: Vec<Rgba8>,
}

impl ColorRamp {
    /// Spread `colors` evenly over `num_colors` entries mapping
    /// `min_value..=max_value`.
    ///
    /// `num_colors` defaults to every slot left after the base colors.
    pub fn build(
        colors: &[Rgba8],
        min_value: f64,
        max_value: f64,
        num_colors: Option<usize>,
        base: BaseColors<'_>,
    ) -> Result<Self> {
        if colors.is_empty() {
            return Err(DrawError::InvalidArgument("a color ramp needs at least one color".into()));
        }
        if !min_value.is_finite() || !max_value.is_finite() || min_value == max_value {
            return Err(DrawError::InvalidArgument(format!(
                "invalid value range {min_value}..{max_value}"
            )));
        }
        let start_index = base.count()?;
        let num_colors = match num_colors {
            Some(n) => n,
            None => MAX_COLORS.saturating_sub(start_index),
        };
        if num_colors == 0 || start_index + num_colors > MAX_COLORS {
            return Err(DrawError::InvalidArgument(format!(
                "{num_colors} ramp colors after {start_index} base colors do not fit a {MAX_COLORS}-entry palette"
            )));
        }

        Ok(Self {
            min_value,
            max_value,
            start_index,
            delta: (max_value - min_value) / num_colors as f64,
            lut: interpolate(colors, num_colors),
        })
    }

    /// Same ramp with its colors running the other way.
    pub fn reversed(mut self) -> Self {
        self.lut.reverse();
        self
    }

    /// Palette index of the first ramp color.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn num_colors(&self) -> usize {
        self.lut.len()
    }

    pub fn value_range(&self) -> (f64, f64) {
        (self.min_value, self.max_value)
    }

    fn offset(&self, value: f64) -> usize {
        if value.is_nan() {
            warn!("NaN passed to a color ramp, using its first color");
            return 0;
        }
        let step = ((value - self.min_value) / self.delta).round_ties_even();
        step.clamp(0.0, (self.lut.len() - 1) as f64) as usize
    }

    /// Palette indices for `values`. Values outside the range clamp to the
    /// first or last ramp color.
    pub fn value_to_index(&self, values: &[f64]) -> Vec<u8> {
        values
            .iter()
            .map(|&v| (self.start_index + self.offset(v)) as u8)
            .collect()
    }

    /// RGB triples for `values`.
    pub fn value_to_rgb(&self, values: &[f64]) -> Vec<[u8; 3]> {
        values.iter().map(|&v| self.get(self.offset(v)).rgb()).collect()
    }

    /// Entries ready for [`Canvas::add_colors`], named `ramp_<i>`.
    pub fn color_list(&self) -> Vec<(String, Rgba8)> {
        (0..self.size())
            .map(|i| (format!("ramp_{i}"), self.get(i)))
            .collect()
    }

    /// Append the ramp colors to `canvas`'s palette. The palette must hold
    /// exactly the reserved base colors.
    pub fn apply(&self, canvas: &mut Canvas) -> Result<()> {
        let len = canvas.palette().len();
        if len != self.start_index {
            return Err(DrawError::InvalidArgument(format!(
                "ramp starts at index {} but the palette has {len} entries",
                self.start_index
            )));
        }
        canvas.add_colors(&self.color_list())?;
        Ok(())
    }
}

impl ColorFunction for ColorRamp {
    fn size(&self) -> usize {
        self.lut.len()
    }

    fn get(&self, index: usize) -> Rgba8 {
        self.lut[index]
    }
}

/// Place `colors` at evenly spaced positions over `size` slots and fill the
/// slots between them by linear interpolation, truncating each channel.
fn interpolate(colors: &[Rgba8], size: usize) -> Vec<Rgba8> {
    let stops = colors.len();
    if stops == 1 || size == 1 {
        return vec![colors[0]; size];
    }
    let scale = (stops - 1) as f64 / (size - 1) as f64;
    (0..size)
        .map(|i| {
            let pos = i as f64 * scale;
            let j = (pos.floor() as usize).min(stops - 2);
            colors[j].gradient(&colors[j + 1], pos - j as f64)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_colors() -> Vec<Rgba8> {
        (0..25u8).map(|i| Rgba8::new_opaque(i, i + 5, 11)).collect()
    }

    #[test]
    fn test_endpoints_preserved() {
        let colors = ramp_colors();
        let ramp = ColorRamp::build(&colors, 0.0, 1000.0, Some(100), BaseColors::default()).unwrap();
        assert_eq!(ramp.size(), 100);
        assert_eq!(ramp.get(0), colors[0]);
        assert_eq!(ramp.get(99), colors[24]);
    }

    #[test]
    fn test_base_colors() {
        let colors = ramp_colors();
        let web = ColorRamp::build(&colors, 100.0, 1000.0, None, BaseColors::Scheme("web")).unwrap();
        assert_eq!(web.start_index(), 17);
        assert_eq!(web.num_colors(), 256 - 17);
        let six = ColorRamp::build(&colors, 100.0, 1000.0, None, BaseColors::Count(6)).unwrap();
        assert_eq!(six.start_index(), 6);
        assert!(ColorRamp::build(&colors, 0.0, 1.0, None, BaseColors::Scheme("nope")).is_err());
    }

    #[test]
    fn test_value_to_index() {
        let ramp = ColorRamp::build(&ramp_colors(), 100.0, 1000.0, Some(200), BaseColors::Count(5)).unwrap();
        let inds = ramp.value_to_index(&[50.0, 100.0, 500.0, 1000.0, 1100.0]);
        let offsets: Vec<u8> = inds.iter().map(|i| i - 5).collect();
        assert_eq!(offsets, vec![0, 0, 89, 199, 199]);
        assert_eq!(ramp.value_to_index(&[f64::NAN]), vec![5]);
    }

    #[test]
    fn test_value_to_rgb() {
        let colors = [Rgba8::new_opaque(0, 0, 0), Rgba8::new_opaque(255, 255, 255)];
        let ramp = ColorRamp::build(&colors, 0.0, 3.0, Some(3), BaseColors::Count(0)).unwrap();
        assert_eq!(
            ramp.value_to_rgb(&[-1.0, 1.0, 10.0]),
            vec![[0, 0, 0], [127, 127, 127], [255, 255, 255]]
        );
        let rev = ramp.reversed();
        assert_eq!(rev.value_to_rgb(&[0.0]), vec![[255, 255, 255]]);
    }

    #[test]
    fn test_invalid_builds() {
        let colors = ramp_colors();
        assert!(ColorRamp::build(&[], 0.0, 1.0, None, BaseColors::Count(0)).is_err());
        assert!(ColorRamp::build(&colors, 1.0, 1.0, None, BaseColors::Count(0)).is_err());
        assert!(ColorRamp::build(&colors, 0.0, 1.0, Some(250), BaseColors::Count(10)).is_err());
        assert!(ColorRamp::build(&colors, 0.0, 1.0, None, BaseColors::Count(256)).is_err());
    }

    #[test]
    fn test_color_list_and_apply() {
        let ramp = ColorRamp::build(&ramp_colors(), 0.0, 10.0, Some(10), BaseColors::Scheme("BW")).unwrap();
        let list = ramp.color_list();
        assert_eq!(list.len(), 10);
        assert_eq!(list[3].0, "ramp_3");

        let mut canvas = Canvas::with_preset(4, 4, crate::palette::Preset::Named("BW")).unwrap();
        ramp.apply(&mut canvas).unwrap();
        assert_eq!(canvas.palette().len(), 13);
        assert_eq!(canvas.palette().index_of("ramp_0").unwrap(), 3);
        // Already applied: the palette no longer matches the base
        assert!(ramp.apply(&mut canvas).is_err());
    }
}
