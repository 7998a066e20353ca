//! Indexed color table owned by a canvas.
//!
//! Entries keep insertion order; the position of an entry is its pixel
//! index. Names are unique, colors are not: two names may carry the same
//! RGBA value and still occupy two slots. At most [`MAX_COLORS`] entries.

use std::collections::HashMap;

use log::debug;

use crate::color::{ColorRef, Rgba8};
use crate::config::MAX_COLORS;
use crate::error::{DrawError, Result};
use crate::schemes::{BuiltinSchemes, SchemeTable, DEFAULT_SCHEME};

/// Name that marks an entry as the transparent index.
pub const TRANSPARENT_NAME: &str = "transparent";

/// How to seed a new palette.
#[derive(Debug, Clone, PartialEq)]
pub enum Preset<'a> {
    /// A named built-in scheme, e.g. `"web"` or `"BW"`.
    Named(&'a str),
    /// An explicit ordered list of entries.
    Entries(Vec<(String, Rgba8)>),
    /// No entries at all.
    None,
}

impl Default for Preset<'_> {
    fn default() -> Self {
        Preset::Named(DEFAULT_SCHEME)
    }
}

impl<'a> From<&'a str> for Preset<'a> {
    fn from(name: &'a str) -> Self {
        Preset::Named(name)
    }
}

// ============================================================================
// Palette
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    entries: Vec<(String, Rgba8)>,
    by_name: HashMap<String, u8>,
    transparent: Option<u8>,
}

impl Palette {
    /// An empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a palette from a preset, resolving scheme names against the
    /// built-in schemes.
    pub fn with_preset(preset: Preset<'_>) -> Result<Self> {
        Self::with_preset_from(&BuiltinSchemes, preset)
    }

    /// Seed a palette from a preset, resolving scheme names against `table`.
    pub fn with_preset_from(table: &dyn SchemeTable, preset: Preset<'_>) -> Result<Self> {
        match preset {
            Preset::None => Ok(Self::new()),
            Preset::Entries(entries) => Self::from_entries(entries),
            Preset::Named(name) => {
                let entries = table.lookup(name).ok_or_else(|| DrawError::InvalidStyle {
                    kind: "color scheme",
                    value: name.to_string(),
                })?;
                debug!("seeding palette from scheme {name:?} ({} colors)", entries.len());
                Self::from_entries(entries)
            }
        }
    }

    /// Build a palette from an ordered list of entries.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Rgba8)>,
        S: Into<String>,
    {
        let mut palette = Self::new();
        for (name, color) in entries {
            palette.add(name, color)?;
        }
        Ok(palette)
    }

    /// Append a color at the next free index and return that index.
    pub fn add(&mut self, name: impl Into<String>, color: impl Into<Rgba8>) -> Result<u8> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(DrawError::DuplicateName(name));
        }
        if self.is_full() {
            return Err(DrawError::PaletteFull);
        }
        let index = self.entries.len() as u8;
        if name == TRANSPARENT_NAME && self.transparent.is_none() {
            self.transparent = Some(index);
        }
        self.by_name.insert(name.clone(), index);
        self.entries.push((name, color.into()));
        Ok(index)
    }

    /// Append several colors. Nothing is added unless all of them fit.
    pub fn add_many<S: AsRef<str>>(&mut self, colors: &[(S, Rgba8)]) -> Result<Vec<u8>> {
        let mut seen = std::collections::HashSet::new();
        for (name, _) in colors {
            let name = name.as_ref();
            if self.by_name.contains_key(name) || !seen.insert(name) {
                return Err(DrawError::DuplicateName(name.to_string()));
            }
        }
        if self.entries.len() + colors.len() > MAX_COLORS {
            return Err(DrawError::PaletteFull);
        }
        colors
            .iter()
            .map(|(name, color)| self.add(name.as_ref(), *color))
            .collect()
    }

    /// Index of the entry called `name`.
    pub fn index_of(&self, name: &str) -> Result<u8> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| DrawError::UnknownColor(name.to_string()))
    }

    /// Resolve a color reference to a pixel index.
    ///
    /// Names must exist in the palette. Numeric references only need to be
    /// in `0..=255`; floats round to the nearest integer.
    pub fn resolve(&self, color: &ColorRef) -> Result<u8> {
        match color {
            ColorRef::Name(name) => self.index_of(name),
            numeric => numeric
                .numeric_index()
                .unwrap_or_else(|| Err(DrawError::InvalidColorValue(f64::NAN))),
        }
    }

    pub fn name_of(&self, index: u8) -> Option<&str> {
        self.entries.get(index as usize).map(|(n, _)| n.as_str())
    }

    pub fn color(&self, index: u8) -> Option<Rgba8> {
        self.entries.get(index as usize).map(|(_, c)| *c)
    }

    /// All names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgba8)> + '_ {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_COLORS
    }

    /// Index rendered as fully transparent, if any.
    pub fn transparent(&self) -> Option<u8> {
        self.transparent
    }

    pub fn set_transparent(&mut self, index: Option<u8>) {
        self.transparent = index;
    }
}

// ============================================================================
// Tests
// ============================================================================
