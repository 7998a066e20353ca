//! Built-in named color schemes.
//!
//! Schemes are immutable static tables. Lookup goes through the
//! [`SchemeTable`] trait so that larger tables can be supplied from outside
//! the crate without touching the palette code.

use crate::color::{rgb8_packed, Rgba8};

/// One scheme entry: a palette name and its color.
pub type SchemeEntry = (&'static str, Rgba8);

/// A source of named color schemes.
pub trait SchemeTable {
    /// Ordered entries of the named scheme, or `None` if it is unknown.
    fn lookup(&self, name: &str) -> Option<Vec<(String, Rgba8)>>;

    /// Names of every scheme this table knows about.
    fn scheme_names(&self) -> Vec<&str>;
}

/// Name of the scheme used when a canvas is created without one.
pub const DEFAULT_SCHEME: &str = "web";

const TRANSPARENT: &[SchemeEntry] = &[("transparent", Rgba8::transparent())];

const BW: &[SchemeEntry] = &[
    ("transparent", Rgba8::transparent()),
    ("black", Rgba8::new_opaque(0, 0, 0)),
    ("white", Rgba8::new_opaque(255, 255, 255)),
];

const WEB: &[SchemeEntry] = &[
    ("transparent", Rgba8::transparent()),
    ("black", Rgba8::new_opaque(0, 0, 0)),
    ("white", Rgba8::new_opaque(255, 255, 255)),
    ("silver", Rgba8::new_opaque(191, 191, 191)),
    ("gray", Rgba8::new_opaque(127, 127, 127)),
    ("red", Rgba8::new_opaque(255, 0, 0)),
    ("maroon", Rgba8::new_opaque(127, 0, 0)),
    ("yellow", Rgba8::new_opaque(255, 255, 0)),
    ("olive", Rgba8::new_opaque(127, 127, 0)),
    ("lime", Rgba8::new_opaque(0, 255, 0)),
    ("green", Rgba8::new_opaque(0, 127, 0)),
    ("aqua", Rgba8::new_opaque(0, 255, 255)),
    ("teal", Rgba8::new_opaque(0, 127, 127)),
    ("blue", Rgba8::new_opaque(0, 0, 255)),
    ("navy", Rgba8::new_opaque(0, 0, 127)),
    ("fuchsia", Rgba8::new_opaque(255, 0, 255)),
    ("purple", Rgba8::new_opaque(127, 0, 127)),
];

const TABLEAU: &[SchemeEntry] = &[
    ("tab:blue", rgb8_packed(0x1f77b4)),
    ("tab:orange", rgb8_packed(0xff7f0e)),
    ("tab:green", rgb8_packed(0x2ca02c)),
    ("tab:red", rgb8_packed(0xd62728)),
    ("tab:purple", rgb8_packed(0x9467bd)),
    ("tab:brown", rgb8_packed(0x8c564b)),
    ("tab:pink", rgb8_packed(0xe377c2)),
    ("tab:gray", rgb8_packed(0x7f7f7f)),
    ("tab:olive", rgb8_packed(0xbcbd22)),
    ("tab:cyan", rgb8_packed(0x17becf)),
];

const BUILTIN: &[(&str, &[SchemeEntry])] = &[
    ("transparent", TRANSPARENT),
    ("BW", BW),
    ("web", WEB),
    ("tableau", TABLEAU),
];

/// The schemes shipped with the crate: `transparent`, `BW`, `web`,
/// `tableau`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSchemes;

impl BuiltinSchemes {
    /// Borrow a built-in scheme without allocating.
    pub fn get(name: &str) -> Option<&'static [SchemeEntry]> {
        BUILTIN
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, entries)| *entries)
    }
}

impl SchemeTable for BuiltinSchemes {
    fn lookup(&self, name: &str) -> Option<Vec<(String, Rgba8)>> {
        Self::get(name).map(|entries| {
            entries
                .iter()
                .map(|(n, c)| (n.to_string(), *c))
                .collect()
        })
    }

    fn scheme_names(&self) -> Vec<&str> {
        BUILTIN.iter().map(|(n, _)| *n).collect()
    }
}
