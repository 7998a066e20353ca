//! # gd-canvas
//!
//! Indexed-color 2D raster drawing. A [`Canvas`] stores one palette index
//! per pixel and draws hard-edged primitives into it:
//!
//! - Named palettes seeded from built-in color schemes
//! - Lines and polylines of any width, polygons with even-odd or non-zero fill
//! - Rectangles, circles, ellipses, arcs, chords and wedges
//! - Bitmap text in five sizes with nine-way alignment
//! - Dot and X markers, Bezier curves and smoothed polygons
//! - Color ramps for mapping scalar values onto palette blocks
//! - BMP, PNG, GIF and JPEG output, and animated GIFs
//!
//! Every coordinate is an `i64` checked against the 32-bit signed range
//! before drawing; the clip rectangle bounds every write.
//!
//! ```no_run
//! use gd_canvas::{Canvas, ImageFormat, ShapeStyle};
//!
//! # fn main() -> gd_canvas::Result<()> {
//! let mut canvas = Canvas::new(200, 100)?;
//! canvas.clear_to("white")?;
//! canvas.draw_line((0, 0), (199, 99), "red", 3)?;
//! canvas.draw_circle((100, 50), 40, &ShapeStyle::new().line("black").fill("yellow"))?;
//! canvas.save("out.png", ImageFormat::Png)?;
//! # Ok(())
//! # }
//! ```

// Foundation types
pub mod array;
pub mod basics;
pub mod color;
pub mod config;
pub mod error;
pub mod math;

// Palette and canvas
pub mod canvas;
pub mod color_ramp;
pub mod palette;
pub mod schemes;

// Geometry
pub mod arc;
pub mod curves;
pub mod dda_line;
pub mod ellipse_bresenham;
pub mod smooth_poly;

// Rasterizer and renderers
pub mod markers;
pub mod rasterizer_scanline;
pub mod renderer_base;
pub mod renderer_primitives;

// Text
pub mod embedded_raster_fonts;
pub mod glyph_raster_bin;
pub mod renderer_raster_text;

// Drawing surface, codecs and animation
pub mod animation;
pub mod codec;
pub mod drawing;

pub use animation::Animation;
pub use array::{points_from_rows, IndexArray};
pub use arc::ArcStyle;
pub use basics::{Point, PointD};
pub use canvas::Canvas;
pub use codec::ImageFormat;
pub use color::{ColorRef, Rgba8};
pub use color_ramp::{BaseColors, ColorFunction, ColorRamp};
pub use config::{EncodeOptions, Limits};
pub use drawing::{MarkerColors, ShapeStyle};
pub use embedded_raster_fonts::FontSize;
pub use error::{DrawError, Result};
pub use math::segment_distance;
pub use palette::{Palette, Preset};
pub use rasterizer_scanline::FillingRule;
pub use renderer_raster_text::{Align, HAlign, VAlign};
