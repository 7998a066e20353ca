//! Encoding canvases to BMP, PNG, GIF and JPEG, and decoding them back.
//!
//! PNG and GIF keep the indexed pixels and write the palette as-is, with
//! the transparent index marked transparent. BMP and JPEG have no palette
//! transparency here and are written as 24-bit RGB.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use log::debug;

use crate::canvas::Canvas;
use crate::color::Rgba8;
use crate::config::{EncodeOptions, Limits, MAX_COLORS};
use crate::error::{DrawError, Result};
use crate::palette::Palette;

// ============================================================================
// ImageFormat
// ============================================================================

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Bmp,
    Png,
    Gif,
    Jpeg,
}

impl core::str::FromStr for ImageFormat {
    type Err = DrawError;

    /// Parses `bmp`, `png`, `gif`, `jpg` or `jpeg`, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bmp" => Ok(ImageFormat::Bmp),
            "png" => Ok(ImageFormat::Png),
            "gif" => Ok(ImageFormat::Gif),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            _ => Err(DrawError::UnknownFormat(s.to_string())),
        }
    }
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Bmp => "bmp",
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::Jpeg => "jpg",
        }
    }
}

// ============================================================================
// Palette export
// ============================================================================

/// Colors for every index that can appear in the image: the whole palette,
/// extended with opaque black up to the highest index in use.
pub(crate) fn export_palette(canvas: &Canvas) -> Vec<Rgba8> {
    let max_index = canvas.pixels().iter().copied().max().unwrap_or(0) as usize;
    let palette = canvas.palette();
    let len = palette.len().max(max_index + 1).max(1);
    let mut colors: Vec<Rgba8> = palette.iter().map(|(_, c)| c).collect();
    colors.resize(len, Rgba8::new_opaque(0, 0, 0));
    if let Some(t) = palette.transparent() {
        if let Some(c) = colors.get_mut(t as usize) {
            c.a = 0;
        }
    }
    colors
}

/// Packed RGB triples for a GIF color table.
pub(crate) fn gif_palette(colors: &[Rgba8]) -> Vec<u8> {
    colors.iter().flat_map(|c| c.rgb()).collect()
}

/// One GIF frame holding the canvas pixels.
pub(crate) fn gif_frame(canvas: &Canvas, delay: u16, palette: Option<Vec<u8>>) -> Result<gif::Frame<'_>> {
    let (width, height) = gif_size(canvas)?;
    let transparent = canvas
        .palette()
        .transparent()
        .filter(|&t| (t as usize) < export_palette(canvas).len());
    Ok(gif::Frame {
        width,
        height,
        delay,
        transparent,
        palette,
        buffer: Cow::Borrowed(canvas.pixels()),
        ..gif::Frame::default()
    })
}

pub(crate) fn gif_size(canvas: &Canvas) -> Result<(u16, u16)> {
    let too_big = || {
        DrawError::InvalidArgument(format!(
            "{}x{} exceeds the GIF size limit of 65535x65535",
            canvas.width(),
            canvas.height()
        ))
    };
    Ok((
        u16::try_from(canvas.width()).map_err(|_| too_big())?,
        u16::try_from(canvas.height()).map_err(|_| too_big())?,
    ))
}

// ============================================================================
// Encoding
// ============================================================================

fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let colors = export_palette(canvas);
    let plte: Vec<u8> = colors.iter().flat_map(|c| c.rgb()).collect();
    let trns: Vec<u8> = colors.iter().map(|c| c.a).collect();

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(plte);
        if trns.iter().any(|&a| a != 255) {
            encoder.set_trns(trns);
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(canvas.pixels())?;
        writer.finish()?;
    }
    Ok(out)
}

fn encode_gif(canvas: &Canvas) -> Result<Vec<u8>> {
    let (width, height) = gif_size(canvas)?;
    let global = gif_palette(&export_palette(canvas));
    let mut encoder = gif::Encoder::new(Vec::new(), width, height, &global)?;
    encoder.write_frame(&gif_frame(canvas, 0, None)?)?;
    Ok(encoder.into_inner()?)
}

fn to_rgb(canvas: &Canvas) -> Vec<u8> {
    let colors = export_palette(canvas);
    canvas
        .pixels()
        .iter()
        .flat_map(|&i| colors[i as usize].rgb())
        .collect()
}

fn encode_bmp(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    BmpEncoder::new(&mut out).encode(&to_rgb(canvas), canvas.width(), canvas.height(), image::ColorType::Rgb8)?;
    Ok(out)
}

fn encode_jpeg(canvas: &Canvas, quality: u8) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality).encode(
        &to_rgb(canvas),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgb8,
    )?;
    Ok(out)
}

impl Canvas {
    /// Encode with default options.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>> {
        self.encode_with(format, &EncodeOptions::default())
    }

    pub fn encode_with(&self, format: ImageFormat, options: &EncodeOptions) -> Result<Vec<u8>> {
        let bytes = match format {
            ImageFormat::Png => encode_png(self)?,
            ImageFormat::Gif => encode_gif(self)?,
            ImageFormat::Bmp => encode_bmp(self)?,
            ImageFormat::Jpeg => encode_jpeg(self, options.quality())?,
        };
        debug!(
            "encoded {}x{} canvas as {format:?}: {} bytes",
            self.width(),
            self.height(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Encode and write to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>, format: ImageFormat) -> Result<()> {
        self.save_with(path, format, &EncodeOptions::default())
    }

    pub fn save_with(&self, path: impl AsRef<Path>, format: ImageFormat, options: &EncodeOptions) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_with(format, options)?;
        let mut w = BufWriter::new(File::create(path)?);
        w.write_all(&bytes)?;
        w.flush()?;
        debug!("saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Rebuild a canvas from encoded image data.
    ///
    /// Indexed 8-bit PNG and GIF keep their pixel indices and palette order;
    /// palette entries are named `color_<index>`. Anything else readable as
    /// an image gets a palette of its distinct colors in first-seen order.
    pub fn decode(bytes: &[u8]) -> Result<Canvas> {
        if bytes.starts_with(b"GIF8") {
            return decode_gif(bytes);
        }
        if bytes.starts_with(b"\x89PNG") {
            if let Some(canvas) = decode_indexed_png(bytes)? {
                return Ok(canvas);
            }
        }
        decode_any(bytes)
    }
}

// ============================================================================
// Decoding
// ============================================================================

fn indexed_palette(rgb: &[u8], alpha: Option<&[u8]>, transparent: Option<u8>) -> Result<Palette> {
    let alpha_at = |i: usize| alpha.and_then(|a| a.get(i).copied()).unwrap_or(255);
    let entries = rgb
        .chunks_exact(3)
        .take(MAX_COLORS)
        .enumerate()
        .map(|(i, c)| (format!("color_{i}"), Rgba8::new(c[0], c[1], c[2], alpha_at(i))));
    let mut palette = Palette::from_entries(entries)?;
    let transparent = transparent.or_else(|| {
        (0..palette.len())
            .find(|&i| alpha_at(i) == 0)
            .map(|i| i as u8)
    });
    palette.set_transparent(transparent);
    Ok(palette)
}

fn decode_indexed_png(bytes: &[u8]) -> Result<Option<Canvas>> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info()?;
    let (color_type, depth) = reader.output_color_type();
    if color_type != png::ColorType::Indexed || depth != png::BitDepth::Eight {
        return Ok(None);
    }
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    let info = reader.info();
    let rgb = info.palette.as_deref().unwrap_or(&[]);
    let palette = indexed_palette(rgb, info.trns.as_deref(), None)?;

    let mut canvas = Canvas::with_palette(frame.width, frame.height, palette, Limits::default())?;
    let w = frame.width as usize;
    for (y, row) in buf.chunks(frame.line_size).take(frame.height as usize).enumerate() {
        for (x, &v) in row[..w].iter().enumerate() {
            canvas.set_pixel_value((x as i64, y as i64), v);
        }
    }
    Ok(Some(canvas))
}

fn decode_gif(bytes: &[u8]) -> Result<Canvas> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(bytes)?;
    let global = decoder.global_palette().map(<[u8]>::to_vec);
    let (width, height) = (decoder.width() as u32, decoder.height() as u32);
    let frame = decoder
        .read_next_frame()?
        .ok_or_else(|| DrawError::InvalidArgument("GIF has no frames".into()))?;

    let rgb = frame.palette.clone().or(global).unwrap_or_default();
    let palette = indexed_palette(&rgb, None, frame.transparent)?;
    let mut canvas = Canvas::with_palette(width, height, palette, Limits::default())?;
    let fw = frame.width as usize;
    for (i, &v) in frame.buffer.iter().enumerate() {
        let x = frame.left as i64 + (i % fw.max(1)) as i64;
        let y = frame.top as i64 + (i / fw.max(1)) as i64;
        canvas.set_pixel_value((x, y), v);
    }
    Ok(canvas)
}

fn decode_any(bytes: &[u8]) -> Result<Canvas> {
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let mut index: HashMap<[u8; 4], u8> = HashMap::new();
    let mut colors: Vec<Rgba8> = Vec::new();
    let mut pixels = Vec::with_capacity(img.as_raw().len() / 4);
    for px in img.pixels() {
        let i = match index.get(&px.0) {
            Some(&i) => i,
            None => {
                if colors.len() >= MAX_COLORS {
                    return Err(DrawError::PaletteFull);
                }
                let i = colors.len() as u8;
                index.insert(px.0, i);
                colors.push(Rgba8::new(px.0[0], px.0[1], px.0[2], px.0[3]));
                i
            }
        };
        pixels.push(i);
    }
    let transparent = colors.iter().position(|c| c.a == 0).map(|i| i as u8);
    let mut palette = Palette::from_entries(
        colors
            .iter()
            .enumerate()
            .map(|(i, c)| (format!("color_{i}"), *c)),
    )?;
    palette.set_transparent(transparent);

    let mut canvas = Canvas::with_palette(img.width(), img.height(), palette, Limits::default())?;
    let w = img.width() as usize;
    for (i, &v) in pixels.iter().enumerate() {
        canvas.set_pixel_value(((i % w) as i64, (i / w) as i64), v);
    }
    Ok(canvas)
}

// ============================================================================
// Tests
// ============================================================================
