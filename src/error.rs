//! Error types for canvas, palette, rasterizer, codec and animation
//! operations.

/// Errors that can occur while building, drawing on, or encoding a canvas.
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// A dimension or numeric argument is missing, zero, or otherwise invalid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested pixel buffer exceeds the configured ceiling.
    #[error("canvas too large: {requested} pixels (max {limit} pixels)")]
    OutOfMemory { requested: u64, limit: u64 },

    /// A palette entry with this name already exists.
    #[error("color name already in palette: {0:?}")]
    DuplicateName(String),

    /// All 256 palette slots are in use.
    #[error("palette is full (256 colors)")]
    PaletteFull,

    /// No palette entry has this name.
    #[error("unknown color: {0:?}")]
    UnknownColor(String),

    /// A numeric color index outside `0..=255`.
    #[error("color index out of range: {0}")]
    IndexOutOfRange(i64),

    /// A numeric color value that cannot be interpreted as an index.
    #[error("invalid color value: {0}")]
    InvalidColorValue(f64),

    /// An operation needs more points than it was given.
    #[error("at least {required} points required, got {got}")]
    TooFewPoints { required: usize, got: usize },

    /// An array or sequence has the wrong shape.
    #[error("shape mismatch: expected {expected}, got {got}")]
    Shape { expected: String, got: String },

    /// The clip rectangle is empty, inverted, or misses the canvas.
    #[error("invalid clip rectangle: ({x1}, {y1}), ({x2}, {y2})")]
    InvalidClipRect { x1: i64, y1: i64, x2: i64, y2: i64 },

    /// An enumerated option (font, alignment, arc style) was not recognised.
    #[error("invalid {kind}: {value:?}")]
    InvalidStyle { kind: &'static str, value: String },

    /// A coordinate outside the supported 32-bit signed range.
    #[error("coordinate {0} overflows the 32-bit drawing range")]
    Overflow(i64),

    /// A pixel read outside the canvas.
    #[error("point ({x}, {y}) is outside the canvas")]
    OutOfBounds { x: i64, y: i64 },

    /// The output format name is not one of bmp, png, gif, jpg.
    #[error("unknown image format: {0:?}")]
    UnknownFormat(String),

    /// An animation call made in the wrong state.
    #[error("animation error: {0}")]
    AnimationState(&'static str),

    /// Bezier flattening did not meet its gap bound.
    #[error("curve flattening did not converge after {iterations} iterations")]
    CurveNotConverged { iterations: u32 },

    /// File I/O error.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),

    /// BMP/JPEG encoding or generic decoding error.
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error("PNG decoding error: {0}")]
    PngDecoding(#[from] png::DecodingError),

    #[error("GIF encoding error: {0}")]
    GifEncoding(#[from] gif::EncodingError),

    #[error("GIF decoding error: {0}")]
    GifDecoding(#[from] gif::DecodingError),
}

pub type Result<T> = std::result::Result<T, DrawError>;
