//! Error types for the extraction engine and its collaborators
//!
//! Pointer-driven conditions (`PickError`) are expected and recoverable: the
//! session logs them and drops the event. Only image loading and persistence
//! produce errors a caller is expected to report.

use thiserror::Error;

/// Reasons a pick or preview produced no color.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PickError {
    /// Coordinate lies outside the buffer
    #[error("pixel ({x}, {y}) outside {width}x{height} buffer")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// The pixel source refuses reads (cross-origin image without CORS approval)
    #[error("pixel access blocked for tainted image")]
    SamplingBlocked,

    /// No image has been loaded yet
    #[error("no image loaded")]
    NoImage,

    /// The on-screen box has zero or non-finite size
    #[error("degenerate layout: {width}x{height}")]
    DegenerateLayout { width: f32, height: f32 },
}

/// Malformed color notation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color: {0:?} (expected #rrggbb)")]
    InvalidFormat(String),
}

/// Errors raised while turning a file or byte buffer into a decoded image
#[derive(Error, Debug)]
pub enum LoadError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File exceeds the size limit
    #[error("Image too large: {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    /// Data is not in a recognized image format
    #[error("Not an image file")]
    UnsupportedFormat,

    /// Image has a zero width or height
    #[error("Image has no pixels")]
    EmptyImage,

    /// Decoder rejected the data
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),
}

/// Result type alias for image loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors from the history/palette store
#[derive(Error, Debug)]
pub enum StoreError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Palette rejected before it was stored
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),

    /// No platform data directory could be resolved
    #[error("No data directory available")]
    NoDataDir,
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Clipboard write failure. Never fatal: callers fall back to manual selection.
#[derive(Error, Debug)]
#[error("Clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

impl From<arboard::Error> for ClipboardError {
    fn from(e: arboard::Error) -> Self {
        ClipboardError(e.to_string())
    }
}
