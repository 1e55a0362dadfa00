//! Raster surface - one decoded image held as a fitted, sampleable pixel grid.
//!
//! The image is resized once at load time so that it fits within the maximum
//! dimension (never upscaled). All reads go through bounds-checked accessors;
//! no raw indexing escapes this module.

use crate::color::Rgb;
use crate::error::PickError;
use crate::loader::DecodedImage;
use crate::profile_scope;
use image::RgbaImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// Downscale factor that fits `width x height` inside `max_dimension`.
///
/// `min(max / width, max / height, 1)`; degenerate sizes yield 1.
pub fn fit_scale(width: u32, height: u32, max_dimension: u32) -> f64 {
    if width == 0 || height == 0 {
        return 1.0;
    }
    let max = f64::from(max_dimension);
    (max / f64::from(width)).min(max / f64::from(height)).min(1.0)
}

/// Buffer size for an image: `round(dimension * fit_scale)`, at least 1 pixel.
pub fn fitted_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let scale = fit_scale(width, height, max_dimension);
    let fit = |d: u32| ((f64::from(d) * scale).round() as u32).max(1);
    (fit(width), fit(height))
}

/// A fitted pixel grid and the metadata needed to reason about it.
#[derive(Debug, Clone)]
pub struct RasterBuffer {
    pixels: RgbaImage,
    fit_scale: f64,
    source_size: (u32, u32),
    generation: u64,
    tainted: bool,
}

impl RasterBuffer {
    fn from_image(image: &DecodedImage, max_dimension: u32, generation: u64) -> Self {
        let (source_w, source_h) = image.dimensions();
        let scale = fit_scale(source_w, source_h, max_dimension);
        let (width, height) = fitted_dimensions(source_w, source_h, max_dimension);

        let rgba = image.image().to_rgba8();
        let pixels = if (width, height) == (source_w, source_h) {
            rgba
        } else {
            imageops::resize(&rgba, width, height, FilterType::Triangle)
        };

        Self {
            pixels,
            fit_scale: scale,
            source_size: (source_w, source_h),
            generation,
            tainted: image.origin().is_tainted(),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Buffer pixels per source pixel (<= 1)
    pub fn fit_scale(&self) -> f64 {
        self.fit_scale
    }

    /// Natural size of the image this buffer was drawn from
    pub fn source_size(&self) -> (u32, u32) {
        self.source_size
    }

    /// Load counter value when this buffer was created
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_tainted(&self) -> bool {
        self.tainted
    }

    /// Read one pixel. Alpha is dropped; sampling never mutates the buffer.
    pub fn sample(&self, x: i64, y: i64) -> Result<Rgb, PickError> {
        if self.tainted {
            return Err(PickError::SamplingBlocked);
        }
        let (width, height) = self.dimensions();
        let in_bounds = x >= 0 && y >= 0 && x < i64::from(width) && y < i64::from(height);
        if !in_bounds {
            return Err(PickError::OutOfBounds { x, y, width, height });
        }
        let [r, g, b, _] = self.pixels.get_pixel(x as u32, y as u32).0;
        Ok(Rgb::new(r, g, b))
    }
}

/// Owner of the single active buffer.
#[derive(Debug, Default)]
pub struct RasterSurface {
    buffer: Option<RasterBuffer>,
    loads: u64,
}

impl RasterSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit and draw `image`, replacing any previous buffer. The old buffer is
    /// dropped only after the new one is complete. Returns the buffer size.
    pub fn load(&mut self, image: &DecodedImage, max_dimension: u32) -> (u32, u32) {
        profile_scope!("raster_load");

        let generation = self.loads + 1;
        let buffer = RasterBuffer::from_image(image, max_dimension, generation);
        let dimensions = buffer.dimensions();

        debug!(
            source_width = image.width(),
            source_height = image.height(),
            width = dimensions.0,
            height = dimensions.1,
            scale = buffer.fit_scale(),
            generation,
            "raster buffer loaded"
        );

        self.buffer = Some(buffer);
        self.loads = generation;
        dimensions
    }

    /// Release the current buffer
    pub fn clear(&mut self) {
        self.buffer = None;
    }

    pub fn buffer(&self) -> Option<&RasterBuffer> {
        self.buffer.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.buffer.as_ref().map(RasterBuffer::dimensions)
    }

    pub fn fit_scale(&self) -> Option<f64> {
        self.buffer.as_ref().map(RasterBuffer::fit_scale)
    }

    /// Generation of the current buffer, 0 when nothing is loaded
    pub fn generation(&self) -> u64 {
        self.buffer.as_ref().map_or(0, RasterBuffer::generation)
    }

    pub fn sample_pixel(&self, x: i64, y: i64) -> Result<Rgb, PickError> {
        profile_scope!("sample_pixel");
        self.buffer.as_ref().ok_or(PickError::NoImage)?.sample(x, y)
    }
}
