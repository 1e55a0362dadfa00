//! Image source - validate and decode files or in-memory bytes.
//!
//! The extraction engine only ever sees a successfully decoded image. Size,
//! type and decode failures stop here and are the only errors surfaced to
//! the user.

use crate::constants::MAX_IMAGE_BYTES;
use crate::error::{LoadError, LoadResult};
use image::{DynamicImage, GenericImageView};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Where an image came from. Remote images without CORS approval are
/// tainted: they can be displayed but their pixels cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageOrigin {
    /// File picker or drag-and-drop
    #[default]
    Local,
    /// Fetched from a URL by the host
    Remote { cors_approved: bool },
}

impl ImageOrigin {
    pub fn is_tainted(self) -> bool {
        matches!(self, Self::Remote { cors_approved: false })
    }
}

/// A decoded bitmap plus its natural size and origin.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
    origin: ImageOrigin,
}

impl DecodedImage {
    pub fn new(image: DynamicImage, origin: ImageOrigin) -> Self {
        Self { image, origin }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn origin(&self) -> ImageOrigin {
        self.origin
    }

    /// Natural width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Natural height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

pub struct ImageLoader {
    max_bytes: u64,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new(MAX_IMAGE_BYTES)
    }
}

impl ImageLoader {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Load a local file. The size check runs before the file is read.
    pub fn load_path(&self, path: &Path) -> LoadResult<DecodedImage> {
        let size = fs::metadata(path)?.len();
        self.check_size(size)?;
        let bytes = fs::read(path)?;
        debug!(path = %path.display(), size, "read image file");
        self.load_bytes(&bytes, ImageOrigin::Local)
    }

    /// Decode in-memory data (drag-drop payloads, bytes the host fetched).
    pub fn load_bytes(&self, bytes: &[u8], origin: ImageOrigin) -> LoadResult<DecodedImage> {
        self.check_size(bytes.len() as u64)?;

        let format = image::guess_format(bytes).map_err(|_| LoadError::UnsupportedFormat)?;
        let image = image::load_from_memory_with_format(bytes, format)?;

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(LoadError::EmptyImage);
        }

        debug!(?format, width, height, ?origin, "decoded image");
        Ok(DecodedImage::new(image, origin))
    }

    fn check_size(&self, size: u64) -> LoadResult<()> {
        if size > self.max_bytes {
            return Err(LoadError::TooLarge {
                size,
                max: self.max_bytes,
            });
        }
        Ok(())
    }
}
