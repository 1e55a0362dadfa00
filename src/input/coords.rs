//! Coordinate conversion between client space and buffer space.
//!
//! Client positions come from the host in device-independent pixels. The
//! bounding box is the image's on-screen rectangle *as currently displayed*,
//! so it already contains any layout scaling and zoom. Dividing buffer size by
//! box size therefore yields the exact buffer-pixels-per-client-pixel ratio
//! whatever the zoom is.

use crate::error::PickError;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A client-space position (device-independent pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor for [`Point`].
#[inline]
pub const fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

impl Point {
    /// Absolute per-axis distance to `other`.
    #[inline]
    pub fn abs_delta(self, other: Point) -> (f32, f32) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }
}

/// The image element's on-screen rectangle in client space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// True when the box cannot be used as a divisor (hidden, not laid out, NaN).
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite()
            && self.height.is_finite()
            && self.left.is_finite()
            && self.top.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }

    pub fn contains(&self, pos: Point) -> bool {
        pos.x >= self.left
            && pos.x <= self.left + self.width
            && pos.y >= self.top
            && pos.y <= self.top + self.height
    }

    pub fn center(&self) -> Point {
        point(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// The box a center-origin `scale(zoom)` transform would report.
    pub fn scaled_about_center(&self, zoom: f32) -> Self {
        let center = self.center();
        let width = self.width * zoom;
        let height = self.height * zoom;
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }
}

/// An integer pixel address inside the fitted raster buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BufferPoint {
    pub x: u32,
    pub y: u32,
}

impl BufferPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Context needed for coordinate conversions
pub struct MappingContext<'a> {
    pub bounds: &'a BoundingBox,
    pub buffer_width: u32,
    pub buffer_height: u32,
}

impl<'a> MappingContext<'a> {
    /// Create a new mapping context
    #[inline]
    pub fn new(bounds: &'a BoundingBox, buffer_width: u32, buffer_height: u32) -> Self {
        Self {
            bounds,
            buffer_width,
            buffer_height,
        }
    }

    fn check(&self) -> Result<(), PickError> {
        if self.bounds.is_degenerate() || self.buffer_width == 0 || self.buffer_height == 0 {
            return Err(PickError::DegenerateLayout {
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        Ok(())
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a client position to a buffer pixel, clamped to `[0, dim - 1]`.
    ///
    /// Positions outside the box clamp to the nearest edge pixel.
    pub fn client_to_buffer(pos: Point, ctx: &MappingContext<'_>) -> Result<BufferPoint, PickError> {
        ctx.check()?;
        let b = ctx.bounds;

        let scale_x = f64::from(ctx.buffer_width) / f64::from(b.width);
        let scale_y = f64::from(ctx.buffer_height) / f64::from(b.height);

        let x = (f64::from(pos.x - b.left) * scale_x).round();
        let y = (f64::from(pos.y - b.top) * scale_y).round();

        Ok(BufferPoint::new(
            clamp_axis(x, ctx.buffer_width),
            clamp_axis(y, ctx.buffer_height),
        ))
    }

    /// Convert a buffer pixel back to the client position that maps onto it.
    pub fn buffer_to_client(pixel: BufferPoint, ctx: &MappingContext<'_>) -> Result<Point, PickError> {
        ctx.check()?;
        let b = ctx.bounds;
        let x = f64::from(pixel.x) * f64::from(b.width) / f64::from(ctx.buffer_width);
        let y = f64::from(pixel.y) * f64::from(b.height) / f64::from(ctx.buffer_height);
        Ok(point(b.left + x as f32, b.top + y as f32))
    }

    /// Position relative to the box's top-left corner, in client pixels
    #[inline]
    pub fn client_to_offset(pos: Point, bounds: &BoundingBox) -> Point {
        point(pos.x - bounds.left, pos.y - bounds.top)
    }
}

#[inline]
fn clamp_axis(value: f64, dimension: u32) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, f64::from(dimension - 1)) as u32
}

/// Stateful mapper that never fails: degenerate layouts reuse the last good
/// coordinate (or the origin when there is none).
#[derive(Debug, Default)]
pub struct CoordinateMapper {
    last_valid: Option<BufferPoint>,
}

impl CoordinateMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_buffer_coords(
        &mut self,
        pos: Point,
        bounds: &BoundingBox,
        buffer_width: u32,
        buffer_height: u32,
    ) -> BufferPoint {
        let ctx = MappingContext::new(bounds, buffer_width, buffer_height);
        match CoordinateConverter::client_to_buffer(pos, &ctx) {
            Ok(coord) => {
                self.last_valid = Some(coord);
                coord
            }
            Err(e) => {
                let fallback = self.last_valid.unwrap_or_default();
                trace!(error = %e, x = fallback.x, y = fallback.y, "using fallback coordinate");
                fallback
            }
        }
    }

    pub fn last_valid(&self) -> Option<BufferPoint> {
        self.last_valid
    }

    /// Forget the remembered coordinate (it belongs to a previous buffer).
    pub fn reset(&mut self) {
        self.last_valid = None;
    }
}
