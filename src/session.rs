//! Extraction session - ties the raster surface, coordinate mapping, gesture
//! classification and zoom together for one on-screen image.
//!
//! The host feeds pointer events and the image's current on-screen box; the
//! session answers with previews, committed picks and zoom changes. A pick is
//! only committed against the buffer that was live when its gesture started:
//! loading a new image resets the gesture machine, so a pending release on the
//! old image commits nothing.

use crate::color::Rgb;
use crate::input::{
    BoundingBox, BufferPoint, CoordinateConverter, CoordinateMapper, GestureConfig, GestureOutcome,
    InteractionMachine, InteractionState, MappingContext, Point, PointerEvent, ZoomState,
};
use crate::loader::DecodedImage;
use crate::raster::RasterSurface;
use crate::settings::PickerSettings;
use serde::Serialize;
use tracing::{debug, trace};

/// One sampled pixel in every representation the UI shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSample {
    pub rgb: Rgb,
    pub hex: String,
    pub hsl: String,
    /// Buffer pixel the color was read from
    pub position: BufferPoint,
}

impl ColorSample {
    pub fn new(rgb: Rgb, position: BufferPoint) -> Self {
        Self {
            rgb,
            hex: rgb.to_hex(),
            hsl: rgb.to_hsl().to_string(),
            position,
        }
    }
}

/// What the host should react to after feeding an event.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Hover sample, the pointer offset inside the box (for the loupe) and
    /// the client position of the sampled pixel (for the crosshair)
    Preview {
        sample: ColorSample,
        offset: Point,
        crosshair: Point,
    },
    /// A completed tap or click picked this color
    Commit(ColorSample),
    /// The presentational zoom changed to this level
    ZoomChanged(f32),
}

pub struct ExtractionSession {
    surface: RasterSurface,
    mapper: CoordinateMapper,
    machine: InteractionMachine,
    zoom: ZoomState,
    layout: Option<BoundingBox>,
    max_dimension: u32,
}

impl Default for ExtractionSession {
    fn default() -> Self {
        Self::new(&PickerSettings::default())
    }
}

impl ExtractionSession {
    pub fn new(settings: &PickerSettings) -> Self {
        Self {
            surface: RasterSurface::new(),
            mapper: CoordinateMapper::new(),
            machine: InteractionMachine::new(GestureConfig::from(settings)),
            zoom: ZoomState::new(settings.zoom),
            layout: None,
            max_dimension: settings.max_image_dimension,
        }
    }

    /// Replace the displayed image. Any in-flight gesture is abandoned and
    /// the zoom returns to 1x. Returns the fitted buffer size.
    pub fn load_image(&mut self, image: &DecodedImage) -> (u32, u32) {
        let dimensions = self.surface.load(image, self.max_dimension);
        if !self.machine.state().is_idle() {
            debug!(generation = self.surface.generation(), "image changed mid-gesture, dropping gesture");
        }
        self.machine.reset();
        self.mapper.reset();
        self.zoom.reset();
        dimensions
    }

    pub fn clear_image(&mut self) {
        self.surface.clear();
        self.machine.reset();
        self.mapper.reset();
    }

    /// Record the image's current on-screen box (after layout and zoom)
    pub fn set_layout(&mut self, bounds: BoundingBox) {
        self.layout = Some(bounds);
    }

    pub fn layout(&self) -> Option<&BoundingBox> {
        self.layout.as_ref()
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn interaction_state(&self) -> &InteractionState {
        self.machine.state()
    }

    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    /// Sample a buffer pixel directly. Failures are logged and yield `None`.
    pub fn pick(&self, x: i64, y: i64) -> Option<ColorSample> {
        match self.surface.sample_pixel(x, y) {
            Ok(rgb) => Some(ColorSample::new(rgb, BufferPoint::new(x as u32, y as u32))),
            Err(e) => {
                debug!(error = %e, x, y, "pick failed");
                None
            }
        }
    }

    /// Sample the pixel under a client position using the current layout.
    pub fn pick_client(&mut self, pos: Point) -> Option<ColorSample> {
        let pixel = self.map(pos)?;
        self.pick(pixel.x.into(), pixel.y.into())
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        self.machine.handle_pointer_down(event);
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> Option<SessionEvent> {
        let GestureOutcome::Preview(pos) = self.machine.handle_pointer_move(event)? else {
            return None;
        };
        let sample = self.pick_client(pos)?;
        let bounds = self.layout?;
        let (width, height) = self.surface.dimensions()?;
        let crosshair =
            CoordinateConverter::buffer_to_client(sample.position, &MappingContext::new(&bounds, width, height))
                .unwrap_or(pos);
        let offset = CoordinateConverter::client_to_offset(pos, &bounds);
        Some(SessionEvent::Preview {
            sample,
            offset,
            crosshair,
        })
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> Option<SessionEvent> {
        match self.machine.handle_pointer_up(event)? {
            GestureOutcome::Commit(pos) => self.pick_client(pos).map(SessionEvent::Commit),
            GestureOutcome::ZoomToggle(_) => Some(self.toggle_zoom()),
            GestureOutcome::Preview(_) => None,
        }
    }

    pub fn pointer_cancel(&mut self) {
        self.machine.handle_pointer_cancel();
    }

    pub fn zoom_in(&mut self) -> Option<SessionEvent> {
        self.zoom.zoom_in().then(|| SessionEvent::ZoomChanged(self.zoom.level()))
    }

    pub fn zoom_out(&mut self) -> Option<SessionEvent> {
        self.zoom.zoom_out().then(|| SessionEvent::ZoomChanged(self.zoom.level()))
    }

    /// Double-tap behaviour, also offered as a control: 1x <-> toggle level
    pub fn toggle_zoom(&mut self) -> SessionEvent {
        SessionEvent::ZoomChanged(self.zoom.toggle())
    }

    pub fn reset_zoom(&mut self) -> Option<SessionEvent> {
        self.zoom.reset().then(|| SessionEvent::ZoomChanged(self.zoom.level()))
    }

    fn map(&mut self, pos: Point) -> Option<BufferPoint> {
        let (width, height) = self.surface.dimensions()?;
        let Some(bounds) = self.layout else {
            trace!("no layout reported yet");
            return None;
        };
        Some(self.mapper.to_buffer_coords(pos, &bounds, width, height))
    }
}

