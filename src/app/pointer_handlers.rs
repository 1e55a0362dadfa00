//! Pointer and zoom forwarding - the session classifies, the picker records commits

use super::ColorPicker;
use crate::input::{BoundingBox, PointerEvent};
use crate::session::{ColorSample, SessionEvent};
use tracing::debug;

impl ColorPicker {
    pub fn set_layout(&mut self, bounds: BoundingBox) {
        self.session.set_layout(bounds);
    }

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        self.session.pointer_down(event);
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> Option<SessionEvent> {
        self.session.pointer_move(event)
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) -> Option<SessionEvent> {
        let event = self.session.pointer_up(event)?;
        if let SessionEvent::Commit(sample) = &event {
            self.commit(sample);
        }
        Some(event)
    }

    pub fn pointer_cancel(&mut self) {
        self.session.pointer_cancel();
    }

    /// Pick a buffer pixel directly (keyboard or scripted picks)
    pub fn pick(&mut self, x: i64, y: i64) -> Option<ColorSample> {
        let sample = self.session.pick(x, y)?;
        self.commit(&sample);
        Some(sample)
    }

    pub fn zoom_in(&mut self) -> Option<SessionEvent> {
        self.session.zoom_in()
    }

    pub fn zoom_out(&mut self) -> Option<SessionEvent> {
        self.session.zoom_out()
    }

    pub fn reset_zoom(&mut self) -> Option<SessionEvent> {
        self.session.reset_zoom()
    }

    fn commit(&mut self, sample: &ColorSample) {
        debug!(hex = %sample.hex, x = sample.position.x, y = sample.position.y, "color picked");
        self.current = Some(sample.rgb);
        self.history.push_rgb(sample.rgb);
        self.persist_history();
    }
}
