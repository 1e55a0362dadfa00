//! Pointer move handling - touch drag detection and mouse/pen hover previews.
//!
//! Move events arrive at pointer rate (often 60+ per second), so the touch
//! path is a couple of comparisons and the hover path defers all sampling to
//! the session.

use super::event::{GestureOutcome, PointerEvent};
use super::state::InteractionMachine;
use crate::profile_scope;
use tracing::trace;

impl InteractionMachine {
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> Option<GestureOutcome> {
        profile_scope!("handle_pointer_move");

        if event.kind.is_touch() {
            self.track_touch_displacement(event);
            return None;
        }

        // Mouse/pen never turn into drags; pressing only marks the gesture as hovering
        if let Some(session) = self.state.session() {
            if session.owns(event.kind, event.pointer_id) {
                self.state.start_hovering();
            }
        }

        Some(GestureOutcome::Preview(event.position))
    }

    fn track_touch_displacement(&mut self, event: &PointerEvent) {
        if !self.state.can_commit() {
            return;
        }
        let Some(session) = self.state.session() else {
            return;
        };
        if !session.owns(event.kind, event.pointer_id) {
            return;
        }

        let (dx, dy) = event.position.abs_delta(session.origin);
        let threshold = self.config.drag_threshold;
        if dx >= threshold || dy >= threshold {
            trace!(dx, dy, "touch moved past threshold, treating as drag");
            self.state.start_dragging();
        }
    }
}
