//! Pointer up / cancel handling - finalize the gesture.

use super::event::{GestureOutcome, PointerEvent};
use super::state::InteractionMachine;
use crate::profile_scope;
use tracing::trace;

impl InteractionMachine {
    /// Finish the gesture owned by this pointer.
    ///
    /// Mouse/pen always commit (click-to-pick). Touch commits only if the
    /// gesture never became a drag; a double-tap yields a zoom toggle instead.
    /// Releases of other contacts (e.g. the second finger of a pinch) are
    /// ignored.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> Option<GestureOutcome> {
        profile_scope!("handle_pointer_up");

        let session = *self.state.session()?;
        if !session.owns(event.kind, event.pointer_id) {
            return None;
        }

        let was_dragging = self.state.is_dragging();
        self.state.reset();

        if !session.kind.is_touch() {
            return Some(GestureOutcome::Commit(event.position));
        }

        if was_dragging {
            trace!(pointer_id = session.pointer_id, "touch drag released, no pick");
            None
        } else if session.double_tap {
            Some(GestureOutcome::ZoomToggle(event.position))
        } else {
            Some(GestureOutcome::Commit(event.position))
        }
    }

    /// Platform took over the gesture: discard it and emit nothing.
    pub fn handle_pointer_cancel(&mut self) {
        if let Some(session) = self.state.session() {
            trace!(pointer_id = session.pointer_id, "pointer cancelled");
        }
        self.state.reset();
    }
}
