//! Pointer down handling - arm a gesture, detect multi-touch and double-taps.

use super::event::PointerEvent;
use super::state::{InteractionMachine, PointerSession};
use crate::profile_scope;
use tracing::{debug, trace};

impl InteractionMachine {
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        profile_scope!("handle_pointer_down");

        // A second finger while a touch gesture is live is a pinch/scroll
        if event.kind.is_touch() {
            if let Some(active) = self.state.session() {
                if active.kind.is_touch() && active.pointer_id != event.pointer_id {
                    trace!(pointer_id = event.pointer_id, "multi-touch, suppressing pick");
                    self.state.start_dragging();
                    return;
                }
            }
        }

        if let Some(stale) = self.state.session() {
            debug!(
                pointer_id = stale.pointer_id,
                kind = ?stale.kind,
                "pointer down without release, discarding previous gesture"
            );
        }

        let double_tap = self.register_down(event);

        self.state.arm(PointerSession {
            kind: event.kind,
            pointer_id: event.pointer_id,
            origin: event.position,
            started_at_ms: event.timestamp_ms,
            double_tap,
        });
    }

    /// Record this pointer-down for double-tap detection. Returns true when it
    /// completes a double-tap; the tap record is consumed so a third tap
    /// starts a fresh pair.
    fn register_down(&mut self, event: &PointerEvent) -> bool {
        if !event.kind.is_touch() {
            self.last_touch_down_ms = None;
            return false;
        }

        let now = event.timestamp_ms;
        let is_double = self.last_touch_down_ms.is_some_and(|previous| {
            now >= previous && now - previous <= self.config.double_tap_window_ms
        });

        self.last_touch_down_ms = if is_double { None } else { Some(now) };
        is_double
    }
}
