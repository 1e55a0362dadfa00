//! Interaction state machine - one explicit state per pointer lifecycle.
//!
//! Replaces ad hoc "is this a drag" flags spread across handlers with a single
//! enum, so a gesture can only be in one phase at a time.
//!
//! ## State Transitions
//!
//! ```text
//! Idle      -> Armed        (pointer down, any device)
//! Armed     -> Hovering     (mouse/pen move; emits Preview)
//! Armed     -> Dragging     (touch move >= threshold, or a second finger down)
//! Hovering  -> Hovering     (mouse/pen move; emits Preview)
//! Idle      -> Idle         (mouse/pen move without button; emits Preview)
//!
//! Armed/Hovering -> Idle    (pointer up; emits Commit, or ZoomToggle for a
//!                            touch double-tap)
//! Dragging  -> Idle         (pointer up; emits nothing)
//! Any       -> Idle         (pointer cancel or new image; emits nothing)
//! ```

use super::coords::Point;
use super::event::DeviceKind;
use crate::constants::{DOUBLE_TAP_WINDOW_MS, TOUCH_DRAG_THRESHOLD};
use crate::settings::PickerSettings;

/// Ephemeral state of one down->up cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSession {
    pub kind: DeviceKind,
    pub pointer_id: u32,
    /// Client position of the pointer-down
    pub origin: Point,
    /// Timestamp of the pointer-down
    pub started_at_ms: u64,
    /// Second touch-down inside the double-tap window
    pub double_tap: bool,
}

impl PointerSession {
    /// True if `kind`/`pointer_id` identify the contact that owns this session
    #[inline]
    pub fn owns(&self, kind: DeviceKind, pointer_id: u32) -> bool {
        self.kind == kind && self.pointer_id == pointer_id
    }
}

/// Unified interaction state for all pointer devices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    /// No active gesture
    Idle,

    /// Pointer is down and has not moved enough to classify the gesture
    Armed(PointerSession),

    /// Mouse/pen is down and moving; hover previews stream out
    Hovering(PointerSession),

    /// Touch moved past the threshold or went multi-touch; release won't pick
    Dragging(PointerSession),
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl InteractionState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed(_))
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self, Self::Hovering(_))
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// True while a release would still produce a commit (or double-tap zoom)
    pub fn can_commit(&self) -> bool {
        matches!(self, Self::Armed(_) | Self::Hovering(_))
    }

    /// The active pointer session, if any
    pub fn session(&self) -> Option<&PointerSession> {
        match self {
            Self::Idle => None,
            Self::Armed(s) | Self::Hovering(s) | Self::Dragging(s) => Some(s),
        }
    }

    /// Device kind of the active gesture
    pub fn device_kind(&self) -> Option<DeviceKind> {
        self.session().map(|s| s.kind)
    }

    /// Reset to Idle state, discarding the session
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Begin a new gesture
    pub fn arm(&mut self, session: PointerSession) {
        *self = Self::Armed(session);
    }

    /// Armed -> Hovering. Other states are left unchanged.
    pub fn start_hovering(&mut self) {
        if let Self::Armed(session) = *self {
            *self = Self::Hovering(session);
        }
    }

    /// Move the active session into Dragging. No-op when Idle.
    pub fn start_dragging(&mut self) {
        if let Some(session) = self.session().copied() {
            *self = Self::Dragging(session);
        }
    }
}

/// Tunables for gesture classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Touch displacement (either axis) at which a tap becomes a drag
    pub drag_threshold: f32,
    /// Maximum gap between two touch-downs for a double-tap
    pub double_tap_window_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: TOUCH_DRAG_THRESHOLD,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
        }
    }
}

impl From<&PickerSettings> for GestureConfig {
    fn from(settings: &PickerSettings) -> Self {
        Self {
            drag_threshold: settings.touch_drag_threshold,
            double_tap_window_ms: settings.double_tap_window_ms,
        }
    }
}

/// Pointer-lifecycle classifier. Event handlers live in `pointer_down`,
/// `pointer_move` and `pointer_up`.
#[derive(Debug, Default)]
pub struct InteractionMachine {
    pub(super) state: InteractionState,
    pub(super) config: GestureConfig,
    /// Timestamp of the previous touch pointer-down. Outlives single gestures.
    pub(super) last_touch_down_ms: Option<u64>,
}

impl InteractionMachine {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            state: InteractionState::Idle,
            config,
            last_touch_down_ms: None,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Drop any in-flight gesture and the tap record without emitting anything
    pub fn reset(&mut self) {
        self.state.reset();
        self.last_touch_down_ms = None;
    }
}
