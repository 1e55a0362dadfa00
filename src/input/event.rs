//! Pointer events as delivered by the host, and what the state machine makes of them.

use super::coords::{Point, point};
use serde::{Deserialize, Serialize};

/// Classification of a pointing input, selecting the interaction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Mouse,
    Pen,
    Touch,
}

impl DeviceKind {
    #[inline]
    pub fn is_touch(self) -> bool {
        matches!(self, Self::Touch)
    }

    /// Parse a DOM-style `pointerType` string.
    pub fn from_pointer_type(pointer_type: &str) -> Option<Self> {
        match pointer_type {
            "mouse" => Some(Self::Mouse),
            "pen" => Some(Self::Pen),
            "touch" => Some(Self::Touch),
            _ => None,
        }
    }
}

/// A single pointer down/move/up/cancel notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Host-assigned id, stable for the lifetime of one contact
    pub pointer_id: u32,
    pub kind: DeviceKind,
    /// Client-space position
    pub position: Point,
    /// Host event timestamp in milliseconds (monotonic)
    pub timestamp_ms: u64,
}

impl PointerEvent {
    pub fn new(pointer_id: u32, kind: DeviceKind, position: Point, timestamp_ms: u64) -> Self {
        Self {
            pointer_id,
            kind,
            position,
            timestamp_ms,
        }
    }

    pub fn mouse(x: f32, y: f32) -> Self {
        Self::new(1, DeviceKind::Mouse, point(x, y), 0)
    }

    pub fn pen(x: f32, y: f32) -> Self {
        Self::new(1, DeviceKind::Pen, point(x, y), 0)
    }

    pub fn touch(x: f32, y: f32) -> Self {
        Self::new(1, DeviceKind::Touch, point(x, y), 0)
    }

    pub fn with_id(mut self, pointer_id: u32) -> Self {
        self.pointer_id = pointer_id;
        self
    }

    pub fn at(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }
}

/// Output of a state machine transition. Positions are client-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Non-committing sample request (mouse/pen hover)
    Preview(Point),
    /// The single authoritative pick for a completed tap or click
    Commit(Point),
    /// A touch double-tap: toggle zoom instead of picking
    ZoomToggle(Point),
}
