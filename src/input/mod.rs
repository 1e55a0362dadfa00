//! Pointer input handling for the image surface.
//!
//! This module turns raw pointer events from any device into at most one
//! committed pick per gesture, plus hover previews and double-tap zoom.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InteractionState`) to
//! track the current gesture phase. Classification is pure: handlers return a
//! `GestureOutcome` and leave sampling to the extraction session.
//!
//! ## Modules
//!
//! - `coords` - Client-space to buffer-space coordinate mapping
//! - `event` - Pointer events, device kinds and gesture outcomes
//! - `state` - State machine enum, pointer session and machine struct
//! - `pointer_down` - Arm gestures, multi-touch and double-tap detection
//! - `pointer_move` - Touch drag detection and hover previews
//! - `pointer_up` - Commit, suppress or cancel the gesture
//! - `transform` - Presentational zoom

pub mod coords;
mod event;
mod state;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod transform;

pub use coords::{BoundingBox, BufferPoint, CoordinateConverter, CoordinateMapper, MappingContext, Point, point};
pub use event::{DeviceKind, GestureOutcome, PointerEvent};
pub use state::{GestureConfig, InteractionMachine, InteractionState, PointerSession};
pub use transform::ZoomState;
