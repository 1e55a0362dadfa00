//! Application module - the color picker façade a host UI drives.
//!
//! This module is organized into several submodules:
//! - `state` - The ColorPicker struct definition and accessors
//! - `lifecycle` - Construction, image loading and persistence
//! - `pointer_handlers` - Pointer and zoom forwarding to the extraction session
//! - `history_handlers` - Current color, history selection and copying
//! - `palette_handlers` - Palette save, delete and export

mod state;
mod lifecycle;
mod pointer_handlers;
mod history_handlers;
mod palette_handlers;

pub use state::ColorPicker;
