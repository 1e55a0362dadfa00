//! huepick - pixel-accurate color extraction from raster images.
//!
//! An image is decoded, fitted into a bounded pixel buffer and sampled at
//! positions derived from pointer input on any device. Picks are reported as
//! hex, RGB and HSL, kept in a deduplicated history and grouped into palettes.

pub mod app;
pub mod clipboard;
pub mod color;
pub mod constants;
pub mod error;
pub mod input;
pub mod loader;
pub mod perf;
pub mod raster;
pub mod session;
pub mod settings;
pub mod store;

pub use app::ColorPicker;
pub use color::{Hsl, Rgb, hex_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use session::{ColorSample, ExtractionSession, SessionEvent};
