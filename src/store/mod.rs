//! Color history, saved palettes and their on-disk storage.

mod files;
mod history;
mod palette;

pub use files::Store;
pub use history::ColorHistory;
pub use palette::{Palette, PaletteBook};
