//! Palette management - save, delete and export

use super::ColorPicker;
use crate::clipboard::{CopyOutcome, copy_value};
use crate::error::StoreResult;
use crate::store::Palette;
use tracing::info;

impl ColorPicker {
    /// Save the most recent history colors as a named palette
    pub fn save_palette(&mut self, name: &str) -> StoreResult<Palette> {
        let colors = self.history.recent(self.settings.palette_seed_colors).to_vec();
        let palette = self.palettes.create(name, colors)?.clone();
        info!(name = %palette.name, colors = palette.colors.len(), "palette saved");
        self.persist_palettes();
        Ok(palette)
    }

    pub fn delete_palette(&mut self, index: usize) -> Option<Palette> {
        let removed = self.palettes.delete(index)?;
        self.persist_palettes();
        Some(removed)
    }

    /// Copy a palette's colors as `#aaaaaa, #bbbbbb`
    pub fn copy_palette(&mut self, index: usize) -> Option<CopyOutcome> {
        let text = self.palettes.get(index)?.export_text();
        Some(copy_value(self.clipboard.as_mut(), &text))
    }
}
