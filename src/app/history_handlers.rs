//! Current color, history selection and copying

use super::ColorPicker;
use crate::clipboard::{CopyFormat, CopyOutcome, copy_value};
use crate::color::{Rgb, hex_to_rgb};

impl ColorPicker {
    /// The current color in `format`
    pub fn formatted(&self, format: CopyFormat) -> Option<String> {
        self.current.map(|rgb| format.format(rgb))
    }

    /// Make a history entry the current color. Returns it if the index exists.
    pub fn select_history(&mut self, index: usize) -> Option<Rgb> {
        let rgb = self.history.get(index).and_then(hex_to_rgb)?;
        self.current = Some(rgb);
        Some(rgb)
    }

    pub fn remove_history(&mut self, index: usize) -> Option<String> {
        let removed = self.history.remove(index)?;
        self.persist_history();
        Some(removed)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.persist_history();
    }

    /// Copy the current color. `None` when nothing has been picked yet.
    pub fn copy(&mut self, format: CopyFormat) -> Option<CopyOutcome> {
        let value = self.formatted(format)?;
        Some(copy_value(self.clipboard.as_mut(), &value))
    }
}
