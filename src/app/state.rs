//! ColorPicker state.

use crate::clipboard::ClipboardSink;
use crate::color::Rgb;
use crate::session::ExtractionSession;
use crate::settings::PickerSettings;
use crate::store::{ColorHistory, PaletteBook, Store};

/// Everything a picker window owns: the extraction session for the displayed
/// image, the picked color and the persisted collections.
pub struct ColorPicker {
    pub(super) settings: PickerSettings,
    pub(super) session: ExtractionSession,
    pub(super) history: ColorHistory,
    pub(super) palettes: PaletteBook,
    /// `None` runs the picker without persistence
    pub(super) store: Option<Store>,
    pub(super) clipboard: Box<dyn ClipboardSink>,
    pub(super) current: Option<Rgb>,
}

impl ColorPicker {
    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn session(&self) -> &ExtractionSession {
        &self.session
    }

    pub fn history(&self) -> &ColorHistory {
        &self.history
    }

    pub fn palettes(&self) -> &PaletteBook {
        &self.palettes
    }

    pub fn store(&self) -> Option<&Store> {
        self.store.as_ref()
    }

    /// Last committed or selected color
    pub fn current_color(&self) -> Option<Rgb> {
        self.current
    }
}
