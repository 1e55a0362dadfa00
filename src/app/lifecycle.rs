//! Construction, image loading and persistence

use super::ColorPicker;
use crate::clipboard::ClipboardSink;
use crate::error::LoadResult;
use crate::loader::{DecodedImage, ImageLoader};
use crate::perf::{DEFAULT_WARN_THRESHOLD_MS, measure_and_log};
use crate::session::ExtractionSession;
use crate::settings::PickerSettings;
use crate::store::{ColorHistory, PaletteBook, Store};
use std::path::Path;
use tracing::{error, info, warn};

impl ColorPicker {
    /// Create a picker, restoring history and palettes from `store`.
    /// Unreadable stored data is logged and replaced by empty collections.
    pub fn new(settings: PickerSettings, store: Option<Store>, clipboard: Box<dyn ClipboardSink>) -> Self {
        let settings = settings.sanitized();

        let history = match &store {
            Some(store) => store.load_history(settings.history_limit).unwrap_or_else(|e| {
                warn!(error = %e, "could not load color history, starting empty");
                ColorHistory::new(settings.history_limit)
            }),
            None => ColorHistory::new(settings.history_limit),
        };

        let palettes = match &store {
            Some(store) => store.load_palettes().unwrap_or_else(|e| {
                warn!(error = %e, "could not load palettes, starting empty");
                PaletteBook::new()
            }),
            None => PaletteBook::new(),
        };

        info!(
            history = history.len(),
            palettes = palettes.len(),
            persistent = store.is_some(),
            "color picker ready"
        );

        Self {
            session: ExtractionSession::new(&settings),
            settings,
            history,
            palettes,
            store,
            clipboard,
            current: None,
        }
    }

    /// Show an already decoded image. Returns the fitted buffer size.
    pub fn load_image(&mut self, image: &DecodedImage) -> (u32, u32) {
        measure_and_log("load_image", DEFAULT_WARN_THRESHOLD_MS * 4.0, || {
            self.session.load_image(image)
        })
    }

    /// Read, validate and show an image file. Validation failures are the
    /// only errors surfaced to the caller; the previous image stays loaded.
    pub fn open_path(&mut self, path: &Path) -> LoadResult<(u32, u32)> {
        let loader = ImageLoader::default();
        let image = loader.load_path(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "image rejected");
        })?;
        Ok(self.load_image(&image))
    }

    pub fn clear_image(&mut self) {
        self.session.clear_image();
    }

    pub(super) fn persist_history(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save_history(&self.history) {
                error!(error = %e, "failed to save color history");
            }
        }
    }

    pub(super) fn persist_palettes(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save_palettes(&self.palettes) {
                error!(error = %e, "failed to save palettes");
            }
        }
    }
}
