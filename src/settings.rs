//! User settings, persisted as JSON in the platform config directory.
//!
//! Every field has a default so partial or older files still load; values
//! that would break the engine (zero sizes, inverted zoom range) are repaired
//! on load.

use crate::constants::{
    APP_DIR_NAME, DOUBLE_TAP_WINDOW_MS, DOUBLE_TAP_ZOOM, MAX_HISTORY_ENTRIES, MAX_IMAGE_DIMENSION,
    MAX_ZOOM, MIN_ZOOM, PALETTE_SEED_COLORS, SETTINGS_FILE, TOUCH_DRAG_THRESHOLD, ZOOM_STEP,
};
use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Zoom range and increments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// Level a double-tap toggles to from 1x
    pub double_tap_level: f32,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
            step: ZOOM_STEP,
            double_tap_level: DOUBLE_TAP_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Images are downscaled so neither buffer side exceeds this
    pub max_image_dimension: u32,
    pub touch_drag_threshold: f32,
    pub double_tap_window_ms: u64,
    pub zoom: ZoomSettings,
    pub history_limit: usize,
    /// How many recent colors a new palette snapshots
    pub palette_seed_colors: usize,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            max_image_dimension: MAX_IMAGE_DIMENSION,
            touch_drag_threshold: TOUCH_DRAG_THRESHOLD,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            zoom: ZoomSettings::default(),
            history_limit: MAX_HISTORY_ENTRIES,
            palette_seed_colors: PALETTE_SEED_COLORS,
        }
    }
}

impl PickerSettings {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`. Missing files are normal; unreadable or invalid
    /// files are logged and replaced by defaults.
    pub fn load_from(path: &Path) -> Self {
        let settings = match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str::<Self>(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "invalid settings file, using defaults");
                Self::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read settings, using defaults");
                Self::default()
            }
        };
        settings.sanitized()
    }

    /// Save to the default location
    pub fn save(&self) -> StoreResult<()> {
        match default_settings_path() {
            Some(path) => self.save_to(&path),
            None => Err(StoreError::NoDataDir),
        }
    }

    /// Write via a temp file in the same directory, then rename into place
    pub fn save_to(&self, path: &Path) -> StoreResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Repair values the engine cannot work with
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if self.max_image_dimension == 0 {
            self.max_image_dimension = defaults.max_image_dimension;
        }
        if !(self.touch_drag_threshold.is_finite() && self.touch_drag_threshold > 0.0) {
            self.touch_drag_threshold = defaults.touch_drag_threshold;
        }
        if self.history_limit == 0 {
            self.history_limit = defaults.history_limit;
        }

        let zoom = &mut self.zoom;
        let valid_range = zoom.min.is_finite()
            && zoom.max.is_finite()
            && zoom.min > 0.0
            && zoom.min <= zoom.max;
        if !valid_range {
            zoom.min = defaults.zoom.min;
            zoom.max = defaults.zoom.max;
        }
        if !(zoom.step.is_finite() && zoom.step > 0.0) {
            zoom.step = defaults.zoom.step;
        }
        if !zoom.double_tap_level.is_finite() {
            zoom.double_tap_level = defaults.zoom.double_tap_level;
        }
        zoom.double_tap_level = zoom.double_tap_level.clamp(zoom.min, zoom.max);

        self
    }
}

/// `<config dir>/huepick/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE))
}
