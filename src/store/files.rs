//! JSON persistence for history and palettes.
//!
//! Each collection lives in its own file in one directory. Writes go to a
//! temp file in the same directory and are renamed into place so a crash
//! never leaves a half-written file behind.

use super::history::ColorHistory;
use super::palette::{Palette, PaletteBook};
use crate::constants::{APP_DIR_NAME, HISTORY_FILE, PALETTES_FILE};
use crate::error::{StoreError, StoreResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Use `dir`, creating it if needed
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// `<data dir>/huepick`
    pub fn open_default() -> StoreResult<Self> {
        let dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Self::open(dir.join(APP_DIR_NAME))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load_history(&self, limit: usize) -> StoreResult<ColorHistory> {
        let entries: Vec<String> = self.read_json(HISTORY_FILE)?.unwrap_or_default();
        Ok(ColorHistory::with_entries(limit, entries))
    }

    pub fn save_history(&self, history: &ColorHistory) -> StoreResult<()> {
        self.write_json(HISTORY_FILE, history.entries())
    }

    pub fn load_palettes(&self) -> StoreResult<PaletteBook> {
        let palettes: Vec<Palette> = self.read_json(PALETTES_FILE)?.unwrap_or_default();
        Ok(PaletteBook::from_palettes(palettes))
    }

    pub fn save_palettes(&self, palettes: &PaletteBook) -> StoreResult<()> {
        self.write_json(PALETTES_FILE, palettes)
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> StoreResult<Option<T>> {
        let path = self.dir.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored file yet");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(json.as_bytes())?;
        let path = self.dir.join(name);
        tmp.persist(&path).map_err(|e| StoreError::Io(e.error))?;
        debug!(path = %path.display(), bytes = json.len(), "saved");
        Ok(())
    }
}
