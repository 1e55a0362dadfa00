//! Named color palettes.

use crate::constants::PALETTE_EXPORT_SEPARATOR;
use crate::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named snapshot of colors. Colors may repeat across palettes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub id: Uuid,
    pub name: String,
    pub colors: Vec<String>,
    /// Unix seconds
    pub created_at: i64,
}

impl Palette {
    pub fn new(name: &str, colors: Vec<String>) -> StoreResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidPalette("name is empty".into()));
        }
        if colors.is_empty() {
            return Err(StoreError::InvalidPalette("no colors to save".into()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            colors,
            created_at: chrono::Utc::now().timestamp(),
        })
    }

    /// Colors joined for pasting elsewhere: `#aaaaaa, #bbbbbb`
    pub fn export_text(&self) -> String {
        self.colors.join(PALETTE_EXPORT_SEPARATOR)
    }
}

/// Saved palettes, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteBook {
    palettes: Vec<Palette>,
}

impl PaletteBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_palettes(palettes: Vec<Palette>) -> Self {
        Self { palettes }
    }

    pub fn create(&mut self, name: &str, colors: Vec<String>) -> StoreResult<&Palette> {
        let palette = Palette::new(name, colors)?;
        self.palettes.insert(0, palette);
        Ok(&self.palettes[0])
    }

    pub fn delete(&mut self, index: usize) -> Option<Palette> {
        (index < self.palettes.len()).then(|| self.palettes.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.palettes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}
