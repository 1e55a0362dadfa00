//! Most-recent-first list of picked colors.

use crate::color::{Rgb, hex_to_rgb};
use crate::constants::MAX_HISTORY_ENTRIES;
use tracing::trace;

/// Unique lowercase `#rrggbb` entries, newest first, bounded by `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistory {
    entries: Vec<String>,
    limit: usize,
}

impl Default for ColorHistory {
    fn default() -> Self {
        Self::new(MAX_HISTORY_ENTRIES)
    }
}

impl ColorHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Rebuild from persisted entries. Invalid values are dropped, duplicates
    /// keep their first (newest) position and the list is cut to `limit`.
    pub fn with_entries<I, S>(limit: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut history = Self::new(limit);
        for entry in entries {
            let Some(hex) = normalize(entry.as_ref()) else {
                trace!(entry = entry.as_ref(), "dropping invalid history entry");
                continue;
            };
            if history.entries.len() < history.limit && !history.entries.contains(&hex) {
                history.entries.push(hex);
            }
        }
        history
    }

    /// Record a pick. An existing entry moves to the front instead of being
    /// duplicated. Returns false for malformed hex.
    pub fn push(&mut self, hex: &str) -> bool {
        let Some(hex) = normalize(hex) else {
            return false;
        };
        self.entries.retain(|e| *e != hex);
        self.entries.insert(0, hex);
        self.entries.truncate(self.limit);
        true
    }

    pub fn push_rgb(&mut self, rgb: Rgb) {
        self.push(&rgb.to_hex());
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Up to `n` newest entries
    pub fn recent(&self, n: usize) -> &[String] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

fn normalize(hex: &str) -> Option<String> {
    hex_to_rgb(hex.trim()).map(Rgb::to_hex)
}
