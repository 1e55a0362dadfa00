//! Presentational zoom. Purely visual: it changes the on-screen box the host
//! reports, never the buffer or the sampling math.

use crate::constants::DEFAULT_ZOOM;
use crate::settings::ZoomSettings;

/// Bounded zoom level adjusted in fixed increments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    level: f32,
    settings: ZoomSettings,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomSettings::default())
    }
}

impl ZoomState {
    pub fn new(settings: ZoomSettings) -> Self {
        Self {
            level: DEFAULT_ZOOM.clamp(settings.min, settings.max),
            settings,
        }
    }

    /// Current zoom factor
    #[inline]
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn settings(&self) -> &ZoomSettings {
        &self.settings
    }

    pub fn can_zoom_in(&self) -> bool {
        self.level < self.settings.max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.level > self.settings.min
    }

    /// Step up by one increment. Returns true if the level changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set(self.level + self.settings.step)
    }

    /// Step down by one increment. Returns true if the level changed.
    pub fn zoom_out(&mut self) -> bool {
        self.set(self.level - self.settings.step)
    }

    /// Back to 1x (or the configured minimum if that is higher)
    pub fn reset(&mut self) -> bool {
        self.set(DEFAULT_ZOOM)
    }

    /// Double-tap behaviour: zoomed -> 1x, at 1x -> the toggle level.
    /// Returns the new level.
    pub fn toggle(&mut self) -> f32 {
        let base = DEFAULT_ZOOM.clamp(self.settings.min, self.settings.max);
        if (self.level - base).abs() < f32::EPSILON {
            self.set(self.settings.double_tap_level);
        } else {
            self.set(base);
        }
        self.level
    }

    /// Set an explicit level, clamped to the configured range and snapped to
    /// hundredths so repeated steps don't accumulate float drift.
    pub fn set(&mut self, level: f32) -> bool {
        if !level.is_finite() {
            return false;
        }
        let next = snap(level.clamp(self.settings.min, self.settings.max));
        let changed = (next - self.level).abs() >= f32::EPSILON;
        self.level = next;
        changed
    }
}

#[inline]
fn snap(level: f32) -> f32 {
    (level * 100.0).round() / 100.0
}
