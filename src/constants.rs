//! Application-wide constants.
//!
//! Centralizes magic numbers so the extraction engine, the settings defaults
//! and the tests all agree on the same values.

// ============================================================================
// Raster Fitting
// ============================================================================

/// Maximum buffer width/height in pixels; larger images are downscaled to fit
pub const MAX_IMAGE_DIMENSION: u32 = 800;

/// Largest image file the loader accepts (10 MB)
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

// ============================================================================
// Input Handling
// ============================================================================

/// Touch displacement (in device-independent pixels, either axis) that turns
/// a tap into a drag
pub const TOUCH_DRAG_THRESHOLD: f32 = 10.0;

/// Maximum interval between two touch pointer-downs to count as a double-tap
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

// ============================================================================
// Zoom
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 1.0;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom increment for the zoom in/out controls
pub const ZOOM_STEP: f32 = 0.2;

/// Zoom level a double-tap toggles to from 1x
pub const DOUBLE_TAP_ZOOM: f32 = 2.0;

// ============================================================================
// History & Palettes
// ============================================================================

/// Maximum number of entries kept in the color history
pub const MAX_HISTORY_ENTRIES: usize = 20;

/// Number of most recent history colors a new palette is seeded from
pub const PALETTE_SEED_COLORS: usize = 8;

/// Separator used when a palette is exported as text
pub const PALETTE_EXPORT_SEPARATOR: &str = ", ";

// ============================================================================
// Storage
// ============================================================================

/// Directory name under the platform config/data dirs
pub const APP_DIR_NAME: &str = "huepick";

/// Settings file name inside the config dir
pub const SETTINGS_FILE: &str = "settings.json";

/// History file name inside the data dir
pub const HISTORY_FILE: &str = "history.json";

/// Palettes file name inside the data dir
pub const PALETTES_FILE: &str = "palettes.json";
