//! Copying color values to the system clipboard.
//!
//! Clipboard access is best-effort. When the platform refuses (no display
//! server, sandbox, permissions) the caller gets the value back so the UI can
//! show it selected for manual copying.

use crate::color::Rgb;
use crate::error::ClipboardError;
use tracing::{debug, warn};

/// Destination for copied text
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard via `arboard`. The handle is opened on first use and
/// kept; a failed open is retried on the next copy.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError("clipboard handle missing".into()));
        };

        // X11/Wayland need the source alive until a clipboard manager takes the data
        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;
            clipboard.set().wait().text(text)?;
        }
        #[cfg(not(target_os = "linux"))]
        clipboard.set_text(text)?;

        Ok(())
    }
}

/// Which representation of a color to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl CopyFormat {
    pub fn format(self, rgb: Rgb) -> String {
        match self {
            Self::Hex => rgb.to_hex(),
            Self::Rgb => rgb.css(),
            Self::Hsl => rgb.to_hsl().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Clipboard refused; the value should be presented for manual selection
    ManualSelection(String),
}

pub fn copy_value(sink: &mut dyn ClipboardSink, value: &str) -> CopyOutcome {
    match sink.set_text(value) {
        Ok(()) => {
            debug!(value, "copied to clipboard");
            CopyOutcome::Copied
        }
        Err(e) => {
            warn!(error = %e, "clipboard copy failed, falling back to manual selection");
            CopyOutcome::ManualSelection(value.to_string())
        }
    }
}
