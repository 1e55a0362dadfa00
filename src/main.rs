//! Command-line picker: `huepick <image> [x y]`
//!
//! Loads the image, fits it into the sampling buffer and prints the color at
//! buffer pixel (x, y), or at the buffer center when no position is given.
//! The pick is recorded in the persistent history like an interactive one.

use anyhow::{Context, Result, bail};
use clap::Parser;
use huepick::ColorPicker;
use huepick::clipboard::{CopyFormat, CopyOutcome, SystemClipboard};
use huepick::settings::PickerSettings;
use huepick::store::Store;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Print the color of one pixel of an image
#[derive(Parser)]
#[command(name = "huepick")]
#[command(version)]
struct Args {
    /// Image file to sample
    image: PathBuf,

    /// Buffer x coordinate (defaults to the center)
    #[arg(requires = "y")]
    x: Option<i64>,

    /// Buffer y coordinate
    y: Option<i64>,

    /// Also copy the hex value to the clipboard
    #[arg(long)]
    copy: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    let settings = PickerSettings::load();
    let store = Store::open_default()
        .inspect_err(|e| warn!(error = %e, "history will not be saved"))
        .ok();
    let mut picker = ColorPicker::new(settings, store, Box::new(SystemClipboard::new()));

    let (width, height) = picker
        .open_path(&args.image)
        .with_context(|| format!("could not open {}", args.image.display()))?;

    let (x, y) = match (args.x, args.y) {
        (Some(x), Some(y)) => (x, y),
        _ => (i64::from(width / 2), i64::from(height / 2)),
    };
    let Some(sample) = picker.pick(x, y) else {
        bail!("({x}, {y}) is outside the {width}x{height} sampling buffer");
    };

    println!("{}", sample.hex);
    if let Some(rgb) = picker.formatted(CopyFormat::Rgb) {
        println!("{rgb}");
    }
    println!("{}", sample.hsl);

    if args.copy && matches!(picker.copy(CopyFormat::Hex), Some(CopyOutcome::ManualSelection(_))) {
        warn!("clipboard unavailable, copy the value above manually");
    }
    Ok(())
}
