//! Color Picker Workflow Integration Tests

use crate::helpers::{FailingClipboard, RecordingClipboard, gradient_image, png_file, solid_image};
use huepick::ColorPicker;
use huepick::clipboard::{CopyFormat, CopyOutcome};
use huepick::error::{LoadError, StoreError};
use huepick::input::{BoundingBox, PointerEvent};
use huepick::session::SessionEvent;
use huepick::settings::PickerSettings;
use huepick::store::Store;
use tempfile::TempDir;

fn picker_in(dir: &TempDir, clipboard: RecordingClipboard) -> ColorPicker {
    let store = Store::open(dir.path()).unwrap();
    ColorPicker::new(PickerSettings::default(), Some(store), Box::new(clipboard))
}

fn ephemeral_picker() -> ColorPicker {
    ColorPicker::new(PickerSettings::default(), None, Box::new(RecordingClipboard::default()))
}

#[test]
fn test_commit_sets_current_color_and_history() {
    let mut picker = ephemeral_picker();
    picker.load_image(&solid_image(10, 10, [255, 0, 0]));
    picker.set_layout(BoundingBox::new(0.0, 0.0, 10.0, 10.0));

    picker.pointer_down(&PointerEvent::touch(5.0, 5.0));
    let event = picker.pointer_up(&PointerEvent::touch(5.0, 5.0));

    assert!(matches!(event, Some(SessionEvent::Commit(_))));
    assert_eq!(picker.formatted(CopyFormat::Hex).as_deref(), Some("#ff0000"));
    assert_eq!(picker.formatted(CopyFormat::Rgb).as_deref(), Some("rgb(255, 0, 0)"));
    assert_eq!(picker.formatted(CopyFormat::Hsl).as_deref(), Some("hsl(0, 100%, 50%)"));
    assert_eq!(picker.history().entries(), ["#ff0000"]);
}

#[test]
fn test_previews_do_not_touch_history() {
    let mut picker = ephemeral_picker();
    picker.load_image(&solid_image(10, 10, [0, 0, 255]));
    picker.set_layout(BoundingBox::new(0.0, 0.0, 10.0, 10.0));

    assert!(picker.pointer_move(&PointerEvent::mouse(3.0, 3.0)).is_some());
    assert!(picker.history().is_empty());
    assert_eq!(picker.current_color(), None);
}

#[test]
fn test_repeat_pick_moves_color_to_front() {
    let mut picker = ephemeral_picker();
    picker.load_image(&gradient_image(32, 1));

    picker.pick(1, 0);
    picker.pick(2, 0);
    picker.pick(1, 0);

    assert_eq!(picker.history().entries(), ["#080040", "#100040"]);
}

#[test]
fn test_history_is_capped() {
    let mut picker = ephemeral_picker();
    picker.load_image(&gradient_image(32, 1));

    for x in 0..25 {
        assert!(picker.pick(x, 0).is_some());
    }

    assert_eq!(picker.history().len(), 20);
    assert_eq!(picker.history().get(0), Some("#c00040"));
    assert_eq!(picker.history().get(19), Some("#280040"));
}

#[test]
fn test_history_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut picker = picker_in(&dir, RecordingClipboard::default());
        picker.load_image(&solid_image(4, 4, [18, 52, 86]));
        picker.pick(0, 0);
    }

    let picker = picker_in(&dir, RecordingClipboard::default());
    assert_eq!(picker.history().entries(), ["#123456"]);
}

#[test]
fn test_select_and_remove_history() {
    let mut picker = ephemeral_picker();
    picker.load_image(&gradient_image(32, 1));
    picker.pick(1, 0);
    picker.pick(2, 0);

    let selected = picker.select_history(1).unwrap();
    assert_eq!(selected.to_hex(), "#080040");
    assert_eq!(picker.current_color(), Some(selected));
    assert_eq!(picker.select_history(7), None);

    assert_eq!(picker.remove_history(0).as_deref(), Some("#100040"));
    picker.clear_history();
    assert!(picker.history().is_empty());
}

#[test]
fn test_palette_snapshots_recent_history() {
    let dir = tempfile::tempdir().unwrap();
    let mut picker = picker_in(&dir, RecordingClipboard::default());

    assert!(matches!(picker.save_palette("Empty"), Err(StoreError::InvalidPalette(_))));

    picker.load_image(&gradient_image(32, 1));
    for x in 0..10 {
        picker.pick(x, 0);
    }
    let palette = picker.save_palette("  Ramp  ").unwrap();

    assert_eq!(palette.name, "Ramp");
    assert_eq!(palette.colors.len(), 8);
    assert_eq!(palette.colors[0], "#480040");

    let restored = picker_in(&dir, RecordingClipboard::default());
    assert_eq!(restored.palettes().get(0), Some(&palette));

    assert!(picker.delete_palette(0).is_some());
    assert!(picker.palettes().is_empty());
}

#[test]
fn test_copy_uses_clipboard() {
    let clipboard = RecordingClipboard::default();
    let dir = tempfile::tempdir().unwrap();
    let mut picker = picker_in(&dir, clipboard.clone());

    assert_eq!(picker.copy(CopyFormat::Hex), None);

    picker.load_image(&solid_image(2, 2, [0, 255, 0]));
    picker.pick(0, 0);
    picker.save_palette("Green").unwrap();

    assert_eq!(picker.copy(CopyFormat::Hsl), Some(CopyOutcome::Copied));
    assert_eq!(picker.copy_palette(0), Some(CopyOutcome::Copied));
    assert_eq!(*clipboard.copied.borrow(), ["hsl(120, 100%, 50%)", "#00ff00"]);
}

#[test]
fn test_refused_clipboard_offers_manual_selection() {
    let mut picker = ColorPicker::new(PickerSettings::default(), None, Box::new(FailingClipboard));
    picker.load_image(&solid_image(2, 2, [0, 0, 0]));
    picker.pick(0, 0);

    assert_eq!(
        picker.copy(CopyFormat::Hex),
        Some(CopyOutcome::ManualSelection("#000000".into()))
    );
}

#[test]
fn test_open_path_reports_only_load_failures() {
    let mut picker = ephemeral_picker();
    let file = png_file(30, 20, [200, 100, 50]);

    assert_eq!(picker.open_path(file.path()).unwrap(), (30, 20));
    assert_eq!(picker.pick(29, 19).map(|s| s.hex), Some("#c86432".to_string()));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.png");
    assert!(matches!(picker.open_path(&missing), Err(LoadError::Io(_))));

    // The previous image stays loaded
    assert!(picker.pick(0, 0).is_some());
}

#[test]
fn test_unreadable_store_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("history.json"), "not json").unwrap();
    std::fs::write(dir.path().join("palettes.json"), "{").unwrap();

    let picker = picker_in(&dir, RecordingClipboard::default());
    assert!(picker.history().is_empty());
    assert!(picker.palettes().is_empty());
}
