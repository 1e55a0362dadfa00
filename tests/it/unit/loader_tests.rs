//! Unit tests for image loading and validation.

use crate::helpers::{png_bytes, png_file};
use huepick::error::LoadError;
use huepick::loader::{ImageLoader, ImageOrigin};

#[test]
fn test_load_png_from_disk() {
    let file = png_file(12, 7, [10, 20, 30]);
    let image = ImageLoader::default().load_path(file.path()).unwrap();

    assert_eq!(image.dimensions(), (12, 7));
    assert_eq!(image.origin(), ImageOrigin::Local);
}

#[test]
fn test_load_bytes_keeps_origin() {
    let bytes = png_bytes(3, 3, [0, 0, 0]);
    let image = ImageLoader::default()
        .load_bytes(&bytes, ImageOrigin::Remote { cors_approved: false })
        .unwrap();
    assert!(image.origin().is_tainted());
}

#[test]
fn test_oversized_file_rejected_before_reading() {
    let file = png_file(16, 16, [1, 2, 3]);
    let err = ImageLoader::new(10).load_path(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::TooLarge { max: 10, .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ImageLoader::default()
        .load_path(&dir.path().join("missing.png"))
        .unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_truncated_png_is_decode_error() {
    let mut bytes = png_bytes(8, 8, [9, 9, 9]);
    bytes.truncate(24);
    let err = ImageLoader::default()
        .load_bytes(&bytes, ImageOrigin::Local)
        .unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
}

#[test]
fn test_text_file_is_unsupported() {
    let err = ImageLoader::default()
        .load_bytes(b"name,color\nsky,#87ceeb\n", ImageOrigin::Local)
        .unwrap_err();
    assert!(matches!(err, LoadError::UnsupportedFormat));
}
