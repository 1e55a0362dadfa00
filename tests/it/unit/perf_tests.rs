//! Unit tests for perf module.

use huepick::perf::{DEFAULT_WARN_THRESHOLD_MS, ScopedTimer, measure, measure_and_log};

#[test]
fn test_scoped_timer_creation() {
    // High threshold: dropping must not warn or panic
    let timer = ScopedTimer::new("test_op", 10_000.0);
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_default_threshold() {
    let timer = ScopedTimer::with_default_threshold("frame");
    assert_eq!(timer.threshold_ms(), DEFAULT_WARN_THRESHOLD_MS);
}

#[test]
fn test_measure_returns_result_and_time() {
    let (value, elapsed) = measure(|| 6 * 7);
    assert_eq!(value, 42);
    assert!(elapsed >= 0.0);
}

#[test]
fn test_measure_and_log_passes_result_through() {
    let value = measure_and_log("fast_op", 10_000.0, || "done");
    assert_eq!(value, "done");
}
