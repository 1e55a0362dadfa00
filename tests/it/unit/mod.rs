//! Unit tests for huepick.

mod loader_tests;
mod perf_tests;
