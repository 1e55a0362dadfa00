//! Integration tests for huepick.
//!
//! These tests drive the extraction session and the picker façade with full
//! pointer gestures and check picks, history and persistence end-to-end.

mod picker_workflow_tests;
mod session_workflow_tests;
