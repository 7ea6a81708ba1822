//! CLI integration tests for fb.

mod common;
mod compose_tests;
mod touch_tests;
mod version_bump_tests;
