//! Unit tests for notecanvas.

mod caret_tests;
mod coords_tests;
mod geometry_tests;
mod perf_tests;
mod settings_tests;
mod snapshot_tests;
