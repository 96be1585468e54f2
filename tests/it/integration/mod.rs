//! Integration tests for notecanvas.
//!
//! These tests feed host events into a `CanvasController` and check the
//! resulting geometry, modes and emitted events end-to-end.
