//! Canvas transformations - wheel pan and anchored zoom.

use crate::canvas::CanvasController;
use crate::constants::{MIN_WHEEL_ZOOM_FACTOR, ZOOM_EPSILON};
use crate::error::EngineError;
use crate::input::events::{ScrollDelta, WheelEvent};
use crate::types::Point;
use tracing::trace;

impl CanvasController {
    /// Zoom with Control or the platform key held, pan otherwise.
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> bool {
        if !event.position.is_finite() {
            self.emit_diagnostic(None, EngineError::NonFiniteGeometry);
            return false;
        }

        if event.modifiers.zoom() {
            let zoom_factor = match event.delta {
                ScrollDelta::Pixels(delta) => 1.0 - delta.y / self.settings.wheel_pixel_zoom_divisor,
                ScrollDelta::Lines(delta) => 1.0 - delta.y / self.settings.wheel_line_zoom_divisor,
            };

            if (zoom_factor - 1.0).abs() > ZOOM_EPSILON {
                return self.zoom_around(zoom_factor.max(MIN_WHEEL_ZOOM_FACTOR), event.position);
            }
            return false;
        }

        let delta = match event.delta {
            ScrollDelta::Pixels(delta) => delta,
            ScrollDelta::Lines(delta) => delta * self.settings.wheel_line_pan_px,
        };
        if self.viewport.pan_by(delta) {
            self.mark_dirty();
            true
        } else {
            self.emit_diagnostic(None, EngineError::NonFiniteGeometry);
            false
        }
    }

    /// Multiplies zoom by `factor` (clamped to the configured range) keeping
    /// the canvas point under `anchor` fixed on screen.
    pub fn zoom_around(&mut self, factor: f32, anchor: Point) -> bool {
        match self.viewport.zoom_around(factor, anchor) {
            Ok(changed) => {
                if changed {
                    self.mark_dirty();
                    trace!(zoom = self.viewport.zoom(), pan = ?self.viewport.pan(), "zoomed");
                }
                changed
            }
            Err(error) => {
                self.emit_diagnostic(None, error);
                false
            }
        }
    }
}
