//! Pointer down handling - routing, focus, drag/resize/pan initiation.
//!
//! ## Performance Notes
//!
//! Hit testing goes through the R-tree spatial index (O(log n)); the topmost
//! candidate by z-order receives the event.

use crate::canvas::CanvasController;
use crate::error::EngineError;
use crate::input::events::{PointerButton, PointerEvent};
use crate::note::ResizeDirection;
use crate::profile_scope;
use tracing::debug;

impl CanvasController {
    /// Returns true if the event started or changed an interaction.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("handle_pointer_down");

        // A second press while a gesture is live must not hijack it.
        if self.input_state.is_gesture_active() {
            debug!(state = ?self.input_state, "pointer down ignored during active gesture");
            return false;
        }
        if !event.position.is_finite() {
            self.emit_diagnostic(None, EngineError::NonFiniteGeometry);
            return false;
        }

        let screen_pos = event.position;
        let canvas_pos = self.viewport.to_canvas(screen_pos);

        let hit = match event.button {
            PointerButton::Primary => self.note_at_canvas(canvas_pos),
            PointerButton::Middle => None,
            PointerButton::Secondary => return false,
        };

        let Some(note_id) = hit else {
            // Empty canvas (or middle button): pan.
            self.end_edit();
            self.focused = None;
            self.input_state.start_panning(screen_pos);
            self.mark_dirty();
            debug!(?screen_pos, "pan started");
            return true;
        };

        let Some(bounds) = self.notes.get(&note_id).map(|n| n.bounds()) else {
            return false;
        };
        let thickness = self.viewport.screen_len_to_canvas(self.settings.resize_handle_px);
        let handle = ResizeDirection::hit_test(bounds, canvas_pos, thickness);

        // Clicking inside the note being edited only moves the caret.
        if handle.is_none() && self.input_state.edited_note() == Some(note_id) {
            self.place_caret_at(note_id, canvas_pos);
            return true;
        }

        self.end_edit();
        self.bring_to_front(note_id);
        self.focused = Some(note_id);
        self.mark_dirty();

        let Some(note) = self.notes.get_mut(&note_id) else {
            return false;
        };
        match handle {
            Some(direction) => {
                if note.geometry.begin_resize(direction, canvas_pos) {
                    self.input_state.start_resizing(note_id, direction);
                }
            }
            None => {
                if note.geometry.begin_drag(canvas_pos) {
                    self.input_state.start_dragging(note_id, screen_pos);
                }
            }
        }
        debug!(%note_id, state = ?self.input_state, "note pressed");
        true
    }
}
