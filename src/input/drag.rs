//! Pointer move handling - note drag, note resize, viewport pan.
//!
//! ## Performance Notes
//!
//! Pointer move fires at display rate during gestures. Non-gesture states
//! exit immediately, and the spatial index is left alone until pointer-up.

use crate::canvas::CanvasController;
use crate::error::EngineError;
use crate::input::InputState;
use crate::input::events::PointerEvent;
use crate::profile_scope;
use crate::types::{NoteId, Point};
use tracing::trace;

impl CanvasController {
    /// Returns true if the move changed pan or note geometry.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> bool {
        profile_scope!("handle_pointer_move");

        if !self.input_state.is_gesture_active() {
            return false;
        }
        let pos = event.position;
        if !pos.is_finite() {
            let note = self.input_state.active_note();
            self.emit_diagnostic(note, EngineError::NonFiniteGeometry);
            return false;
        }

        match self.input_state {
            InputState::Panning { last_pos } => {
                if !self.viewport.pan_by(pos - last_pos) {
                    self.emit_diagnostic(None, EngineError::NonFiniteGeometry);
                    return false;
                }
                self.input_state.update_last_pos(pos);
                self.mark_dirty();
                trace!(pan = ?self.viewport.pan(), "panned");
                true
            }
            InputState::DraggingNote {
                note_id,
                press_pos,
                moved,
            } => {
                if !moved {
                    if pos.distance(press_pos) <= self.settings.click_slop_px {
                        return false;
                    }
                    self.input_state.mark_moved();
                }
                self.move_active_note(note_id, pos)
            }
            InputState::ResizingNote { note_id, .. } => self.move_active_note(note_id, pos),
            InputState::Idle | InputState::EditingNote { .. } => false,
        }
    }

    fn move_active_note(&mut self, note_id: NoteId, screen_pos: Point) -> bool {
        let canvas_pos = self.viewport.to_canvas(screen_pos);
        let Some(note) = self.notes.get_mut(&note_id) else {
            return false;
        };

        match note.geometry.pointer_move(canvas_pos) {
            Ok(changed) => {
                if changed {
                    self.mark_dirty();
                }
                changed
            }
            Err(error) => {
                self.emit_diagnostic(Some(note_id), error);
                false
            }
        }
    }
}
