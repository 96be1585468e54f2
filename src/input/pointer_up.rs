//! Pointer up handling - finalize gestures, turn clicks into edits.

use crate::canvas::CanvasController;
use crate::input::InputState;
use crate::input::events::PointerEvent;
use tracing::debug;

impl CanvasController {
    /// Ends the active pan/drag/resize, committing the last processed
    /// geometry. A press on a note body that never left the click slop
    /// enters edit mode instead. A duplicate pointer-up is a no-op.
    pub fn handle_pointer_up(&mut self, _event: &PointerEvent) -> bool {
        self.finish_gesture(true)
    }

    /// Pointer cancel or leaving the window: commits like pointer-up but is
    /// never treated as a click.
    pub fn handle_pointer_cancel(&mut self) -> bool {
        self.finish_gesture(false)
    }

    fn finish_gesture(&mut self, allow_click: bool) -> bool {
        match self.input_state {
            InputState::Panning { .. } => {
                self.input_state.reset();
                self.mark_dirty();
                debug!(pan = ?self.viewport.pan(), "pan finished");
                true
            }
            InputState::DraggingNote {
                note_id,
                press_pos,
                moved,
            } => {
                let end = self
                    .notes
                    .get_mut(&note_id)
                    .and_then(|note| note.geometry.finish());
                self.input_state.reset();
                self.mark_dirty();

                if !moved && allow_click {
                    let canvas_pos = self.viewport.to_canvas(press_pos);
                    self.commit_geometry(note_id, None);
                    self.begin_edit_at(note_id, canvas_pos);
                } else {
                    self.commit_geometry(note_id, end);
                }
                true
            }
            InputState::ResizingNote { note_id, .. } => {
                let end = self
                    .notes
                    .get_mut(&note_id)
                    .and_then(|note| note.geometry.finish());
                self.input_state.reset();
                self.mark_dirty();
                self.commit_geometry(note_id, end);
                true
            }
            InputState::Idle | InputState::EditingNote { .. } => false,
        }
    }
}
