//! Keyboard and focus handling for the note being edited.

use crate::canvas::CanvasController;
use crate::input::events::{Key, KeyEvent};
use crate::note::Note;

impl CanvasController {
    /// Routes a key to the note in edit mode. Escape commits and leaves edit
    /// mode. Returns true if the key was consumed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.key == Key::Escape {
            return self.end_edit();
        }

        let Some(note) = self.editing_note_mut() else {
            return false;
        };
        let content = &mut note.content;
        let changed = match event.key {
            Key::Backspace => content.delete_backward(),
            Key::Delete => content.delete_forward(),
            Key::ArrowLeft => content.move_caret(-1),
            Key::ArrowRight => content.move_caret(1),
            Key::Home => content.move_caret_to_start(),
            Key::End => content.move_caret_to_end(),
            Key::Enter => content.insert_text("\n"),
            Key::Char(ch) => {
                if event.modifiers.control || event.modifiers.platform {
                    return false;
                }
                content.insert_text(ch.encode_utf8(&mut [0; 4]))
            }
            Key::Escape => false,
        };
        if changed {
            self.mark_dirty();
        }
        true
    }

    /// Inserts committed text (e.g. from an IME) at the caret.
    pub fn handle_text_input(&mut self, text: &str) -> bool {
        let Some(note) = self.editing_note_mut() else {
            return false;
        };
        let changed = note.content.insert_text(text);
        if changed {
            self.mark_dirty();
        }
        changed
    }

    /// The canvas lost keyboard focus: commit any edit in progress.
    pub fn handle_blur(&mut self) -> bool {
        self.end_edit()
    }

    fn editing_note_mut(&mut self) -> Option<&mut Note> {
        let id = self.input_state.edited_note()?;
        self.notes.get_mut(&id)
    }
}
