//! Text, edit mode and caret of one note.
//!
//! The caret is a character offset kept inside `[0, char count]` by every
//! mutator. Keystroke helpers exist for hosts that do not bring their own text
//! input; a host that does simply calls [`NoteContentController::set_content`].

use crate::caret::{self, TextMeasure, byte_offset};
use crate::error::{EngineError, EngineResult};
use crate::types::Point;
use tracing::debug;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoteContentController {
    content: String,
    editing: bool,
    caret_offset: usize,
}

impl NoteContentController {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            editing: false,
            caret_offset: 0,
        }
    }

    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[inline]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Only meaningful while editing.
    #[inline]
    pub fn caret_offset(&self) -> usize {
        self.caret_offset
    }

    #[inline]
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Enters edit mode with the caret at the offset under `local_click`.
    ///
    /// `local_click` is relative to the text box (note position plus
    /// padding). Returns false if already editing. When measurement fails the
    /// caret keeps its last good offset and the error is returned alongside.
    pub fn begin_edit(
        &mut self,
        local_click: Point,
        wrap_width: f32,
        measure: &dyn TextMeasure,
    ) -> (bool, Option<EngineError>) {
        if self.editing {
            return (false, None);
        }
        self.editing = true;
        let error = self.place_caret(local_click, wrap_width, measure).err();
        debug!(caret = self.caret_offset, "edit started");
        (true, error)
    }

    /// Moves the caret to the offset under `local_click`.
    pub fn place_caret(
        &mut self,
        local_click: Point,
        wrap_width: f32,
        measure: &dyn TextMeasure,
    ) -> EngineResult<usize> {
        match caret::locate(&self.content, wrap_width, measure, local_click) {
            Ok(offset) => {
                self.caret_offset = offset.min(self.char_count());
                Ok(self.caret_offset)
            }
            Err(err) => {
                self.caret_offset = self.caret_offset.min(self.char_count());
                Err(err)
            }
        }
    }

    /// Leaves edit mode. Returns the content to commit, or `None` if the note
    /// was not being edited.
    pub fn end_edit(&mut self) -> Option<&str> {
        if !self.editing {
            return None;
        }
        self.editing = false;
        debug!(len = self.content.len(), "edit committed");
        Some(&self.content)
    }

    /// Replaces the content. The caret is pulled back if it no longer fits.
    pub fn set_content(&mut self, text: impl Into<String>) {
        self.content = text.into();
        self.caret_offset = self.caret_offset.min(self.char_count());
    }

    /// Sets the caret, clamping out-of-range offsets.
    ///
    /// The clamp is reported as [`EngineError::OffsetOutOfRange`] so the
    /// caller can log it; the caret is valid either way.
    pub fn set_caret_offset(&mut self, offset: usize) -> EngineResult<()> {
        let len = self.char_count();
        self.caret_offset = offset.min(len);
        if offset > len {
            return Err(EngineError::OffsetOutOfRange { offset, len });
        }
        Ok(())
    }

    /// Inserts at the caret and advances past the inserted text.
    /// Ignored outside edit mode.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if !self.editing || text.is_empty() {
            return false;
        }
        let at = byte_offset(&self.content, self.caret_offset);
        self.content.insert_str(at, text);
        self.caret_offset += text.chars().count();
        true
    }

    /// Deletes the character before the caret.
    pub fn delete_backward(&mut self) -> bool {
        if !self.editing || self.caret_offset == 0 {
            return false;
        }
        self.caret_offset -= 1;
        self.remove_char_at_caret();
        true
    }

    /// Deletes the character after the caret.
    pub fn delete_forward(&mut self) -> bool {
        if !self.editing || self.caret_offset >= self.char_count() {
            return false;
        }
        self.remove_char_at_caret();
        true
    }

    /// Moves the caret by `delta` characters, saturating at both ends.
    pub fn move_caret(&mut self, delta: isize) -> bool {
        if !self.editing {
            return false;
        }
        let target = self
            .caret_offset
            .saturating_add_signed(delta)
            .min(self.char_count());
        let moved = target != self.caret_offset;
        self.caret_offset = target;
        moved
    }

    pub fn move_caret_to_start(&mut self) -> bool {
        if !self.editing {
            return false;
        }
        let moved = self.caret_offset != 0;
        self.caret_offset = 0;
        moved
    }

    pub fn move_caret_to_end(&mut self) -> bool {
        if !self.editing {
            return false;
        }
        let end = self.char_count();
        let moved = self.caret_offset != end;
        self.caret_offset = end;
        moved
    }

    fn remove_char_at_caret(&mut self) {
        let at = byte_offset(&self.content, self.caret_offset);
        if at < self.content.len() {
            self.content.remove(at);
        }
    }
}
