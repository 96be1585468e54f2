//! Input state machine - the canvas-wide interaction mode.
//!
//! One enum instead of scattered flags, so "panning while dragging" or
//! "editing two notes" cannot be represented.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning              (pointer down on empty canvas, or middle button)
//! Idle -> DraggingNote         (pointer down on a note body)
//! Idle -> ResizingNote         (pointer down on a note resize handle)
//! DraggingNote -> EditingNote  (pointer up without exceeding the click slop)
//! EditingNote -> EditingNote   (pointer down inside the edited note: caret moves)
//! EditingNote -> Idle          (Escape, blur, or pointer down elsewhere)
//!
//! Panning | DraggingNote | ResizingNote -> Idle   (pointer up / cancel)
//! ```

use crate::note::ResizeDirection;
use crate::types::{NoteId, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No active interaction
    #[default]
    Idle,

    /// Viewport panning
    Panning {
        /// Last pointer position for delta calculation
        last_pos: Point,
    },

    /// Pointer is down on a note body
    DraggingNote {
        note_id: NoteId,
        /// Screen position of the press
        press_pos: Point,
        /// Whether the pointer has left the click slop yet
        moved: bool,
    },

    /// Pointer is down on a note resize handle
    ResizingNote {
        note_id: NoteId,
        direction: ResizeDirection,
    },

    /// A note is accepting keystrokes
    EditingNote { note_id: NoteId },
}

/// Serializable summary of [`InputState`] for snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ActiveMode {
    Idle,
    Panning,
    Dragging { note_id: NoteId },
    Resizing { note_id: NoteId, direction: ResizeDirection },
    Editing { note_id: NoteId },
}

impl InputState {
    /// Returns true while the pointer is held for a pan, drag or resize
    pub fn is_gesture_active(&self) -> bool {
        matches!(
            self,
            Self::Panning { .. } | Self::DraggingNote { .. } | Self::ResizingNote { .. }
        )
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_dragging_note(&self) -> bool {
        matches!(self, Self::DraggingNote { .. })
    }

    pub fn is_resizing_note(&self) -> bool {
        matches!(self, Self::ResizingNote { .. })
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::EditingNote { .. })
    }

    /// Get the note being dragged, if any
    pub fn dragged_note(&self) -> Option<NoteId> {
        match self {
            Self::DraggingNote { note_id, .. } => Some(*note_id),
            _ => None,
        }
    }

    /// Get the note being resized, if any
    pub fn resized_note(&self) -> Option<NoteId> {
        match self {
            Self::ResizingNote { note_id, .. } => Some(*note_id),
            _ => None,
        }
    }

    /// Get the note being edited, if any
    pub fn edited_note(&self) -> Option<NoteId> {
        match self {
            Self::EditingNote { note_id } => Some(*note_id),
            _ => None,
        }
    }

    /// The note this state refers to, whatever the mode
    pub fn active_note(&self) -> Option<NoteId> {
        match self {
            Self::DraggingNote { note_id, .. }
            | Self::ResizingNote { note_id, .. }
            | Self::EditingNote { note_id } => Some(*note_id),
            Self::Idle | Self::Panning { .. } => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_panning(&mut self, pos: Point) {
        *self = Self::Panning { last_pos: pos };
    }

    pub fn start_dragging(&mut self, note_id: NoteId, press_pos: Point) {
        *self = Self::DraggingNote {
            note_id,
            press_pos,
            moved: false,
        };
    }

    pub fn start_resizing(&mut self, note_id: NoteId, direction: ResizeDirection) {
        *self = Self::ResizingNote { note_id, direction };
    }

    pub fn start_editing(&mut self, note_id: NoteId) {
        *self = Self::EditingNote { note_id };
    }

    /// Update last pointer position (for panning)
    pub fn update_last_pos(&mut self, pos: Point) {
        if let Self::Panning { last_pos } = self {
            *last_pos = pos;
        }
    }

    pub fn mark_moved(&mut self) {
        if let Self::DraggingNote { moved, .. } = self {
            *moved = true;
        }
    }

    pub fn active_mode(&self) -> ActiveMode {
        match *self {
            Self::Idle => ActiveMode::Idle,
            Self::Panning { .. } => ActiveMode::Panning,
            Self::DraggingNote { note_id, .. } => ActiveMode::Dragging { note_id },
            Self::ResizingNote { note_id, direction } => ActiveMode::Resizing { note_id, direction },
            Self::EditingNote { note_id } => ActiveMode::Editing { note_id },
        }
    }
}
