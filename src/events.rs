//! Notifications from the canvas to its host.
//!
//! The canvas owns exactly one listener set. Hosts
//! [`attach`](crate::canvas::CanvasController::attach) a listener for
//! persistence or diagnostics and
//! [`detach`](crate::canvas::CanvasController::detach) it when done.

use crate::error::EngineError;
use crate::note::NoteSnapshot;
use crate::types::NoteId;
use tracing::warn;

/// A non-fatal problem that was recovered from locally.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub note_id: Option<NoteId>,
    pub error: EngineError,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    /// A drag or resize finished with changed geometry
    GeometryCommitted(NoteSnapshot),
    /// Edit mode ended (Escape or blur)
    ContentCommitted(NoteSnapshot),
    /// A bad input or measurement was ignored
    Diagnostic(Diagnostic),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type Listener = Box<dyn FnMut(&CanvasEvent)>;

#[derive(Default)]
pub(crate) struct ListenerSet {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl ListenerSet {
    pub fn attach(&mut self, listener: Listener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.listeners.push((id, listener));
        id
    }

    pub fn detach(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn emit(&mut self, event: CanvasEvent) {
        if let CanvasEvent::Diagnostic(d) = &event {
            warn!(note = ?d.note_id, error = %d.error, "recovered from bad input");
        }
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}
