//! Canvas controller - owns notes, viewport, stacking order and input mode.
//!
//! Event handlers live in [`crate::input`] as further `impl CanvasController`
//! blocks, one file per event family. This file holds the note collection,
//! focus and z-order, listener lifecycle and snapshots.

use crate::caret::TextMeasure;
use crate::error::{EngineError, EngineResult, SettingsResult};
use crate::events::{CanvasEvent, Diagnostic, Listener, ListenerId, ListenerSet};
use crate::input::InputState;
use crate::input::coords::Viewport;
use crate::input::state::ActiveMode;
use crate::note::{
    GestureEnd, Note, NoteContentController, NoteGeometry, NoteGeometryController, NoteSnapshot,
};
use crate::settings::EngineSettings;
use crate::spatial_index::SpatialIndex;
use crate::types::{NoteId, NoteStyle, Point};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasSnapshot {
    /// Bottom to top
    pub notes: Vec<NoteSnapshot>,
    pub pan: Point,
    pub zoom: f32,
    pub mode: ActiveMode,
    pub focused: Option<NoteId>,
}

pub struct CanvasController {
    pub(crate) settings: EngineSettings,
    pub(crate) viewport: Viewport,
    pub(crate) notes: HashMap<NoteId, Note>,
    pub(crate) input_state: InputState,
    pub(crate) focused: Option<NoteId>,
    pub(crate) measure: Box<dyn TextMeasure>,
    custom_measure: bool,
    spatial_index: SpatialIndex,
    listeners: ListenerSet,
    next_note_id: u64,
    z_counter: u64,
    dirty: bool,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::build(EngineSettings::default())
    }
}

impl CanvasController {
    /// Canvas with default settings and the built-in monospace measurement.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: EngineSettings) -> SettingsResult<Self> {
        settings.validate()?;
        Ok(Self::build(settings))
    }

    fn build(settings: EngineSettings) -> Self {
        Self {
            viewport: Viewport::new(settings.min_zoom, settings.max_zoom),
            measure: Box::new(settings.monospace_measure()),
            custom_measure: false,
            notes: HashMap::new(),
            input_state: InputState::default(),
            focused: None,
            spatial_index: SpatialIndex::new(),
            listeners: ListenerSet::default(),
            next_note_id: 0,
            z_counter: 0,
            dirty: true,
            settings,
        }
    }

    /// Replaces the text measurement collaborator.
    pub fn with_measure(mut self, measure: Box<dyn TextMeasure>) -> Self {
        self.set_measure(measure);
        self
    }

    pub fn set_measure(&mut self, measure: Box<dyn TextMeasure>) {
        self.measure = measure;
        self.custom_measure = true;
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Registers a listener for commits and diagnostics.
    pub fn attach(&mut self, listener: Listener) -> ListenerId {
        let id = self.listeners.attach(listener);
        debug!(listeners = self.listeners.len(), "listener attached");
        id
    }

    /// Removes a listener. Returns false if it was not attached.
    pub fn detach(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.detach(id);
        debug!(removed, listeners = self.listeners.len(), "listener detached");
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ========================================================================
    // Settings
    // ========================================================================

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Applies new settings: re-clamps zoom, re-floors every note and swaps
    /// the built-in measurement (a host-supplied one is kept).
    pub fn apply_settings(&mut self, settings: EngineSettings) -> SettingsResult<()> {
        settings.validate()?;

        self.viewport.set_zoom_range(settings.min_zoom, settings.max_zoom);
        if !self.custom_measure {
            self.measure = Box::new(settings.monospace_measure());
        }

        let limits = settings.size_limits();
        let mut resized = Vec::new();
        for note in self.notes.values_mut() {
            if note.geometry.set_limits(limits) {
                resized.push((note.id(), note.bounds()));
            }
        }
        for (id, bounds) in resized {
            self.spatial_index.upsert(id, bounds);
        }

        self.settings = settings;
        self.mark_dirty();
        info!("settings applied");
        Ok(())
    }

    // ========================================================================
    // Notes
    // ========================================================================

    /// Creates a note at the default position with default size and no text.
    pub fn add_note(&mut self) -> NoteId {
        self.add_note_at(self.settings.default_note_position)
    }

    /// Creates an empty note with its top-left corner at `position` (canvas space).
    pub fn add_note_at(&mut self, position: Point) -> NoteId {
        self.next_note_id += 1;
        let id = NoteId(self.next_note_id);
        let geometry = NoteGeometryController::new(
            NoteGeometry::new(position, self.settings.default_note_size),
            self.settings.size_limits(),
        );
        self.z_counter += 1;
        let note = Note::new(
            id,
            geometry,
            NoteContentController::default(),
            self.z_counter,
            NoteStyle::default(),
        );
        self.index_note(&note);
        self.notes.insert(id, note);
        self.mark_dirty();
        debug!(%id, ?position, "note added");
        id
    }

    /// Restores a note from a snapshot, keeping its id and z-order when
    /// possible. Geometry is repaired and floored; edit state is not restored.
    pub fn insert_note(&mut self, snapshot: NoteSnapshot) -> NoteId {
        let id = if self.notes.contains_key(&snapshot.id) {
            self.next_note_id += 1;
            let fresh = NoteId(self.next_note_id);
            warn!(requested = %snapshot.id, assigned = %fresh, "note id already in use");
            fresh
        } else {
            snapshot.id
        };
        self.next_note_id = self.next_note_id.max(id.0);
        self.z_counter = self.z_counter.max(snapshot.z_order);

        let requested = NoteGeometry::new(snapshot.position, snapshot.size);
        let geometry = NoteGeometryController::new(requested, self.settings.size_limits());
        if !requested.is_finite() {
            self.emit_diagnostic(Some(id), EngineError::NonFiniteGeometry);
        }

        let note = Note::new(
            id,
            geometry,
            NoteContentController::new(snapshot.content),
            snapshot.z_order,
            snapshot.style,
        );
        self.index_note(&note);
        self.notes.insert(id, note);
        self.mark_dirty();
        id
    }

    /// Removes a note. An interaction on it is dropped without a commit.
    pub fn remove_note(&mut self, id: NoteId) -> Option<NoteSnapshot> {
        let note = self.notes.remove(&id)?;
        if self.input_state.active_note() == Some(id) {
            self.input_state.reset();
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        self.spatial_index.remove(id);
        self.mark_dirty();
        debug!(%id, "note removed");
        Some(note.snapshot())
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes ordered bottom to top.
    pub fn notes_by_z(&self) -> Vec<&Note> {
        let mut notes: Vec<&Note> = self.notes.values().collect();
        notes.sort_by_key(|n| (n.z_order(), n.id()));
        notes
    }

    /// Replaces a note's content. The caret is clamped if needed.
    pub fn set_content(&mut self, id: NoteId, text: impl Into<String>) -> EngineResult<()> {
        let note = self.notes.get_mut(&id).ok_or(EngineError::NoteNotFound(id))?;
        note.content.set_content(text);
        self.mark_dirty();
        Ok(())
    }

    pub fn set_style(&mut self, id: NoteId, style: NoteStyle) -> EngineResult<()> {
        let note = self.notes.get_mut(&id).ok_or(EngineError::NoteNotFound(id))?;
        note.style = style;
        self.mark_dirty();
        Ok(())
    }

    // ========================================================================
    // Focus & z-order
    // ========================================================================

    pub fn focused_note(&self) -> Option<NoteId> {
        self.focused
    }

    /// Focuses a note and raises it to the top.
    pub fn focus_note(&mut self, id: NoteId) -> EngineResult<()> {
        if !self.notes.contains_key(&id) {
            return Err(EngineError::NoteNotFound(id));
        }
        if self.input_state.edited_note().is_some_and(|edited| edited != id) {
            self.end_edit();
        }
        self.bring_to_front(id);
        self.focused = Some(id);
        self.mark_dirty();
        Ok(())
    }

    /// Gives the note `max + 1` unless it is already alone on top.
    pub(crate) fn bring_to_front(&mut self, id: NoteId) {
        let Some(z) = self.notes.get(&id).map(|n| n.z_order) else {
            return;
        };
        let on_top = self
            .notes
            .values()
            .all(|n| n.id() == id || n.z_order < z);
        if on_top {
            return;
        }

        self.z_counter = self
            .notes
            .values()
            .map(|n| n.z_order)
            .max()
            .unwrap_or(0)
            .max(self.z_counter)
            + 1;
        if let Some(note) = self.notes.get_mut(&id) {
            note.z_order = self.z_counter;
        }
    }

    /// Topmost note containing `canvas_pos`.
    pub fn note_at_canvas(&self, canvas_pos: Point) -> Option<NoteId> {
        self.spatial_index
            .query_point(canvas_pos)
            .into_iter()
            .filter_map(|id| self.notes.get(&id))
            .max_by_key(|n| (n.z_order(), n.id()))
            .map(|n| n.id())
    }

    /// Topmost note under a screen position.
    pub fn note_at(&self, screen_pos: Point) -> Option<NoteId> {
        self.note_at_canvas(self.viewport.to_canvas(screen_pos))
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn pan(&self) -> Point {
        self.viewport.pan()
    }

    pub fn zoom(&self) -> f32 {
        self.viewport.zoom()
    }

    /// Returns false for non-finite input.
    pub fn set_pan(&mut self, pan: Point) -> bool {
        let changed = self.viewport.set_pan(pan);
        if changed {
            self.mark_dirty();
        }
        changed
    }

    /// Sets zoom (clamped to the configured range) without moving pan.
    pub fn set_zoom(&mut self, zoom: f32) -> EngineResult<()> {
        self.viewport.set_zoom(zoom)?;
        self.mark_dirty();
        Ok(())
    }

    pub fn to_canvas(&self, screen_pos: Point) -> Point {
        self.viewport.to_canvas(screen_pos)
    }

    pub fn to_screen(&self, canvas_pos: Point) -> Point {
        self.viewport.to_screen(canvas_pos)
    }

    // ========================================================================
    // State & frames
    // ========================================================================

    pub fn input_state(&self) -> InputState {
        self.input_state
    }

    pub fn active_mode(&self) -> ActiveMode {
        self.input_state.active_mode()
    }

    pub fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot {
            notes: self.notes_by_z().into_iter().map(Note::snapshot).collect(),
            pan: self.viewport.pan(),
            zoom: self.viewport.zoom(),
            mode: self.active_mode(),
            focused: self.focused,
        }
    }

    /// A snapshot if anything changed since the previous frame.
    pub fn take_frame(&mut self) -> Option<CanvasSnapshot> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.snapshot())
    }

    #[inline]
    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ========================================================================
    // Internal helpers shared by the input handlers
    // ========================================================================

    pub(crate) fn emit(&mut self, event: CanvasEvent) {
        self.listeners.emit(event);
    }

    pub(crate) fn emit_diagnostic(&mut self, note_id: Option<NoteId>, error: EngineError) {
        self.emit(CanvasEvent::Diagnostic(Diagnostic { note_id, error }));
    }

    fn index_note(&mut self, note: &Note) {
        self.spatial_index.upsert(note.id(), note.bounds());
    }

    /// Refreshes the index and notifies listeners after a drag or resize.
    pub(crate) fn commit_geometry(&mut self, id: NoteId, end: Option<GestureEnd>) {
        let Some(note) = self.notes.get(&id) else {
            return;
        };
        let bounds = note.bounds();
        let snapshot = note.snapshot();
        self.spatial_index.upsert(id, bounds);

        if end.is_some_and(|e| e.changed) {
            info!(%id, position = ?snapshot.position, size = ?snapshot.size, "geometry committed");
            self.emit(CanvasEvent::GeometryCommitted(snapshot));
        }
    }

    /// Leaves edit mode, emitting a content commit. Returns false if no note
    /// was being edited.
    pub fn end_edit(&mut self) -> bool {
        let Some(id) = self.input_state.edited_note() else {
            return false;
        };
        self.input_state.reset();
        self.mark_dirty();

        let Some(note) = self.notes.get_mut(&id) else {
            return false;
        };
        if note.content.end_edit().is_none() {
            return false;
        }
        let snapshot = note.snapshot();
        info!(%id, len = snapshot.content.len(), "content committed");
        self.emit(CanvasEvent::ContentCommitted(snapshot));
        true
    }

    /// Enters edit mode on `id` with the caret under `canvas_pos`.
    pub(crate) fn begin_edit_at(&mut self, id: NoteId, canvas_pos: Point) {
        let padding = self.settings.text_padding;
        let Some(note) = self.notes.get_mut(&id) else {
            return;
        };
        let local = canvas_pos - note.position() - Point::new(padding, padding);
        let wrap_width = (note.size().width - 2.0 * padding).max(0.0);
        let (started, error) = note
            .content
            .begin_edit(local, wrap_width, self.measure.as_ref());

        if started {
            self.input_state.start_editing(id);
            self.focused = Some(id);
            self.mark_dirty();
        }
        if let Some(error) = error {
            self.emit_diagnostic(Some(id), error);
        }
    }

    /// Moves the caret of the note being edited to the offset under `canvas_pos`.
    pub(crate) fn place_caret_at(&mut self, id: NoteId, canvas_pos: Point) {
        let padding = self.settings.text_padding;
        let Some(note) = self.notes.get_mut(&id) else {
            return;
        };
        let local = canvas_pos - note.position() - Point::new(padding, padding);
        let wrap_width = (note.size().width - 2.0 * padding).max(0.0);
        let result = note
            .content
            .place_caret(local, wrap_width, self.measure.as_ref());

        self.mark_dirty();
        if let Err(error) = result {
            self.emit_diagnostic(Some(id), error);
        }
    }
}
