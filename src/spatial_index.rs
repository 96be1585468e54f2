//! Spatial Index Module
//!
//! R-tree over note bounding boxes in canvas space, used to route pointer
//! events to candidate notes in O(log n). Stacking order is not known here;
//! the canvas picks the topmost candidate.
//!
//! The index is refreshed when a gesture commits, not on every move, since
//! routing only happens on pointer-down.

use crate::types::{Bounds, NoteId, Point};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A note's bounding box as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub note_id: NoteId,
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl SpatialEntry {
    pub fn new(note_id: NoteId, bounds: Bounds) -> Self {
        Self {
            note_id,
            min: [bounds.left(), bounds.top()],
            max: [bounds.right(), bounds.bottom()],
        }
    }

    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min[0] && p.x <= self.max[0] && p.y >= self.min[1] && p.y <= self.max[1]
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.note_id == other.note_id
    }
}

pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NoteId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Inserts or replaces the entry for `note_id`.
    pub fn upsert(&mut self, note_id: NoteId, bounds: Bounds) {
        if let Some(old_entry) = self.entries.remove(&note_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(note_id, bounds);
        self.tree.insert(entry);
        self.entries.insert(note_id, entry);
    }

    pub fn remove(&mut self, note_id: NoteId) -> bool {
        if let Some(entry) = self.entries.remove(&note_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Notes whose bounds contain `p` (edges inclusive), in no particular order.
    pub fn query_point(&self, p: Point) -> Vec<NoteId> {
        let envelope = AABB::from_point([p.x, p.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(p))
            .map(|entry| entry.note_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, notes: I)
    where
        I: Iterator<Item = (NoteId, Bounds)>,
    {
        let entries: Vec<SpatialEntry> = notes
            .map(|(id, bounds)| SpatialEntry::new(id, bounds))
            .collect();

        self.entries = entries.iter().map(|e| (e.note_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
