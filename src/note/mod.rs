//! Canvas-resident notes.
//!
//! A [`Note`] bundles the two per-note controllers with its identity, stacking
//! order and style. Its fields are private to the crate: hosts read them
//! through accessors and change them through
//! [`CanvasController`](crate::canvas::CanvasController), which keeps the size
//! floor and single-active-mode invariants.

pub mod content;
pub mod geometry;

pub use content::NoteContentController;
pub use geometry::{
    GeometryGesture, GestureEnd, NoteGeometry, NoteGeometryController, ResizeDirection, SizeLimits,
};

use crate::types::{Bounds, NoteId, NoteStyle, Point, Size};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug)]
pub struct Note {
    id: NoteId,
    pub(crate) geometry: NoteGeometryController,
    pub(crate) content: NoteContentController,
    pub(crate) z_order: u64,
    pub(crate) style: NoteStyle,
}

impl Note {
    pub(crate) fn new(
        id: NoteId,
        geometry: NoteGeometryController,
        content: NoteContentController,
        z_order: u64,
        style: NoteStyle,
    ) -> Self {
        Self {
            id,
            geometry,
            content,
            z_order,
            style,
        }
    }

    #[inline]
    pub fn id(&self) -> NoteId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.geometry.position()
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.geometry.bounds()
    }

    #[inline]
    pub fn content(&self) -> &str {
        self.content.content()
    }

    #[inline]
    pub fn is_editing(&self) -> bool {
        self.content.is_editing()
    }

    #[inline]
    pub fn caret_offset(&self) -> usize {
        self.content.caret_offset()
    }

    #[inline]
    pub fn z_order(&self) -> u64 {
        self.z_order
    }

    #[inline]
    pub fn style(&self) -> &NoteStyle {
        &self.style
    }

    #[inline]
    pub fn gesture(&self) -> GeometryGesture {
        self.geometry.gesture()
    }

    pub fn snapshot(&self) -> NoteSnapshot {
        NoteSnapshot {
            id: self.id,
            position: self.position(),
            size: self.size(),
            content: self.content().to_string(),
            editing: self.is_editing(),
            caret_offset: self.caret_offset(),
            z_order: self.z_order,
            style: self.style.clone(),
        }
    }
}

/// Immutable copy of a note, handed to listeners and renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteSnapshot {
    pub id: NoteId,
    pub position: Point,
    pub size: Size,
    pub content: String,
    #[serde(default)]
    pub editing: bool,
    #[serde(default)]
    pub caret_offset: usize,
    pub z_order: u64,
    #[serde(default)]
    pub style: NoteStyle,
}
