//! Drag and resize state machine for one note.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging            (pointer down on the note body)
//! Idle -> Resizing(direction) (pointer down on a resize handle)
//! Dragging | Resizing -> Idle (pointer up or cancel - commits geometry)
//! ```
//!
//! All pointer positions handed to this controller are already in canvas
//! space. Resizes are computed from the geometry captured at gesture start,
//! not accumulated per move, so coalescing moves cannot change the result.

use crate::error::{EngineError, EngineResult};
use crate::types::{Bounds, Point, Size};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Lower bounds applied to a note's size after every mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeLimits {
    pub min_width: f32,
    pub min_height: f32,
}

impl SizeLimits {
    pub fn new(min_width: f32, min_height: f32) -> Self {
        Self {
            min_width,
            min_height,
        }
    }

    #[inline]
    pub fn floor(&self, size: Size) -> Size {
        Size::new(size.width.max(self.min_width), size.height.max(self.min_height))
    }
}

/// Position and size of a note in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoteGeometry {
    pub position: Point,
    pub size: Size,
}

impl NoteGeometry {
    pub fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.size.is_finite()
    }
}

/// One of the eight compass resize handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        Self::N,
        Self::S,
        Self::E,
        Self::W,
        Self::Ne,
        Self::Nw,
        Self::Se,
        Self::Sw,
    ];

    #[inline]
    pub fn moves_north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    #[inline]
    pub fn moves_south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    #[inline]
    pub fn moves_east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    #[inline]
    pub fn moves_west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// Handle under `point`, if any.
    ///
    /// `thickness` is the width of the handle band inside each edge, in the
    /// same space as `bounds`. Corners win over edges. Points outside the
    /// bounds never hit a handle.
    pub fn hit_test(bounds: Bounds, point: Point, thickness: f32) -> Option<Self> {
        if !bounds.contains(point) {
            return None;
        }

        let near_west = point.x - bounds.left() <= thickness;
        let near_east = bounds.right() - point.x <= thickness;
        let near_north = point.y - bounds.top() <= thickness;
        let near_south = bounds.bottom() - point.y <= thickness;

        // On notes thinner than two bands, prefer the closer edge.
        let west = near_west && (!near_east || point.x - bounds.left() < bounds.right() - point.x);
        let east = near_east && !west;
        let north = near_north && (!near_south || point.y - bounds.top() < bounds.bottom() - point.y);
        let south = near_south && !north;

        match (north, south, east, west) {
            (true, _, true, _) => Some(Self::Ne),
            (true, _, _, true) => Some(Self::Nw),
            (_, true, true, _) => Some(Self::Se),
            (_, true, _, true) => Some(Self::Sw),
            (true, ..) => Some(Self::N),
            (_, true, ..) => Some(Self::S),
            (_, _, true, _) => Some(Self::E),
            (_, _, _, true) => Some(Self::W),
            _ => None,
        }
    }

    /// Geometry after dragging this handle by `delta` from `start`.
    ///
    /// West and north handles move the position so the opposite edge stays
    /// put; once the size hits its minimum the edge stops moving too.
    pub fn apply(self, start: NoteGeometry, delta: Point, limits: SizeLimits) -> NoteGeometry {
        let mut position = start.position;
        let mut size = start.size;

        if self.moves_east() {
            size.width = (start.size.width + delta.x).max(limits.min_width);
        } else if self.moves_west() {
            size.width = (start.size.width - delta.x).max(limits.min_width);
            position.x = start.position.x + (start.size.width - size.width);
        }

        if self.moves_south() {
            size.height = (start.size.height + delta.y).max(limits.min_height);
        } else if self.moves_north() {
            size.height = (start.size.height - delta.y).max(limits.min_height);
            position.y = start.position.y + (start.size.height - size.height);
        }

        NoteGeometry::new(position, size)
    }
}

/// Active pointer gesture on a note.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GeometryGesture {
    #[default]
    Idle,

    Dragging {
        /// Pointer position minus note position at press time
        grab_offset: Point,
        /// Geometry when the drag began
        start: NoteGeometry,
    },

    Resizing {
        direction: ResizeDirection,
        /// Geometry when the resize began
        start: NoteGeometry,
        /// Pointer position at press time
        start_pointer: Point,
    },
}

impl GeometryGesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        match self {
            Self::Resizing { direction, .. } => Some(*direction),
            _ => None,
        }
    }
}

/// How a gesture ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEnd {
    /// Whether the committed geometry differs from the gesture's start
    pub changed: bool,
    pub geometry: NoteGeometry,
}

/// Owns a note's position and size and runs its drag/resize gestures.
#[derive(Clone, Debug)]
pub struct NoteGeometryController {
    geometry: NoteGeometry,
    gesture: GeometryGesture,
    limits: SizeLimits,
}

impl NoteGeometryController {
    /// Non-finite or undersized input is repaired: NaN components fall back
    /// to zero position / minimum size, then the size floor is applied.
    pub fn new(geometry: NoteGeometry, limits: SizeLimits) -> Self {
        let position = if geometry.position.is_finite() {
            geometry.position
        } else {
            Point::ZERO
        };
        let size = if geometry.size.is_finite() {
            geometry.size
        } else {
            Size::new(limits.min_width, limits.min_height)
        };

        Self {
            geometry: NoteGeometry::new(position, limits.floor(size)),
            gesture: GeometryGesture::Idle,
            limits,
        }
    }

    #[inline]
    pub fn geometry(&self) -> NoteGeometry {
        self.geometry
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.geometry.position
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.geometry.bounds()
    }

    #[inline]
    pub fn gesture(&self) -> GeometryGesture {
        self.gesture
    }

    #[inline]
    pub fn limits(&self) -> SizeLimits {
        self.limits
    }

    /// Starts a drag. Returns false (and changes nothing) if a gesture is
    /// already in progress.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.gesture.is_idle() || !pointer.is_finite() {
            return false;
        }
        self.gesture = GeometryGesture::Dragging {
            grab_offset: pointer - self.geometry.position,
            start: self.geometry,
        };
        debug!(?pointer, "drag started");
        true
    }

    /// Starts a resize from `direction`. Returns false if busy.
    pub fn begin_resize(&mut self, direction: ResizeDirection, pointer: Point) -> bool {
        if !self.gesture.is_idle() || !pointer.is_finite() {
            return false;
        }
        self.gesture = GeometryGesture::Resizing {
            direction,
            start: self.geometry,
            start_pointer: pointer,
        };
        debug!(?direction, ?pointer, "resize started");
        true
    }

    /// Applies a pointer move. Returns whether geometry changed.
    ///
    /// A move that would produce non-finite geometry is dropped and reported
    /// as [`EngineError::NonFiniteGeometry`]; the last good geometry stays.
    pub fn pointer_move(&mut self, pointer: Point) -> EngineResult<bool> {
        let next = match self.gesture {
            GeometryGesture::Idle => return Ok(false),
            GeometryGesture::Dragging { grab_offset, start } => {
                NoteGeometry::new(pointer - grab_offset, start.size)
            }
            GeometryGesture::Resizing {
                direction,
                start,
                start_pointer,
            } => direction.apply(start, pointer - start_pointer, self.limits),
        };

        if !next.is_finite() {
            return Err(EngineError::NonFiniteGeometry);
        }
        if next == self.geometry {
            return Ok(false);
        }

        trace!(position = ?next.position, size = ?next.size, "geometry updated");
        self.geometry = next;
        Ok(true)
    }

    /// Ends the active gesture, keeping the geometry of the last move.
    /// Returns `None` when idle, so a duplicate pointer-up is a no-op.
    pub fn finish(&mut self) -> Option<GestureEnd> {
        let start = match std::mem::take(&mut self.gesture) {
            GeometryGesture::Idle => return None,
            GeometryGesture::Dragging { start, .. } => start,
            GeometryGesture::Resizing { start, .. } => start,
        };
        let end = GestureEnd {
            changed: start != self.geometry,
            geometry: self.geometry,
        };
        debug!(changed = end.changed, "gesture finished");
        Some(end)
    }

    /// Replaces the size limits and re-floors the current size, keeping the
    /// top-left corner. Returns whether geometry changed.
    pub fn set_limits(&mut self, limits: SizeLimits) -> bool {
        self.limits = limits;
        let floored = limits.floor(self.geometry.size);
        if floored == self.geometry.size {
            return false;
        }
        self.geometry.size = floored;
        true
    }
}
