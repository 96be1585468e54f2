//! Coordinate conversion between screen space and canvas space.
//!
//! Screen points are viewport pixels as delivered by pointer events. Canvas
//! points are the unscaled coordinates notes are stored in. The mapping is
//!
//! ```text
//! screen = canvas * zoom + pan
//! canvas = (screen - pan) / zoom
//! ```

use crate::error::{EngineError, EngineResult};
use crate::types::Point;

/// Context needed for coordinate conversions
#[derive(Clone, Copy, Debug)]
pub struct CoordinateContext {
    pub pan: Point,
    pub zoom: f32,
}

impl CoordinateContext {
    /// Create a new coordinate context
    #[inline]
    pub fn new(pan: Point, zoom: f32) -> Self {
        Self { pan, zoom }
    }

    /// Fails with [`EngineError::InvalidZoom`] for zero, negative or non-finite zoom.
    pub fn validate(&self) -> EngineResult<()> {
        validate_zoom(self.zoom)
    }
}

/// Rejects zoom values the transform cannot divide by.
#[inline]
pub fn validate_zoom(zoom: f32) -> EngineResult<()> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidZoom { zoom })
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert screen position to canvas position
    pub fn to_canvas(screen_pos: Point, ctx: &CoordinateContext) -> EngineResult<Point> {
        ctx.validate()?;
        Ok(Self::to_canvas_unchecked(screen_pos, ctx))
    }

    /// Convert canvas position to screen position
    pub fn to_screen(canvas_pos: Point, ctx: &CoordinateContext) -> EngineResult<Point> {
        ctx.validate()?;
        Ok(Self::to_screen_unchecked(canvas_pos, ctx))
    }

    /// Convert a delta from screen to canvas (for drag operations)
    pub fn delta_to_canvas(delta: Point, zoom: f32) -> EngineResult<Point> {
        validate_zoom(zoom)?;
        Ok(delta / zoom)
    }

    /// Convert a delta from canvas to screen
    pub fn delta_to_screen(delta: Point, zoom: f32) -> EngineResult<Point> {
        validate_zoom(zoom)?;
        Ok(delta * zoom)
    }

    /// Pan that keeps `anchor` (a screen point) over the same canvas point
    /// when zoom changes from `ctx.zoom` to `new_zoom`.
    pub fn pan_for_zoom_around(
        anchor: Point,
        ctx: &CoordinateContext,
        new_zoom: f32,
    ) -> EngineResult<Point> {
        ctx.validate()?;
        validate_zoom(new_zoom)?;
        let canvas_anchor = Self::to_canvas_unchecked(anchor, ctx);
        Ok(anchor - canvas_anchor * new_zoom)
    }

    #[inline]
    pub(crate) fn to_canvas_unchecked(screen_pos: Point, ctx: &CoordinateContext) -> Point {
        (screen_pos - ctx.pan) / ctx.zoom
    }

    #[inline]
    pub(crate) fn to_screen_unchecked(canvas_pos: Point, ctx: &CoordinateContext) -> Point {
        canvas_pos * ctx.zoom + ctx.pan
    }
}

/// Pan and zoom of one canvas.
///
/// Zoom is kept inside `[min_zoom, max_zoom]` by every mutator, so the
/// conversions here never see an invalid zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pan: Point,
    zoom: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl Viewport {
    /// Caller guarantees `0 < min_zoom <= max_zoom`.
    pub fn new(min_zoom: f32, max_zoom: f32) -> Self {
        Self {
            pan: Point::ZERO,
            zoom: 1.0_f32.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
        }
    }

    #[inline]
    pub fn pan(&self) -> Point {
        self.pan
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn zoom_range(&self) -> (f32, f32) {
        (self.min_zoom, self.max_zoom)
    }

    #[inline]
    pub fn context(&self) -> CoordinateContext {
        CoordinateContext::new(self.pan, self.zoom)
    }

    #[inline]
    pub fn to_canvas(&self, screen_pos: Point) -> Point {
        CoordinateConverter::to_canvas_unchecked(screen_pos, &self.context())
    }

    #[inline]
    pub fn to_screen(&self, canvas_pos: Point) -> Point {
        CoordinateConverter::to_screen_unchecked(canvas_pos, &self.context())
    }

    /// Canvas length corresponding to `px` screen pixels.
    #[inline]
    pub fn screen_len_to_canvas(&self, px: f32) -> f32 {
        px / self.zoom
    }

    /// Returns false (and leaves pan untouched) for non-finite input.
    pub fn set_pan(&mut self, pan: Point) -> bool {
        if !pan.is_finite() {
            return false;
        }
        self.pan = pan;
        true
    }

    /// Returns false for non-finite input.
    pub fn pan_by(&mut self, delta: Point) -> bool {
        self.set_pan(self.pan + delta)
    }

    /// Sets zoom (clamped) without touching pan.
    pub fn set_zoom(&mut self, zoom: f32) -> EngineResult<()> {
        validate_zoom(zoom)?;
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        Ok(())
    }

    /// Multiplies zoom by `factor` (result clamped) while keeping `anchor`
    /// over the same canvas point. Returns whether zoom changed.
    pub fn zoom_around(&mut self, factor: f32, anchor: Point) -> EngineResult<bool> {
        validate_zoom(factor)?;
        if !anchor.is_finite() {
            return Err(EngineError::NonFiniteGeometry);
        }
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if new_zoom == self.zoom {
            return Ok(false);
        }
        self.pan = CoordinateConverter::pan_for_zoom_around(anchor, &self.context(), new_zoom)?;
        self.zoom = new_zoom;
        Ok(true)
    }

    /// Replaces the zoom range, re-clamping the current zoom.
    pub fn set_zoom_range(&mut self, min_zoom: f32, max_zoom: f32) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }
}
