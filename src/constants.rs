//! Engine-wide constants.
//!
//! Centralizes magic numbers so that the defaults in
//! [`EngineSettings`](crate::settings::EngineSettings) and the tests agree.

// ============================================================================
// Note Geometry
// ============================================================================

/// Minimum note width in canvas units
pub const MIN_NOTE_WIDTH: f32 = 150.0;

/// Minimum note height in canvas units
pub const MIN_NOTE_HEIGHT: f32 = 100.0;

/// Size given to freshly created notes
pub const DEFAULT_NOTE_SIZE: (f32, f32) = (200.0, 150.0);

/// Position given to notes created without an explicit location
pub const DEFAULT_NOTE_POSITION: (f32, f32) = (100.0, 100.0);

/// Inset between a note's border and its text box, in canvas units
pub const NOTE_TEXT_PADDING: f32 = 12.0;

// ============================================================================
// Hit Testing
// ============================================================================

/// Thickness of the resize handle band along each note edge, in screen pixels
pub const RESIZE_HANDLE_PX: f32 = 8.0;

/// Screen distance a press may travel and still count as a click
pub const CLICK_SLOP_PX: f32 = 3.0;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.2;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Wheel pixel delta divisor for zoom (`factor = 1 - dy / divisor`)
pub const WHEEL_PIXEL_ZOOM_DIVISOR: f32 = 500.0;

/// Wheel line delta divisor for zoom
pub const WHEEL_LINE_ZOOM_DIVISOR: f32 = 50.0;

/// Pixels panned per wheel line when not zooming
pub const WHEEL_LINE_PAN_PX: f32 = 20.0;

/// Zoom factors closer to 1.0 than this are ignored
pub const ZOOM_EPSILON: f32 = 0.001;

/// Smallest factor a single wheel step may apply
pub const MIN_WHEEL_ZOOM_FACTOR: f32 = 0.1;

// ============================================================================
// Text Metrics
// ============================================================================

/// Advance width of one glyph for the built-in monospace measurement
pub const DEFAULT_CHAR_WIDTH: f32 = 8.0;

/// Line height for the built-in monospace measurement
pub const DEFAULT_LINE_HEIGHT: f32 = 20.0;

// ============================================================================
// Logging
// ============================================================================

/// Environment variable consulted before `RUST_LOG`
pub const LOG_ENV_VAR: &str = "NOTECANVAS_LOG";

/// Filter used when neither environment variable is set
pub const DEFAULT_LOG_FILTER: &str = "warn,notecanvas=info";

/// Threshold in milliseconds above which a profiled scope logs a warning
pub const SLOW_SCOPE_MS: f64 = 4.0;
