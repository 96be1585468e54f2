//! notecanvas - interaction engine for sticky notes on an infinite canvas.
//!
//! The engine owns no window and draws nothing. A host feeds it pointer,
//! wheel and keyboard events in screen space, pulls [`CanvasSnapshot`]s to
//! render, and listens for geometry and content commits to persist.
//!
//! ## Modules
//!
//! - `canvas` - [`CanvasController`]: notes, viewport, focus, z-order
//! - `input` - Event types, the input state machine and the handlers
//! - `note` - Per-note geometry and content controllers
//! - `caret` - Click position to caret offset
//! - `settings` / `settings_watcher` - JSON settings and hot reload
//! - `spatial_index` - R-tree for hit testing

pub mod canvas;
pub mod caret;
pub mod constants;
pub mod error;
pub mod events;
pub mod input;
pub mod logging;
pub mod note;
pub mod perf;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod types;

pub use canvas::{CanvasController, CanvasSnapshot};
pub use caret::{MonospaceMeasure, TextMeasure};
pub use error::{EngineError, EngineResult, SettingsError, SettingsResult};
pub use events::{CanvasEvent, Diagnostic, Listener, ListenerId};
pub use input::coords::{CoordinateContext, CoordinateConverter, Viewport};
pub use input::{
    ActiveMode, InputState, Key, KeyEvent, Modifiers, PointerButton, PointerEvent, ScrollDelta,
    WheelEvent,
};
pub use note::{Note, NoteSnapshot, ResizeDirection};
pub use settings::EngineSettings;
pub use types::{Bounds, NoteId, NoteStyle, Point, Size};
