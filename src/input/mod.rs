//! Pointer, wheel and keyboard input handling for the canvas.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode, so at most one of pan, note drag, note
//! resize and text edit is ever active.
//!
//! ## Modules
//!
//! - `coords` - Screen/canvas coordinate conversion and the viewport
//! - `events` - Host-facing event types
//! - `state` - Input state machine enum and helper methods
//! - `pointer_down` - Routing, focus, gesture start
//! - `drag` - Pointer move (drag, resize, pan)
//! - `pointer_up` - Gesture commit and click-to-edit
//! - `transform` - Wheel pan and anchored zoom
//! - `keyboard` - Keystrokes, text input and blur

pub mod coords;
pub mod events;
pub mod state;
mod drag;
mod keyboard;
mod pointer_down;
mod pointer_up;
mod transform;

pub use events::{Key, KeyEvent, Modifiers, PointerButton, PointerEvent, ScrollDelta, WheelEvent};
pub use state::{ActiveMode, InputState};
