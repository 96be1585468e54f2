//! Error types for the note engine.
//!
//! Interaction errors ([`EngineError`]) are recovered locally and reported to
//! listeners as diagnostics. Only host-facing calls return them directly.
//! Settings errors ([`SettingsError`]) come from loading or watching the
//! settings file.

use crate::types::NoteId;
use thiserror::Error;

/// Recoverable errors raised while processing interaction input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Zoom was zero, negative or not finite
    #[error("invalid zoom: {zoom}")]
    InvalidZoom { zoom: f32 },

    /// A caret offset fell outside the content
    #[error("caret offset {offset} out of range 0..={len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// The measurement collaborator returned a non-finite size
    #[error("degenerate text measurement at offset {end}: {width}x{height}")]
    DegenerateMeasurement { end: usize, width: f32, height: f32 },

    /// Pointer input produced a non-finite position or size
    #[error("non-finite geometry rejected")]
    NonFiniteGeometry,

    /// No note with this id exists on the canvas
    #[error("note {0} not found")]
    NoteNotFound(NoteId),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while loading, saving or watching settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File watcher error
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Settings parsed but describe an unusable configuration
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

impl From<String> for SettingsError {
    fn from(s: String) -> Self {
        SettingsError::Invalid(s)
    }
}

impl From<&str> for SettingsError {
    fn from(s: &str) -> Self {
        SettingsError::Invalid(s.to_string())
    }
}
