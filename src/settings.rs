//! Engine settings.
//!
//! Stored as JSON. Every field has a default, so a partial (or empty) file is
//! valid. Hosts typically load from [`default_settings_path`] and hand the
//! result to [`CanvasController::apply_settings`](crate::canvas::CanvasController::apply_settings).

use crate::caret::MonospaceMeasure;
use crate::constants::*;
use crate::error::{SettingsError, SettingsResult};
use crate::note::SizeLimits;
use crate::types::{Point, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub min_note_width: f32,
    pub min_note_height: f32,
    pub default_note_size: Size,
    pub default_note_position: Point,
    /// Inset of the text box inside a note, canvas units
    pub text_padding: f32,

    pub min_zoom: f32,
    pub max_zoom: f32,
    pub wheel_pixel_zoom_divisor: f32,
    pub wheel_line_zoom_divisor: f32,
    pub wheel_line_pan_px: f32,

    /// Resize handle band, screen pixels
    pub resize_handle_px: f32,
    /// Movement below this (screen pixels) keeps a press a click
    pub click_slop_px: f32,

    /// Metrics for the built-in monospace measurement
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            min_note_width: MIN_NOTE_WIDTH,
            min_note_height: MIN_NOTE_HEIGHT,
            default_note_size: DEFAULT_NOTE_SIZE.into(),
            default_note_position: DEFAULT_NOTE_POSITION.into(),
            text_padding: NOTE_TEXT_PADDING,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            wheel_pixel_zoom_divisor: WHEEL_PIXEL_ZOOM_DIVISOR,
            wheel_line_zoom_divisor: WHEEL_LINE_ZOOM_DIVISOR,
            wheel_line_pan_px: WHEEL_LINE_PAN_PX,
            resize_handle_px: RESIZE_HANDLE_PX,
            click_slop_px: CLICK_SLOP_PX,
            char_width: DEFAULT_CHAR_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }
}

impl EngineSettings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults when the file does
    /// not exist. Parse and validation errors are still returned.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Rejects values the engine cannot work with.
    pub fn validate(&self) -> SettingsResult<()> {
        let positive = [
            ("min_note_width", self.min_note_width),
            ("min_note_height", self.min_note_height),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("wheel_pixel_zoom_divisor", self.wheel_pixel_zoom_divisor),
            ("wheel_line_zoom_divisor", self.wheel_line_zoom_divisor),
            ("char_width", self.char_width),
            ("line_height", self.line_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("text_padding", self.text_padding),
            ("wheel_line_pan_px", self.wheel_line_pan_px),
            ("resize_handle_px", self.resize_handle_px),
            ("click_slop_px", self.click_slop_px),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if self.min_zoom > self.max_zoom {
            return Err(SettingsError::Invalid(format!(
                "min_zoom {} exceeds max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !self.default_note_size.is_finite() || !self.default_note_position.is_finite() {
            return Err("default note geometry must be finite".into());
        }
        Ok(())
    }

    pub fn size_limits(&self) -> SizeLimits {
        SizeLimits::new(self.min_note_width, self.min_note_height)
    }

    pub fn monospace_measure(&self) -> MonospaceMeasure {
        MonospaceMeasure::new(self.char_width, self.line_height)
    }
}

/// `<config_dir>/notecanvas/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("notecanvas").join("settings.json"))
}
