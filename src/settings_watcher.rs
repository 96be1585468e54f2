//! Hot reload of the settings file.
//!
//! The watcher runs on notify's own thread and forwards raw events through a
//! channel. The host polls from its UI thread, so the canvas itself never
//! sees concurrent access.

use crate::error::SettingsResult;
use crate::settings::EngineSettings;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};
use tracing::{debug, warn};

pub use crate::settings::default_settings_path;

pub struct SettingsWatcher {
    path: PathBuf,
    _watcher: RecommendedWatcher,
    events: Receiver<notify::Result<Event>>,
}

impl SettingsWatcher {
    /// Watch the directory containing `path` (editors often replace files
    /// rather than writing in place).
    pub fn new(path: PathBuf) -> SettingsResult<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(move |event| {
            let _ = tx.send(event);
        })?;

        let watch_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(watch_dir, RecursiveMode::NonRecursive)?;
        debug!(path = %path.display(), "watching settings");

        Ok(Self {
            path,
            _watcher: watcher,
            events: rx,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drains pending file events. Returns freshly loaded settings if the
    /// settings file changed since the last poll, or the load error.
    pub fn poll(&mut self) -> Option<SettingsResult<EngineSettings>> {
        let mut changed = false;
        while let Ok(event) = self.events.try_recv() {
            match event {
                Ok(event) => {
                    let relevant = matches!(
                        event.kind,
                        EventKind::Create(_) | EventKind::Modify(_)
                    ) && event.paths.iter().any(|p| p.file_name() == self.path.file_name());
                    changed |= relevant;
                }
                Err(e) => warn!(error = %e, "settings watcher error"),
            }
        }

        if !changed {
            return None;
        }
        debug!(path = %self.path.display(), "settings file changed");
        Some(EngineSettings::load(&self.path))
    }
}
