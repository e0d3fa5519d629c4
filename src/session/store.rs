use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::Track;

/// The playback state that survives a session.
///
/// Purely client-local, single-writer. The current track is stored as a
/// snapshot so the UI can show it again before the track list has been
/// re-fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub current_track: Option<Track>,
    pub elapsed_seconds: f64,
    /// Output volume in `[0.0, 1.0]`.
    pub volume: f64,
    /// Playback rate; always positive.
    pub rate: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_track: None,
            elapsed_seconds: 0.0,
            volume: 1.0,
            rate: 1.0,
        }
    }
}

/// What `load` actually parses: every field optional, so a partial or
/// hand-edited file merges field-by-field instead of failing outright.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct PersistedFields {
    current_track: Option<Track>,
    elapsed_seconds: Option<f64>,
    volume: Option<f64>,
    rate: Option<f64>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session file I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("session file serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One JSON file holding the serialized `PlaybackState`.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `state` to the session file, creating parent directories
    /// as needed.
    pub fn save(&self, state: &PlaybackState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(state)?)?;
        Ok(())
    }

    /// Read the session file and merge it into `initial`.
    ///
    /// A missing or unparseable file returns `initial` unchanged; a valid
    /// file overrides only the fields it carries, and per-field garbage
    /// (negative elapsed time, out-of-range volume, non-positive rate) is
    /// discarded without touching the rest.
    pub fn load(&self, initial: PlaybackState) -> PlaybackState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "no session state to restore");
                return initial;
            }
        };

        let fields: PersistedFields = match serde_json::from_str(&raw) {
            Ok(fields) => fields,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring corrupt session state");
                return initial;
            }
        };

        let mut state = initial;
        if fields.current_track.is_some() {
            state.current_track = fields.current_track;
        }
        if let Some(elapsed) = fields.elapsed_seconds {
            if elapsed.is_finite() && elapsed >= 0.0 {
                state.elapsed_seconds = elapsed;
            }
        }
        if let Some(volume) = fields.volume {
            if volume.is_finite() && (0.0..=1.0).contains(&volume) {
                state.volume = volume;
            }
        }
        if let Some(rate) = fields.rate {
            if rate.is_finite() && rate > 0.0 {
                state.rate = rate;
            }
        }
        state
    }
}

/// Resolve the session file path: `VIVACE_STATE_PATH`, then the configured
/// override, then the XDG default.
pub fn resolve_state_path(configured: Option<&str>) -> Option<PathBuf> {
    if let Some(p) = env::var_os("VIVACE_STATE_PATH") {
        return Some(PathBuf::from(p));
    }
    if let Some(p) = configured {
        return Some(PathBuf::from(p));
    }
    default_state_path()
}

/// Compute the default state path under `$XDG_STATE_HOME/vivace/session.json`
/// or `~/.local/state/vivace/session.json` when `XDG_STATE_HOME` is not set.
pub fn default_state_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("state"))
    } else {
        None
    };

    state_home.map(|d| d.join("vivace").join("session.json"))
}
