use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vivace/config.toml` or
/// `~/.config/vivace/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VIVACE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub playback: PlaybackSettings,
    pub session: SessionSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: CatalogSettings::default(),
            playback: PlaybackSettings::default(),
            session: SessionSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Base URL of the catalog server's REST API.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional bearer token sent with every request.
    pub token: Option<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout_secs: 10,
            token: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Startup volume, `0.0` to `1.0`. Overridden by restored session state.
    pub volume: f64,
    /// Startup playback rate. Overridden by restored session state.
    pub rate: f64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            rate: 1.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Explicit session-file location; when unset the XDG state path is used.
    pub state_path: Option<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self { state_path: None }
    }
}
