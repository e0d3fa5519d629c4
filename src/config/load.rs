use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `VIVACE__`),
/// then an optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("VIVACE")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.base_url.trim().is_empty() {
            return Err("catalog.base_url must not be empty".to_string());
        }
        if self.catalog.timeout_secs == 0 {
            return Err("catalog.timeout_secs must be >= 1".to_string());
        }
        if !self.playback.volume.is_finite() || !(0.0..=1.0).contains(&self.playback.volume) {
            return Err("playback.volume must be between 0.0 and 1.0".to_string());
        }
        if !self.playback.rate.is_finite() || self.playback.rate <= 0.0 {
            return Err("playback.rate must be positive".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `VIVACE_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("VIVACE_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/vivace/config.toml`
/// or `~/.config/vivace/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("vivace").join("config.toml"))
}
