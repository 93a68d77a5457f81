//! Playback preferences for movplay
//!
//! Config is stored at ~/.config/movplay/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Executable used when no override is configured
pub const DEFAULT_PLAYER: &str = "vlc";

/// Subtitle download timeout when none is configured
pub const DEFAULT_SUBTITLE_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable that overrides the configured resolution
pub const RESOLUTION_ENV: &str = "MOVPLAY_RESOLUTION";

/// User playback preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Maximum resolution hint passed to the player
    pub resolution: Option<u32>,
    /// Player executable override (defaults to `vlc` on PATH)
    pub vlc_path: Option<String>,
    /// Timeout for remote subtitle downloads, in seconds
    pub subtitle_timeout_secs: Option<u64>,
}

impl PlaybackConfig {
    /// Get config file path (~/.config/movplay/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("movplay").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    ///
    /// `MOVPLAY_RESOLUTION` wins over the file value.
    pub fn load() -> Self {
        let config = Self::path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default();

        config.with_resolution_env(std::env::var(RESOLUTION_ENV).ok().as_deref())
    }

    /// Load config from a specific file, falling back to defaults when it is
    /// missing or malformed
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Apply a `MOVPLAY_RESOLUTION` value; invalid values are ignored
    pub fn with_resolution_env(mut self, value: Option<&str>) -> Self {
        if let Some(resolution) = value.and_then(parse_resolution) {
            self.resolution = Some(resolution);
        }
        self
    }

    /// Apply a `--resolution` flag, which beats both file and environment
    pub fn with_cli_resolution(mut self, resolution: Option<u32>) -> Self {
        if resolution.is_some() {
            self.resolution = resolution;
        }
        self
    }

    /// Player executable to spawn on Linux/Windows
    pub fn player_command(&self) -> &str {
        self.vlc_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_PLAYER)
    }

    pub fn subtitle_timeout(&self) -> Duration {
        self.subtitle_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SUBTITLE_TIMEOUT)
    }
}

/// Parse a positive resolution value, ignoring anything else
pub fn parse_resolution(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|r| *r > 0)
}
