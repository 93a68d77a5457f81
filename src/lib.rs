//! movplay - hand resolved streams off to VLC
//!
//! Takes a [`Media`] description of a stream and launches it in VLC the way
//! the current platform allows.
//!
//! # Modules
//!
//! - `models` - Media, Platform and launch result types
//! - `config` - Playback preferences (resolution cap, player path)
//! - `platform` - Runtime platform detection
//! - `stream` - Player dispatch, command construction, subtitle download
//! - `cli` / `commands` - Command-line front end

pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod platform;
pub mod stream;

// Re-export commonly used types
pub use config::PlaybackConfig;
pub use models::{LaunchCommand, LaunchResult, Media, Platform};
pub use stream::{Player, PlayerError, ProcessLauncher, Spawner, SubtitleResolver, SystemSpawner};
