//! Playback hand-off
//!
//! - Player: per-platform dispatch to VLC
//! - Launcher: command construction and process spawning
//! - Subtitles: remote subtitle download into the temp dir

pub mod launcher;
pub mod player;
pub mod subtitles;

pub use launcher::{ProcessLauncher, Spawner, SystemSpawner};
pub use player::{Player, PlayerError};
pub use subtitles::{is_remote_subtitle, SubtitleResolver};
