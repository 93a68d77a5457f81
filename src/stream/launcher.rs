//! Player command construction and spawning
//!
//! Builds the VLC invocation for each platform and hands it to a [`Spawner`].

use std::io;
use std::path::Path;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::{debug, error};

use super::player::PlayerError;
use crate::config::DEFAULT_PLAYER;
use crate::models::{LaunchCommand, Media};

/// Activity started by the Android front end
pub const ANDROID_VLC_COMPONENT: &str =
    "org.videolan.vlc/org.videolan.vlc.gui.video.VideoPlayerActivity";

/// Activity manager binary on Android
pub const ANDROID_ACTIVITY_MANAGER: &str = "am";

/// Starts OS processes for assembled commands
pub trait Spawner: Send + Sync {
    fn spawn(&self, command: &LaunchCommand) -> io::Result<Child>;
}

/// Spawns real processes, detached from our stdout/stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn(&self, command: &LaunchCommand) -> io::Result<Child> {
        Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
    }
}

/// Assembles player command lines and launches them
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    executable: String,
}

impl ProcessLauncher {
    /// Launcher for the player found at `executable`
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Command line for the desktop (Linux/Windows) player
    ///
    /// Flags are appended in a fixed order: title, url, quiet, then the
    /// optional referrer, audio track, subtitle file and resolution cap.
    /// `subtitle_path` must already be a local path.
    pub fn desktop_command(
        &self,
        media: &Media,
        subtitle_path: Option<&Path>,
        resolution: Option<u32>,
    ) -> LaunchCommand {
        let mut cmd = LaunchCommand::new(&self.executable)
            .arg(format!("--meta-title=\"{}\"", media.display_name))
            .arg(&media.url)
            .arg("--quiet");

        if let Some(referrer) = &media.referrer {
            cmd = cmd.arg(format!("--http-referrer=\"{}\"", referrer));
        }

        // Not listed in `vlc --help`, but VLC plays it as an extra input
        if let Some(audio_url) = &media.audio_url {
            cmd = cmd.arg(format!("--input-slave={}", audio_url));
        }

        if let Some(path) = subtitle_path {
            cmd = cmd.arg(format!("--sub-file={}", path.display()));
        }

        if let Some(resolution) = resolution {
            cmd = cmd.arg(format!("--adaptive-maxwidth={}", resolution));
        }

        cmd
    }

    /// Intent-style command for VLC on Android
    ///
    /// Only the title and URL are forwarded; the Android front end has no
    /// way to take a referrer, audio track or subtitles.
    pub fn android_command(media: &Media) -> LaunchCommand {
        LaunchCommand::new(ANDROID_ACTIVITY_MANAGER)
            .arg("start")
            .arg("-n")
            .arg(ANDROID_VLC_COMPONENT)
            .arg("-e")
            .arg("title")
            .arg(&media.display_name)
            .arg(&media.url)
    }

    /// Spawn `command`, classifying a missing executable as [`PlayerError::NotFound`]
    pub fn launch(spawner: &dyn Spawner, command: &LaunchCommand) -> Result<Child, PlayerError> {
        debug!(argv = ?command.argv(), "Spawning player");

        match spawner.spawn(command) {
            Ok(child) => {
                debug!(pid = ?child.id(), "Player process spawned");
                Ok(child)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                error!(program = %command.program, "Player executable not found");
                Err(PlayerError::NotFound(command.program.clone()))
            }
            Err(e) => {
                error!(program = %command.program, error = %e, "Failed to start player");
                Err(PlayerError::StartFailed(e))
            }
        }
    }
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER)
    }
}
