//! CLI command implementations

use crate::cli::{
    CommandCmd, CommandResponse, DetectCmd, DetectResponse, ExitCode, Output, PlayCmd,
    PlayResponse,
};
use crate::config::PlaybackConfig;
use crate::models::{LaunchResult, Platform};
use crate::platform;
use crate::stream::{Player, PlayerError, ProcessLauncher};

/// Map a player failure to its exit code
pub fn exit_code_for(error: &PlayerError) -> ExitCode {
    match error {
        PlayerError::NotFound(_) => ExitCode::PlayerNotFound,
        PlayerError::NotSupported(_) => ExitCode::NotSupported,
        PlayerError::EmptyUrl => ExitCode::InvalidArgs,
        PlayerError::SubtitleFetch { .. } | PlayerError::SubtitleStatus { .. } => {
            ExitCode::NetworkError
        }
        PlayerError::SubtitleWrite(_)
        | PlayerError::Clipboard { .. }
        | PlayerError::StartFailed(_) => ExitCode::Error,
    }
}

/// Config from disk with the command-line resolution applied on top
fn load_config(resolution: Option<u32>) -> PlaybackConfig {
    PlaybackConfig::load().with_cli_resolution(resolution)
}

// =============================================================================
// Play Command
// =============================================================================

pub async fn play_cmd(cmd: PlayCmd, output: &Output) -> ExitCode {
    let media = match cmd.media.to_media() {
        Ok(m) => m,
        Err(e) => return output.error(e, ExitCode::InvalidArgs),
    };

    let platform = match cmd.platform.as_deref() {
        Some(name) => name.parse::<Platform>(),
        None => platform::detect(),
    };
    let platform = match platform {
        Ok(p) => p,
        Err(e) => return output.error(e.to_string(), exit_code_for(&e)),
    };

    let player = Player::new(platform, load_config(cmd.media.resolution));
    output.info(format!("Opening {} in VLC ({})...", media.display_name, platform));

    match player.play(&media).await {
        Ok(LaunchResult::Spawned(child)) => {
            let response = PlayResponse::Playing {
                platform,
                pid: child.id(),
                title: media.display_name.clone(),
            };
            let human = format!("Playing {}", media.display_name);
            if let Err(e) = output.print(&response, human) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Ok(LaunchResult::ManualHandoff { clipboard_url, .. }) => {
            let human = format!(
                "Copied {} to the clipboard. Open a browser and paste it to play.",
                clipboard_url
            );
            let response = PlayResponse::Manual {
                platform,
                clipboard_url,
            };
            if let Err(e) = output.print(&response, human) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(e.to_string(), exit_code_for(&e)),
    }
}

// =============================================================================
// Command (dry run)
// =============================================================================

pub async fn command_cmd(cmd: CommandCmd, output: &Output) -> ExitCode {
    let media = match cmd.media.to_media() {
        Ok(m) => m,
        Err(e) => return output.error(e, ExitCode::InvalidArgs),
    };

    let config = load_config(cmd.media.resolution);
    let launcher = ProcessLauncher::new(config.player_command());

    // Subtitles are shown as given; nothing is downloaded here
    let subtitles = media.subtitles.as_deref().map(std::path::Path::new);
    let command = launcher.desktop_command(&media, subtitles, config.resolution);

    let response = CommandResponse {
        argv: command.argv(),
    };
    if let Err(e) = output.print(&response, &command) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Detect Command
// =============================================================================

pub async fn detect_cmd(_cmd: DetectCmd, output: &Output) -> ExitCode {
    match platform::detect() {
        Ok(platform) => {
            if let Err(e) = output.print(&DetectResponse { platform }, platform) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(e.to_string(), exit_code_for(&e)),
    }
}
