//! VLC player front end
//!
//! Hands a [`Media`] off to VLC in whatever way the current platform allows:
//! spawning the desktop binary, firing an Android intent, or leaving a
//! `vlc://` link on the iOS clipboard for the user to open.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::launcher::{ProcessLauncher, Spawner, SystemSpawner};
use super::subtitles::SubtitleResolver;
use crate::config::PlaybackConfig;
use crate::models::{LaunchResult, Media, Platform};

/// Clipboard device exposed by iSH on iOS
pub const IOS_CLIPBOARD_PATH: &str = "/dev/clipboard";

/// Errors from player operations
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Player '{0}' not found. Install it first.")]
    NotFound(String),
    #[error("Platform '{0}' is not supported by VLC")]
    NotSupported(String),
    #[error("Stream URL must not be empty")]
    EmptyUrl,
    #[error("Failed to download subtitles from {url}: {source}")]
    SubtitleFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Subtitle server returned HTTP {status} for {url}")]
    SubtitleStatus { url: String, status: u16 },
    #[error("Failed to save subtitles: {0}")]
    SubtitleWrite(#[source] io::Error),
    #[error("Failed to write to clipboard {}: {source}", path.display())]
    Clipboard {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to start player: {0}")]
    StartFailed(#[source] io::Error),
}

impl PlayerError {
    /// Whether the failure happened while fetching remote subtitles
    pub fn is_subtitle_fetch(&self) -> bool {
        matches!(
            self,
            PlayerError::SubtitleFetch { .. } | PlayerError::SubtitleStatus { .. }
        )
    }
}

/// VLC launcher bound to one platform and one set of preferences
pub struct Player {
    platform: Platform,
    config: PlaybackConfig,
    launcher: ProcessLauncher,
    resolver: SubtitleResolver,
    spawner: Arc<dyn Spawner>,
    clipboard_path: PathBuf,
}

impl Player {
    /// Create a player for `platform` using the given preferences
    pub fn new(platform: Platform, config: PlaybackConfig) -> Self {
        Self {
            platform,
            launcher: ProcessLauncher::new(config.player_command()),
            resolver: SubtitleResolver::with_timeout(config.subtitle_timeout()),
            config,
            spawner: Arc::new(SystemSpawner),
            clipboard_path: PathBuf::from(IOS_CLIPBOARD_PATH),
        }
    }

    /// Replace the process spawner
    pub fn with_spawner(mut self, spawner: Arc<dyn Spawner>) -> Self {
        self.spawner = spawner;
        self
    }

    /// Replace the subtitle resolver
    pub fn with_resolver(mut self, resolver: SubtitleResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Write the iOS hand-off link somewhere other than `/dev/clipboard`
    pub fn with_clipboard_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.clipboard_path = path.into();
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn launcher(&self) -> &ProcessLauncher {
        &self.launcher
    }

    /// Play `media` in VLC
    ///
    /// Returns the spawned process, or [`LaunchResult::ManualHandoff`] on iOS
    /// where nothing can be spawned. The caller owns the child process.
    /// Media with a blank `url` is rejected before anything else happens.
    pub async fn play(&self, media: &Media) -> Result<LaunchResult, PlayerError> {
        if media.url.trim().is_empty() {
            warn!(title = %media.display_name, "Refusing to play media without a stream URL");
            return Err(PlayerError::EmptyUrl);
        }

        info!(platform = %self.platform, title = %media.display_name, "Launching VLC Media Player...");

        match self.platform {
            Platform::Android => self.play_android(media),
            Platform::IOS => self.play_ios(media).await,
            Platform::Linux | Platform::Windows => self.play_desktop(media).await,
        }
    }

    fn play_android(&self, media: &Media) -> Result<LaunchResult, PlayerError> {
        let command = ProcessLauncher::android_command(media);
        ProcessLauncher::launch(self.spawner.as_ref(), &command).map(LaunchResult::Spawned)
    }

    async fn play_ios(&self, media: &Media) -> Result<LaunchResult, PlayerError> {
        debug!("Detected iOS, handing the stream off through the clipboard");

        let clipboard_url = format!("vlc://{}", media.url);
        tokio::fs::write(&self.clipboard_path, &clipboard_url)
            .await
            .map_err(|source| PlayerError::Clipboard {
                path: self.clipboard_path.clone(),
                source,
            })?;

        info!("The URL was copied into your clipboard. To play it, open a browser and paste the URL.");

        Ok(LaunchResult::ManualHandoff {
            clipboard_url,
            clipboard_path: self.clipboard_path.clone(),
        })
    }

    async fn play_desktop(&self, media: &Media) -> Result<LaunchResult, PlayerError> {
        let subtitle_path = self.resolver.resolve(media.subtitles.as_deref()).await?;

        let command = self.launcher.desktop_command(
            media,
            subtitle_path.as_deref(),
            self.config.resolution,
        );

        ProcessLauncher::launch(self.spawner.as_ref(), &command).map(LaunchResult::Spawned)
    }
}
