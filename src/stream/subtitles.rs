//! Subtitle resolution
//!
//! Turns a subtitle reference into a local file the player can open.
//! Remote references are downloaded once per call into
//! `<temp dir>/mov-cli/<uuid>`; local paths pass through untouched.
//! Downloaded files are never cleaned up.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use super::player::PlayerError;
use crate::config::DEFAULT_SUBTITLE_TIMEOUT;

/// Directory name under the system temp dir holding downloaded subtitles
pub const SUBTITLE_DIR_NAME: &str = "mov-cli";

/// `http(s)://host[.tld][:port][/path]`
const REMOTE_SUBTITLE_PATTERN: &str = r"^https?://[\w.-]+(:\d+)?(/\S*)?$";

fn remote_subtitle_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(REMOTE_SUBTITLE_PATTERN).expect("valid subtitle URL pattern"))
}

/// Whether a subtitle reference points at a remote file that must be downloaded
pub fn is_remote_subtitle(subtitles: &str) -> bool {
    remote_subtitle_regex().is_match(subtitles)
}

/// Resolves subtitle references to local paths
pub struct SubtitleResolver {
    client: reqwest::Client,
    download_dir: PathBuf,
}

impl SubtitleResolver {
    /// Create a resolver writing into `<temp dir>/mov-cli`
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_SUBTITLE_TIMEOUT)
    }

    /// Create a resolver with a custom download timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, ?timeout, "Failed to build HTTP client, subtitle downloads have no timeout");
                reqwest::Client::new()
            }
        };

        Self {
            client,
            download_dir: std::env::temp_dir().join(SUBTITLE_DIR_NAME),
        }
    }

    /// Write downloads somewhere other than the system temp dir (for testing)
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Resolve a subtitle reference to a local path
    ///
    /// - `None` or blank input resolves to `None`
    /// - remote URLs are fetched exactly once and written to a fresh file
    /// - anything else is returned as a local path, unchanged
    pub async fn resolve(&self, subtitles: Option<&str>) -> Result<Option<PathBuf>, PlayerError> {
        let Some(subtitles) = subtitles.filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };

        if !is_remote_subtitle(subtitles) {
            return Ok(Some(PathBuf::from(subtitles)));
        }

        self.download(subtitles).await.map(Some)
    }

    /// Download a remote subtitle file into a freshly named file
    async fn download(&self, url: &str) -> Result<PathBuf, PlayerError> {
        debug!(url, "Downloading subtitles");

        let response = self.client.get(url).send().await.map_err(|source| {
            warn!(url, error = %source, "Subtitle download failed");
            PlayerError::SubtitleFetch {
                url: url.to_string(),
                source,
            }
        })?;

        if !response.status().is_success() {
            warn!(url, status = %response.status(), "Subtitle server returned an error");
            return Err(PlayerError::SubtitleStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| PlayerError::SubtitleFetch {
                url: url.to_string(),
                source,
            })?;

        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(PlayerError::SubtitleWrite)?;

        let path = self.download_dir.join(Uuid::new_v4().to_string());
        tokio::fs::write(&path, &body)
            .await
            .map_err(PlayerError::SubtitleWrite)?;

        debug!(path = %path.display(), bytes = body.len(), "Subtitles saved");
        Ok(path)
    }
}

impl Default for SubtitleResolver {
    fn default() -> Self {
        Self::new()
    }
}
