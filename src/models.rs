//! Data structures shared across the launcher
//!
//! - **Media**: what to play (stream URL plus optional referrer, audio, subtitles)
//! - **Platform**: closed set of platforms the launcher knows how to drive
//! - **LaunchCommand**: program + ordered arguments handed to the OS
//! - **LaunchResult**: spawned process handle or a manual hand-off

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tokio::process::Child;

use crate::stream::PlayerError;

// =============================================================================
// Media
// =============================================================================

/// Descriptor of a resolved stream, built by the caller before each play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MediaFields")]
pub struct Media {
    /// Primary stream location (never empty)
    pub url: String,
    /// Shown as the player window title
    pub display_name: String,
    /// HTTP referrer presented when fetching the stream
    pub referrer: Option<String>,
    /// Separately hosted audio track for split adaptive streams
    pub audio_url: Option<String>,
    /// Local path or remote URL of a subtitle file
    pub subtitles: Option<String>,
}

/// Unvalidated wire shape of [`Media`]
#[derive(Deserialize)]
struct MediaFields {
    url: String,
    display_name: String,
    referrer: Option<String>,
    audio_url: Option<String>,
    subtitles: Option<String>,
}

impl TryFrom<MediaFields> for Media {
    type Error = PlayerError;

    fn try_from(fields: MediaFields) -> Result<Self, Self::Error> {
        let mut media = Media::new(fields.url, fields.display_name).ok_or(PlayerError::EmptyUrl)?;
        media.referrer = fields.referrer;
        media.audio_url = fields.audio_url;
        media.subtitles = fields.subtitles;
        Ok(media)
    }
}

impl Media {
    /// Create a media descriptor with no optional fields set
    ///
    /// Returns `None` when `url` is empty or whitespace.
    pub fn new(url: impl Into<String>, display_name: impl Into<String>) -> Option<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return None;
        }
        Some(Self {
            url,
            display_name: display_name.into(),
            referrer: None,
            audio_url: None,
            subtitles: None,
        })
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    pub fn with_audio_url(mut self, audio_url: impl Into<String>) -> Self {
        self.audio_url = Some(audio_url.into());
        self
    }

    pub fn with_subtitles(mut self, subtitles: impl Into<String>) -> Self {
        self.subtitles = Some(subtitles.into());
        self
    }
}

// =============================================================================
// Platform
// =============================================================================

/// Platforms the launcher can drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Windows,
    Android,
    IOS,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Linux,
        Platform::Windows,
        Platform::Android,
        Platform::IOS,
    ];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Linux => write!(f, "Linux"),
            Platform::Windows => write!(f, "Windows"),
            Platform::Android => write!(f, "Android"),
            Platform::IOS => write!(f, "iOS"),
        }
    }
}

impl FromStr for Platform {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::IOS),
            _ => Err(PlayerError::NotSupported(s.trim().to_string())),
        }
    }
}

// =============================================================================
// Launch
// =============================================================================

/// A fully assembled external command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Program followed by its arguments, in spawn order
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))
    }
}

/// Outcome of a play request
#[derive(Debug)]
pub enum LaunchResult {
    /// A player process was started; the caller owns the handle
    Spawned(Child),
    /// Nothing was spawned; the user has to finish playback by hand
    ManualHandoff {
        clipboard_url: String,
        clipboard_path: PathBuf,
    },
}

impl LaunchResult {
    pub fn is_spawned(&self) -> bool {
        matches!(self, LaunchResult::Spawned(_))
    }

    /// Borrow the spawned process, if any
    pub fn child(&self) -> Option<&Child> {
        match self {
            LaunchResult::Spawned(child) => Some(child),
            LaunchResult::ManualHandoff { .. } => None,
        }
    }

    pub fn into_child(self) -> Option<Child> {
        match self {
            LaunchResult::Spawned(child) => Some(child),
            LaunchResult::ManualHandoff { .. } => None,
        }
    }
}
