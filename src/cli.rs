//! CLI - Command Line Interface for movplay
//!
//! Thin front end over [`crate::stream::Player`]. All output is
//! JSON-parseable when `--json` is passed or stdout is not a terminal.
//!
//! # Examples
//!
//! ```bash
//! # Play a stream with a referrer and remote subtitles
//! movplay play "https://cdn.example/x.m3u8" --title "Show S1E1" \
//!     --referrer "https://site.example" --subtitles "https://subs.example/en.srt"
//!
//! # Show the VLC command line without launching anything
//! movplay command "https://cdn.example/x.m3u8" --resolution 720
//!
//! # Which platform would be used?
//! movplay detect --json
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::models::{Media, Platform};

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Subtitle download failed
    NetworkError = 3,
    /// Player executable missing
    PlayerNotFound = 4,
    /// Platform not supported
    NotSupported = 5,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// movplay - hand streams off to VLC
#[derive(Parser, Debug)]
#[command(
    name = "movplay",
    version,
    author = "Gorka & Hermes",
    about = "Hand movie and show streams off to VLC",
    after_help = "EXAMPLES:\n\
                  movplay play URL --title \"Show S1E1\"     Play a stream\n\
                  movplay command URL --resolution 720     Print the VLC command line\n\
                  movplay detect --json                    Show the detected platform"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }

    /// Default tracing filter for this invocation
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "movplay=debug"
        } else if self.quiet {
            "movplay=error"
        } else {
            "movplay=info"
        }
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a stream in VLC
    #[command(visible_alias = "p")]
    Play(PlayCmd),

    /// Print the desktop VLC command line without launching it
    #[command(visible_alias = "cmd")]
    Command(CommandCmd),

    /// Print the detected platform
    Detect(DetectCmd),
}

/// Stream description shared by `play` and `command`
#[derive(Args, Debug, Clone)]
pub struct MediaArgs {
    /// Stream URL
    #[arg(required = true)]
    pub url: String,

    /// Title shown in the player window (defaults to the URL)
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// HTTP referrer sent with stream requests
    #[arg(long, short = 'r')]
    pub referrer: Option<String>,

    /// Separate audio track URL
    #[arg(long, short = 'a')]
    pub audio: Option<String>,

    /// Subtitle file path or URL
    #[arg(long, short = 's')]
    pub subtitles: Option<String>,

    /// Maximum resolution (overrides config)
    #[arg(long)]
    pub resolution: Option<u32>,
}

impl MediaArgs {
    /// Build the media descriptor, failing on an empty URL
    pub fn to_media(&self) -> Result<Media, &'static str> {
        let title = self.title.clone().unwrap_or_else(|| self.url.clone());
        let mut media = Media::new(&self.url, title).ok_or("Stream URL must not be empty")?;
        media.referrer = self.referrer.clone();
        media.audio_url = self.audio.clone();
        media.subtitles = self.subtitles.clone();
        Ok(media)
    }
}

/// Play a stream
#[derive(Args, Debug)]
pub struct PlayCmd {
    #[command(flatten)]
    pub media: MediaArgs,

    /// Platform to launch for (linux, windows, android, ios); detected when omitted
    #[arg(long, short = 'p')]
    pub platform: Option<String>,
}

/// Print the command line
#[derive(Args, Debug)]
pub struct CommandCmd {
    #[command(flatten)]
    pub media: MediaArgs,
}

/// Print the detected platform
#[derive(Args, Debug)]
pub struct DetectCmd {}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// Outcome of `play`
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PlayResponse {
    /// VLC was started
    Playing {
        platform: Platform,
        #[serde(skip_serializing_if = "Option::is_none")]
        pid: Option<u32>,
        title: String,
    },
    /// Nothing was started; the user pastes the link themselves
    Manual {
        platform: Platform,
        clipboard_url: String,
    },
}

/// Output of `command`
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub argv: Vec<String>,
}

/// Output of `detect`
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectResponse {
    pub platform: Platform,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data, or `human` when not in JSON mode
    pub fn print<T: Serialize>(&self, data: T, human: impl std::fmt::Display) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", human);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}
