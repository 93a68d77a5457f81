//! CLI Command Tests
//!
//! Argument parsing, media construction and JSON envelopes.

mod cli_parsing {
    use clap::Parser;
    use movplay::cli::{Cli, Command};

    #[test]
    fn test_play_command_basic() {
        let cli = Cli::parse_from(["movplay", "play", "http://cdn/x.m3u8"]);
        match cli.command {
            Command::Play(cmd) => {
                assert_eq!(cmd.media.url, "http://cdn/x.m3u8");
                assert!(cmd.media.title.is_none());
                assert!(cmd.platform.is_none());
                assert!(cmd.media.resolution.is_none());
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_play_command_all_flags() {
        let cli = Cli::parse_from([
            "movplay",
            "play",
            "http://cdn/x.m3u8",
            "--title",
            "Show S1E1",
            "-r",
            "http://site",
            "--audio",
            "http://cdn/a.m3u8",
            "-s",
            "/subs/en.srt",
            "--resolution",
            "1080",
            "--platform",
            "android",
            "--json",
        ]);
        assert!(cli.json);
        match cli.command {
            Command::Play(cmd) => {
                assert_eq!(cmd.media.title.as_deref(), Some("Show S1E1"));
                assert_eq!(cmd.media.referrer.as_deref(), Some("http://site"));
                assert_eq!(cmd.media.audio.as_deref(), Some("http://cdn/a.m3u8"));
                assert_eq!(cmd.media.subtitles.as_deref(), Some("/subs/en.srt"));
                assert_eq!(cmd.media.resolution, Some(1080));
                assert_eq!(cmd.platform.as_deref(), Some("android"));
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_play_requires_url() {
        assert!(Cli::try_parse_from(["movplay", "play"]).is_err());
    }

    #[test]
    fn test_command_alias() {
        let cli = Cli::parse_from(["movplay", "cmd", "http://cdn/x.m3u8"]);
        assert!(matches!(cli.command, Command::Command(_)));
    }

    #[test]
    fn test_detect_command() {
        let cli = Cli::parse_from(["movplay", "detect", "-q"]);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Command::Detect(_)));
    }

    #[test]
    fn test_log_filter() {
        let verbose = Cli::parse_from(["movplay", "-v", "detect"]);
        assert_eq!(verbose.log_filter(), "movplay=debug");
        let normal = Cli::parse_from(["movplay", "detect"]);
        assert_eq!(normal.log_filter(), "movplay=info");
    }
}

mod media_args {
    use clap::Parser;
    use movplay::cli::{Cli, Command};

    fn media_args(args: &[&str]) -> movplay::cli::MediaArgs {
        let argv = ["movplay", "play"].iter().chain(args).copied();
        match Cli::parse_from(argv).command {
            Command::Play(cmd) => cmd.media,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_title_defaults_to_url() {
        let media = media_args(&["http://cdn/x.m3u8"]).to_media().unwrap();
        assert_eq!(media.display_name, "http://cdn/x.m3u8");
    }

    #[test]
    fn test_empty_url_rejected() {
        assert!(media_args(&[""]).to_media().is_err());
    }

    #[test]
    fn test_fields_carried_over() {
        let media = media_args(&["http://cdn/x", "-t", "Film", "-a", "http://cdn/a"])
            .to_media()
            .unwrap();
        assert_eq!(media.display_name, "Film");
        assert_eq!(media.audio_url.as_deref(), Some("http://cdn/a"));
        assert!(media.referrer.is_none());
        assert!(media.subtitles.is_none());
    }
}

mod json_output {
    use movplay::cli::{ExitCode, JsonOutput, PlayResponse};
    use movplay::Platform;

    #[test]
    fn test_play_response_playing() {
        let response = PlayResponse::Playing {
            platform: Platform::Linux,
            pid: Some(42),
            title: "Show S1E1".into(),
        };
        let json = serde_json::to_value(JsonOutput::success(response)).unwrap();
        assert_eq!(json["data"]["status"], "playing");
        assert_eq!(json["data"]["platform"], "linux");
        assert_eq!(json["data"]["pid"], 42);
        assert!(json.get("exit_code").is_none());
    }

    #[test]
    fn test_play_response_manual() {
        let response = PlayResponse::Manual {
            platform: Platform::IOS,
            clipboard_url: "vlc://http://cdn/x".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "manual");
        assert_eq!(json["platform"], "ios");
        assert_eq!(json["clipboard_url"], "vlc://http://cdn/x");
    }

    #[test]
    fn test_error_envelope() {
        let output = JsonOutput::<()>::error_msg("Player 'vlc' not found", ExitCode::PlayerNotFound);
        let json = serde_json::to_value(output).unwrap();
        assert_eq!(json["error"], "Player 'vlc' not found");
        assert_eq!(json["exit_code"], 4);
        assert!(json.get("data").is_none());
    }
}
