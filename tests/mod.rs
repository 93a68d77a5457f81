//! Integration tests for movplay
//!
//! Tests are organized by component:
//! - subtitles_test: subtitle classification and download
//! - player_test: per-platform dispatch, argument order, failure propagation
//! - cli_test: argument parsing and exit codes

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
