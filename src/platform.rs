//! Platform detection
//!
//! Works out which [`Platform`] the binary is running on so the player can be
//! constructed for it. Termux on Android and iSH on iOS both report Linux to
//! the compiler, so those are told apart at runtime.

use std::path::Path;

use crate::models::Platform;
use crate::stream::PlayerError;

/// Detect the platform this process is running on
pub fn detect() -> Result<Platform, PlayerError> {
    if cfg!(target_os = "windows") {
        return Ok(Platform::Windows);
    }

    if cfg!(target_os = "android") || is_android_userland() {
        return Ok(Platform::Android);
    }

    if cfg!(target_os = "linux") {
        if Path::new("/proc/ish").exists() {
            return Ok(Platform::IOS);
        }
        return Ok(Platform::Linux);
    }

    Err(PlayerError::NotSupported(std::env::consts::OS.to_string()))
}

/// Termux and other Android userlands export these
fn is_android_userland() -> bool {
    std::env::var_os("TERMUX_VERSION").is_some() || std::env::var_os("ANDROID_ROOT").is_some()
}
