//! Platform-aware path resolution for panel-layout.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/panel-layout` or `~/.config/panel-layout`
//! - Data: `$XDG_DATA_HOME/panel-layout` or `~/.local/share/panel-layout`
//!
//! On **macOS**, uses Apple conventions with XDG env var overrides:
//! - Config: `$XDG_CONFIG_HOME/panel-layout` or `~/Library/Application Support/panel-layout`
//! - Data: `$XDG_DATA_HOME/panel-layout` or `~/Library/Application Support/panel-layout`

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "panel-layout";

/// Returns the configuration directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/panel-layout` (if env var set, any platform)
/// 2. Platform default
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Returns the path to the main configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns the data directory holding stored layouts.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/panel-layout` (if env var set, any platform)
/// 2. Platform default
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_data_dir().join(APP_NAME)
}

/// Default directory for per-owner layout files.
pub fn layouts_dir() -> PathBuf {
    data_dir().join("layouts")
}

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().unwrap_or_else(|| home().join("Library/Application Support"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        home().join(".config")
    }
}

fn platform_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir().unwrap_or_else(|| home().join("Library/Application Support"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        home().join(".local/share")
    }
}

/// Expands a leading `~` in a path string to the user's home directory.
///
/// If the path does not start with `~`, it is returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home().join(rest)
    } else if path == "~" {
        home()
    } else {
        PathBuf::from(path)
    }
}

/// Creates a directory and all parent directories with mode 0700.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}
