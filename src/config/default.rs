//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()`
//! and functions to write it to a config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# panel-layout configuration
#
# This file was auto-generated with default values.
# Uncomment and modify options to customize your dashboard.
#
# Location: $XDG_CONFIG_HOME/panel-layout/config.toml

# ==============================================================================
# Dashboard
# ==============================================================================

[dashboard]

# Whose layout to open. Each owner has an independent layout.
# Letters, digits, '-' and '_' only.
owner = "default"

# Grid width used to place panels (1-12).
# Panel footprints: small 1x1, medium 2x1, large 2x2, extra-large 4x2.
columns = 4

# ==============================================================================
# Storage
# ==============================================================================

[storage]

# Directory holding one JSON layout file per owner.
# Empty means $XDG_DATA_HOME/panel-layout/layouts.
# Tilde (~) is expanded to the user's home directory.
dir = ""

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Logging verbosity, overridden by the PANEL_LAYOUT_LOG environment variable.
# Options: "error", "warn", "info", "debug", "trace"
level = "warn"
"#;

/// Creates (or force-overwrites) the default config file at `path`.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
pub fn create_default_config_at(path: &Path, force: bool) -> Result<PathBuf, ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(path)?;
    Ok(path.to_path_buf())
}

/// [`create_default_config_at`] for the default XDG location.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    create_default_config_at(&xdg::config_path(), force)
}

/// Writes the template, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        xdg::ensure_dir(parent).map_err(write_error)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
