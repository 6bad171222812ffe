//! TOML configuration schema types.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a partial or empty file is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::xdg;

/// Largest grid width accepted for `dashboard.columns`.
pub const MAX_COLUMNS: u16 = 12;

/// Root configuration encompassing all sections.
///
/// ```toml
/// [dashboard]
/// [storage]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Dashboard owner and grid settings.
    pub dashboard: DashboardConfig,
    /// Where layouts are stored.
    pub storage: StorageConfig,
    /// Logging settings.
    pub log: LogConfig,
}

impl Config {
    /// Directory holding per-owner layout files.
    ///
    /// An empty `storage.dir` resolves to the XDG data directory.
    pub fn layouts_dir(&self) -> PathBuf {
        if self.storage.dir.is_empty() {
            xdg::layouts_dir()
        } else {
            xdg::expand_tilde(&self.storage.dir)
        }
    }
}

/// `[dashboard]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Whose layout to open; the persistence key.
    pub owner: String,
    /// Grid width used when placing panels.
    pub columns: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            owner: "default".to_string(),
            columns: 4,
        }
    }
}

/// `[storage]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Layouts directory. Empty means the XDG data directory.
    pub dir: String,
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Verbosity used when `PANEL_LAYOUT_LOG` is unset.
    pub level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (default).
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_config_all_fields() {
        let toml_str = r#"
[dashboard]
owner = "alice"
columns = 6

[storage]
dir = "/srv/layouts"

[log]
level = "debug"
"#;
        let config: Config = toml::from_str(toml_str).expect("valid TOML should parse");
        assert_eq!(config.dashboard.owner, "alice");
        assert_eq!(config.dashboard.columns, 6);
        assert_eq!(config.storage.dir, "/srv/layouts");
        assert_eq!(config.log.level, LogLevel::Debug);
    }

    #[test]
    fn parse_empty_string_uses_all_defaults() {
        let config: Config = toml::from_str("").expect("empty string should parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_unknown_fields_are_ignored() {
        let toml_str = r#"
unknown_key = "hello"

[dashboard]
future_field = 42
"#;
        let config: Config = toml::from_str(toml_str).expect("unknown fields should be ignored");
        assert_eq!(config.dashboard.owner, "default");
    }

    #[test]
    fn default_values() {
        let config = Config::default();
        assert_eq!(config.dashboard.owner, "default");
        assert_eq!(config.dashboard.columns, 4);
        assert_eq!(config.storage.dir, "");
        assert_eq!(config.log.level, LogLevel::Warn);
    }

    #[test]
    fn log_level_all_variants() {
        for (input, expected) in [
            ("error", LogLevel::Error),
            ("warn", LogLevel::Warn),
            ("info", LogLevel::Info),
            ("debug", LogLevel::Debug),
            ("trace", LogLevel::Trace),
        ] {
            let toml_str = format!("level = \"{}\"", input);
            let log: LogConfig = toml::from_str(&toml_str).expect("log level should parse");
            assert_eq!(log.level, expected);
            assert_eq!(log.level.as_directive(), input);
        }
    }

    #[test]
    fn invalid_log_level_returns_error() {
        let result: Result<LogConfig, _> = toml::from_str(r#"level = "verbose""#);
        assert!(result.is_err());
    }

    #[test]
    fn roundtrip_serialize_deserialize() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("serialization should succeed");
        let parsed: Config = toml::from_str(&toml_str).expect("roundtrip should parse");
        assert_eq!(config, parsed);
    }

    #[test]
    fn layouts_dir_uses_configured_dir() {
        let mut config = Config::default();
        config.storage.dir = "/srv/layouts".to_string();
        assert_eq!(config.layouts_dir(), PathBuf::from("/srv/layouts"));
    }

    #[test]
    fn layouts_dir_expands_tilde() {
        let mut config = Config::default();
        config.storage.dir = "~/layouts".to_string();
        assert_eq!(config.layouts_dir(), xdg::expand_tilde("~/layouts"));
        assert!(!config.layouts_dir().starts_with("~"));
    }
}
