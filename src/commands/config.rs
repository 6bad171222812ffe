//! Configuration file commands.

use std::path::Path;
use std::process::ExitCode;

use panel_layout::config::{default, xdg, ConfigError, ConfigLoader};

/// Writes the commented default config to `path` or the XDG location.
pub(crate) fn run_config_init_command(path: Option<&Path>, force: bool) -> ExitCode {
    let result = match path {
        Some(path) => default::create_default_config_at(path, force),
        None => default::create_default_config(force),
    };
    finish(result.map(|path| {
        println!("Created configuration at {}", path.display());
    }))
}

/// Prints the config file path in use.
pub(crate) fn run_config_path_command(path: Option<&Path>) -> ExitCode {
    match path {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", xdg::config_path().display()),
    }
    ExitCode::SUCCESS
}

/// Loads and validates the config, then prints the effective values.
pub(crate) fn run_config_validate_command(path: Option<&Path>) -> ExitCode {
    finish(ConfigLoader::load(path).map(|config| {
        println!("Configuration is valid");
        println!("{config:#?}");
    }))
}

fn finish(result: Result<(), ConfigError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Config error: {e}");
            ExitCode::FAILURE
        }
    }
}
