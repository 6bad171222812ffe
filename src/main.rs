//! Panel Layout - CLI entry point
//!
//! Views and edits a dashboard's panel layout. Every editing command loads
//! the owner's saved layout, applies one change and writes it back.

mod commands;

use clap::{Parser, Subcommand};
use commands::{
    run_add_command, run_catalog_command, run_config_init_command, run_config_path_command,
    run_config_validate_command, run_cycle_command, run_grid_command, run_move_command,
    run_remove_command, run_reset_command, run_resize_command, run_show_command,
    run_toggle_command, PanelRef, Target,
};
use panel_layout::config::schema::LogLevel;
use panel_layout::config::ConfigLoader;
use panel_layout::{logging, PanelSize, PanelType};
use std::path::PathBuf;
use std::process::ExitCode;

/// Adjustable dashboard panel layout
#[derive(Parser)]
#[command(name = "panel-layout")]
#[command(version, about = "Adjustable dashboard panel layout")]
struct Cli {
    /// Configuration file (defaults to the XDG config location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Layout owner (overrides dashboard.owner)
    #[arg(long, global = true)]
    owner: Option<String>,

    /// Layouts directory (overrides storage.dir)
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the panel-layout CLI
#[derive(Subcommand)]
enum Commands {
    /// List the panels in display order
    Show {
        /// Include hidden panels
        #[arg(long)]
        all: bool,
    },

    /// List every panel type and whether it can be added
    Catalog,

    /// Add a panel of the given type
    Add {
        /// Panel type (e.g. team-load, financials)
        panel_type: PanelType,
    },

    /// Remove a panel
    Remove {
        /// Panel id or type
        panel: PanelRef,
    },

    /// Show or hide a panel
    Toggle {
        /// Panel id or type
        panel: PanelRef,
    },

    /// Set a panel's size
    Resize {
        /// Panel id or type
        panel: PanelRef,
        /// Size: small, medium, large, extra-large
        size: PanelSize,
    },

    /// Advance a panel to the next size
    Cycle {
        /// Panel id or type
        panel: PanelRef,
    },

    /// Move a panel into another panel's position
    Move {
        /// Panel to move (id or type)
        panel: PanelRef,
        /// Panel whose position it takes (id or type)
        target: PanelRef,
    },

    /// Restore the default layout
    Reset,

    /// Show where visible panels land on the grid
    Grid {
        /// Column count (overrides dashboard.columns)
        #[arg(long)]
        columns: Option<u16>,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config commands must work even when the current config is broken.
    let command = match cli.command {
        Commands::Config { action } => {
            logging::init(LogLevel::default());
            let path = cli.config.as_deref();
            return match action {
                ConfigAction::Init { force } => run_config_init_command(path, force),
                ConfigAction::Path => run_config_path_command(path),
                ConfigAction::Validate => run_config_validate_command(path),
            };
        }
        command => command,
    };

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log.level);

    let target = Target::resolve(&config, cli.owner, cli.store_dir);
    tracing::debug!(owner = %target.owner, dir = %target.dir.display(), "resolved layout target");

    match command {
        Commands::Show { all } => run_show_command(&target, all),
        Commands::Catalog => run_catalog_command(&target),
        Commands::Add { panel_type } => run_add_command(&target, panel_type),
        Commands::Remove { panel } => run_remove_command(&target, &panel),
        Commands::Toggle { panel } => run_toggle_command(&target, &panel),
        Commands::Resize { panel, size } => run_resize_command(&target, &panel, size),
        Commands::Cycle { panel } => run_cycle_command(&target, &panel),
        Commands::Move { panel, target: onto } => run_move_command(&target, &panel, &onto),
        Commands::Reset => run_reset_command(&target),
        Commands::Grid { columns } => {
            run_grid_command(&target, columns.unwrap_or(config.dashboard.columns))
        }
        Commands::Config { .. } => ExitCode::SUCCESS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_show_defaults_to_visible_only() {
        let cli = Cli::try_parse_from(["panel-layout", "show"]).expect("show should parse");
        match cli.command {
            Commands::Show { all } => assert!(!all),
            _ => panic!("expected Show command"),
        }
    }

    #[test]
    fn test_show_all_flag() {
        let cli =
            Cli::try_parse_from(["panel-layout", "show", "--all"]).expect("show --all should parse");
        match cli.command {
            Commands::Show { all } => assert!(all),
            _ => panic!("expected Show command"),
        }
    }

    #[test]
    fn test_add_parses_panel_type() {
        let cli = Cli::try_parse_from(["panel-layout", "add", "team-load"])
            .expect("add team-load should parse");
        match cli.command {
            Commands::Add { panel_type } => assert_eq!(panel_type, PanelType::TeamLoad),
            _ => panic!("expected Add command"),
        }
    }

    #[test]
    fn test_add_rejects_unknown_type() {
        let result = Cli::try_parse_from(["panel-layout", "add", "sidebar"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resize_parses_short_size() {
        let cli = Cli::try_parse_from(["panel-layout", "resize", "kpi-summary", "xl"])
            .expect("resize should parse");
        match cli.command {
            Commands::Resize { panel, size } => {
                assert_eq!(panel, PanelRef::Type(PanelType::KpiSummary));
                assert_eq!(size, PanelSize::ExtraLarge);
            }
            _ => panic!("expected Resize command"),
        }
    }

    #[test]
    fn test_resize_requires_size() {
        let result = Cli::try_parse_from(["panel-layout", "resize", "kpi-summary"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_move_parses_both_panels() {
        let cli = Cli::try_parse_from(["panel-layout", "move", "payment-risk", "kpi-summary"])
            .expect("move should parse");
        match cli.command {
            Commands::Move { panel, target } => {
                assert_eq!(panel, PanelRef::Type(PanelType::PaymentRisk));
                assert_eq!(target, PanelRef::Type(PanelType::KpiSummary));
            }
            _ => panic!("expected Move command"),
        }
    }

    #[test]
    fn test_global_overrides_after_subcommand() {
        let cli = Cli::try_parse_from([
            "panel-layout",
            "reset",
            "--owner",
            "alice",
            "--store-dir",
            "/tmp/layouts",
        ])
        .expect("global flags should parse after subcommand");
        assert_eq!(cli.owner.as_deref(), Some("alice"));
        assert_eq!(cli.store_dir, Some(PathBuf::from("/tmp/layouts")));
        assert!(matches!(cli.command, Commands::Reset));
    }

    #[test]
    fn test_grid_columns_override() {
        let cli = Cli::try_parse_from(["panel-layout", "grid", "--columns", "6"])
            .expect("grid should parse");
        match cli.command {
            Commands::Grid { columns } => assert_eq!(columns, Some(6)),
            _ => panic!("expected Grid command"),
        }
    }

    // -- Config subcommand --------------------------------------------------

    #[test]
    fn test_config_init_parses() {
        let cli = Cli::try_parse_from(["panel-layout", "config", "init"])
            .expect("config init should parse");
        match cli.command {
            Commands::Config { action } => match action {
                ConfigAction::Init { force } => assert!(!force),
                _ => panic!("expected Init action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_config_init_force_parses() {
        let cli = Cli::try_parse_from(["panel-layout", "config", "init", "--force"])
            .expect("config init --force should parse");
        match cli.command {
            Commands::Config { action } => match action {
                ConfigAction::Init { force } => assert!(force),
                _ => panic!("expected Init action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_config_validate_parses() {
        let cli = Cli::try_parse_from(["panel-layout", "config", "validate"])
            .expect("config validate should parse");
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigAction::Validate
            }
        ));
    }
}
