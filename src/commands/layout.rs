//! Layout command implementations.
//!
//! Each editing command opens the owner's layout, applies one engine
//! operation and reports the outcome. Unknown panels and duplicate adds
//! are reported as "no change" and still exit successfully; a failed save
//! prints a warning but is not an error.

use std::path::PathBuf;
use std::process::ExitCode;

use panel_layout::catalog;
use panel_layout::config::Config;
use panel_layout::render::{self, grid};
use panel_layout::{FileStore, LayoutEngine, Origin, PanelId, PanelSize, PanelType, SaveStatus};

/// Terminal cells per grid cell used by `grid`.
const CELL_WIDTH: u16 = 20;
const CELL_HEIGHT: u16 = 3;

/// Where to find the layout being edited.
pub(crate) struct Target {
    /// Layouts directory.
    pub dir: PathBuf,
    /// Layout owner.
    pub owner: String,
}

impl Target {
    /// Resolves the target from config plus command-line overrides.
    pub(crate) fn resolve(config: &Config, owner: Option<String>, dir: Option<PathBuf>) -> Self {
        Self {
            dir: dir.unwrap_or_else(|| config.layouts_dir()),
            owner: owner.unwrap_or_else(|| config.dashboard.owner.clone()),
        }
    }

    /// Opens the owner's layout.
    ///
    /// Each run is a fresh session, so a never-saved default layout is
    /// stored right away; otherwise the ids printed by `show` would not
    /// exist in the next run.
    fn open(&self) -> Result<LayoutEngine<FileStore>, ExitCode> {
        let store = match FileStore::new(&self.dir, &self.owner) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Error: {}", e);
                return Err(ExitCode::FAILURE);
            }
        };
        let mut engine = LayoutEngine::open(store);
        match engine.origin() {
            Origin::Default => {
                if let SaveStatus::Failed(e) = engine.pin() {
                    eprintln!("Warning: default layout was not saved: {}", e);
                }
            }
            Origin::Recovered => eprintln!(
                "Warning: stored layout at {} is unreadable; showing the default layout. \
                 Panel ids change on every run until the next change is saved (e.g. `reset`).",
                engine.store().path().display()
            ),
            Origin::Restored => {}
        }
        Ok(engine)
    }
}

/// A panel named on the command line, by id or by type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PanelRef {
    Id(PanelId),
    Type(PanelType),
}

impl std::str::FromStr for PanelRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<PanelId>() {
            return Ok(PanelRef::Id(id));
        }
        s.parse::<PanelType>()
            .map(PanelRef::Type)
            .map_err(|_| format!("'{s}' is neither a panel id nor a panel type"))
    }
}

impl PanelRef {
    /// The id this reference points at in `engine`, if any.
    fn resolve(&self, engine: &LayoutEngine<FileStore>) -> Option<PanelId> {
        match self {
            PanelRef::Id(id) => engine.layout().get(*id).map(|p| p.id()),
            PanelRef::Type(t) => engine.layout().find_type(*t).map(|p| p.id()),
        }
    }
}

impl std::fmt::Display for PanelRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelRef::Id(id) => write!(f, "{id}"),
            PanelRef::Type(t) => write!(f, "{t}"),
        }
    }
}

/// Prints the layout: visible panels only, or all with `--all`.
pub(crate) fn run_show_command(target: &Target, all: bool) -> ExitCode {
    let engine = match target.open() {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let panels: Vec<_> = if all {
        engine.panels().iter().collect()
    } else {
        engine.visible_panels()
    };

    if panels.is_empty() {
        println!("(no panels)");
        return ExitCode::SUCCESS;
    }

    for (index, panel) in panels.iter().enumerate() {
        let hidden = if panel.is_visible { "" } else { "  (hidden)" };
        println!(
            "{:>2}. {:<20} {:<12} {}{}",
            index + 1,
            panel.panel_type(),
            panel.size,
            panel.id(),
            hidden
        );
    }
    ExitCode::SUCCESS
}

/// Prints the panel catalog, marking types already on the dashboard.
pub(crate) fn run_catalog_command(target: &Target) -> ExitCode {
    let engine = match target.open() {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    let addable = catalog::addable(engine.layout());

    for entry in catalog::entries() {
        let marker = if addable.contains(&entry) { "+" } else { " " };
        println!(
            "{} {:<20} {:<20} {}",
            marker, entry.panel_type, entry.title, entry.description
        );
    }
    ExitCode::SUCCESS
}

/// Adds a panel of the given type.
pub(crate) fn run_add_command(target: &Target, panel_type: PanelType) -> ExitCode {
    let mut engine = match target.open() {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    let added = engine.add_panel(panel_type);
    match &added.panel {
        Some(panel) => report(added.status, &format!("Added {} ({})", panel_type, panel.id())),
        None => {
            println!("No change: a {} panel is already on the dashboard", panel_type);
            ExitCode::SUCCESS
        }
    }
}

/// Removes a panel.
pub(crate) fn run_remove_command(target: &Target, panel: &PanelRef) -> ExitCode {
    edit(target, panel, |engine, id| {
        (engine.remove_panel(id), format!("Removed {panel}"))
    })
}

/// Toggles a panel's visibility.
pub(crate) fn run_toggle_command(target: &Target, panel: &PanelRef) -> ExitCode {
    edit(target, panel, |engine, id| {
        let status = engine.toggle_visibility(id);
        let state = match engine.layout().get(id) {
            Some(p) if p.is_visible => "visible",
            _ => "hidden",
        };
        (status, format!("{panel} is now {state}"))
    })
}

/// Sets a panel's size.
pub(crate) fn run_resize_command(target: &Target, panel: &PanelRef, size: PanelSize) -> ExitCode {
    edit(target, panel, |engine, id| {
        (engine.update_size(id, size), format!("Resized {panel} to {size}"))
    })
}

/// Advances a panel to the next size.
pub(crate) fn run_cycle_command(target: &Target, panel: &PanelRef) -> ExitCode {
    edit(target, panel, |engine, id| {
        let status = engine.cycle_size(id);
        let size = engine
            .layout()
            .get(id)
            .map(|p| p.size.to_string())
            .unwrap_or_default();
        (status, format!("Resized {panel} to {size}"))
    })
}

/// Moves a panel into another panel's slot.
pub(crate) fn run_move_command(target: &Target, panel: &PanelRef, onto: &PanelRef) -> ExitCode {
    let mut engine = match target.open() {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    let (Some(moved), Some(dest)) = (panel.resolve(&engine), onto.resolve(&engine)) else {
        println!("No change: panel not found");
        return ExitCode::SUCCESS;
    };
    let status = engine.reorder_panels(moved, dest);
    let position = engine.layout().position(moved).map(|i| i + 1).unwrap_or(0);
    report(status, &format!("Moved {panel} to position {position}"))
}

/// Replaces the layout with the default arrangement.
pub(crate) fn run_reset_command(target: &Target) -> ExitCode {
    let mut engine = match target.open() {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    let status = engine.reset_layout();
    report(status, "Layout reset to default")
}

/// Prints where each visible panel lands on the grid.
pub(crate) fn run_grid_command(target: &Target, columns: u16) -> ExitCode {
    let engine = match target.open() {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    let visible = engine.visible_panels();
    let placements = grid::place(visible.iter().copied(), columns);

    println!(
        "{} columns x {} rows",
        columns.max(1),
        grid::height(&placements)
    );
    for (panel, placement) in visible.iter().zip(&placements) {
        let area = placement.area(CELL_WIDTH, CELL_HEIGHT);
        let line = render::render_panel(panel, area.width);
        println!(
            "  col {} row {} ({}x{})  {}",
            placement.column, placement.row, placement.columns, placement.rows, line
        );
    }
    ExitCode::SUCCESS
}

/// Opens the layout, resolves `panel`, and applies `op` to it.
fn edit<F>(target: &Target, panel: &PanelRef, op: F) -> ExitCode
where
    F: FnOnce(&mut LayoutEngine<FileStore>, PanelId) -> (SaveStatus, String),
{
    let mut engine = match target.open() {
        Ok(engine) => engine,
        Err(code) => return code,
    };
    let Some(id) = panel.resolve(&engine) else {
        println!("No change: no panel matches '{}'", panel);
        return ExitCode::SUCCESS;
    };
    let (status, message) = op(&mut engine, id);
    report(status, &message)
}

/// Prints the outcome of a mutation. Save failures are warnings.
fn report(status: SaveStatus, message: &str) -> ExitCode {
    match status {
        SaveStatus::Unchanged => println!("No change"),
        SaveStatus::Saved => println!("{}", message),
        SaveStatus::Failed(e) => {
            println!("{}", message);
            eprintln!("Warning: layout change was not saved: {}", e);
        }
    }
    ExitCode::SUCCESS
}
