//! Panel rendering dispatch and grid placement.
//!
//! Each [`PanelType`] maps to exactly one renderer through an exhaustive
//! `match`, so adding a panel type fails to compile until it has a
//! renderer. Renderers draw the panel header line: an icon, the catalog
//! title and the size class.
//!
//! # Styling
//!
//! - Each panel type has its own accent colour
//! - Hidden panels are dimmed

pub mod grid;

pub use grid::{place, Placement};

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::catalog;
use crate::panel::{Panel, PanelType};

/// Renders one panel into a single line of at most `width` columns.
pub type Renderer = fn(&Panel, u16) -> Line<'static>;

/// Looks up the renderer for a panel type.
pub fn renderer(panel_type: PanelType) -> Renderer {
    match panel_type {
        PanelType::KpiSummary => render_kpi_summary,
        PanelType::AtRiskProjects => render_at_risk_projects,
        PanelType::PaymentRisk => render_payment_risk,
        PanelType::TeamLoad => render_team_load,
        PanelType::ProjectRiskCards => render_project_risk_cards,
        PanelType::Financials => render_financials,
    }
}

/// Renders a panel with the renderer registered for its type.
pub fn render_panel(panel: &Panel, width: u16) -> Line<'static> {
    renderer(panel.panel_type())(panel, width)
}

fn render_kpi_summary(panel: &Panel, width: u16) -> Line<'static> {
    header(panel, "◆", Color::Cyan, width)
}

fn render_at_risk_projects(panel: &Panel, width: u16) -> Line<'static> {
    header(panel, "▲", Color::Yellow, width)
}

fn render_payment_risk(panel: &Panel, width: u16) -> Line<'static> {
    header(panel, "$", Color::Red, width)
}

fn render_team_load(panel: &Panel, width: u16) -> Line<'static> {
    header(panel, "≡", Color::Blue, width)
}

fn render_project_risk_cards(panel: &Panel, width: u16) -> Line<'static> {
    header(panel, "▣", Color::Magenta, width)
}

fn render_financials(panel: &Panel, width: u16) -> Line<'static> {
    header(panel, "¤", Color::Green, width)
}

/// `<icon> <title> [<size>]`, truncated to `width`.
fn header(panel: &Panel, icon: &str, accent: Color, width: u16) -> Line<'static> {
    let title = catalog::entry(panel.panel_type()).title;
    let text = truncate(&format!("{icon} {title} [{}]", panel.size), width as usize);

    let style = if panel.is_visible {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    Line::from(Span::styled(text, style))
}

/// Truncates to `max` characters, ending in `…` when shortened.
fn truncate(text: &str, max: usize) -> String {
    let len = text.chars().count();
    if len <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}
