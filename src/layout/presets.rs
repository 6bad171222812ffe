//! Built-in default arrangement.
//!
//! A fresh session with nothing stored, a corrupt stored value, and
//! `reset` all start from this preset:
//! - **kpi-summary**, **at-risk-projects**, **payment-risk**
//! - all medium, all visible

use crate::layout::Layout;
use crate::panel::{Panel, PanelType};

/// Panel types of the default layout, in display order.
pub const DEFAULT_PANEL_TYPES: [PanelType; 3] = [
    PanelType::KpiSummary,
    PanelType::AtRiskProjects,
    PanelType::PaymentRisk,
];

/// Builds the default layout with fresh panel ids.
pub fn default_layout() -> Layout {
    Layout {
        panels: DEFAULT_PANEL_TYPES.into_iter().map(Panel::new).collect(),
    }
}
