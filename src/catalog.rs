//! Static panel catalog consumed by the "add panel" picker.

use crate::layout::Layout;
use crate::panel::PanelType;

/// Human-readable metadata for a panel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Panel type this entry describes.
    pub panel_type: PanelType,
    /// Short title shown in the panel header and picker.
    pub title: &'static str,
    /// One-line description shown in the picker.
    pub description: &'static str,
}

/// Metadata for one panel type.
pub fn entry(panel_type: PanelType) -> CatalogEntry {
    let (title, description) = match panel_type {
        PanelType::KpiSummary => (
            "KPI Summary",
            "Active clients, open projects and revenue at a glance",
        ),
        PanelType::AtRiskProjects => (
            "At-Risk Projects",
            "Projects behind schedule or over budget",
        ),
        PanelType::PaymentRisk => (
            "Payment Risk",
            "Clients with overdue or outstanding invoices",
        ),
        PanelType::TeamLoad => ("Team Load", "Assigned work per team member"),
        PanelType::ProjectRiskCards => (
            "Project Risk Cards",
            "One card per project with its open risk factors",
        ),
        PanelType::Financials => ("Financials", "Revenue, costs and margin by period"),
    };
    CatalogEntry {
        panel_type,
        title,
        description,
    }
}

/// The full catalog, in [`PanelType::ALL`] order.
pub fn entries() -> impl Iterator<Item = CatalogEntry> {
    PanelType::ALL.into_iter().map(entry)
}

/// Catalog entries whose type is not yet in `layout`.
///
/// Hidden panels count as present: showing them again is a visibility
/// toggle, not an add.
pub fn addable(layout: &Layout) -> Vec<CatalogEntry> {
    entries()
        .filter(|e| !layout.contains_type(e.panel_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_type_has_non_empty_metadata() {
        for t in PanelType::ALL {
            let e = entry(t);
            assert_eq!(e.panel_type, t);
            assert!(!e.title.is_empty(), "{t} has no title");
            assert!(!e.description.is_empty(), "{t} has no description");
        }
    }

    #[test]
    fn titles_are_unique() {
        let titles: HashSet<&str> = entries().map(|e| e.title).collect();
        assert_eq!(titles.len(), PanelType::ALL.len());
    }

    #[test]
    fn addable_excludes_present_types() {
        let layout = Layout::default();
        let types: Vec<PanelType> = addable(&layout).iter().map(|e| e.panel_type).collect();
        assert_eq!(
            types,
            vec![
                PanelType::TeamLoad,
                PanelType::ProjectRiskCards,
                PanelType::Financials
            ]
        );
    }

    #[test]
    fn addable_counts_hidden_panels_as_present() {
        let mut layout = Layout::default();
        let id = layout.panels()[0].id();
        layout.toggle_visibility(id);
        assert!(addable(&layout)
            .iter()
            .all(|e| e.panel_type != PanelType::KpiSummary));
    }

    #[test]
    fn addable_on_empty_layout_is_full_catalog() {
        assert_eq!(addable(&Layout::empty()).len(), PanelType::ALL.len());
    }
}
