//! The layout aggregate: an ordered sequence of panels for one owner.
//!
//! All mutations are pure with respect to I/O and report whether the
//! sequence changed. Stale or unknown ids are no-ops rather than errors, so
//! a UI racing its own state (double-click remove, drop on a panel that was
//! just removed) never needs to handle a failure.
//!
//! Invariants upheld by every mutation:
//! - at most one panel per [`PanelType`]
//! - panel ids are unique
//! - new panels are appended at the end

mod presets;
mod reorder;

pub use presets::{default_layout, DEFAULT_PANEL_TYPES};
pub use reorder::reorder;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::panel::{Panel, PanelId, PanelSize, PanelType};

/// Reasons a panel sequence is not a valid layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidLayout {
    /// Two panels share an id.
    #[error("duplicate panel id: {0}")]
    DuplicateId(PanelId),
    /// Two panels share a type.
    #[error("duplicate panel type: {0}")]
    DuplicateType(PanelType),
}

/// Ordered collection of panels.
///
/// Serialized as a bare panel array. Deserializing goes through
/// [`Layout::from_panels`], so duplicates are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Panel>", into = "Vec<Panel>")]
pub struct Layout {
    panels: Vec<Panel>,
}

impl Layout {
    /// An empty layout.
    pub fn empty() -> Self {
        Self { panels: Vec::new() }
    }

    /// Builds a layout from an existing sequence, checking invariants.
    pub fn from_panels(panels: Vec<Panel>) -> Result<Self, InvalidLayout> {
        let layout = Self { panels };
        layout.validate()?;
        Ok(layout)
    }

    /// Checks the id and type uniqueness invariants.
    pub fn validate(&self) -> Result<(), InvalidLayout> {
        let mut ids = HashSet::new();
        let mut types = HashSet::new();
        for panel in &self.panels {
            if !ids.insert(panel.id()) {
                return Err(InvalidLayout::DuplicateId(panel.id()));
            }
            if !types.insert(panel.panel_type()) {
                return Err(InvalidLayout::DuplicateType(panel.panel_type()));
            }
        }
        Ok(())
    }

    /// All panels in order, hidden ones included.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Visible panels in order.
    pub fn visible(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter().filter(|p| p.is_visible)
    }

    /// Panel types in order.
    pub fn types(&self) -> impl Iterator<Item = PanelType> + '_ {
        self.panels.iter().map(Panel::panel_type)
    }

    /// Number of panels, hidden ones included.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Returns `true` if the layout holds no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Looks up a panel by id.
    pub fn get(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id() == id)
    }

    /// Zero-based position of a panel.
    pub fn position(&self, id: PanelId) -> Option<usize> {
        self.panels.iter().position(|p| p.id() == id)
    }

    /// Looks up the panel of the given type.
    pub fn find_type(&self, panel_type: PanelType) -> Option<&Panel> {
        self.panels.iter().find(|p| p.panel_type() == panel_type)
    }

    /// Returns `true` if a panel of this type is present.
    pub fn contains_type(&self, panel_type: PanelType) -> bool {
        self.find_type(panel_type).is_some()
    }

    /// Appends a new visible, medium panel of `panel_type`.
    ///
    /// Returns `None` without touching the layout if the type is already
    /// present.
    pub fn add(&mut self, panel_type: PanelType) -> Option<Panel> {
        if self.contains_type(panel_type) {
            return None;
        }
        let panel = Panel::new(panel_type);
        self.panels.push(panel.clone());
        Some(panel)
    }

    /// Removes a panel, keeping the relative order of the rest.
    pub fn remove(&mut self, id: PanelId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.panels.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flips a panel's visibility.
    pub fn toggle_visibility(&mut self, id: PanelId) -> bool {
        match self.get_mut(id) {
            Some(panel) => {
                panel.is_visible = !panel.is_visible;
                true
            }
            None => false,
        }
    }

    /// Sets a panel's size.
    ///
    /// Returns `false` for an unknown id or when the size is already
    /// `size`.
    pub fn set_size(&mut self, id: PanelId, size: PanelSize) -> bool {
        match self.get_mut(id) {
            Some(panel) if panel.size != size => {
                panel.size = size;
                true
            }
            _ => false,
        }
    }

    /// Moves `moved` into the slot held by `target`. See [`reorder`].
    pub fn move_panel(&mut self, moved: PanelId, target: PanelId) -> bool {
        reorder::move_by_id(&mut self.panels, moved, target)
    }

    /// Compares panel types, sizes, visibility and order, ignoring ids.
    pub fn same_arrangement(&self, other: &Layout) -> bool {
        self.panels.len() == other.panels.len()
            && self.panels.iter().zip(&other.panels).all(|(a, b)| {
                a.panel_type() == b.panel_type()
                    && a.size == b.size
                    && a.is_visible == b.is_visible
            })
    }

    fn get_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id() == id)
    }
}

impl Default for Layout {
    fn default() -> Self {
        default_layout()
    }
}

impl TryFrom<Vec<Panel>> for Layout {
    type Error = InvalidLayout;

    fn try_from(panels: Vec<Panel>) -> Result<Self, Self::Error> {
        Self::from_panels(panels)
    }
}

impl From<Layout> for Vec<Panel> {
    fn from(layout: Layout) -> Self {
        layout.panels
    }
}
