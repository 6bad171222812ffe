//! Layout engine: one owner's layout plus write-through persistence.
//!
//! The engine is an explicit object created once per session and handed to
//! whatever needs it; there is no global instance. Every mutation updates
//! the in-memory layout first, then writes the whole layout through the
//! store. The in-memory layout stays authoritative for the rest of the
//! session whether or not the write succeeds.
//!
//! # Example
//!
//! ```
//! use panel_layout::engine::LayoutEngine;
//! use panel_layout::store::MemoryStore;
//! use panel_layout::PanelType;
//!
//! let mut engine = LayoutEngine::open(MemoryStore::new("alice"));
//! let added = engine.add_panel(PanelType::TeamLoad);
//! assert!(added.panel.is_some());
//! assert!(added.status.is_saved());
//!
//! // A second add of the same type is silently rejected.
//! assert!(engine.add_panel(PanelType::TeamLoad).panel.is_none());
//! ```

use crate::layout::Layout;
use crate::panel::{Panel, PanelId, PanelSize, PanelType};
use crate::store::{LayoutStore, StoreError};

/// Persistence result of a mutation.
#[derive(Debug)]
#[must_use = "a failed save should be surfaced to the user as a warning"]
pub enum SaveStatus {
    /// The mutation was a no-op; the store was not touched.
    Unchanged,
    /// The layout changed and was written through.
    Saved,
    /// The layout changed in memory but the write failed.
    Failed(StoreError),
}

impl SaveStatus {
    /// Returns `true` if the layout changed, saved or not.
    pub fn is_changed(&self) -> bool {
        !matches!(self, SaveStatus::Unchanged)
    }

    /// Returns `true` if the change reached the store.
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }

    /// The persistence failure, if any.
    pub fn warning(&self) -> Option<&StoreError> {
        match self {
            SaveStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Result of [`LayoutEngine::add_panel`].
#[derive(Debug)]
#[must_use]
pub struct Added {
    /// The new panel, or `None` if its type was already present.
    pub panel: Option<Panel>,
    /// Persistence result.
    pub status: SaveStatus,
}

/// How the engine's initial layout was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Restored from the store.
    Restored,
    /// Nothing stored yet; started from the default layout.
    Default,
    /// Stored data was unreadable or corrupt; started from the default
    /// layout.
    Recovered,
}

/// Owns one layout and its store.
#[derive(Debug)]
pub struct LayoutEngine<S: LayoutStore> {
    layout: Layout,
    store: S,
    origin: Origin,
}

impl<S: LayoutStore> LayoutEngine<S> {
    /// Opens the layout stored in `store`, falling back to the default
    /// layout when nothing usable is stored. Never writes.
    pub fn open(store: S) -> Self {
        let (layout, origin) = match store.load() {
            Ok(Some(layout)) => {
                tracing::debug!(panels = layout.len(), "Restored stored layout");
                (layout, Origin::Restored)
            }
            Ok(None) => {
                tracing::debug!("No stored layout, using default");
                (Layout::default(), Origin::Default)
            }
            Err(e) => {
                tracing::warn!("Ignoring stored layout, using default: {e}");
                (Layout::default(), Origin::Recovered)
            }
        };
        Self {
            layout,
            store,
            origin,
        }
    }

    /// How the initial layout was obtained.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The full layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// All panels in order, hidden ones included.
    pub fn panels(&self) -> &[Panel] {
        self.layout.panels()
    }

    /// Visible panels in order; what the dashboard grid draws.
    pub fn visible_panels(&self) -> Vec<&Panel> {
        self.layout.visible().collect()
    }

    /// The store backing this engine.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends a visible, medium panel of `panel_type`.
    ///
    /// Rejected without any effect if a panel of that type already exists.
    pub fn add_panel(&mut self, panel_type: PanelType) -> Added {
        match self.layout.add(panel_type) {
            Some(panel) => {
                tracing::debug!(id = %panel.id(), "Added {panel_type} panel");
                Added {
                    panel: Some(panel),
                    status: self.persist(),
                }
            }
            None => {
                tracing::debug!("Ignored add: {panel_type} panel already present");
                Added {
                    panel: None,
                    status: SaveStatus::Unchanged,
                }
            }
        }
    }

    /// Removes a panel. Unknown ids are ignored.
    pub fn remove_panel(&mut self, id: PanelId) -> SaveStatus {
        let changed = self.layout.remove(id);
        self.finish(changed, "remove", id)
    }

    /// Shows a hidden panel or hides a visible one. Unknown ids are ignored.
    pub fn toggle_visibility(&mut self, id: PanelId) -> SaveStatus {
        let changed = self.layout.toggle_visibility(id);
        self.finish(changed, "toggle", id)
    }

    /// Sets a panel's size. Unknown ids are ignored.
    pub fn update_size(&mut self, id: PanelId, size: PanelSize) -> SaveStatus {
        let changed = self.layout.set_size(id, size);
        self.finish(changed, "resize", id)
    }

    /// Advances a panel to the next size in the cycle.
    pub fn cycle_size(&mut self, id: PanelId) -> SaveStatus {
        match self.layout.get(id).map(|p| p.size.next()) {
            Some(next) => self.update_size(id, next),
            None => self.finish(false, "cycle", id),
        }
    }

    /// Moves `moved` into the slot held by `target` (list move, not swap).
    ///
    /// Ignored if the ids are equal or either is unknown.
    pub fn reorder_panels(&mut self, moved: PanelId, target: PanelId) -> SaveStatus {
        let changed = self.layout.move_panel(moved, target);
        self.finish(changed, "reorder", moved)
    }

    /// Saves a default layout that was never stored, so its panel ids stay
    /// valid for later sessions.
    ///
    /// Only applies to [`Origin::Default`]; a restored layout is already
    /// stored and a recovered one would overwrite the unreadable data.
    pub fn pin(&mut self) -> SaveStatus {
        if self.origin != Origin::Default {
            return SaveStatus::Unchanged;
        }
        let status = self.persist();
        if status.is_saved() {
            tracing::debug!(panels = self.layout.len(), "Stored default layout");
            self.origin = Origin::Restored;
        }
        status
    }

    /// Replaces the layout with the default layout and saves it.
    pub fn reset_layout(&mut self) -> SaveStatus {
        self.layout = Layout::default();
        tracing::info!("Layout reset to default");
        self.persist()
    }

    fn finish(&mut self, changed: bool, op: &str, id: PanelId) -> SaveStatus {
        if changed {
            tracing::debug!(%id, "Applied {op}");
            self.persist()
        } else {
            tracing::debug!(%id, "Ignored {op}: no matching change");
            SaveStatus::Unchanged
        }
    }

    fn persist(&mut self) -> SaveStatus {
        match self.store.save(&self.layout) {
            Ok(()) => SaveStatus::Saved,
            Err(e) => {
                tracing::warn!("Layout change not saved: {e}");
                SaveStatus::Failed(e)
            }
        }
    }
}
