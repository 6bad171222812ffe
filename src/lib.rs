//! Adjustable dashboard panel layout engine.
//!
//! A dashboard shows an ordered set of panels. Each panel has a
//! [`PanelType`] (what it shows), a [`PanelSize`] (its grid footprint) and
//! a visibility flag. The [`LayoutEngine`] owns one owner's [`Layout`],
//! applies the add/remove/toggle/resize/reorder/reset operations, and
//! writes every change through a [`LayoutStore`].
//!
//! # Example
//!
//! ```
//! use panel_layout::{LayoutEngine, MemoryStore, PanelType};
//!
//! let store = MemoryStore::new("alice");
//! let mut engine = LayoutEngine::open(store.clone());
//!
//! let team = engine.add_panel(PanelType::TeamLoad).panel.expect("new type");
//! let kpi = engine.panels()[0].id();
//! let _ = engine.reorder_panels(team.id(), kpi);
//! let _ = engine.toggle_visibility(kpi);
//!
//! // A later session on the same storage sees the same arrangement.
//! let reopened = LayoutEngine::open(store);
//! assert_eq!(reopened.layout(), engine.layout());
//! assert_eq!(reopened.visible_panels()[0].panel_type(), PanelType::TeamLoad);
//! ```

/// Static panel metadata for the "add panel" picker.
pub mod catalog;

/// Configuration loading, schema and XDG path resolution.
pub mod config;

/// Layout engine with write-through persistence.
pub mod engine;

/// Layout aggregate and its pure mutations.
pub mod layout;

/// Tracing subscriber setup.
pub mod logging;

/// Panel value types.
pub mod panel;

/// Renderer dispatch and grid placement.
pub mod render;

/// Layout persistence port and backends.
pub mod store;

pub use engine::{Added, LayoutEngine, Origin, SaveStatus};
pub use layout::Layout;
pub use panel::{Panel, PanelId, PanelSize, PanelType};
pub use store::{FileStore, LayoutStore, MemoryStore, StoreError};
