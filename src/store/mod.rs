//! Persistence port for layouts.
//!
//! The engine only sees [`LayoutStore`]; backends decide where a layout
//! lives. Each store instance is bound to one owner, and a save replaces
//! the owner's previous layout in full.

pub mod codec;
mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::layout::Layout;

/// Load/save contract consumed by [`LayoutEngine`](crate::engine::LayoutEngine).
pub trait LayoutStore {
    /// Returns the stored layout, or `None` if nothing was stored yet.
    ///
    /// Unreadable or corrupt data is reported as an error; the engine
    /// treats it the same as `None`.
    fn load(&self) -> Result<Option<Layout>, StoreError>;

    /// Stores the complete layout, hidden panels included, replacing any
    /// previous value.
    fn save(&self, layout: &Layout) -> Result<(), StoreError>;
}

impl<S: LayoutStore + ?Sized> LayoutStore for &S {
    fn load(&self) -> Result<Option<Layout>, StoreError> {
        (**self).load()
    }

    fn save(&self, layout: &Layout) -> Result<(), StoreError> {
        (**self).save(layout)
    }
}

impl<S: LayoutStore + ?Sized> LayoutStore for Box<S> {
    fn load(&self) -> Result<Option<Layout>, StoreError> {
        (**self).load()
    }

    fn save(&self, layout: &Layout) -> Result<(), StoreError> {
        (**self).save(layout)
    }
}

/// Checks that an owner name is usable as a storage key.
///
/// Accepts non-empty ASCII letters, digits, `-` and `_`.
pub fn validate_owner(owner: &str) -> Result<(), StoreError> {
    let valid = !owner.is_empty()
        && owner
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidOwner(owner.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_names_accepted() {
        for owner in ["default", "alice", "team_42", "ops-eu"] {
            assert!(validate_owner(owner).is_ok(), "{owner} should be valid");
        }
    }

    #[test]
    fn owner_names_rejected() {
        for owner in ["", "../etc", "a/b", "with space", "émile"] {
            assert!(
                matches!(validate_owner(owner), Err(StoreError::InvalidOwner(_))),
                "{owner} should be rejected"
            );
        }
    }

    #[test]
    fn reference_forwards_to_store() {
        let store = MemoryStore::new("alice");
        let by_ref: &MemoryStore = &store;
        by_ref.save(&Layout::default()).expect("save");
        assert!(store.load().expect("load").is_some());
    }
}
