//! Persistence error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::layout::InvalidLayout;

/// Errors raised by a [`LayoutStore`](crate::store::LayoutStore).
///
/// None of these are fatal to the engine: a failed save leaves the
/// in-memory layout authoritative, and any load failure falls back to the
/// default layout.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the stored layout.
    #[error("Failed to read layout: {path}")]
    Read {
        /// Location that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the layout.
    #[error("Failed to write layout: {path}")]
    Write {
        /// Location that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rename step of an atomic write failed; the temp file is left
    /// behind as a safety copy.
    #[error("Failed to write layout atomically: {path} - Safety copy at: {temp_path}")]
    WriteAtomic {
        /// Target path.
        path: PathBuf,
        /// Temporary safety copy.
        temp_path: PathBuf,
    },

    /// Stored data is not a readable layout.
    #[error("Stored layout is corrupt: {0}")]
    Corrupt(String),

    /// Stored data decoded but breaks a layout invariant.
    #[error("Stored layout is invalid: {0}")]
    Invalid(#[from] InvalidLayout),

    /// Stored data uses a format version this build does not understand.
    #[error("Unsupported layout version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the stored data.
        found: u32,
        /// Version this build writes.
        expected: u32,
    },

    /// Failed to serialize the layout.
    #[error("Failed to serialize layout: {0}")]
    Serialize(String),

    /// Owner key cannot be used as a storage key.
    #[error("Invalid owner name '{0}': use letters, digits, '-' or '_'")]
    InvalidOwner(String),

    /// Storage backend refused the operation.
    #[error("Layout storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Returns `true` if the stored data exists but cannot be used.
    pub fn is_corrupt(&self) -> bool {
        matches!(
            self,
            StoreError::Corrupt(_) | StoreError::Invalid(_) | StoreError::UnsupportedVersion { .. }
        )
    }
}
