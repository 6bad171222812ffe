//! File-backed layout store.
//!
//! One JSON file per owner under a layouts directory:
//! `<dir>/<owner>.json`. Writes use the temp-file-then-rename pattern:
//! 1. Write to `<owner>.json.tmp.<pid>.<timestamp>`
//! 2. Fsync to disk
//! 3. Rename over the target (atomic)
//!
//! If the rename fails the complete temp file is kept as a safety copy;
//! a temp file whose write or fsync failed is removed.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::layout::Layout;
use crate::store::{codec, validate_owner, LayoutStore, StoreError};

/// Stores each owner's layout as a JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    owner: String,
}

impl FileStore {
    /// Creates a store for `owner` rooted at `dir`.
    ///
    /// The directory is created on first save, not here.
    pub fn new(dir: impl Into<PathBuf>, owner: &str) -> Result<Self, StoreError> {
        validate_owner(owner)?;
        Ok(Self {
            dir: dir.into(),
            owner: owner.to_string(),
        })
    }

    /// Path of this owner's layout file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.owner))
    }

    /// Owner this store is bound to.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Temp file name for the next write: `<owner>.json.tmp.<pid>.<timestamp>`.
    fn temp_path(&self, path: &Path) -> PathBuf {
        let timestamp = Local::now().format("%Y%m%d-%H%M%S%3f");
        path.with_file_name(format!(
            "{}.json.tmp.{}.{}",
            self.owner,
            std::process::id(),
            timestamp
        ))
    }

    fn write_atomic(&self, path: &Path, content: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write {
            path: self.dir.clone(),
            source,
        })?;

        let temp_path = self.temp_path(path);
        if let Err(source) = write_synced(&temp_path, content) {
            // A partial temp file is useless; only a complete one is kept.
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::Write {
                path: temp_path,
                source,
            });
        }

        fs::rename(&temp_path, path).map_err(|_| StoreError::WriteAtomic {
            path: path.to_path_buf(),
            temp_path: temp_path.clone(),
        })?;

        Ok(())
    }
}

fn write_synced(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, content)?;
    fs::File::open(path)?.sync_all()
}

impl LayoutStore for FileStore {
    fn load(&self) -> Result<Option<Layout>, StoreError> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No stored layout at {}", path.display());
                return Ok(None);
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        codec::decode(&content).map(Some)
    }

    fn save(&self, layout: &Layout) -> Result<(), StoreError> {
        let content = codec::encode(&self.owner, layout)?;
        let path = self.path();
        self.write_atomic(&path, &content)?;
        tracing::debug!(panels = layout.len(), "Saved layout to {}", path.display());
        Ok(())
    }
}
