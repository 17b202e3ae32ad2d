//! File-backed cart store.
//!
//! The durable counterpart to the demo's "survives a page reload"
//! requirement: one JSON snapshot file, rewritten whole on every cart
//! mutation. Writes go to a sibling temp file first and are renamed into
//! place, so a reader never observes a partial snapshot.

use std::fs;
use std::io;
use std::path::PathBuf;

use toko_core::CartEntry;
use toko_core::store::{CartStore, StoreError, snapshot};

/// A [`CartStore`] persisting the snapshot to a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store writing to `path`.
    ///
    /// The file (and its parent directory) is created on first save;
    /// a missing file simply loads as an empty cart.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStore for JsonFileStore {
    fn load(&self) -> Vec<CartEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read cart snapshot, starting empty"
                );
                return Vec::new();
            }
        };

        match snapshot::decode(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Malformed cart snapshot, starting empty"
                );
                Vec::new()
            }
        }
    }

    fn save(&mut self, entries: &[CartEntry]) -> Result<(), StoreError> {
        let encoded = snapshot::encode(entries)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Write-then-rename keeps the snapshot atomic for readers.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, encoded)?;
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}
