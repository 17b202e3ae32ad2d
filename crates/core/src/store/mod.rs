//! Snapshot persistence for the cart.
//!
//! The cart is durable as a single full snapshot: every mutation rewrites
//! the whole entry list, there is no incremental log. Reads fail soft -
//! absent or malformed data is an empty cart, never an error - while
//! writes surface their failures as [`StoreError`].
//!
//! [`snapshot`] defines the wire format; [`MemoryStore`] is the in-memory
//! implementation used in tests. The file-backed implementation lives in
//! the storefront crate, next to the rest of the I/O.

pub mod memory;
pub mod snapshot;

use crate::cart::CartEntry;

pub use memory::MemoryStore;
pub use snapshot::SnapshotError;

/// Errors that can occur when writing a cart snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Writing the snapshot to its backing storage failed.
    #[error("failed to write cart snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the snapshot failed.
    #[error("failed to encode cart snapshot: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable storage for the cart's entry snapshot.
///
/// `save` overwrites the entire persisted snapshot; from the caller's
/// perspective no partial write is ever observable. `load` reconstructs
/// the saved entries, or returns an empty list when nothing usable is
/// stored - malformed data is not repaired.
pub trait CartStore {
    /// Read the persisted entries, empty if absent or malformed.
    fn load(&self) -> Vec<CartEntry>;

    /// Replace the persisted snapshot with `entries`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing the snapshot fails.
    fn save(&mut self, entries: &[CartEntry]) -> Result<(), StoreError>;
}
