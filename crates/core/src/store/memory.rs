//! In-memory cart store.

use std::sync::{Arc, Mutex, PoisonError};

use crate::cart::CartEntry;
use crate::store::{CartStore, StoreError, snapshot};

/// A [`CartStore`] backed by a shared in-memory buffer.
///
/// Holds the *encoded* snapshot rather than the entries themselves, so
/// every save/load goes through the real wire codec. Clones share the
/// buffer, which makes reload-after-save tests read like the page reload
/// they stand in for.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    buf: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a raw snapshot string.
    ///
    /// Lets tests plant data the engine would never write itself.
    #[must_use]
    pub fn seeded(raw: impl Into<String>) -> Self {
        Self {
            buf: Arc::new(Mutex::new(Some(raw.into()))),
        }
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Vec<CartEntry> {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        buf.as_deref()
            .map(snapshot::decode)
            .and_then(Result::ok)
            .unwrap_or_default()
    }

    fn save(&mut self, entries: &[CartEntry]) -> Result<(), StoreError> {
        let encoded = snapshot::encode(entries)?;
        *self.buf.lock().unwrap_or_else(PoisonError::into_inner) = Some(encoded);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{EntryId, Price, Product, Quantity};

    fn entry(id: u32, name: &str) -> CartEntry {
        CartEntry::new(
            EntryId::new(id),
            Quantity::ONE,
            Product::new(name, Price::new(10_000), "Clothes", 4, "f1.jpg").unwrap(),
        )
    }

    #[test]
    fn test_empty_store_loads_empty() {
        assert!(MemoryStore::new().load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let entries = vec![entry(1, "Shirt"), entry(2, "Pants")];

        store.save(&entries).unwrap();

        assert_eq!(store.load(), entries);
    }

    #[test]
    fn test_clones_share_the_buffer() {
        let mut store = MemoryStore::new();
        let other = store.clone();

        store.save(&[entry(1, "Shirt")]).unwrap();

        assert_eq!(other.load().len(), 1);
    }

    #[test]
    fn test_malformed_seed_loads_empty() {
        assert!(MemoryStore::seeded("not json").load().is_empty());
    }
}
