//! The cart engine.

use crate::cart::entry::CartEntry;
use crate::cart::events::{CartEvent, Listener};
use crate::store::{CartStore, StoreError};
use crate::types::{EntryId, Price, Product, Quantity};

/// The cart aggregate root.
///
/// Owns the insertion-ordered entry list, a monotonically increasing id
/// counter, and the persistent store it writes a full snapshot to after
/// every mutation. Construct one per session with [`Cart::load`] and hand
/// it to whoever needs it - there is no global instance.
///
/// All operations are total over well-formed inputs: unknown ids are
/// silent no-ops and out-of-range quantities are clamped. The only
/// error any mutation can return is a failed store write.
pub struct Cart<S> {
    entries: Vec<CartEntry>,
    /// Next id to hand out. Never decreases, so ids are never reused
    /// even after the highest entry is removed.
    next_id: u32,
    store: S,
    listeners: Vec<Listener>,
}

impl<S: CartStore> Cart<S> {
    /// Restore the cart from the store, or start empty.
    ///
    /// The store already fails soft on absent or malformed data. On top of
    /// that the engine checks its own aggregate invariants - it never
    /// persists duplicate ids or product names, so a snapshot containing
    /// them did not come from this engine and is discarded as a whole.
    pub fn load(store: S) -> Self {
        let mut entries = store.load();
        if !aggregate_invariants_hold(&entries) {
            entries.clear();
        }
        // An id of u32::MAX leaves no room for the next entry; the
        // counter never hands it out, so a snapshot carrying it did not
        // come from this engine either.
        let next_id = match entries.iter().map(|entry| entry.id().get()).max() {
            Some(u32::MAX) => {
                entries.clear();
                1
            }
            Some(max) => max + 1,
            None => 1,
        };

        Self {
            entries,
            next_id,
            store,
            listeners: Vec::new(),
        }
    }

    /// Subscribe to cart notifications.
    ///
    /// Listeners are invoked synchronously, in subscription order, on
    /// every add and checkout.
    pub fn subscribe(&mut self, listener: impl Fn(&CartEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Add one of `product` to the cart.
    ///
    /// If an entry with the same product name exists (first match in
    /// insertion order) its quantity is bumped, saturating at 99 - the
    /// add path clamps just like the quantity-change path. Otherwise a
    /// new entry with quantity 1 and a fresh id is appended.
    ///
    /// Adding the same product repeatedly is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the snapshot fails.
    pub fn add_product(&mut self, product: Product) -> Result<(), StoreError> {
        let name = product.name().to_owned();

        match self
            .entries
            .iter_mut()
            .find(|entry| entry.product().name() == product.name())
        {
            Some(entry) => entry.increment(),
            None => {
                let id = EntryId::new(self.next_id);
                self.next_id = self.next_id.saturating_add(1);
                self.entries.push(CartEntry::new(id, Quantity::ONE, product));
            }
        }

        self.emit(&CartEvent::ProductAdded { name });
        self.persist()
    }

    /// Remove the entry with `id`, if present.
    ///
    /// Unknown ids are a silent no-op; remaining entries keep their ids.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the snapshot fails.
    pub fn remove_by_id(&mut self, id: EntryId) -> Result<(), StoreError> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id() != id);
        if self.entries.len() == before {
            return Ok(());
        }

        self.persist()
    }

    /// Set the quantity of the entry with `id`, clamping into `[1, 99]`.
    ///
    /// Values at or below zero become 1, values above 99 become 99.
    /// Unknown ids are a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the snapshot fails.
    pub fn change_quantity(&mut self, id: EntryId, quantity: i64) -> Result<(), StoreError> {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id() == id) else {
            return Ok(());
        };

        entry.set_quantity(Quantity::clamp(quantity));
        self.persist()
    }

    /// Clear the cart.
    ///
    /// Irreversible: no order history is kept, the empty snapshot is
    /// persisted immediately.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the snapshot fails.
    pub fn checkout(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        self.emit(&CartEvent::CheckoutCompleted);
        self.persist()
    }

    /// The derived cart total: Σ unit price × quantity.
    ///
    /// Always recomputed from the entries, never cached.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn find_by_id(&self, id: EntryId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Whether the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of items across all entries (for the count badge).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.entries
            .iter()
            .map(|entry| entry.quantity().get())
            .sum()
    }

    fn emit(&self, event: &CartEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        self.store.save(&self.entries)
    }
}

/// Check the invariants the engine guarantees for its own snapshots:
/// unique entry ids, unique product names, positive ids.
fn aggregate_invariants_hold(entries: &[CartEntry]) -> bool {
    entries.iter().enumerate().all(|(i, entry)| {
        entry.id().get() > 0
            && !entries.iter().take(i).any(|prev| {
                prev.id() == entry.id() || prev.product().name() == entry.product().name()
            })
    })
}
