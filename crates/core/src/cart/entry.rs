//! One cart line item.

use crate::types::{EntryId, Price, Product, Quantity};

/// A product in the cart together with its quantity and a locally unique id.
///
/// Entries are created and mutated only by the [`Cart`](crate::cart::Cart)
/// engine; the id is handed out by the cart's monotonic counter and stays
/// stable for the entry's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    id: EntryId,
    quantity: Quantity,
    product: Product,
}

impl CartEntry {
    pub(crate) const fn new(id: EntryId, quantity: Quantity, product: Product) -> Self {
        Self {
            id,
            quantity,
            product,
        }
    }

    /// The entry's cart-local id.
    #[must_use]
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// How many of the product this line holds.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// The product on this line. Never mutated in place.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price().times(self.quantity)
    }

    pub(crate) const fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }

    pub(crate) const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add_one();
    }
}
