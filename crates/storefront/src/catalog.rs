//! The product catalog.
//!
//! A static in-memory seed standing in for the usual products-join-
//! categories query. The cart engine only ever sees an ordered, read-only
//! sequence of products, so the source is swappable without touching it.
//! Listing order is by descending catalog id (newest first).

use toko_core::{Product, ProductError, ProductId};

/// One catalog row: a stable id plus the product value.
#[derive(Debug, Clone)]
pub struct CatalogItem {
    /// Stable catalog id; listing sorts by this, descending.
    pub id: ProductId,
    /// The product itself.
    pub product: Product,
}

/// Read-only, ordered collection of the products on sale.
#[derive(Debug, Clone)]
pub struct Catalog {
    // Sorted by descending id at construction.
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build the demo catalog from its static seed.
    ///
    /// # Errors
    ///
    /// Returns an error if a seed row fails product validation; with the
    /// checked-in seed that means the seed itself is broken.
    pub fn seed() -> Result<Self, ProductError> {
        let seed: &[(u32, &str, u64, &str, u8, &str)] = &[
            (1, "Cartoon Astronaut T-Shirt", 78_000, "Clothes", 4, "f1.jpg"),
            (2, "Flower Print Shirt", 92_000, "Clothes", 5, "f2.jpg"),
            (3, "Plain Linen Shirt", 65_000, "Clothes", 4, "f3.jpg"),
            (4, "Striped Summer Shirt", 78_000, "Clothes", 3, "f4.jpg"),
            (5, "Khaki Shorts", 54_000, "Clothes", 4, "f5.jpg"),
            (6, "Canvas Tote Bag", 120_000, "Accessories", 5, "f6.jpg"),
            (7, "Woven Sandals", 150_000, "Shoes", 4, "f7.jpg"),
            (8, "Batik Scarf", 99_000, "Accessories", 5, "f8.jpg"),
        ];

        let mut items = seed
            .iter()
            .map(|&(id, name, price, category, rating, image)| {
                let product = Product::new(
                    name,
                    toko_core::Price::new(price),
                    category,
                    rating,
                    format!("/static/img/products/{image}"),
                )?;
                Ok(CatalogItem {
                    id: ProductId::new(id),
                    product,
                })
            })
            .collect::<Result<Vec<_>, ProductError>>()?;

        items.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(Self { items })
    }

    /// All items, newest first.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// The items shown on the home page.
    #[must_use]
    pub fn featured(&self) -> &[CatalogItem] {
        self.items.get(..4).unwrap_or(&self.items)
    }

    /// Exact-name lookup, used by the add-to-cart path.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.items
            .iter()
            .map(|item| &item.product)
            .find(|product| product.name() == name)
    }

    /// Case-insensitive substring search over product names.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CatalogItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.product.name().to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_builds() {
        let catalog = Catalog::seed().unwrap();
        assert!(!catalog.items().is_empty());
    }

    #[test]
    fn test_items_ordered_by_descending_id() {
        let catalog = Catalog::seed().unwrap();
        let ids: Vec<u32> = catalog.items().iter().map(|item| item.id.get()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let catalog = Catalog::seed().unwrap();
        assert!(catalog.find_by_name("Batik Scarf").is_some());
        assert!(catalog.find_by_name("batik scarf").is_none());
        assert!(catalog.find_by_name("Batik").is_none());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = Catalog::seed().unwrap();
        let hits = catalog.search("shirt");
        assert_eq!(hits.len(), 4);

        assert!(catalog.search("zzz").is_empty());
    }

    #[test]
    fn test_featured_is_at_most_four() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(catalog.featured().len(), 4);
    }
}
