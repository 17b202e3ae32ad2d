//! Catalog product value.

use core::fmt;

use crate::types::Price;

/// Errors that can occur when constructing a [`Product`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The product name is empty.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The star rating is above five.
    #[error("product rating must be at most 5, got {0}")]
    RatingOutOfRange(u8),
}

/// An immutable description of a catalog item.
///
/// The `name` is the cart's deduplication key: two products are "the same
/// product" for cart purposes iff their names are equal, case-sensitively.
/// Price, category, rating and image play no part in that identity.
///
/// ## Constraints
///
/// - `name` must be non-empty
/// - `rating` is a star count in `0..=5`
///
/// ## Examples
///
/// ```
/// use toko_core::{Price, Product};
///
/// let shirt = Product::new("Shirt", Price::new(78_000), "Clothes", 4, "f1.jpg")?;
/// assert_eq!(shirt.name(), "Shirt");
/// assert_eq!(shirt.rating(), 4);
/// # Ok::<(), toko_core::ProductError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    price: Price,
    category: String,
    rating: u8,
    image_path: String,
}

impl Product {
    /// Create a product, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or `rating` exceeds 5.
    pub fn new(
        name: impl Into<String>,
        price: Price,
        category: impl Into<String>,
        rating: u8,
        image_path: impl Into<String>,
    ) -> Result<Self, ProductError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        if rating > 5 {
            return Err(ProductError::RatingOutOfRange(rating));
        }

        Ok(Self {
            name,
            price,
            category: category.into(),
            rating,
            image_path: image_path.into(),
        })
    }

    /// The product name - the cart's deduplication key.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price in minor currency units.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Display-only category label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Star rating in `0..=5`, display-only.
    #[must_use]
    pub const fn rating(&self) -> u8 {
        self.rating
    }

    /// Image reference, display-only.
    #[must_use]
    pub fn image_path(&self) -> &str {
        &self.image_path
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let product = Product::new("Shirt", Price::new(10_000), "Clothes", 4, "f1.jpg");
        assert!(product.is_ok());
    }

    #[test]
    fn test_new_empty_name() {
        let result = Product::new("", Price::new(10_000), "Clothes", 4, "f1.jpg");
        assert_eq!(result.unwrap_err(), ProductError::EmptyName);
    }

    #[test]
    fn test_new_rating_out_of_range() {
        let result = Product::new("Shirt", Price::new(10_000), "Clothes", 6, "f1.jpg");
        assert_eq!(result.unwrap_err(), ProductError::RatingOutOfRange(6));
    }

    #[test]
    fn test_zero_rating_and_zero_price_are_valid() {
        let result = Product::new("Freebie", Price::ZERO, "Misc", 0, "x.jpg");
        assert!(result.is_ok());
    }
}
