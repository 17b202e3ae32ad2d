//! JSON wire format for cart snapshots.
//!
//! The persisted shape is an array of records:
//!
//! ```json
//! [{"id": 1, "quantity": 2, "product": {"name": "Shirt", "price": 78000,
//!   "category": "Clothes", "rating": 4, "imagePath": "f1.jpg"}}]
//! ```
//!
//! Decoding rebuilds each entry field-by-field through the validated
//! constructors rather than by structural copy: unknown stored fields are
//! dropped, and a missing or invalid required field makes the record -
//! and with it the whole snapshot - malformed. Callers degrade a
//! malformed snapshot to an empty cart.

use serde::{Deserialize, Serialize};

use crate::cart::CartEntry;
use crate::types::{EntryId, Price, Product, ProductError, Quantity};

/// Why a stored snapshot could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot is not the expected JSON shape.
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record's entry id is zero.
    #[error("entry id must be positive")]
    ZeroId,

    /// A record's quantity is outside `[1, 99]`.
    #[error("entry {id} has out-of-range quantity {quantity}")]
    Quantity {
        /// Id of the offending record.
        id: u32,
        /// The stored quantity.
        quantity: u32,
    },

    /// A record's product fails validation.
    #[error("entry {id} has an invalid product: {source}")]
    Product {
        /// Id of the offending record.
        id: u32,
        /// The underlying validation failure.
        source: ProductError,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    id: u32,
    quantity: u32,
    product: StoredProduct,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredProduct {
    name: String,
    price: u64,
    category: String,
    rating: u8,
    #[serde(rename = "imagePath")]
    image_path: String,
}

impl From<&CartEntry> for StoredEntry {
    fn from(entry: &CartEntry) -> Self {
        let product = entry.product();
        Self {
            id: entry.id().get(),
            quantity: entry.quantity().get(),
            product: StoredProduct {
                name: product.name().to_owned(),
                price: product.price().amount(),
                category: product.category().to_owned(),
                rating: product.rating(),
                image_path: product.image_path().to_owned(),
            },
        }
    }
}

impl TryFrom<StoredEntry> for CartEntry {
    type Error = SnapshotError;

    fn try_from(record: StoredEntry) -> Result<Self, Self::Error> {
        if record.id == 0 {
            return Err(SnapshotError::ZeroId);
        }
        let quantity = Quantity::new(record.quantity).ok_or(SnapshotError::Quantity {
            id: record.id,
            quantity: record.quantity,
        })?;
        let product = Product::new(
            record.product.name,
            Price::new(record.product.price),
            record.product.category,
            record.product.rating,
            record.product.image_path,
        )
        .map_err(|source| SnapshotError::Product {
            id: record.id,
            source,
        })?;

        Ok(Self::new(EntryId::new(record.id), quantity, product))
    }
}

/// Encode entries as the JSON snapshot.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn encode(entries: &[CartEntry]) -> Result<String, serde_json::Error> {
    let records: Vec<StoredEntry> = entries.iter().map(StoredEntry::from).collect();
    serde_json::to_string(&records)
}

/// Decode a JSON snapshot back into entries.
///
/// # Errors
///
/// Returns an error if the JSON is not an array of well-formed records;
/// callers treat that as an empty cart.
pub fn decode(raw: &str) -> Result<Vec<CartEntry>, SnapshotError> {
    let records: Vec<StoredEntry> = serde_json::from_str(raw)?;
    records.into_iter().map(CartEntry::try_from).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn entry(id: u32, quantity: u32, name: &str, price: u64) -> CartEntry {
        CartEntry::new(
            EntryId::new(id),
            Quantity::new(quantity).unwrap(),
            Product::new(name, Price::new(price), "Clothes", 4, "f1.jpg").unwrap(),
        )
    }

    #[test]
    fn test_round_trip() {
        let entries = vec![entry(1, 2, "Shirt", 10_000), entry(2, 1, "Pants", 25_000)];

        let encoded = encode(&entries).unwrap();
        let decoded = decode(&encoded).unwrap();

        assert_eq!(decoded, entries);
    }

    #[test]
    fn test_wire_field_names() {
        let encoded = encode(&[entry(1, 2, "Shirt", 10_000)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        let record = &value[0];
        assert_eq!(record["id"], 1);
        assert_eq!(record["quantity"], 2);
        assert_eq!(record["product"]["name"], "Shirt");
        assert_eq!(record["product"]["price"], 10_000);
        assert_eq!(record["product"]["category"], "Clothes");
        assert_eq!(record["product"]["rating"], 4);
        assert_eq!(record["product"]["imagePath"], "f1.jpg");
    }

    #[test]
    fn test_decode_empty_array() {
        assert_eq!(decode("[]").unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_drops_extraneous_fields() {
        let raw = r#"[{"id": 1, "quantity": 2, "discount": true,
            "product": {"name": "Shirt", "price": 10000, "category": "Clothes",
                        "rating": 4, "imagePath": "f1.jpg", "color": "red"}}]"#;

        let decoded = decode(raw).unwrap();
        assert_eq!(decoded, vec![entry(1, 2, "Shirt", 10_000)]);
    }

    #[test]
    fn test_decode_missing_field_is_malformed() {
        // No "price" on the product record.
        let raw = r#"[{"id": 1, "quantity": 2,
            "product": {"name": "Shirt", "category": "Clothes",
                        "rating": 4, "imagePath": "f1.jpg"}}]"#;

        assert!(matches!(decode(raw), Err(SnapshotError::Json(_))));
    }

    #[test]
    fn test_decode_not_json_is_malformed() {
        assert!(decode("definitely not json").is_err());
        assert!(decode("{\"id\": 1}").is_err());
    }

    #[test]
    fn test_decode_zero_id_is_malformed() {
        let raw = r#"[{"id": 0, "quantity": 1,
            "product": {"name": "Shirt", "price": 10000, "category": "Clothes",
                        "rating": 4, "imagePath": "f1.jpg"}}]"#;

        assert!(matches!(decode(raw), Err(SnapshotError::ZeroId)));
    }

    #[test]
    fn test_decode_out_of_range_quantity_is_malformed() {
        let raw = r#"[{"id": 1, "quantity": 100,
            "product": {"name": "Shirt", "price": 10000, "category": "Clothes",
                        "rating": 4, "imagePath": "f1.jpg"}}]"#;

        assert!(matches!(
            decode(raw),
            Err(SnapshotError::Quantity { id: 1, quantity: 100 })
        ));
    }

    #[test]
    fn test_decode_invalid_product_is_malformed() {
        let raw = r#"[{"id": 1, "quantity": 1,
            "product": {"name": "Shirt", "price": 10000, "category": "Clothes",
                        "rating": 9, "imagePath": "f1.jpg"}}]"#;

        assert!(matches!(decode(raw), Err(SnapshotError::Product { .. })));
    }

    #[test]
    fn test_decode_negative_price_is_malformed() {
        let raw = r#"[{"id": 1, "quantity": 1,
            "product": {"name": "Shirt", "price": -5, "category": "Clothes",
                        "rating": 4, "imagePath": "f1.jpg"}}]"#;

        assert!(matches!(decode(raw), Err(SnapshotError::Json(_))));
    }
}
