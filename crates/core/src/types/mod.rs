//! Core types for Toko.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use id::*;
pub use price::Price;
pub use product::{Product, ProductError};
pub use quantity::Quantity;
