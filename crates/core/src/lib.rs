//! Toko Core - Cart engine and shared types.
//!
//! This crate owns the only stateful, invariant-bearing part of the demo:
//! the shopping cart. The web crate (`storefront`) is presentation glue
//! around it.
//!
//! # Architecture
//!
//! The core crate contains types and the cart state machine - no file I/O,
//! no HTTP, no rendering. Durability goes through the [`store::CartStore`]
//! trait so the engine can be driven by an in-memory store in tests and a
//! file-backed store in the running application.
//!
//! # Modules
//!
//! - [`types`] - Validated value types: products, prices, quantities, ids
//! - [`cart`] - The cart aggregate and its operations
//! - [`store`] - Snapshot persistence: trait, wire codec, in-memory impl

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod store;
pub mod types;

pub use cart::{Cart, CartEntry, CartEvent};
pub use store::{CartStore, MemoryStore, StoreError};
pub use types::*;
