//! The cart aggregate: entries, events, and the engine that owns them.
//!
//! All cart invariants live here:
//!
//! - at most one entry per product name
//! - quantities confined to `[1, 99]`
//! - entry ids positive, unique, and never reused
//! - the persisted snapshot always reflects the in-memory entries
//!
//! The engine is pure state plus a [`store::CartStore`](crate::store::CartStore)
//! seam; it renders nothing and performs no I/O of its own. Presentation
//! code observes mutations through [`CartEvent`] listeners.

pub mod engine;
pub mod entry;
pub mod events;

pub use engine::Cart;
pub use entry::CartEntry;
pub use events::CartEvent;
