//! Cart notification events.

/// A notification emitted by the cart engine.
///
/// The engine itself has no rendering dependency; whoever drives it (a
/// web handler, a test) subscribes with [`Cart::subscribe`] and decides
/// what a notification looks like - a popup, a log line, nothing.
///
/// [`Cart::subscribe`]: crate::cart::Cart::subscribe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added to the cart (or its quantity bumped).
    ProductAdded {
        /// Name of the product that was added.
        name: String,
    },
    /// Checkout completed and the cart was cleared.
    CheckoutCompleted,
}

/// A subscribed event listener.
///
/// `Send` so a cart can live behind an async mutex in the web layer.
pub(crate) type Listener = Box<dyn Fn(&CartEvent) + Send>;
