//! # Subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for plugging observers into a
//! relay graph.
//!
//! Attaching registers **exactly one** callback with the upstream publisher.
//! There is no unsubscribe: once attached, the callback lives as long as the
//! publisher's subscription list.
//!
//! ## Rules
//! - Attaching the same subscriber to one publisher twice registers two
//!   callbacks and yields two deliveries per publish.
//! - A subscriber may attach to any number of publishers.
//! - Callbacks run synchronously inside `publish`; keep them short. A slow
//!   callback blocks the entire publish chain.

use crate::messages::Publisher;

/// Observer of published messages.
///
/// Implementors install one callback per [`attach_to`](Subscribe::attach_to)
/// call, typically capturing a clone of their shared state.
///
/// ### Implementation requirements
/// - The installed callback must return `Ok(())` unless the failure should
///   abort the upstream fan-out (relays propagate transform failures this
///   way).
/// - Do not publish back into an upstream of the publisher being attached
///   to; the graph must stay acyclic.
pub trait Subscribe {
    /// Registers this subscriber's callback with `upstream`.
    fn attach_to(&self, upstream: &Publisher);

    /// Returns the subscriber name used in logs.
    ///
    /// Prefer short, descriptive names (e.g., "terminal", "relay").
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
