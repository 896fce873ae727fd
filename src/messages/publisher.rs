//! # Publisher: ordered, synchronous fan-out.
//!
//! [`Publisher`] owns an ordered list of subscriber callbacks and invokes
//! every one of them, in registration order, each time content is published.
//!
//! ## Architecture
//! ```text
//! subscribe(cb) ──► [cb1, cb2, ..., cbN]   (registration order preserved)
//!
//! publish(content)
//!     ├─► Message::new(content)
//!     ├─► snapshot the list (lock held only for the clone)
//!     └─► cb1(&msg)? ─► cb2(&msg)? ─► ... ─► cbN(&msg)?
//! ```
//!
//! ## Rules
//! - **Ordering**: callbacks fire in registration order, every publish.
//! - **Depth-first**: a callback that publishes to another publisher
//!   completes that entire downstream fan-out before the next callback here
//!   runs.
//! - **Error-aborting**: the first `Err` stops the remaining fan-out and
//!   propagates to the publish caller. No rollback of earlier deliveries.
//! - **No deduplication**: subscribing the same logical subscriber twice
//!   yields two invocations per publish.
//! - **No unsubscribe**: a callback stays registered for the publisher's
//!   lifetime.
//!
//! ## Reentrancy
//! Delivery iterates a snapshot taken at publish start, so a callback may
//! call [`Publisher::subscribe`] on the same publisher without deadlocking;
//! the new callback only sees subsequent publishes.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::RelayError;

use super::message::Message;

/// Subscriber callback invoked once per delivered message.
///
/// Plain subscribers return `Ok(())`; a relay callback propagates its
/// transform failure so the upstream fan-out can abort.
pub type Callback = Arc<dyn Fn(&Message) -> Result<(), RelayError> + Send + Sync>;

/// Ordered subscription list with synchronous delivery.
///
/// Cheap to clone: clones are handles onto the same subscription list, so a
/// publisher can be captured into callbacks and shared across a graph
/// (internally `Arc`-backed, like a channel sender).
///
/// ### Properties
/// - **Blocking**: `publish` returns only after all callbacks (transitively)
///   complete.
/// - **Deterministic**: registration order is invocation order.
/// - **Infallible registration**: `subscribe` always succeeds; there are no
///   capacity limits.
#[derive(Clone, Default)]
pub struct Publisher {
    subscribers: Arc<Mutex<Vec<Callback>>>,
}

impl Publisher {
    /// Creates a publisher with an empty subscription list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a publisher with a preallocated subscription list.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::with_capacity(capacity))),
        }
    }

    /// Creates a publisher sized according to `config`.
    ///
    /// See [`Config::capacity_hint`] for the sentinel semantics.
    pub fn with_config(config: &Config) -> Self {
        match config.capacity_hint() {
            Some(n) => Self::with_capacity(n),
            None => Self::new(),
        }
    }

    /// Appends `callback` to the subscription list.
    ///
    /// - Registration order determines invocation order on publish.
    /// - No deduplication: registering twice means two invocations per publish.
    /// - Always succeeds; never blocks an in-flight publish (delivery runs on
    ///   a snapshot).
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Message) -> Result<(), RelayError> + Send + Sync + 'static,
    {
        let mut subs = self.subscribers.lock();
        subs.push(Arc::new(callback));
        debug!(subscribers = subs.len(), "subscriber registered");
    }

    /// Constructs a [`Message`] from `content` and delivers it to every
    /// registered callback, in registration order.
    ///
    /// Returns only after all callbacks — transitively, through any number of
    /// relay hops — have finished. With zero subscribers this is a no-op.
    ///
    /// # Errors
    /// Propagates the first callback failure (a relay's
    /// [`RelayError::Transform`]). Subscribers registered after the failing
    /// one do not receive the message; earlier deliveries are not rolled
    /// back.
    pub fn publish(&self, content: impl Into<Arc<str>>) -> Result<(), RelayError> {
        let msg = Message::new(content);
        // Snapshot so callbacks can subscribe mid-delivery without deadlock.
        let snapshot: Vec<Callback> = self.subscribers.lock().clone();
        trace!(subscribers = snapshot.len(), "publishing message");
        for callback in &snapshot {
            callback(&msg)?;
        }
        Ok(())
    }

    /// Returns the number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl fmt::Debug for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
