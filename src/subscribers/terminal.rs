//! # Leaf subscriber that records the last message received.
//!
//! [`TerminalSubscriber`] keeps a single overwritten field with the most
//! recently delivered content. There is no history buffer; each delivery
//! replaces the previous value. Used to observe relay output at the edge of
//! a graph, and by tests to assert delivered content.
//!
//! ## Architecture
//! ```text
//!  Publisher ── publish(content) ──► callback
//!                                      │
//!                                      ▼
//!                    TerminalSubscriber (Option<Arc<str>> behind RwLock)
//!                                      │
//!                 last_received() ──► Some(content) | None
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::messages::Publisher;

use super::subscriber::Subscribe;

/// Records the content of the last message received.
///
/// Thread-safe and cloneable - multiple references share the same recorded
/// state, so the handle kept by the caller observes deliveries made through
/// the callback installed by [`attach_to`](Subscribe::attach_to).
#[derive(Clone)]
pub struct TerminalSubscriber {
    last: Arc<RwLock<Option<Arc<str>>>>,
}

impl TerminalSubscriber {
    /// Creates a subscriber that has received nothing yet.
    pub fn new() -> Self {
        Self {
            last: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the content of the most recent delivery, if any.
    ///
    /// Overwritten on every delivery; `None` until the first one.
    pub fn last_received(&self) -> Option<Arc<str>> {
        self.last.read().clone()
    }
}

impl Subscribe for TerminalSubscriber {
    fn attach_to(&self, upstream: &Publisher) {
        let last = Arc::clone(&self.last);
        upstream.subscribe(move |msg| {
            *last.write() = Some(msg.content_arc());
            Ok(())
        });
    }

    fn name(&self) -> &'static str {
        "terminal"
    }
}

impl Default for TerminalSubscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_nothing_received() {
        let terminal = TerminalSubscriber::new();
        assert_eq!(terminal.last_received(), None);
    }

    #[test]
    fn test_records_delivered_content() {
        let publisher = Publisher::new();
        let terminal = TerminalSubscriber::new();
        terminal.attach_to(&publisher);

        publisher.publish("some text").unwrap();
        assert_eq!(terminal.last_received().as_deref(), Some("some text"));
    }

    #[test]
    fn test_each_delivery_overwrites_the_last() {
        let publisher = Publisher::new();
        let terminal = TerminalSubscriber::new();
        terminal.attach_to(&publisher);

        publisher.publish("first").unwrap();
        publisher.publish("second").unwrap();
        assert_eq!(
            terminal.last_received().as_deref(),
            Some("second"),
            "no history is kept, only the latest delivery"
        );
    }

    #[test]
    fn test_fan_out_to_many_terminals() {
        let publisher = Publisher::new();
        let terminals: Vec<TerminalSubscriber> = (0..5)
            .map(|_| {
                let t = TerminalSubscriber::new();
                t.attach_to(&publisher);
                t
            })
            .collect();

        publisher.publish("broadcast").unwrap();
        for t in &terminals {
            assert_eq!(t.last_received().as_deref(), Some("broadcast"));
        }
    }

    #[test]
    fn test_clones_share_recorded_state() {
        let publisher = Publisher::new();
        let terminal = TerminalSubscriber::new();
        let handle = terminal.clone();
        handle.attach_to(&publisher);

        publisher.publish("shared").unwrap();
        assert_eq!(terminal.last_received().as_deref(), Some("shared"));
    }
}
