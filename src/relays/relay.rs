//! # Relay: subscriber upstream, publisher downstream.
//!
//! [`Relay`] bridges one publisher's output into a second, independently
//! subscribable publisher, applying an injected [`Transform`] in between.
//!
//! ## Architecture
//! ```text
//! upstream.publish("hello")
//!     │
//!     ▼ (relay's upstream callback)
//! transform.convert("hello") ──► "HELLO"
//!     │
//!     ▼
//! relay publisher.publish("HELLO")
//!     ├──► terminal subscriber
//!     └──► next relay (multi-hop)
//! ```
//!
//! ## Rules
//! - The relay **owns** its downstream subscription list (it holds its own
//!   [`Publisher`]); it does **not** own any upstream. Attaching installs a
//!   single callback in the upstream's list, nothing more.
//! - One relay may attach to several upstreams (fan-in); each upstream
//!   message independently triggers one downstream re-publish.
//! - Several relays may attach to the same upstream (fan-out).
//! - The graph must stay acyclic. A relay must never transitively subscribe
//!   to its own output; cycles are not detected and recurse unboundedly.
//!
//! ## Failure
//! If the transform fails, nothing is published downstream and the error
//! propagates synchronously out of the upstream `publish` call. Upstream
//! subscribers registered after this relay do not receive the message.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::Config;
use crate::error::RelayError;
use crate::messages::{Message, Publisher};
use crate::subscribers::Subscribe;

use super::transform::TransformRef;

/// Bridges publishers, transforming content in between.
///
/// Composes two roles: a subscriber to any upstream it is attached to, and a
/// publisher to its own downstream subscribers. The transform is injected
/// and opaque; the relay calls it and propagates its failures, nothing else.
///
/// ## Example
/// ```rust
/// use msgrelay::{Publisher, Relay, Subscribe, TerminalSubscriber, TransformFn};
///
/// let upstream = Publisher::new();
/// let relay = Relay::new(TransformFn::identity());
/// relay.attach_to(&upstream);
///
/// let terminal = TerminalSubscriber::new();
/// terminal.attach_to(relay.publisher());
///
/// upstream.publish("hello").unwrap();
/// assert_eq!(terminal.last_received().as_deref(), Some("hello"));
/// ```
pub struct Relay {
    output: Publisher,
    transform: TransformRef,
}

impl Relay {
    /// Creates a relay around the injected transform.
    pub fn new(transform: TransformRef) -> Self {
        Self {
            output: Publisher::new(),
            transform,
        }
    }

    /// Creates a relay whose downstream publisher is sized per `config`.
    pub fn with_config(transform: TransformRef, config: &Config) -> Self {
        Self {
            output: Publisher::with_config(config),
            transform,
        }
    }

    /// Returns the relay's downstream publisher role.
    ///
    /// Attach further subscribers (or chain another relay) here.
    #[inline]
    pub fn publisher(&self) -> &Publisher {
        &self.output
    }

    /// Registers `callback` with the relay's downstream publisher.
    ///
    /// Shorthand for `relay.publisher().subscribe(callback)`.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Message) -> Result<(), RelayError> + Send + Sync + 'static,
    {
        self.output.subscribe(callback);
    }
}

impl Subscribe for Relay {
    /// Installs the transform-and-republish callback on `upstream`.
    ///
    /// For each upstream message `m`, the callback computes
    /// `transform.convert(m.content())` and publishes the result downstream.
    /// The downstream fan-out completes before control returns to the
    /// upstream publish loop.
    fn attach_to(&self, upstream: &Publisher) {
        let output = self.output.clone();
        let transform = Arc::clone(&self.transform);
        debug!(transform = transform.name(), "relay attached to upstream");
        upstream.subscribe(move |msg| {
            let converted = transform.convert(msg.content()).map_err(|source| {
                warn!(
                    transform = transform.name(),
                    error = %source,
                    "transform failed; aborting delivery"
                );
                RelayError::Transform {
                    transform: transform.name().to_string(),
                    source,
                }
            })?;
            output.publish(converted)
        });
    }

    fn name(&self) -> &'static str {
        "relay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use crate::relays::TransformFn;
    use crate::subscribers::TerminalSubscriber;

    fn reverse() -> TransformRef {
        TransformFn::arc("reverse", |s: &str| {
            Ok::<_, TransformError>(s.chars().rev().collect())
        })
    }

    fn failing() -> TransformRef {
        TransformFn::arc("broken", |_: &str| {
            Err::<String, _>(TransformError::Failed {
                error: "boom".into(),
            })
        })
    }

    #[test]
    fn test_identity_relay_forwards_content() {
        let upstream = Publisher::new();
        let relay = Relay::new(TransformFn::identity());
        relay.attach_to(&upstream);

        let terminal = TerminalSubscriber::new();
        terminal.attach_to(relay.publisher());

        upstream.publish("hello").unwrap();
        assert_eq!(terminal.last_received().as_deref(), Some("hello"));
    }

    #[test]
    fn test_transform_is_applied_before_republish() {
        let upstream = Publisher::new();
        let relay = Relay::new(reverse());
        relay.attach_to(&upstream);

        let terminal = TerminalSubscriber::new();
        terminal.attach_to(relay.publisher());

        upstream.publish("abc").unwrap();
        assert_eq!(terminal.last_received().as_deref(), Some("cba"));
    }

    #[test]
    fn test_two_hop_chain_composes_transforms() {
        let upstream = Publisher::new();

        // f = upper-case, g = reverse; terminal must see g(f(original)).
        let relay_a = Relay::new(TransformFn::arc("upper", |s: &str| {
            Ok::<_, TransformError>(s.to_uppercase())
        }));
        let relay_b = Relay::new(reverse());
        relay_a.attach_to(&upstream);
        relay_b.attach_to(relay_a.publisher());

        let terminal = TerminalSubscriber::new();
        terminal.attach_to(relay_b.publisher());

        upstream.publish("abc").unwrap();
        assert_eq!(terminal.last_received().as_deref(), Some("CBA"));
    }

    #[test]
    fn test_fan_out_from_one_relay() {
        let upstream = Publisher::new();
        let relay = Relay::new(reverse());
        relay.attach_to(&upstream);

        let terminals: Vec<TerminalSubscriber> = (0..3)
            .map(|_| {
                let t = TerminalSubscriber::new();
                t.attach_to(relay.publisher());
                t
            })
            .collect();

        upstream.publish("ku").unwrap();
        for t in &terminals {
            assert_eq!(t.last_received().as_deref(), Some("uk"));
        }
    }

    #[test]
    fn test_fan_out_multiple_relays_on_one_upstream() {
        let upstream = Publisher::new();

        let relay_a = Relay::new(TransformFn::identity());
        let relay_b = Relay::new(reverse());
        relay_a.attach_to(&upstream);
        relay_b.attach_to(&upstream);

        let ta = TerminalSubscriber::new();
        let tb = TerminalSubscriber::new();
        ta.attach_to(relay_a.publisher());
        tb.attach_to(relay_b.publisher());

        upstream.publish("abc").unwrap();
        assert_eq!(ta.last_received().as_deref(), Some("abc"));
        assert_eq!(tb.last_received().as_deref(), Some("cba"));
    }

    #[test]
    fn test_fan_in_from_multiple_upstreams() {
        let left = Publisher::new();
        let right = Publisher::new();
        let relay = Relay::new(TransformFn::identity());
        relay.attach_to(&left);
        relay.attach_to(&right);

        let terminal = TerminalSubscriber::new();
        terminal.attach_to(relay.publisher());

        left.publish("from-left").unwrap();
        assert_eq!(terminal.last_received().as_deref(), Some("from-left"));

        right.publish("from-right").unwrap();
        assert_eq!(terminal.last_received().as_deref(), Some("from-right"));
    }

    #[test]
    fn test_transform_failure_propagates_to_publish_caller() {
        let upstream = Publisher::new();
        let relay = Relay::new(failing());
        relay.attach_to(&upstream);

        let terminal = TerminalSubscriber::new();
        terminal.attach_to(relay.publisher());

        let err = upstream.publish("doomed").unwrap_err();
        match err {
            RelayError::Transform { transform, source } => {
                assert_eq!(transform, "broken");
                assert_eq!(source.as_label(), "transform_failed");
            }
        }
        assert_eq!(
            terminal.last_received(),
            None,
            "nothing may be re-published after a failed transform"
        );
    }

    #[test]
    fn test_failing_relay_skips_later_upstream_subscribers() {
        let upstream = Publisher::new();

        let early = TerminalSubscriber::new();
        early.attach_to(&upstream);

        let relay = Relay::new(failing());
        relay.attach_to(&upstream);

        let late = TerminalSubscriber::new();
        late.attach_to(&upstream);

        assert!(upstream.publish("m").is_err());
        assert_eq!(
            early.last_received().as_deref(),
            Some("m"),
            "delivery before the failing relay is not rolled back"
        );
        assert_eq!(
            late.last_received(),
            None,
            "subscribers after the failing relay must be skipped"
        );
    }

    #[test]
    fn test_relay_delivery_is_depth_first() {
        use parking_lot::Mutex;

        let upstream = Publisher::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let relay = Relay::new(TransformFn::identity());
        relay.attach_to(&upstream);
        {
            let order = Arc::clone(&order);
            relay.subscribe(move |msg| {
                order.lock().push(format!("downstream:{}", msg.content()));
                Ok(())
            });
        }
        {
            let order = Arc::clone(&order);
            upstream.subscribe(move |msg| {
                order.lock().push(format!("upstream-second:{}", msg.content()));
                Ok(())
            });
        }

        upstream.publish("m").unwrap();
        assert_eq!(
            *order.lock(),
            vec!["downstream:m", "upstream-second:m"],
            "the relay's downstream fan-out must complete before the next upstream callback"
        );
    }
}
