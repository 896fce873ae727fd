//! # Example: relay_chain
//!
//! Demonstrates the full notification graph: one producer, a chain of two
//! relays, and a fan-out of terminal subscribers.
//!
//! Shows how to:
//! - Build relays from [`TransformFn`] closures.
//! - Chain relays via [`Relay::publisher`] (multi-hop).
//! - Observe output with [`TerminalSubscriber`].
//!
//! ## Flow
//! ```text
//! sender ──► relay "upper" ──► relay "reverse" ──► rec1
//!                                             ├──► rec2
//!                                             └──► rec3
//!
//! sender.publish("ku") ──► "KU" ──► "UK" ──► all three receivers
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example relay_chain
//! ```

use msgrelay::{
    Publisher, Relay, RelayError, Subscribe, TerminalSubscriber, TransformError, TransformFn,
};

fn main() -> Result<(), RelayError> {
    let sender = Publisher::new();

    let upper = Relay::new(TransformFn::arc("upper", |s: &str| {
        Ok::<_, TransformError>(s.to_uppercase())
    }));
    let reverse = Relay::new(TransformFn::arc("reverse", |s: &str| {
        Ok::<_, TransformError>(s.chars().rev().collect())
    }));

    upper.attach_to(&sender);
    reverse.attach_to(upper.publisher());

    let receivers: Vec<TerminalSubscriber> = (0..3)
        .map(|_| {
            let r = TerminalSubscriber::new();
            r.attach_to(reverse.publisher());
            r
        })
        .collect();

    sender.publish("ku")?;

    for (i, r) in receivers.iter().enumerate() {
        println!(
            "receiver {} got: {}",
            i + 1,
            r.last_received().as_deref().unwrap_or("<nothing>")
        );
    }
    Ok(())
}
