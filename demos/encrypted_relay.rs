//! # Example: encrypted_relay
//!
//! Demonstrates a hand-written [`Transform`] implementation: a relay that
//! "encrypts" messages with a shift cipher before re-publishing them.
//!
//! Shows how to:
//! - Implement the [`Transform`] trait on a custom type.
//! - Reject unsupported input with [`TransformError::Unsupported`] and watch
//!   the failure propagate out of `publish`.
//! - Wire the built-in [`LogWriter`] next to a [`TerminalSubscriber`].
//!
//! ## Flow
//! ```text
//! sender ──► relay (ShiftCipher) ──► LogWriter (prints)
//!                                └──► TerminalSubscriber (records)
//! ```
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! cargo run --example encrypted_relay --features logging
//! ```

use msgrelay::{
    LogWriter, Publisher, Relay, Subscribe, TerminalSubscriber, Transform, TransformError,
};
use std::sync::Arc;

/// Caesar-style shift cipher over ASCII letters.
///
/// Rejects non-ASCII input instead of silently mangling it.
struct ShiftCipher {
    shift: u8,
}

impl Transform for ShiftCipher {
    fn name(&self) -> &str {
        "shift-cipher"
    }

    fn convert(&self, input: &str) -> Result<String, TransformError> {
        if !input.is_ascii() {
            return Err(TransformError::Unsupported {
                error: "only ASCII input can be shifted".into(),
            });
        }
        let shifted = input
            .bytes()
            .map(|b| match b {
                b'a'..=b'z' => b'a' + (b - b'a' + self.shift) % 26,
                b'A'..=b'Z' => b'A' + (b - b'A' + self.shift) % 26,
                other => other,
            })
            .collect();
        String::from_utf8(shifted).map_err(|e| TransformError::Failed {
            error: e.to_string(),
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();

    let sender = Publisher::new();
    let relay = Relay::new(Arc::new(ShiftCipher { shift: 13 }));
    relay.attach_to(&sender);

    LogWriter.attach_to(relay.publisher());
    let terminal = TerminalSubscriber::new();
    terminal.attach_to(relay.publisher());

    match sender.publish("Hello world") {
        Ok(()) => println!(
            "terminal recorded: {}",
            terminal.last_received().as_deref().unwrap_or("<nothing>")
        ),
        Err(e) => eprintln!("publish failed: {}", e.as_message()),
    }

    // Non-ASCII content is rejected by the cipher; the failure surfaces
    // here, at the original publish call.
    if let Err(e) = sender.publish("héllo") {
        eprintln!("publish failed: {}", e.as_message());
    }
}
