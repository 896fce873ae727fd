//! # msgrelay
//!
//! **msgrelay** is a small synchronous publish-subscribe relay library for Rust.
//!
//! It provides primitives to wire producers, relays and leaf subscribers into
//! an in-process notification graph. Delivery is plain call-stack recursion:
//! no queue, no scheduler, no background thread.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐
//!     │  Publisher   │  publish("hello")
//!     └──────┬───────┘
//!            │ invokes callbacks in registration order, depth-first
//!      ┌─────┴──────────────────┐
//!      ▼                        ▼
//! ┌──────────────┐   ┌───────────────────────────────────┐
//! │ Terminal     │   │ Relay                             │
//! │ Subscriber   │   │  ├─ Transform ("hello" → "olleh") │
//! │ (records)    │   │  └─ own Publisher ──► downstream  │
//! └──────────────┘   └─────────────────┬─────────────────┘
//!                                      │
//!                             ┌────────┼────────┐
//!                             ▼        ▼        ▼
//!                          further subscribers / relays
//! ```
//!
//! ### Delivery
//! ```text
//! Publisher::publish(content)
//!   ├─► construct Message (immutable, content only)
//!   ├─► snapshot subscription list (registration order)
//!   └─► for each callback, in order:
//!         ├─ plain subscriber ──► record/observe, return Ok
//!         └─ relay callback   ──► transform.convert(content)?
//!                                   └─► relay publisher.publish(converted)
//!                                         (downstream fan-out completes
//!                                          before the next upstream
//!                                          callback runs)
//!
//! First Err aborts the remaining fan-out and propagates to the original
//! publish caller. Messages already delivered are not rolled back.
//! ```
//!
//! ## Features
//! | Area              | Description                                           | Key types / traits                        |
//! |-------------------|-------------------------------------------------------|-------------------------------------------|
//! | **Publishing**    | Ordered, synchronous fan-out to registered callbacks. | [`Publisher`], [`Message`]                |
//! | **Subscribing**   | Attach leaf observers to any publisher.               | [`Subscribe`], [`TerminalSubscriber`]     |
//! | **Relaying**      | Bridge publishers, transforming content in between.   | [`Relay`], [`Transform`], [`TransformFn`] |
//! | **Errors**        | Typed errors for transform and delivery failures.     | [`RelayError`], [`TransformError`]        |
//! | **Configuration** | Centralize subscription-list sizing.                  | [`Config`]                                |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use msgrelay::{Publisher, Relay, RelayError, Subscribe, TerminalSubscriber, TransformFn};
//!
//! fn main() -> Result<(), RelayError> {
//!     let upstream = Publisher::new();
//!
//!     // Relay that upper-cases every message before re-publishing.
//!     let relay = Relay::new(TransformFn::arc("upper", |s: &str| {
//!         Ok::<_, msgrelay::TransformError>(s.to_uppercase())
//!     }));
//!     relay.attach_to(&upstream);
//!
//!     // Leaf subscriber observing the relay's output.
//!     let terminal = TerminalSubscriber::new();
//!     terminal.attach_to(relay.publisher());
//!
//!     upstream.publish("hello")?;
//!     assert_eq!(terminal.last_received().as_deref(), Some("HELLO"));
//!     Ok(())
//! }
//! ```
//!
//! ## Rules
//! - For a single [`Publisher`], callbacks fire in registration order,
//!   deterministically, on every publish.
//! - `publish` returns only after every subscriber, transitively through any
//!   number of relay hops, has finished.
//! - The graph must stay acyclic: a relay must never transitively subscribe
//!   to its own output. Cycles are not detected.

mod config;
mod error;
mod messages;
mod relays;
mod subscribers;

// ---- Public re-exports ----

pub use config::Config;
pub use error::{RelayError, TransformError};
pub use messages::{Callback, Message, Publisher};
pub use relays::{Relay, Transform, TransformFn, TransformRef};
pub use subscribers::{Subscribe, TerminalSubscriber};

// Optional: expose a simple built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
