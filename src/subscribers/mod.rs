//! # Subscribers for relay graphs.
//!
//! This module provides the [`Subscribe`] trait and built-in implementations
//! for observing messages delivered by a [`Publisher`](crate::Publisher).
//!
//! ## Architecture
//! ```text
//! Message flow:
//!   Publisher ── publish(content) ──► callbacks, in registration order
//!                                         │
//!                                         ├──► TerminalSubscriber (records last content)
//!                                         ├──► LogWriter          (prints, feature "logging")
//!                                         └──► Relay              (transforms + re-publishes)
//! ```
//!
//! ## Implementing custom subscribers
//! ```rust
//! use msgrelay::{Publisher, Subscribe};
//!
//! struct Counter(std::sync::Arc<std::sync::atomic::AtomicUsize>);
//!
//! impl Subscribe for Counter {
//!     fn attach_to(&self, upstream: &Publisher) {
//!         let count = std::sync::Arc::clone(&self.0);
//!         upstream.subscribe(move |_msg| {
//!             count.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
//!             Ok(())
//!         });
//!     }
//!
//!     fn name(&self) -> &'static str { "counter" }
//! }
//! ```

#[cfg(feature = "logging")]
mod log;
mod subscriber;
mod terminal;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscriber::Subscribe;
pub use terminal::TerminalSubscriber;
