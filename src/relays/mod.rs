//! Relaying: bridging publishers with an injected transform.
//!
//! This module provides the relay-related types:
//! - [`Transform`] - trait for injected content-conversion capabilities
//! - [`TransformFn`] - function-backed transform implementation
//! - [`TransformRef`] - shared reference to a transform (`Arc<dyn Transform>`)
//! - [`Relay`] - subscriber to one (or more) upstream publishers and
//!   publisher to its own downstream subscribers
//!
//! ## Quick wiring
//! ```text
//! Relay { output: Publisher, transform: TransformRef }
//!      └─► Relay::attach_to(upstream) installs one upstream callback:
//!           - converted = transform.convert(msg.content())?
//!           - output.publish(converted)
//! ```

mod relay;
mod transform;
mod transform_fn;

pub use relay::Relay;
pub use transform::{Transform, TransformRef};
pub use transform_fn::TransformFn;
