//! # Transform abstraction.
//!
//! This module defines the [`Transform`] trait, the capability a
//! [`Relay`](crate::Relay) applies to message content before re-publishing.
//! The common handle type is [`TransformRef`], an `Arc<dyn Transform>`
//! suitable for sharing across the graph.
//!
//! A transform is an external collaborator: it is injected into a relay,
//! which calls it but does not manage its lifecycle or recover from its
//! failures beyond propagating them.

use std::sync::Arc;

use crate::error::TransformError;

/// Shared handle to a transform (`Arc<dyn Transform>`).
pub type TransformRef = Arc<dyn Transform>;

/// # Injected content-conversion capability.
///
/// A `Transform` has a stable [`name`](Transform::name) and a pure
/// [`convert`](Transform::convert) method mapping message content to new
/// content (an encoding or encryption step, say). It must not publish back
/// into the graph; doing so would risk a cycle.
///
/// # Example
/// ```
/// use msgrelay::{Transform, TransformError};
///
/// struct Reverse;
///
/// impl Transform for Reverse {
///     fn name(&self) -> &str { "reverse" }
///
///     fn convert(&self, input: &str) -> Result<String, TransformError> {
///         Ok(input.chars().rev().collect())
///     }
/// }
///
/// assert_eq!(Reverse.convert("abc").unwrap(), "cba");
/// ```
pub trait Transform: Send + Sync + 'static {
    /// Returns a stable, human-readable transform name.
    fn name(&self) -> &str;

    /// Converts message content into re-published content.
    ///
    /// # Errors
    /// A failing conversion aborts the relay's re-publish; the error
    /// propagates out of the upstream `publish` call.
    fn convert(&self, input: &str) -> Result<String, TransformError>;
}
