//! Error types used by the relay graph.
//!
//! This module defines two main error enums:
//!
//! - [`TransformError`] — errors raised by an injected [`Transform`](crate::Transform)
//!   implementation.
//! - [`RelayError`] — errors surfacing out of [`Publisher::publish`](crate::Publisher::publish).
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//!
//! Failures propagate synchronously: a relay does not catch a transform
//! failure, it surfaces through the `publish` call that triggered it, and
//! subscribers registered after the failing relay do not receive the message.

use thiserror::Error;

/// # Errors produced by transform capabilities.
///
/// A [`Transform`](crate::Transform) converts message content and may reject
/// or fail on a given input. The relay performs no retry or recovery; the
/// error is wrapped into [`RelayError::Transform`] and propagated.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TransformError {
    /// The conversion itself failed.
    #[error("conversion failed: {error}")]
    Failed {
        /// The underlying error message.
        error: String,
    },

    /// The input lies outside the transform's supported domain.
    #[error("unsupported input: {error}")]
    Unsupported {
        /// What made the input unsupported.
        error: String,
    },
}

impl TransformError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use msgrelay::TransformError;
    ///
    /// let err = TransformError::Failed { error: "boom".into() };
    /// assert_eq!(err.as_label(), "transform_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TransformError::Failed { .. } => "transform_failed",
            TransformError::Unsupported { .. } => "transform_unsupported",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TransformError::Failed { error } => format!("conversion failed: {error}"),
            TransformError::Unsupported { error } => format!("unsupported input: {error}"),
        }
    }
}

/// # Errors produced by publishing into the relay graph.
///
/// These surface from [`Publisher::publish`](crate::Publisher::publish) when a
/// subscriber callback fails mid-fan-out. Delivery stops at the failing
/// callback; messages already delivered to earlier-registered subscribers are
/// not rolled back.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RelayError {
    /// A relay's transform failed; nothing was re-published downstream.
    #[error("transform {transform:?} failed: {source}")]
    Transform {
        /// Name of the failing transform.
        transform: String,
        /// The underlying transform error.
        #[source]
        source: TransformError,
    },
}

impl RelayError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use msgrelay::{RelayError, TransformError};
    ///
    /// let err = RelayError::Transform {
    ///     transform: "rot13".into(),
    ///     source: TransformError::Failed { error: "boom".into() },
    /// };
    /// assert_eq!(err.as_label(), "relay_transform_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RelayError::Transform { .. } => "relay_transform_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RelayError::Transform { transform, source } => {
                format!("transform {transform:?}: {}", source.as_message())
            }
        }
    }
}
