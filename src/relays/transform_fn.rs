//! # Function-backed transform (`TransformFn`)
//!
//! [`TransformFn`] wraps a closure `F: Fn(&str) -> Result<String, TransformError>`,
//! the lightest way to inject a conversion without writing a dedicated type.
//!
//! ## Example
//! ```rust
//! use msgrelay::{TransformError, TransformFn, TransformRef};
//!
//! let t: TransformRef = TransformFn::arc("shout", |s: &str| {
//!     Ok::<_, TransformError>(s.to_uppercase())
//! });
//!
//! assert_eq!(t.name(), "shout");
//! assert_eq!(t.convert("hi").unwrap(), "HI");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::TransformError;

use super::transform::{Transform, TransformRef};

/// Function-backed transform implementation.
///
/// Wraps a pure conversion closure together with a stable name.
pub struct TransformFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> TransformFn<F> {
    /// Creates a new function-backed transform.
    ///
    /// Prefer [`TransformFn::arc`] when you immediately need a [`TransformRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the transform and returns it as a shared handle (`Arc<Self>`).
    ///
    /// ## Example
    /// ```rust
    /// use msgrelay::{TransformError, TransformFn, TransformRef};
    ///
    /// let t: TransformRef = TransformFn::arc("noop", |s: &str| {
    ///     Ok::<_, TransformError>(s.to_string())
    /// });
    /// assert_eq!(t.name(), "noop");
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl TransformFn<fn(&str) -> Result<String, TransformError>> {
    /// Returns the passthrough transform: output equals input.
    ///
    /// Useful for relays that only bridge publishers without changing
    /// content.
    pub fn identity() -> TransformRef {
        fn passthrough(input: &str) -> Result<String, TransformError> {
            Ok(input.to_string())
        }
        let f: fn(&str) -> Result<String, TransformError> = passthrough;
        TransformFn::arc("identity", f)
    }
}

impl<F> Transform for TransformFn<F>
where
    F: Fn(&str) -> Result<String, TransformError> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn convert(&self, input: &str) -> Result<String, TransformError> {
        (self.f)(input)
    }
}
