//! # Immutable message value.
//!
//! [`Message`] wraps the published string content. It has no identity beyond
//! that content: no sequence number, no timestamp, equality is by value.
//! A publisher constructs one per publish call and drops it once every
//! subscriber callback has returned.

use std::fmt;
use std::sync::Arc;

/// Immutable value carrying published content.
///
/// Content is stored as `Arc<str>`, so clones are cheap and subscribers can
/// retain the content without copying the string.
///
/// ## Example
/// ```rust
/// use msgrelay::Message;
///
/// let m = Message::new("hello");
/// assert_eq!(m.content(), "hello");
/// assert_eq!(m, Message::new(String::from("hello")));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    content: Arc<str>,
}

impl Message {
    /// Creates a message from the given content.
    ///
    /// The empty string is a valid message like any other.
    pub fn new(content: impl Into<Arc<str>>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the message content.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns a shared handle to the content.
    ///
    /// Useful for subscribers that retain the content (no string copy).
    #[inline]
    pub(crate) fn content_arc(&self) -> Arc<str> {
        Arc::clone(&self.content)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
