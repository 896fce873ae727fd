//! # Global configuration for relay graphs.
//!
//! Provides [`Config`] centralized settings shared by publishers and relays.
//!
//! Config is used in two ways:
//! 1. **Publisher creation**: `Publisher::with_config(&config)`
//! 2. **Relay creation**: `Relay::with_config(transform, &config)`
//!
//! ## Sentinel values
//! - `subscriber_capacity = 0` → no preallocation (subscription list grows on demand)

/// Configuration for publishers and relays.
///
/// ## Field semantics
/// - `subscriber_capacity`: expected number of subscribers per publisher
///   (`0` = no preallocation)
///
/// ## Notes
/// All fields are public for flexibility. Prefer [`Config::capacity_hint`]
/// over sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Expected number of subscribers per publisher.
    ///
    /// - `0` = no preallocation
    /// - `n > 0` = subscription lists reserve space for `n` callbacks up front
    ///
    /// Purely a sizing hint; lists grow past it freely.
    pub subscriber_capacity: usize,
}

impl Config {
    /// Returns the subscription-list preallocation as an `Option`.
    ///
    /// - `None` → no preallocation
    /// - `Some(n)` → reserve space for `n` callbacks
    #[inline]
    pub fn capacity_hint(&self) -> Option<usize> {
        if self.subscriber_capacity == 0 {
            None
        } else {
            Some(self.subscriber_capacity)
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `subscriber_capacity = 0` (no preallocation)
    fn default() -> Self {
        Self {
            subscriber_capacity: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_capacity_hint() {
        assert_eq!(Config::default().capacity_hint(), None);
    }

    #[test]
    fn test_nonzero_capacity_is_a_hint() {
        let cfg = Config {
            subscriber_capacity: 8,
        };
        assert_eq!(cfg.capacity_hint(), Some(8));
    }
}
