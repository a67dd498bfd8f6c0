//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with sliding TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry: the stored value plus expiry metadata.
///
/// The key is not stored here; it lives in the index map and, once more,
/// in the recency list node addressed by `node`.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub(crate) value: V,
    /// Absolute deadline: last qualifying access time plus the cache TTL
    pub(crate) expires_at: Instant,
    /// Handle of this entry's node in the recency list
    pub(crate) node: usize,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry whose deadline is armed from `now`.
    pub(crate) fn new(value: V, node: usize, now: Instant, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: now + ttl,
            node,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired as of `now`.
    ///
    /// Boundary condition: an entry is expired only when `now` is strictly
    /// past the deadline. At exactly `expires_at` the entry is still live.
    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now > self.expires_at
    }

    // == Refresh ==
    /// Re-arms the deadline to a fresh full TTL measured from `now`.
    ///
    /// Called on every qualifying access, which is what makes the
    /// expiration sliding rather than fixed at insertion.
    pub(crate) fn refresh(&mut self, now: Instant, ttl: Duration) {
        self.expires_at = now + ttl;
    }
}
