//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with recency tracking and
//! sliding TTL expiration.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, RecencyList};
use crate::config::CacheConfig;
use crate::error::Result;

// == Memo Cache ==
/// Main cache storage with LRU eviction and sliding TTL.
///
/// The index map owns every entry's value and deadline; the recency
/// list holds only keys and ordering. Both structures are updated in
/// lock-step, so after any public call each indexed key appears on the
/// list exactly once and vice versa.
///
/// The type holds no locks: mutating operations take `&mut self`, and
/// concurrent callers wrap the instance in their own synchronization
/// (see [`crate::tasks::spawn_sweeper`] for the shared form the
/// background sweeper uses).
#[derive(Debug)]
pub struct MemoCache<V> {
    /// Key-value storage; owns each entry's value and deadline
    index: HashMap<String, CacheEntry<V>>,
    /// Recency order over the same keys, least recently used first
    list: RecencyList,
    /// Performance statistics
    stats: CacheStats,
    /// Sliding TTL applied to every entry
    ttl: Duration,
    /// Maximum number of entries allowed
    item_limit: usize,
}

// == Lookup Probe ==
/// Outcome of resolving a key against the index at a point in time.
enum Probe {
    /// Key not present
    Miss,
    /// Key present but past its deadline; carries the list node handle
    Expired(usize),
    /// Key present and live; carries the list node handle
    Live(usize),
}

impl<V> MemoCache<V> {
    // == Constructor ==
    /// Creates a new cache from a validated configuration.
    ///
    /// # Errors
    /// Returns `CacheError::InvalidConfiguration` when the TTL or the
    /// item limit is zero.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "Cache created with ttl {:?} and item limit {}",
            config.ttl, config.item_limit
        );
        Ok(Self {
            index: HashMap::new(),
            list: RecencyList::new(),
            stats: CacheStats::new(),
            ttl: config.ttl,
            item_limit: config.item_limit,
        })
    }

    // == Has ==
    /// Checks whether `key` maps to a live entry.
    ///
    /// A live hit counts as an access: the entry is promoted to most
    /// recently used and its TTL re-armed. An entry found expired is
    /// purged and reported absent.
    pub fn has(&mut self, key: &str) -> bool {
        self.has_at(key, Instant::now())
    }

    pub(crate) fn has_at(&mut self, key: &str, now: Instant) -> bool {
        match self.probe(key, now) {
            Probe::Miss => {
                self.stats.record_miss();
                false
            }
            Probe::Expired(_) => {
                self.discard_expired(key);
                self.stats.record_miss();
                false
            }
            Probe::Live(node) => {
                self.list.move_to_tail(node);
                let ttl = self.ttl;
                if let Some(entry) = self.index.get_mut(key) {
                    entry.refresh(now, ttl);
                }
                self.stats.record_hit();
                true
            }
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if the key maps to a live entry; an entry
    /// found expired is purged and reported as `None`. A live hit
    /// promotes the entry and re-arms its TTL exactly like
    /// [`MemoCache::has`].
    pub fn get(&mut self, key: &str) -> Option<&V> {
        self.get_at(key, Instant::now())
    }

    pub(crate) fn get_at(&mut self, key: &str, now: Instant) -> Option<&V> {
        match self.probe(key, now) {
            Probe::Miss => {
                self.stats.record_miss();
                None
            }
            Probe::Expired(_) => {
                self.discard_expired(key);
                self.stats.record_miss();
                None
            }
            Probe::Live(node) => {
                self.list.move_to_tail(node);
                self.stats.record_hit();
                let ttl = self.ttl;
                let entry = self.index.get_mut(key)?;
                entry.refresh(now, ttl);
                Some(&entry.value)
            }
        }
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// An existing live key is overwritten in place: value replaced,
    /// deadline re-armed, entry promoted, no eviction. An expired key
    /// is replaced the same way, which makes the write a fresh insert
    /// reusing the slot. A brand-new key is appended as most recently
    /// used; if that pushes the cache over its item limit, the least
    /// recently used entry is evicted.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        self.set_at(key, value, Instant::now());
    }

    pub(crate) fn set_at(&mut self, key: impl Into<String>, value: V, now: Instant) {
        let key = key.into();
        match self.probe(&key, now) {
            Probe::Live(node) => {
                self.replace(&key, value, node, now);
            }
            Probe::Expired(node) => {
                // The stale value is discarded unseen; its slot is
                // reused in place, so the size cannot overshoot and no
                // eviction can fire.
                self.stats.record_expiration();
                self.replace(&key, value, node, now);
            }
            Probe::Miss => {
                let node = self.list.push_tail(key.clone());
                let entry = CacheEntry::new(value, node, now, self.ttl);
                self.index.insert(key, entry);
                if self.index.len() > self.item_limit {
                    self.evict_oldest();
                }
            }
        }
        debug_assert_eq!(self.index.len(), self.list.len());
    }

    // == Remove ==
    /// Removes an entry by key, returning its value if it was live.
    ///
    /// Removing a key whose entry has already expired purges it but
    /// returns `None`: expired entries are indistinguishable from
    /// absent ones on every path.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.remove_at(key, Instant::now())
    }

    pub(crate) fn remove_at(&mut self, key: &str, now: Instant) -> Option<V> {
        let entry = self.index.remove(key)?;
        self.list.remove(entry.node);
        if entry.is_expired(now) {
            self.stats.record_expiration();
            None
        } else {
            Some(entry.value)
        }
    }

    // == Peek ==
    /// Reads a value without disturbing the cache.
    ///
    /// Does not promote the entry, does not re-arm its TTL, and leaves
    /// the statistics untouched. An expired entry reads as absent but
    /// stays in place for a later access or sweep to purge.
    pub fn peek(&self, key: &str) -> Option<&V> {
        self.peek_at(key, Instant::now())
    }

    pub(crate) fn peek_at(&self, key: &str, now: Instant) -> Option<&V> {
        self.index
            .get(key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| &entry.value)
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. This is the one O(n)
    /// operation; the background sweeper calls it on its interval.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    pub(crate) fn purge_expired_at(&mut self, now: Instant) -> usize {
        let expired_keys: Vec<String> = self
            .index
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.discard_expired(&key);
        }

        count
    }

    // == Clear ==
    /// Drops every entry. Cumulative statistics are preserved.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    // == Length ==
    /// Returns the current number of indexed entries.
    ///
    /// The figure may include entries whose TTL has lapsed but which no
    /// access or sweep has purged yet.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Item Limit ==
    /// Returns the configured maximum number of entries.
    pub fn item_limit(&self) -> usize {
        self.item_limit
    }

    // == TTL ==
    /// Returns the configured sliding TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns a snapshot of current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.index.len());
        stats
    }

    // == Probe ==
    /// Resolves a key against the index at a point in time.
    fn probe(&self, key: &str, now: Instant) -> Probe {
        match self.index.get(key) {
            None => Probe::Miss,
            Some(entry) if entry.is_expired(now) => Probe::Expired(entry.node),
            Some(entry) => Probe::Live(entry.node),
        }
    }

    // == Replace ==
    /// Overwrites the entry behind an already-indexed key, promoting it
    /// and re-arming its deadline.
    fn replace(&mut self, key: &str, value: V, node: usize, now: Instant) {
        self.list.move_to_tail(node);
        let ttl = self.ttl;
        if let Some(entry) = self.index.get_mut(key) {
            entry.value = value;
            entry.refresh(now, ttl);
        }
    }

    // == Evict Oldest ==
    /// Removes the least recently used entry from both structures.
    fn evict_oldest(&mut self) {
        if let Some(key) = self.list.pop_head() {
            self.index.remove(&key);
            self.stats.record_eviction();
            debug!("Evicted least recently used key: {}", key);
        }
    }

    // == Discard Expired ==
    /// Lazily purges an entry discovered to be past its deadline.
    fn discard_expired(&mut self, key: &str) {
        if let Some(entry) = self.index.remove(key) {
            self.list.remove(entry.node);
            self.stats.record_expiration();
        }
    }
}

// == Test Helpers ==
#[cfg(test)]
impl<V> MemoCache<V> {
    /// Verifies the structural invariants tying the index to the list.
    pub(crate) fn check_invariants(&self) {
        assert_eq!(
            self.index.len(),
            self.list.len(),
            "index/list size mismatch"
        );
        assert!(self.index.len() <= self.item_limit, "item limit exceeded");

        let forward = self.list.keys_oldest_first();
        assert_eq!(forward.len(), self.list.len(), "walk length mismatch");

        let mut backward = self.list.keys_newest_first();
        backward.reverse();
        assert_eq!(forward, backward, "forward/backward walks disagree");

        let mut seen = std::collections::HashSet::new();
        for key in &forward {
            assert!(seen.insert(key.clone()), "duplicate key in list: {}", key);
            let entry = self
                .index
                .get(key)
                .unwrap_or_else(|| panic!("list key missing from index: {}", key));
            assert_eq!(
                self.list.key_at(entry.node),
                key,
                "node handle does not round-trip for: {}",
                key
            );
        }
    }
}
