//! Cache Module
//!
//! Provides in-memory caching with sliding TTL expiration and LRU eviction.

mod entry;
mod list;
mod stats;
mod store;


// Re-export public types; entries and the recency list stay internal
pub(crate) use entry::CacheEntry;
pub(crate) use list::RecencyList;
pub use stats::CacheStats;
pub use store::MemoCache;
