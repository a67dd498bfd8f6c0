//! Memo Cache - A bounded in-memory memoization cache
//!
//! Provides key-value caching with sliding TTL expiration and LRU
//! eviction. Every successful `has`/`get`/`set` re-arms the accessed
//! entry's TTL and marks it most recently used; once the configured item
//! limit is exceeded, the least recently used entry is evicted.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use memo_cache::{CacheConfig, MemoCache};
//!
//! let config = CacheConfig::new(Duration::from_secs(60), 2);
//! let mut cache = MemoCache::new(config)?;
//!
//! cache.set("alpha", 1);
//! cache.set("beta", 2);
//! assert!(cache.has("alpha"));
//! assert_eq!(cache.get("beta"), Some(&2));
//!
//! // A third insert evicts the least recently used entry
//! cache.set("gamma", 3);
//! assert!(!cache.has("alpha"));
//! # Ok::<(), memo_cache::CacheError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{CacheStats, MemoCache};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use tasks::spawn_sweeper;
