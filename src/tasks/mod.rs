//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the cache.
//!
//! # Tasks
//! - Sweeper: Removes expired cache entries at configured intervals

mod sweeper;

pub use sweeper::spawn_sweeper;
