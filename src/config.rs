//! Configuration Module
//!
//! Handles cache configuration, including loading from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Sliding time-to-live applied to every entry
    pub ttl: Duration,
    /// Maximum number of entries the cache can hold
    pub item_limit: usize,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a configuration with the given TTL and item limit.
    pub fn new(ttl: Duration, item_limit: usize) -> Self {
        Self { ttl, item_limit }
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMO_CACHE_TTL_MS` - Sliding TTL in milliseconds (default: 300000)
    /// - `MEMO_CACHE_ITEM_LIMIT` - Maximum cache entries (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl: env::var("MEMO_CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.ttl),
            item_limit: env::var("MEMO_CACHE_ITEM_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.item_limit),
        }
    }

    // == Validation ==
    /// Checks that the configuration describes a usable cache.
    ///
    /// A zero TTL would expire every entry on arrival and a zero item
    /// limit could never hold one, so both are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.ttl.is_zero() {
            return Err(CacheError::InvalidConfiguration(
                "ttl must be greater than zero".to_string(),
            ));
        }
        if self.item_limit == 0 {
            return Err(CacheError::InvalidConfiguration(
                "item_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            item_limit: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.item_limit, 1000);
    }

    #[test]
    fn test_config_new() {
        let config = CacheConfig::new(Duration::from_millis(50), 2);
        assert_eq!(config.ttl, Duration::from_millis(50));
        assert_eq!(config.item_limit, 2);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("MEMO_CACHE_TTL_MS");
        env::remove_var("MEMO_CACHE_ITEM_LIMIT");

        let config = CacheConfig::from_env();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.item_limit, 1000);
    }

    #[test]
    fn test_config_validate_ok() {
        assert!(CacheConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validate_zero_ttl() {
        let config = CacheConfig::new(Duration::ZERO, 10);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CacheError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_config_validate_zero_item_limit() {
        let config = CacheConfig::new(Duration::from_secs(1), 0);
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CacheError::InvalidConfiguration(_)));
    }
}
