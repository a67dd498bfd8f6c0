//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Construction is the only fallible operation: once a cache exists, a
/// missing or expired key is reported through `false`/`None` return
/// values rather than errors.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Configuration rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CacheError::InvalidConfiguration("ttl must be non-zero".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: ttl must be non-zero"
        );
    }
}
