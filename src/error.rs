//! Error types for snipfill operations.
//!
//! This module defines [`SnipfillError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SnipfillError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SnipfillError::Other`) for unexpected errors
//! - Resolution failures never escape as hard errors; they are reduced to
//!   [`crate::messages::MessageLog`] entries by the pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for snipfill operations.
#[derive(Debug, Error)]
pub enum SnipfillError {
    /// A cache read was attempted for a key with no cached file.
    #[error("Cache entry not found: {path}")]
    CacheMiss { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for snipfill operations.
pub type Result<T> = std::result::Result<T, SnipfillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_miss_displays_path() {
        let err = SnipfillError::CacheMiss {
            path: PathBuf::from("/cache/terms.html"),
        };
        assert!(err.to_string().contains("/cache/terms.html"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SnipfillError = io_err.into();
        assert!(matches!(err, SnipfillError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: SnipfillError = anyhow::anyhow!("boom").into();
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(SnipfillError::CacheMiss {
                path: PathBuf::from("/tmp/x.html"),
            })
        }
        assert!(returns_error().is_err());
    }
}
