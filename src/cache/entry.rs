//! Cache entry identity.

use std::path::{Path, PathBuf};

/// File extension of cached snippet files.
pub const CACHE_EXTENSION: &str = "html";

/// On-disk identity of one resolved resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Lower-cased resource identifier; the cache file name stem.
    pub key: String,
    /// Absolute or root-relative path of the cache file.
    pub path: PathBuf,
}

impl CacheEntry {
    /// Derive the entry for a directive argument under a cache root.
    pub fn for_argument(argument: &str, cache_root: &Path) -> Self {
        let key = argument.to_lowercase();
        let path = cache_root.join(format!("{key}.{CACHE_EXTENSION}"));
        Self { key, path }
    }

    /// File name of the cached resource, as used in origin requests and
    /// diagnostics.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.key, CACHE_EXTENSION)
    }
}
