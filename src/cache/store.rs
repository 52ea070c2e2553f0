//! Cache storage implementation.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::CacheEntry;
use crate::error::{Result, SnipfillError};

/// Storage for cached snippets.
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Root directory for cache files.
    root: PathBuf,
}

impl CacheStore {
    /// Create a new cache store rooted at a directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ensure the cache directory exists.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create cache directory {:?}", self.root))?;
        Ok(())
    }

    /// Derive the cache entry for a directive argument.
    pub fn entry(&self, argument: &str) -> CacheEntry {
        CacheEntry::for_argument(argument, &self.root)
    }

    /// Check whether a cached file exists for the entry.
    pub fn exists(&self, entry: &CacheEntry) -> bool {
        entry.path.is_file()
    }

    /// Check whether the cached file is fresh under the given TTL.
    ///
    /// A TTL of 0 is never fresh; a missing file is never fresh.
    pub fn is_fresh(&self, entry: &CacheEntry, ttl_seconds: u64) -> bool {
        if ttl_seconds == 0 {
            return false;
        }

        let Ok(metadata) = fs::metadata(&entry.path) else {
            return false;
        };
        let Ok(modified) = metadata.modified() else {
            return false;
        };

        let elapsed = SystemTime::now()
            .duration_since(modified)
            .unwrap_or_default();

        elapsed_is_fresh(elapsed.as_secs(), ttl_seconds)
    }

    /// Read the cached content for an entry.
    pub fn read(&self, entry: &CacheEntry) -> Result<String> {
        if !self.exists(entry) {
            return Err(SnipfillError::CacheMiss {
                path: entry.path.clone(),
            });
        }

        let content = fs::read_to_string(&entry.path)
            .with_context(|| format!("Failed to read cached snippet {:?}", entry.path))?;
        Ok(content)
    }

    /// Write (or replace) the cached content for an entry.
    ///
    /// Writes to a temp file in the same directory and renames it into
    /// place, so a concurrent reader never observes a partial file.
    pub fn write(&self, entry: &CacheEntry, content: &str) -> Result<()> {
        let tmp = entry.path.with_extension("tmp");
        fs::write(&tmp, content)
            .with_context(|| format!("Failed to write cache file {tmp:?}"))?;
        fs::rename(&tmp, &entry.path)
            .with_context(|| format!("Failed to replace cache file {:?}", entry.path))?;
        Ok(())
    }
}

/// Strict freshness comparison: an entry exactly `ttl_seconds` old is stale.
fn elapsed_is_fresh(elapsed_seconds: u64, ttl_seconds: u64) -> bool {
    elapsed_seconds < ttl_seconds
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn store_exposes_root() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        assert_eq!(store.root(), temp.path());
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path().join("a").join("b"));

        store.ensure_dir().unwrap();
        assert!(store.root().is_dir());
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        let entry = store.entry("Terms");

        store.write(&entry, "<p>hello</p>").unwrap();
        assert!(store.exists(&entry));
        assert_eq!(store.read(&entry).unwrap(), "<p>hello</p>");
    }

    #[test]
    fn write_replaces_existing_content() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        let entry = store.entry("terms");

        store.write(&entry, "old").unwrap();
        store.write(&entry, "new").unwrap();
        assert_eq!(store.read(&entry).unwrap(), "new");
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        let entry = store.entry("terms");

        store.write(&entry, "content").unwrap();
        assert!(!entry.path.with_extension("tmp").exists());
    }

    #[test]
    fn read_missing_entry_is_a_cache_miss() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        let entry = store.entry("absent");

        let err = store.read(&entry).unwrap_err();
        assert!(matches!(err, SnipfillError::CacheMiss { .. }));
    }

    #[test]
    fn missing_file_is_never_fresh() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        let entry = store.entry("absent");

        assert!(!store.is_fresh(&entry, 3600));
    }

    #[test]
    fn just_written_file_is_fresh_under_nonzero_ttl() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        let entry = store.entry("terms");

        store.write(&entry, "content").unwrap();
        assert!(store.is_fresh(&entry, 3600));
    }

    #[test]
    fn zero_ttl_is_never_fresh() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        let entry = store.entry("terms");

        store.write(&entry, "content").unwrap();
        assert!(!store.is_fresh(&entry, 0));
    }

    #[test]
    fn elapsed_equal_to_ttl_is_stale() {
        assert!(!elapsed_is_fresh(600, 600));
    }

    #[test]
    fn elapsed_below_ttl_is_fresh() {
        assert!(elapsed_is_fresh(599, 600));
    }

    #[test]
    fn elapsed_above_ttl_is_stale() {
        assert!(!elapsed_is_fresh(601, 600));
    }
}
