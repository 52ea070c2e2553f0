//! Snippet caching system.
//!
//! This module provides disk-based caching for resolved snippets. A cache
//! entry is a single `.html` file named after the lower-cased resource
//! key; the file's existence is the sole existence signal and freshness is
//! derived from its modification time, never stored separately.

pub mod entry;
pub mod store;

pub use entry::{CacheEntry, CACHE_EXTENSION};
pub use store::CacheStore;
