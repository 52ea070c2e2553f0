//! Configuration for one resolution invocation.
//!
//! [`PluginSettings`] is the raw surface handed over by the surrounding
//! system (origin server URL, cache on/off, cache lifetime in minutes).
//! [`ResolutionConfig`] is the effective per-invocation form: origin
//! trimmed, lifetime converted to seconds, floored, and zeroed when the
//! cache is disabled. The conversion happens exactly once per invocation.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Minimum effective cache lifetime when caching is enabled.
pub const MIN_TTL_SECONDS: u64 = 600;

/// Default cache lifetime in minutes (one day).
pub const DEFAULT_CACHETIME_MINUTES: u64 = 1440;

/// Raw settings as provided by the surrounding system.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Base URL of the snippet origin server.
    pub server: String,
    /// Whether the disk cache is enabled.
    pub cache: bool,
    /// Cache lifetime in minutes.
    pub cachetime: u64,
}

impl Default for PluginSettings {
    fn default() -> Self {
        Self {
            server: String::new(),
            cache: true,
            cachetime: DEFAULT_CACHETIME_MINUTES,
        }
    }
}

/// Effective parameters for one invocation of the pipeline.
#[derive(Debug, Clone)]
pub struct ResolutionConfig {
    /// Origin base URL with trailing slashes removed; may be empty.
    pub origin_base_url: String,
    /// Directory holding cached snippet files.
    pub cache_dir: PathBuf,
    /// Effective cache lifetime in seconds; 0 means never fresh.
    pub ttl_seconds: u64,
}

impl ResolutionConfig {
    /// Derive the effective config from raw settings and a cache directory.
    pub fn new(settings: &PluginSettings, cache_dir: impl Into<PathBuf>) -> Self {
        let origin_base_url = settings
            .server
            .trim_end_matches(['/', '\\'])
            .to_string();

        let mut ttl_seconds = settings
            .cachetime
            .saturating_mul(60)
            .max(MIN_TTL_SECONDS);

        if !settings.cache {
            ttl_seconds = 0;
        }

        Self {
            origin_base_url,
            cache_dir: cache_dir.into(),
            ttl_seconds,
        }
    }

    /// True when an origin server has been configured.
    pub fn origin_is_set(&self) -> bool {
        !self.origin_base_url.is_empty()
    }

    /// Build the request URL for a resource file name.
    pub fn resource_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.origin_base_url, file_name)
    }

    /// The cache directory for this invocation.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}
