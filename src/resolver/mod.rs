//! Directive resolution with fetch-and-fallback.
//!
//! Each call runs through a fixed sequence of states: a fresh cache hit
//! is served directly; otherwise the origin is fetched. A successful
//! fetch is normalized, written back to the cache, and served. A failed
//! fetch falls back to a stale cached copy when one exists, and to an
//! empty placeholder otherwise; both fallback paths record an error
//! message naming the resource file and the observed failure.

pub mod fetch;

pub use fetch::{FetchResponse, HttpFetcher, DEFAULT_TIMEOUT};

use regex::Regex;
use std::sync::OnceLock;

use crate::cache::CacheStore;
use crate::config::ResolutionConfig;
use crate::messages::Message;
use crate::scanner::DirectiveCall;

/// Result of resolving one directive call.
#[derive(Debug)]
pub struct Resolution {
    /// Content to substitute for the call's full match.
    pub content: String,
    /// Message recorded while resolving, if any.
    pub message: Option<Message>,
}

impl Resolution {
    fn served(content: String) -> Self {
        Self {
            content,
            message: None,
        }
    }

    fn with_error(content: String, text: String) -> Self {
        Self {
            content,
            message: Some(Message::error(text)),
        }
    }
}

/// Resolves directive calls against the cache and the origin server.
pub struct Resolver<'a> {
    config: &'a ResolutionConfig,
    store: CacheStore,
    fetcher: HttpFetcher,
}

impl<'a> Resolver<'a> {
    /// Create a resolver for one invocation.
    pub fn new(config: &'a ResolutionConfig) -> Self {
        Self::with_fetcher(config, HttpFetcher::new())
    }

    /// Create a resolver with a custom fetcher (e.g. a longer timeout).
    pub fn with_fetcher(config: &'a ResolutionConfig, fetcher: HttpFetcher) -> Self {
        Self {
            config,
            store: CacheStore::new(&config.cache_dir),
            fetcher,
        }
    }

    /// Resolve one directive call to its content.
    ///
    /// Never fails hard; degraded outcomes carry a message instead.
    pub fn resolve(&self, call: &DirectiveCall) -> Resolution {
        let entry = self.store.entry(&call.argument);

        if self.store.is_fresh(&entry, self.config.ttl_seconds) {
            match self.store.read(&entry) {
                Ok(content) => return Resolution::served(content),
                Err(err) => {
                    // Unreadable fresh entry: treat as a miss and refetch.
                    tracing::warn!("unreadable cache entry {}: {err}", entry.file_name());
                }
            }
        }

        let url = self.config.resource_url(&entry.file_name());
        tracing::debug!("fetching {url}");

        let failure = match self.fetcher.get(&url) {
            Ok(response) if response.is_success() => {
                let content = normalize_line_breaks(&response.body);
                let message = self
                    .store
                    .write(&entry, &content)
                    .err()
                    .map(|err| Message::error(format!("failed to cache {}: {err}", entry.file_name())));
                return Resolution { content, message };
            }
            Ok(response) => format!("HTTP {}", response.status),
            Err(err) => format!("{err:#}"),
        };

        if self.store.exists(&entry) {
            return match self.store.read(&entry) {
                Ok(content) => Resolution::with_error(
                    content,
                    format!(
                        "could not refresh {} ({failure}); serving cached copy",
                        entry.file_name()
                    ),
                ),
                Err(err) => Resolution::with_error(
                    String::new(),
                    format!(
                        "could not refresh {} ({failure}) and cached copy is unreadable: {err}",
                        entry.file_name()
                    ),
                ),
            };
        }

        Resolution::with_error(
            String::new(),
            format!(
                "no content for {}: fetch failed ({failure}) and no cached copy exists",
                entry.file_name()
            ),
        )
    }
}

/// Rewrite bare `<br>` tags (any case) to the self-closing `<br />` form.
///
/// Applied to fetched bodies before caching, so stale serves are already
/// normalized and the rewrite runs exactly once per fetch.
pub(crate) fn normalize_line_breaks(body: &str) -> String {
    static BR: OnceLock<Regex> = OnceLock::new();
    let pattern = BR.get_or_init(|| Regex::new(r"(?i)<br>").expect("static pattern compiles"));
    pattern.replace_all(body, "<br />").into_owned()
}
