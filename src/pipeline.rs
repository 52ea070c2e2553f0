//! Scan/resolve/substitute orchestration.
//!
//! One invocation scans the input once, resolves each call in document
//! order, and replaces the first exact occurrence of each call's full
//! match with the resolved content. Substitution is literal: resolved
//! content is inserted verbatim and already-substituted regions are never
//! re-scanned.

use crate::cache::CacheStore;
use crate::config::ResolutionConfig;
use crate::messages::MessageLog;
use crate::resolver::Resolver;
use crate::scanner::Scanner;

/// Transform a block of text by resolving all embedded directives.
///
/// Returns the transformed text and the accumulated message log. Nothing
/// here is fatal: degraded resolutions surface as log entries and the
/// best available content is substituted.
pub fn apply(text: &str, config: &ResolutionConfig) -> (String, MessageLog) {
    apply_with_scanner(text, config, &Scanner::default())
}

/// Like [`apply`], with a scanner for a custom directive keyword.
pub fn apply_with_scanner(
    text: &str,
    config: &ResolutionConfig,
    scanner: &Scanner,
) -> (String, MessageLog) {
    let calls = scanner.scan(text);
    if calls.is_empty() {
        return (text.to_string(), MessageLog::new());
    }

    let mut log = MessageLog::new();

    // Reported once per invocation; resolution still proceeds and the
    // per-call fetches fail into their fallback paths.
    if !config.origin_is_set() {
        log.warn("no origin server configured; snippets cannot be fetched");
    }

    let store = CacheStore::new(&config.cache_dir);
    if let Err(err) = store.ensure_dir() {
        // Non-fatal: reads will miss and writes will fail per call, so
        // the invocation degrades to always-refetch.
        log.error(format!("{err}"));
    }

    tracing::debug!("resolving {} directive call(s)", calls.len());

    let resolver = Resolver::new(config);
    let mut output = text.to_string();

    for call in &calls {
        let resolution = resolver.resolve(call);
        output = output.replacen(&call.full_match, &resolution.content, 1);
        if let Some(message) = resolution.message {
            log.push(message);
        }
    }

    (output, log)
}
