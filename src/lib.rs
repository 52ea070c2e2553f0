//! Snipfill - resolve embedded snippet directives against a remote origin.
//!
//! Snipfill scans a block of text for `{snipfill NAME}` directives
//! (optionally wrapped in a matching HTML tag pair), fetches the named
//! HTML snippet from a configured origin server, caches it on disk with a
//! TTL freshness policy, and substitutes the directive with the resolved
//! content. Failed fetches fall back to a stale cached copy when one
//! exists; every degradation is recorded in a message log instead of
//! failing the invocation.
//!
//! # Modules
//!
//! - [`cache`] - On-disk snippet cache with mtime-based freshness
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Raw settings and the effective per-invocation config
//! - [`error`] - Error types and result aliases
//! - [`messages`] - Severity-keyed message log returned to the caller
//! - [`pipeline`] - Scan/resolve/substitute orchestration
//! - [`resolver`] - Fetch-with-fallback resolution of one directive
//! - [`scanner`] - Tolerant directive scanning
//!
//! # Example
//!
//! ```
//! use snipfill::scanner::Scanner;
//!
//! let calls = Scanner::default().scan("intro {snipfill Terms} outro");
//! assert_eq!(calls.len(), 1);
//! assert_eq!(calls[0].argument, "Terms");
//! assert_eq!(calls[0].resource_key(), "terms");
//! ```
//!
//! For the full pipeline against a live origin, see the integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod messages;
pub mod pipeline;
pub mod resolver;
pub mod scanner;

pub use config::{PluginSettings, ResolutionConfig};
pub use error::{Result, SnipfillError};
pub use messages::{Message, MessageLog, Severity};
pub use pipeline::apply;
