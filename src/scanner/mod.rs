//! Tolerant directive scanning.
//!
//! Finds `{snipfill NAME}` directives in a block of text, including
//! directives wrapped in an HTML tag pair, and normalizes matches whose
//! wrapper tags are unclosed or mismatched so stray markup is never
//! swallowed into a substitution.

pub mod directive;
pub mod scan;

pub use directive::DirectiveCall;
pub use scan::{Scanner, DEFAULT_KEYWORD};
