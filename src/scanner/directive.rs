//! Directive call records.

use crate::cache::CACHE_EXTENSION;

/// One located occurrence of the directive syntax.
///
/// Created fresh per scan, immutable after construction, discarded after
/// substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveCall {
    /// The exact substring to be replaced in the source text.
    pub full_match: String,
    /// Name of the enclosing HTML tag; empty if the directive was bare.
    pub wrapper_tag: String,
    /// Raw text following the directive keyword; the resource identifier.
    pub argument: String,
    /// The detected closing tag text; empty if absent or mismatched.
    pub closing_match: String,
}

impl DirectiveCall {
    /// True when the directive was found inside a wrapper tag.
    pub fn is_wrapped(&self) -> bool {
        !self.wrapper_tag.is_empty()
    }

    /// Lower-cased resource identifier used for cache and origin lookups.
    pub fn resource_key(&self) -> String {
        self.argument.to_lowercase()
    }

    /// File name requested from the origin and used as the cache file name.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.resource_key(), CACHE_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_call(argument: &str) -> DirectiveCall {
        DirectiveCall {
            full_match: format!("{{snipfill {argument}}}"),
            wrapper_tag: String::new(),
            argument: argument.into(),
            closing_match: String::new(),
        }
    }

    #[test]
    fn resource_key_is_lowercased() {
        assert_eq!(bare_call("Terms").resource_key(), "terms");
    }

    #[test]
    fn file_name_appends_extension() {
        assert_eq!(bare_call("AGB").file_name(), "agb.html");
    }

    #[test]
    fn bare_call_is_not_wrapped() {
        assert!(!bare_call("terms").is_wrapped());
    }
}
