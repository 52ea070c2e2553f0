//! Two-phase directive scan.
//!
//! Phase one locates `{keyword ARG}` spans: the keyword is matched
//! case-insensitively and the argument runs to the first closing brace, so
//! adjacent directives in the same text never merge into one match.
//! Phase two inspects the immediately adjacent text for an opening
//! `<tag ...>` before the directive and a `</tag>` after it, and validates
//! the closing tag name against the opening capture.
//!
//! A wrapper whose closing tag is missing or names a different tag is
//! treated as malformed: the opening tag is excluded from the match span
//! so it stays in the document as literal markup.

use super::DirectiveCall;

/// Default directive keyword.
pub const DEFAULT_KEYWORD: &str = "snipfill";

/// Finds directive calls in text.
#[derive(Debug, Clone)]
pub struct Scanner {
    keyword: String,
}

impl Scanner {
    /// Create a scanner for a custom directive keyword.
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// The keyword this scanner matches (case-insensitively).
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Find all directive calls in document order.
    ///
    /// No matches is a valid outcome and yields an empty vector. Nested or
    /// overlapping directive syntax inside one match region is not
    /// detected; the first opening brace pairs with the first closing
    /// brace after it.
    pub fn scan(&self, text: &str) -> Vec<DirectiveCall> {
        let mut calls = Vec::new();
        let mut pos = 0;

        while let Some((start, arg_start)) = self.find_marker(text, pos) {
            let Some(rel) = text[arg_start..].find('}') else {
                // Unterminated directive; skip the marker and keep looking.
                pos = arg_start;
                continue;
            };

            let arg_end = arg_start + rel;
            let end = arg_end + 1;
            let argument = text[arg_start..arg_end].to_string();

            let opening = leading_wrapper(text, start);
            let closing = trailing_wrapper(text, end);

            let call = match opening {
                Some((open_start, wrapper_tag)) => match closing {
                    Some((close_end, ref close_name))
                        if close_name.eq_ignore_ascii_case(&wrapper_tag) =>
                    {
                        pos = close_end;
                        DirectiveCall {
                            full_match: text[open_start..close_end].to_string(),
                            wrapper_tag,
                            argument,
                            closing_match: text[end..close_end].to_string(),
                        }
                    }
                    // Malformed wrapper: leave the opening tag (and any
                    // foreign closing tag) in the document.
                    _ => {
                        pos = end;
                        DirectiveCall {
                            full_match: text[start..end].to_string(),
                            wrapper_tag,
                            argument,
                            closing_match: String::new(),
                        }
                    }
                },
                None => {
                    pos = end;
                    DirectiveCall {
                        full_match: text[start..end].to_string(),
                        wrapper_tag: String::new(),
                        argument,
                        closing_match: String::new(),
                    }
                }
            };

            calls.push(call);
        }

        calls
    }

    /// Locate the next `{keyword` marker at or after `from`.
    ///
    /// Returns the byte offset of the opening brace and the offset just
    /// past the single whitespace separator where the argument begins.
    fn find_marker(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        let keyword_len = self.keyword.len();
        let mut search = from;

        while let Some(rel) = text[search..].find('{') {
            let start = search + rel;
            let keyword_end = start + 1 + keyword_len;

            let matches = text
                .get(start + 1..keyword_end)
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(&self.keyword));

            if matches {
                // Exactly one whitespace character separates keyword and
                // argument.
                if let Some(sep) = text[keyword_end..].chars().next() {
                    if sep.is_whitespace() {
                        return Some((start, keyword_end + sep.len_utf8()));
                    }
                }
            }

            search = start + 1;
        }

        None
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORD)
    }
}

fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Detect an opening tag `<name ...>` ending directly before `start`.
///
/// Returns the tag's start offset and its name.
fn leading_wrapper(text: &str, start: usize) -> Option<(usize, String)> {
    let before = &text[..start];
    if !before.ends_with('>') {
        return None;
    }

    let open = before.rfind('<')?;
    let inner = &before[open + 1..before.len() - 1];
    if inner.contains('>') || inner.starts_with('/') {
        return None;
    }

    let name: String = inner.chars().take_while(|c| is_tag_name_char(*c)).collect();
    if name.is_empty() {
        return None;
    }

    Some((open, name))
}

/// Detect a closing tag `</name>` starting directly at `end`.
///
/// Returns the offset just past the tag and its name.
fn trailing_wrapper(text: &str, end: usize) -> Option<(usize, String)> {
    let rest = text[end..].strip_prefix("</")?;
    let close = rest.find('>')?;
    let name = &rest[..close];

    if name.is_empty() || !name.chars().all(is_tag_name_char) {
        return None;
    }

    Some((end + 2 + close + 1, name.to_string()))
}
