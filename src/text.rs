//! Text normalization and metadata-line parsing.
//!
//! Page metadata is rendered as delimiter-separated fields with
//! unpredictable whitespace around each field. Everything here runs on
//! space-stripped text so that the delimiter is the only structure left.

use crate::patterns::{AGO_SUFFIX, LAST_REPLY_PREFIX, VIA_MARKER};

/// Strip every Unicode whitespace character from `s`.
///
/// Whitespace is first collapsed into ordinary spaces and the spaces
/// then removed, leaving the remaining characters in their original
/// order. The result is a single contiguous token suitable for
/// delimiter-based splitting.
#[must_use]
pub fn remove_space(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Truncate a publish phrase at a trailing `via <client>` suffix.
///
/// A marker at position 0 is left alone - the phrase itself is not a
/// client name.
#[must_use]
pub(crate) fn strip_client_suffix(phrase: &str) -> &str {
    match phrase.find(VIA_MARKER) {
        Some(i) if i > 0 => &phrase[..i],
        _ => phrase,
    }
}

/// A delimiter-separated metadata line, e.g. a list cell's
/// `node • author • 3小时前 • 最后回复来自 user` or a detail header's
/// `author · 3小时前 · 3178 次点击`.
///
/// The line's token count varies with which optional fields the page
/// renders, so fields are located by their markers rather than by
/// position: the last-reply author carries a fixed prefix, the publish
/// phrase a fixed suffix.
#[derive(Debug)]
pub(crate) struct MetaLine {
    tokens: Vec<String>,
}

impl MetaLine {
    /// Space-strip `raw` and split it on `delimiter`.
    pub fn parse(raw: &str, delimiter: char) -> Self {
        let flat = remove_space(raw);
        let tokens = flat.split(delimiter).map(str::to_string).collect();
        Self { tokens }
    }

    /// The last-reply author, when a token carries the reply prefix.
    pub fn reply_author(&self) -> Option<&str> {
        self.reply_index()
            .and_then(|i| self.tokens[i].strip_prefix(LAST_REPLY_PREFIX))
    }

    /// The publish phrase.
    ///
    /// When a reply-author token is present the phrase is the token
    /// immediately before it. Otherwise the rightmost token ending with
    /// the "ago" marker is taken, falling back to the last token for
    /// lines that carry no relative time at all.
    pub fn publish(&self) -> Option<&str> {
        if let Some(i) = self.reply_index() {
            if i > 0 {
                return self.tokens.get(i - 1).map(String::as_str);
            }
        }

        self.tokens
            .iter()
            .rev()
            .find(|t| t.ends_with(AGO_SUFFIX))
            .or_else(|| self.tokens.last())
            .map(String::as_str)
    }

    fn reply_index(&self) -> Option<usize> {
        // Rightmost match, as lines never carry more than one.
        self.tokens
            .iter()
            .rposition(|t| t.starts_with(LAST_REPLY_PREFIX))
    }
}
