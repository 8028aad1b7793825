//! Charset detection and transcoding of fetched pages.
//!
//! The site serves UTF-8 today, but mirrored and cached copies of older
//! pages still circulate in legacy encodings (GBK in particular). The
//! client runs every response body through [`transcode_to_utf8`] before
//! handing it to the DOM parser.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">` tag.
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the character encoding declared by an HTML head.
///
/// Only the first 1024 bytes are examined; pages without a usable
/// declaration default to UTF-8, the web standard.
fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    CHARSET_META_RE
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode response bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with the Unicode replacement
/// character rather than failing: a page with a few mangled bytes is
/// still worth extracting from.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
